use job_board_core::{FavoritesSet, Posting};

fn posting(id: u64, role: &str) -> Posting {
    Posting::new(id, role, "desc")
}

#[test]
fn save_twice_equals_single_insertion() {
    let mut once = FavoritesSet::new();
    assert!(once.save(posting(3, "Product Manager")));

    let mut twice = FavoritesSet::new();
    assert!(twice.save(posting(3, "Product Manager")));
    assert!(!twice.save(posting(3, "Product Manager")));

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn save_keys_on_id_not_content() {
    let mut favorites = FavoritesSet::new();
    favorites.save(posting(1, "QA Engineer"));
    favorites.save(posting(1, "Renamed"));

    let roles: Vec<_> = favorites.iter().map(|p| p.role.as_str()).collect();
    assert_eq!(roles, vec!["QA Engineer"]);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut favorites = FavoritesSet::new();
    favorites.save(posting(1, "QA Engineer"));
    let before = favorites.clone();

    assert!(!favorites.remove(42));
    assert_eq!(favorites, before);

    let mut empty = FavoritesSet::new();
    assert!(!empty.remove(1));
    assert!(empty.is_empty());
}

#[test]
fn contains_follows_save_then_remove() {
    let mut favorites = FavoritesSet::new();
    assert!(!favorites.contains(7));

    favorites.save(posting(7, "iOS Developer"));
    assert!(favorites.contains(7));

    assert!(favorites.remove(7));
    assert!(!favorites.contains(7));
    assert!(!favorites.remove(7));
}

#[test]
fn insertion_order_is_preserved() {
    let mut favorites = FavoritesSet::new();
    favorites.save(posting(5, "Data Scientist"));
    favorites.save(posting(2, "Backend Engineer"));
    favorites.save(posting(9, "Android Developer"));
    favorites.remove(2);
    favorites.save(posting(2, "Backend Engineer"));

    let ids: Vec<_> = favorites.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 9, 2]);
}
