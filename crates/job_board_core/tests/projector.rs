use job_board_core::{project, FavoritesSet, Posting, ViewMode};

fn postings() -> Vec<Posting> {
    vec![
        Posting::new(1, "Frontend Developer", "remote team"),
        Posting::new(2, "Backend Engineer", "remote team"),
        Posting::new(3, "Full Stack Developer", "remote team"),
        Posting::new(4, "UI/UX Designer", "remote team"),
    ]
}

fn ids(projected: &[&Posting]) -> Vec<u64> {
    projected.iter().map(|p| p.id).collect()
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let postings = postings();
    let favorites = FavoritesSet::new();

    let all = project(&postings, &favorites, ViewMode::All, "");
    assert_eq!(ids(&all), vec![1, 2, 3, 4]);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let postings = postings();
    let favorites = FavoritesSet::new();

    let lower = project(&postings, &favorites, ViewMode::All, "frontend");
    let upper = project(&postings, &favorites, ViewMode::All, "FRONTEND");
    assert_eq!(lower, upper);
    assert_eq!(ids(&lower), vec![1]);

    let developers = project(&postings, &favorites, ViewMode::All, "dEvElOp");
    assert_eq!(ids(&developers), vec![1, 3]);
}

#[test]
fn query_only_matches_role() {
    let postings = postings();
    let favorites = FavoritesSet::new();

    let result = project(&postings, &favorites, ViewMode::All, "remote");
    assert!(result.is_empty());
}

#[test]
fn saved_mode_reads_favorites_in_insertion_order() {
    let postings = postings();
    let mut favorites = FavoritesSet::new();
    favorites.save(postings[3].clone());
    favorites.save(postings[0].clone());

    let saved = project(&postings, &favorites, ViewMode::Saved, "");
    assert_eq!(ids(&saved), vec![4, 1]);

    let filtered = project(&postings, &favorites, ViewMode::Saved, "designer");
    assert_eq!(ids(&filtered), vec![4]);
}

#[test]
fn toggled_flips_between_modes() {
    assert_eq!(ViewMode::All.toggled(), ViewMode::Saved);
    assert_eq!(ViewMode::Saved.toggled(), ViewMode::All);
    assert_eq!(ViewMode::default(), ViewMode::All);
}
