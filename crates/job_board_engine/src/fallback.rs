use job_board_core::Posting;

use crate::record::{normalize, PostingRecord};

const FALLBACK_COUNT: u64 = 20;

pub const FALLBACK_ROLES: [&str; 10] = [
    "Frontend Developer",
    "Backend Engineer",
    "Product Manager",
    "UI/UX Designer",
    "Data Scientist",
    "DevOps Engineer",
    "Full Stack Developer",
    "QA Engineer",
    "Android Developer",
    "iOS Developer",
];

pub const FALLBACK_DESCRIPTION: &str = "Responsible for building and maintaining software solutions that meet business requirements and deliver great user experiences.";

/// The compiled-in list used whenever the remote load fails: ids 1..=20 with
/// roles cycling through `FALLBACK_ROLES`.
pub fn fallback_postings() -> Vec<Posting> {
    normalize(fallback_records())
}

fn fallback_records() -> Vec<PostingRecord> {
    FALLBACK_ROLES
        .iter()
        .cycle()
        .zip(1..=FALLBACK_COUNT)
        .map(|(role, id)| PostingRecord {
            id,
            title: (*role).to_string(),
            body: FALLBACK_DESCRIPTION.to_string(),
        })
        .collect()
}
