//! Rank skills by how many postings mention them.
//!
//! Every posting's normalized skill list is flattened into one multiset;
//! the `n` most frequent skills form the overview ranking.

use super::counter::OrderedCounter;
use crate::parser::dataset::Dataset;
use crate::parser::schema::{SkillCount, SkillRanking};
use log::debug;

/// Compute the top `n` skills across the dataset
///
/// **Public** - main entry point for the overview page
///
/// # Arguments
/// * `dataset` - Loaded dataset
/// * `n` - Maximum number of entries (e.g., 10)
///
/// # Returns
/// Ranking sorted by count (descending), first-seen order among ties.
/// Empty when the dataset has no postings or no skills.
pub fn top_skills(dataset: &Dataset, n: usize) -> SkillRanking {
    let counter = count_skills(dataset);

    debug!(
        "Counted {} distinct skills across {} postings",
        counter.len(),
        dataset.len()
    );

    SkillRanking {
        entries: counter
            .most_common(n)
            .into_iter()
            .map(|(skill, count)| SkillCount { skill, count })
            .collect(),
    }
}

/// Count every skill mention in the dataset
///
/// A skill listed twice in one posting counts twice.
pub fn count_skills(dataset: &Dataset) -> OrderedCounter {
    dataset
        .postings()
        .iter()
        .flat_map(|p| p.skills.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dataset::Posting;

    fn posting(skills: &[&str]) -> Posting {
        Posting::new(skills.iter().map(|s| s.to_string()).collect(), None, None)
    }

    #[test]
    fn test_top_skills_tie_break_first_seen() {
        let ds = Dataset::from_postings(
            "mem",
            vec![
                posting(&["Python", "SQL"]),
                posting(&["Python"]),
                posting(&["Java"]),
            ],
        );

        let ranking = top_skills(&ds, 10);
        let pairs: Vec<(&str, u64)> = ranking
            .iter()
            .map(|e| (e.skill.as_str(), e.count))
            .collect();
        assert_eq!(pairs, vec![("Python", 2), ("SQL", 1), ("Java", 1)]);
    }

    #[test]
    fn test_top_skills_truncates() {
        let ds = Dataset::from_postings("mem", vec![posting(&["a", "b", "c", "d"])]);
        assert_eq!(top_skills(&ds, 2).len(), 2);
    }

    #[test]
    fn test_top_skills_empty_dataset() {
        let ds = Dataset::from_postings("mem", vec![]);
        let ranking = top_skills(&ds, 10);
        assert!(ranking.is_empty());
        assert_eq!(ranking.max_count(), 0);
    }

    #[test]
    fn test_top_skills_no_skills() {
        let ds = Dataset::from_postings("mem", vec![posting(&[]), posting(&[])]);
        assert!(top_skills(&ds, 10).is_empty());
    }
}
