//! Per-skill breakdown of matching postings.

use super::counter::{mode_of, ranked_counts};
use crate::parser::dataset::{Dataset, Posting};
use crate::parser::schema::{CategoryCount, DetailSummary};
use crate::utils::config::{NOT_AVAILABLE, TOP_CATEGORIES};
use log::debug;

/// Summarize the postings that mention `skill`
///
/// **Public** - main entry point for the detail page
///
/// Matching is exact and case-sensitive. A skill that no posting mentions
/// yields a zero count, "N/A" for both modes and an empty distribution.
pub fn detail_for(dataset: &Dataset, skill: &str) -> DetailSummary {
    let matching: Vec<&Posting> = dataset
        .postings()
        .iter()
        .filter(|p| p.mentions(skill))
        .collect();

    debug!("{} postings mention {:?}", matching.len(), skill);

    let top_category = if dataset.has_category() {
        mode_of(matching.iter().filter_map(|p| p.category.as_deref()))
    } else {
        None
    };

    let top_location = if dataset.has_location() {
        mode_of(matching.iter().filter_map(|p| p.location.as_deref()))
    } else {
        None
    };

    let category_distribution = if dataset.has_category() {
        ranked_counts(
            matching.iter().filter_map(|p| p.category.as_deref()),
            TOP_CATEGORIES,
        )
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
    } else {
        Vec::new()
    };

    DetailSummary {
        skill: skill.to_string(),
        total_count: matching.len() as u64,
        top_category: top_category.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        top_location: top_location.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        category_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(skills: &[&str], category: Option<&str>, location: Option<&str>) -> Posting {
        Posting::new(
            skills.iter().map(|s| s.to_string()).collect(),
            category,
            location,
        )
    }

    fn sample() -> Dataset {
        Dataset::from_postings(
            "mem",
            vec![
                posting(&["Python", "SQL"], Some("Data"), Some("Kuala Lumpur")),
                posting(&["Python"], Some("Software"), Some("Penang")),
                posting(&["Java"], Some("Software"), Some("Penang")),
                posting(&["Python"], Some("Software"), None),
            ],
        )
    }

    #[test]
    fn test_detail_counts_and_modes() {
        let detail = detail_for(&sample(), "Python");
        assert_eq!(detail.total_count, 3);
        assert_eq!(detail.top_category, "Software");
        // Kuala Lumpur and Penang tie once each; first seen wins
        assert_eq!(detail.top_location, "Kuala Lumpur");
        assert_eq!(
            detail.category_distribution,
            vec![
                CategoryCount { category: "Software".to_string(), count: 2 },
                CategoryCount { category: "Data".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_detail_absent_skill() {
        let detail = detail_for(&sample(), "Rust");
        assert_eq!(detail.total_count, 0);
        assert_eq!(detail.top_category, NOT_AVAILABLE);
        assert_eq!(detail.top_location, NOT_AVAILABLE);
        assert!(detail.category_distribution.is_empty());
    }

    #[test]
    fn test_detail_case_sensitive() {
        assert_eq!(detail_for(&sample(), "python").total_count, 0);
    }

    #[test]
    fn test_detail_all_locations_unset() {
        let ds = Dataset::from_postings(
            "mem",
            vec![posting(&["Go"], Some("Ops"), None), posting(&["Go"], None, None)],
        );
        let detail = detail_for(&ds, "Go");
        assert_eq!(detail.total_count, 2);
        assert_eq!(detail.top_location, NOT_AVAILABLE);
        assert_eq!(detail.top_category, "Ops");
        assert_eq!(detail.category_distribution.len(), 1);
    }

    #[test]
    fn test_detail_distribution_capped_at_five() {
        let postings = ["A", "B", "C", "D", "E", "F", "F"]
            .iter()
            .map(|c| posting(&["X"], Some(*c), None))
            .collect();
        let detail = detail_for(&Dataset::from_postings("mem", postings), "X");
        assert_eq!(detail.category_distribution.len(), TOP_CATEGORIES);
        assert_eq!(detail.category_distribution[0].category, "F");
        assert_eq!(detail.category_distribution[1].category, "A");
    }
}
