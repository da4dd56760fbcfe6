//! Plain-text summaries for the terminal.
//!
//! Box-drawn tables with proportional bars, printed by the `overview` and
//! `detail` commands unless `--quiet` is set.

use crate::parser::dataset::Dataset;
use crate::parser::schema::{DetailSummary, SkillRanking};
use crate::utils::format::{format_thousands, truncate_label};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 28;

/// Render the skill ranking as a table
pub fn generate_ranking_summary(dataset: &Dataset, ranking: &SkillRanking) -> String {
    let mut lines = Vec::new();

    lines.push("  📊 TOP HIGH-DEMAND SKILLS".to_string());
    lines.push(format!(
        "  Total Job Postings: {}",
        format_thousands(dataset.len() as u64)
    ));
    lines.push(String::new());

    if ranking.is_empty() {
        lines.push("  No skill data available".to_string());
        return lines.join("\n");
    }

    let rows: Vec<(String, u64)> = ranking
        .iter()
        .enumerate()
        .map(|(i, e)| (format!("{:>2}. {}", i + 1, e.skill), e.count))
        .collect();
    push_table(&mut lines, "Skill", &rows, ranking.max_count());

    lines.join("\n")
}

/// Render one skill's breakdown
pub fn generate_detail_summary(detail: &DetailSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  🔍 {} analytics", detail.skill));
    lines.push(format!(
        "  Detailed breakdown of job postings mentioning {}.",
        detail.skill
    ));
    lines.push(String::new());
    lines.push(format!("  Total Postings: {}", format_thousands(detail.total_count)));
    lines.push(format!("  Top Location:   {}", detail.top_location));
    lines.push(format!("  Top Category:   {}", detail.top_category));
    lines.push(String::new());
    lines.push(format!("  Top Sectors for {}", detail.skill));

    if detail.category_distribution.is_empty() {
        lines.push("  No category data".to_string());
        return lines.join("\n");
    }

    let rows = detail.chart_data();
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);
    push_table(&mut lines, "Category", &rows, max);

    lines.join("\n")
}

fn push_table(lines: &mut Vec<String>, heading: &str, rows: &[(String, u64)], max: u64) {
    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "  {}{}{}{}{}{}{}",
            l,
            "━".repeat(LABEL_WIDTH + 2),
            m,
            "━".repeat(BAR_WIDTH + 2),
            m,
            "━".repeat(10),
            r
        )
    };

    lines.push(rule("┏", "┳", "┓"));
    lines.push(format!(
        "  ┃ {:<lw$} ┃ {:<bw$} ┃ {:>8} ┃",
        heading,
        "",
        "Postings",
        lw = LABEL_WIDTH,
        bw = BAR_WIDTH
    ));
    lines.push(rule("┣", "╋", "┫"));

    for (label, count) in rows {
        let filled = if max == 0 {
            0
        } else {
            ((*count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        };
        lines.push(format!(
            "  ┃ {:<lw$} ┃ {:<bw$} ┃ {:>8} ┃",
            truncate_label(label, LABEL_WIDTH),
            "█".repeat(filled),
            format_thousands(*count),
            lw = LABEL_WIDTH,
            bw = BAR_WIDTH
        ));
    }

    lines.push(rule("┗", "┻", "┛"));
}
