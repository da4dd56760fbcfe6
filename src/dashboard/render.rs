//! Drawing of the overview and detail pages.

use super::Dashboard;
use crate::chart::palette::ColorScheme;
use crate::parser::schema::DetailSummary;
use crate::utils::config::SKILL_GRID_COLUMNS;
use crate::utils::format::{format_thousands, ranking_title, truncate_label};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const ACCENT: Color = Color::Rgb(42, 82, 152);
const MUTED: Color = Color::DarkGray;

/// Render the page selected by the session's navigation state
pub fn render(f: &mut Frame, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    render_header(f, chunks[0]);

    match (dashboard.navigation().selected_skill(), dashboard.detail()) {
        (Some(_), Some(detail)) => render_detail(f, chunks[1], detail),
        _ => render_overview(f, chunks[1], dashboard),
    }

    render_help(f, chunks[2], dashboard.navigation().is_overview());
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Job Market Dashboard",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Malaysia Job Data Analytics",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)));
    f.render_widget(header, area);
}

fn render_overview(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let ranking = dashboard.ranking();
    let grid_rows = ranking.len().div_ceil(SKILL_GRID_COLUMNS).max(1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(grid_rows + 2),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            ranking_title(dashboard.top_n(), ranking.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Select a skill below to explore detailed job insights.",
            Style::default().fg(MUTED),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let chart_block = Block::default().title(" Job Postings per Skill ").borders(Borders::ALL);
    if ranking.is_empty() {
        let empty = Paragraph::new("No skill data available").block(chart_block);
        f.render_widget(empty, chunks[1]);
    } else {
        let max = ranking.max_count();
        let bars: Vec<Bar> = ranking
            .iter()
            .map(|e| colored_bar(&e.skill, e.count, max, ColorScheme::Blues, 10))
            .collect();
        let slot = (chunks[1].width.saturating_sub(2) / ranking.len() as u16).max(2);
        let chart = BarChart::default()
            .block(chart_block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(slot.saturating_sub(1).max(1))
            .bar_gap(1);
        f.render_widget(chart, chunks[1]);
    }

    render_skill_grid(f, chunks[2], dashboard);

    let summary = Paragraph::new(Line::from(vec![
        Span::raw("Total Job Postings: "),
        Span::styled(
            format_thousands(dashboard.dataset().len() as u64),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().title(" Dataset Summary ").borders(Borders::ALL));
    f.render_widget(summary, chunks[3]);
}

/// Skills laid out in rows of `SKILL_GRID_COLUMNS`, cursor highlighted
fn render_skill_grid(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default().title(" Explore Skills ").borders(Borders::ALL);
    let ranking = dashboard.ranking();
    let cell_width = (area.width.saturating_sub(2) as usize / SKILL_GRID_COLUMNS).max(4);

    let lines: Vec<Line> = ranking
        .entries
        .chunks(SKILL_GRID_COLUMNS)
        .enumerate()
        .map(|(row, entries)| {
            let spans: Vec<Span> = entries
                .iter()
                .enumerate()
                .map(|(col, entry)| {
                    let index = row * SKILL_GRID_COLUMNS + col;
                    let text = format!(
                        " {:<w$}",
                        truncate_label(&entry.skill, cell_width - 2),
                        w = cell_width - 1
                    );
                    if index == dashboard.cursor() {
                        Span::styled(text, Style::default().fg(Color::White).bg(ACCENT))
                    } else {
                        Span::raw(text)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(f: &mut Frame, area: Rect, detail: &DetailSummary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("< Back to Top Skills (Esc)", Style::default().fg(ACCENT))),
        chunks[0],
    );

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} analytics", detail.skill),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Detailed breakdown of job postings mentioning {}.", detail.skill),
            Style::default().fg(MUTED),
        )),
    ]);
    f.render_widget(heading, chunks[1]);

    let metric_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    f.render_widget(metric("Total Postings", &format_thousands(detail.total_count)), metric_row[0]);
    f.render_widget(metric("Top Location", &detail.top_location), metric_row[1]);
    f.render_widget(metric("Top Category", &detail.top_category), chunks[3]);

    let chart_block = Block::default()
        .title(format!(" Top Sectors for {} ", detail.skill))
        .borders(Borders::ALL);
    if detail.category_distribution.is_empty() {
        f.render_widget(Paragraph::new("No category data").block(chart_block), chunks[4]);
    } else {
        let max = detail
            .category_distribution
            .iter()
            .map(|c| c.count)
            .max()
            .unwrap_or(0);
        let bars: Vec<Bar> = detail
            .category_distribution
            .iter()
            .map(|c| colored_bar(&c.category, c.count, max, ColorScheme::TealBlues, 24))
            .collect();
        let chart = BarChart::default()
            .block(chart_block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1);
        f.render_widget(chart, chunks[4]);
    }
}

fn metric<'a>(label: &'a str, value: &str) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().title(format!(" {} ", label)).borders(Borders::ALL))
}

fn colored_bar(label: &str, value: u64, max: u64, scheme: ColorScheme, label_width: usize) -> Bar<'static> {
    let (r, g, b) = scheme.rgb(value, max);
    Bar::default()
        .label(Line::from(truncate_label(label, label_width)))
        .value(value)
        .text_value(format_thousands(value))
        .style(Style::default().fg(Color::Rgb(r, g, b)))
        .value_style(Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b)))
}

fn render_help(f: &mut Frame, area: Rect, overview: bool) {
    let text = if overview {
        "←→↑↓ move  Enter open  q quit"
    } else {
        "Esc/b back  q quit"
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(MUTED))),
        area,
    );
}
