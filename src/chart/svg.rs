//! SVG bar chart generation.
//!
//! Produces a standalone SVG for a ranked list of (label, count) pairs.
//! Each bar carries a `<title>` so viewers show "label: count" on hover.

use super::palette::ColorScheme;
use crate::utils::error::ChartError;
use crate::utils::format::{format_thousands, truncate_label};
use log::info;

/// Bar direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bars grow upwards, labels along the x axis (skill ranking)
    Vertical,
    /// Bars grow rightwards, labels along the y axis (categories)
    Horizontal,
}

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub label_axis: String,
    pub value_axis: String,
    pub width: usize,
    pub height: usize,
    pub orientation: Orientation,
    pub scheme: ColorScheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Top 10 High-Demand Skills".to_string(),
            label_axis: "Skill".to_string(),
            value_axis: "Job Postings".to_string(),
            width: 900,
            height: 500,
            orientation: Orientation::Vertical,
            scheme: ColorScheme::Blues,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for the per-skill category chart
    pub fn categories(skill: &str) -> Self {
        Self {
            title: format!("Top Sectors for {}", skill),
            label_axis: "Category".to_string(),
            value_axis: "Job Postings".to_string(),
            orientation: Orientation::Horizontal,
            scheme: ColorScheme::TealBlues,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// Plot margins in pixels
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 90.0;
const MARGIN_LEFT_VERTICAL: f64 = 70.0;
const MARGIN_LEFT_HORIZONTAL: f64 = 200.0;

/// Generate an SVG bar chart
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `ChartError::EmptyData` - nothing to plot
pub fn generate_bar_chart(data: &[(String, u64)], config: &ChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }

    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let width = config.width as f64;
    let height = config.height as f64;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(
        r#"<style>.bar:hover { opacity: 0.8; cursor: pointer; } text { font-family: Inter, sans-serif; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="28" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_xml(&config.title)
    ));

    match config.orientation {
        Orientation::Vertical => render_vertical(&mut svg, data, max, width, height, config),
        Orientation::Horizontal => render_horizontal(&mut svg, data, max, width, height, config),
    }

    svg.push_str("</svg>");

    info!("Bar chart generated ({} bars, {} bytes)", data.len(), svg.len());
    Ok(svg)
}

fn render_vertical(
    out: &mut String,
    data: &[(String, u64)],
    max: u64,
    width: f64,
    height: f64,
    config: &ChartConfig,
) {
    let plot_w = (width - MARGIN_LEFT_VERTICAL - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let slot = plot_w / data.len() as f64;
    let bar_w = slot * 0.8;
    let baseline = MARGIN_TOP + plot_h;

    for (i, (label, value)) in data.iter().enumerate() {
        let bar_h = scaled(*value, max, plot_h);
        let x = MARGIN_LEFT_VERTICAL + slot * i as f64 + (slot - bar_w) / 2.0;
        let y = baseline - bar_h;
        push_bar(out, x, y, bar_w, bar_h, label, *value, config.scheme.css(*value, max));

        // Rotated label under the bar
        let cx = x + bar_w / 2.0;
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end" transform="rotate(-40 {:.2} {:.2})">{}</text>"#,
            cx,
            baseline + 14.0,
            cx,
            baseline + 14.0,
            escape_xml(&truncate_label(label, 18))
        ));
    }

    push_axes(out, MARGIN_LEFT_VERTICAL, MARGIN_TOP, plot_w, plot_h);
    push_axis_titles(out, width, height, &config.label_axis, &config.value_axis);
}

fn render_horizontal(
    out: &mut String,
    data: &[(String, u64)],
    max: u64,
    width: f64,
    height: f64,
    config: &ChartConfig,
) {
    let plot_w = (width - MARGIN_LEFT_HORIZONTAL - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let slot = plot_h / data.len() as f64;
    let bar_h = slot * 0.8;

    for (i, (label, value)) in data.iter().enumerate() {
        let bar_w = scaled(*value, max, plot_w);
        let y = MARGIN_TOP + slot * i as f64 + (slot - bar_h) / 2.0;
        push_bar(
            out,
            MARGIN_LEFT_HORIZONTAL,
            y,
            bar_w,
            bar_h,
            label,
            *value,
            config.scheme.css(*value, max),
        );
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            MARGIN_LEFT_HORIZONTAL - 8.0,
            y + bar_h / 2.0,
            escape_xml(&truncate_label(label, 28))
        ));
    }

    push_axes(out, MARGIN_LEFT_HORIZONTAL, MARGIN_TOP, plot_w, plot_h);
    push_axis_titles(out, width, height, &config.value_axis, &config.label_axis);
}

fn scaled(value: u64, max: u64, extent: f64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * extent
    }
}

#[allow(clippy::too_many_arguments)]
fn push_bar(out: &mut String, x: f64, y: f64, w: f64, h: f64, label: &str, value: u64, fill: String) {
    out.push_str(&format!(
        r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
        x,
        y,
        w,
        h,
        fill,
        escape_xml(label),
        format_thousands(value)
    ));
}

fn push_axes(out: &mut String, left: f64, top: f64, plot_w: f64, plot_h: f64) {
    out.push_str(&format!(
        r##"<line x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="#444"/><line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="#444"/>"##,
        l = left,
        t = top,
        b = top + plot_h,
        r = left + plot_w
    ));
}

/// Bottom title for the x axis, rotated title for the y axis
fn push_axis_titles(out: &mut String, width: f64, height: f64, x_title: &str, y_title: &str) {
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle">{}</text>"#,
        width / 2.0,
        height - 10.0,
        escape_xml(x_title)
    ));
    out.push_str(&format!(
        r#"<text x="16" y="{:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 16 {:.2})">{}</text>"#,
        height / 2.0,
        height / 2.0,
        escape_xml(y_title)
    ));
}

/// Escape text for inclusion in SVG markup
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<(String, u64)> {
        vec![
            ("Python".to_string(), 120),
            ("SQL".to_string(), 60),
            ("C&C++".to_string(), 30),
        ]
    }

    #[test]
    fn test_vertical_chart_has_bar_per_entry() {
        let svg = generate_bar_chart(&data(), &ChartConfig::new()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 3);
        assert!(svg.contains("<title>Python: 120</title>"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = generate_bar_chart(&data(), &ChartConfig::new()).unwrap();
        assert!(svg.contains("C&amp;C++"));
        assert!(!svg.contains("C&C++"));
    }

    #[test]
    fn test_horizontal_chart_title() {
        let svg = generate_bar_chart(&data(), &ChartConfig::categories("Python")).unwrap();
        assert!(svg.contains("Top Sectors for Python"));
        // Largest bar uses the darkest end of the teal scale
        assert!(svg.contains("rgb(44, 89, 133)"));
    }

    #[test]
    fn test_empty_data() {
        let result = generate_bar_chart(&[], &ChartConfig::new());
        assert!(matches!(result, Err(ChartError::EmptyData)));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;");
    }
}
