//! Sequential colour scales for bar charts.
//!
//! Bars are shaded by value: small counts are pale, the largest count is
//! the darkest end of the scale. The same scale drives SVG output and the
//! terminal dashboard.

/// Sequential colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light to dark blue (skill ranking)
    #[default]
    Blues,
    /// Light teal to deep blue (category distribution)
    TealBlues,
}

impl ColorScheme {
    /// (lightest, darkest) end points
    fn endpoints(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            ColorScheme::Blues => ((198, 219, 239), (8, 81, 156)),
            ColorScheme::TealBlues => ((188, 228, 216), (44, 89, 133)),
        }
    }

    /// Colour for `value` on a scale ending at `max`
    pub fn rgb(self, value: u64, max: u64) -> (u8, u8, u8) {
        let ratio = if max == 0 {
            0.0
        } else {
            (value as f64 / max as f64).clamp(0.0, 1.0)
        };
        let (lo, hi) = self.endpoints();
        (lerp(lo.0, hi.0, ratio), lerp(lo.1, hi.1, ratio), lerp(lo.2, hi.2, ratio))
    }

    /// CSS `rgb(r, g, b)` string for SVG output
    pub fn css(self, value: u64, max: u64) -> String {
        let (r, g, b) = self.rgb(value, max);
        format!("rgb({}, {}, {})", r, g, b)
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(ColorScheme::Blues.rgb(0, 10), (198, 219, 239));
        assert_eq!(ColorScheme::Blues.rgb(10, 10), (8, 81, 156));
        assert_eq!(ColorScheme::TealBlues.css(5, 5), "rgb(44, 89, 133)");
    }

    #[test]
    fn test_zero_max_is_lightest() {
        assert_eq!(ColorScheme::Blues.rgb(3, 0), (198, 219, 239));
    }
}
