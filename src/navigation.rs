//! Page navigation for one dashboard session.
//!
//! The dashboard shows either the skill overview or the detail page of a
//! single skill. State lives in the session object and is never shared.

/// Current page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Skill ranking
    #[default]
    Overview,
    /// Breakdown for the selected skill
    Detail(String),
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail page for `skill`
    ///
    /// Returns `false` when that page is already open.
    pub fn select(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.selected_skill() == Some(skill.as_str()) {
            return false;
        }
        *self = NavigationState::Detail(skill);
        true
    }

    /// Return to the overview
    ///
    /// Returns `false` when already on the overview.
    pub fn go_back(&mut self) -> bool {
        if self.is_overview() {
            return false;
        }
        *self = NavigationState::Overview;
        true
    }

    pub fn is_overview(&self) -> bool {
        matches!(self, NavigationState::Overview)
    }

    pub fn selected_skill(&self) -> Option<&str> {
        match self {
            NavigationState::Overview => None,
            NavigationState::Detail(skill) => Some(skill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_back() {
        let mut nav = NavigationState::new();
        assert!(nav.select("Python"));
        assert_eq!(nav.selected_skill(), Some("Python"));
        assert!(nav.go_back());
        assert_eq!(nav, NavigationState::Overview);
    }

    #[test]
    fn test_back_from_overview_is_noop() {
        let mut nav = NavigationState::new();
        assert!(!nav.go_back());
        assert!(nav.is_overview());
    }

    #[test]
    fn test_select_same_skill_is_noop() {
        let mut nav = NavigationState::new();
        nav.select("SQL");
        assert!(!nav.select("SQL"));
        assert_eq!(nav, NavigationState::Detail("SQL".to_string()));
    }

    #[test]
    fn test_select_other_skill_switches() {
        let mut nav = NavigationState::Detail("SQL".to_string());
        assert!(nav.select("Excel"));
        assert_eq!(nav.selected_skill(), Some("Excel"));
    }
}
