/// Category id that matches every card.
pub const ALL: &str = "all";

/// Exclusive link-card filter: exactly one category is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { active: ALL.to_string() }
    }
}

impl FilterState {
    pub fn select(&mut self, category: &str) {
        self.active = category.to_string();
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    /// Whether a card with `category` is currently visible.
    pub fn shows(&self, category: &str) -> bool {
        self.active == ALL || self.active == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [&str; 4] = [ALL, "social", "store", "content"];

    #[test]
    fn defaults_to_all() {
        let filter = FilterState::default();
        assert!(filter.is_active(ALL));
        assert!(filter.shows("social"));
        assert!(filter.shows("store"));
    }

    #[test]
    fn exactly_one_filter_active_after_any_selection() {
        let mut filter = FilterState::default();
        for &selected in &["store", "store", "social", ALL, "content"] {
            filter.select(selected);
            let active = CATEGORIES.iter().filter(|c| filter.is_active(c)).count();
            assert_eq!(active, 1);
            assert!(filter.is_active(selected));
        }
    }

    #[test]
    fn specific_filter_hides_other_categories() {
        let mut filter = FilterState::default();
        filter.select("social");
        assert!(filter.shows("social"));
        assert!(!filter.shows("store"));
        assert!(!filter.shows("content"));
    }
}
