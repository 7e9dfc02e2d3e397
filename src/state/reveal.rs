use std::collections::HashSet;

/// Intersection ratio at which an element counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection ratio at which a section counts as viewed.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Monotone set of section ids that have been scrolled into view.
/// Each id is recorded exactly once, on its first visibility.
#[derive(Debug, Clone, Default)]
pub struct VisitedSections {
    seen: HashSet<String>,
}

impl VisitedSections {
    /// Records `id` and reports whether this was its first visit. Only a
    /// `true` return should emit a tracking event.
    pub fn visit(&mut self, id: &str) -> bool {
        self.seen.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_reports_true_then_never_again() {
        let mut visited = VisitedSections::default();
        assert!(visited.visit("pricing"));
        assert!(!visited.visit("pricing"));
        assert!(!visited.visit("pricing"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn scroll_down_up_down_records_once() {
        let mut visited = VisitedSections::default();
        let mut events = 0;
        // First pass down the page, back up, then down again.
        for id in ["hero", "features", "features", "hero", "features"] {
            if visited.visit(id) {
                events += 1;
            }
        }
        assert_eq!(events, 2, "one event per distinct section");
        assert!(visited.contains("hero"));
        assert!(visited.contains("features"));
    }
}
