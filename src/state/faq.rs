/// Single-open accordion: at most one item expanded at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl Default for FaqState {
    /// First item starts expanded.
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl FaqState {
    /// Expands `index`, collapsing whatever else was open. Toggling the
    /// already-open item collapses it instead of re-opening.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_open_by_default() {
        assert!(FaqState::default().is_open(0));
    }

    #[test]
    fn at_most_one_item_open_across_any_sequence() {
        let mut faq = FaqState::default();
        for &i in &[2usize, 0, 3, 3, 1, 2, 2, 0] {
            faq.toggle(i);
            let open_count = (0..5).filter(|&j| faq.is_open(j)).count();
            assert!(open_count <= 1, "more than one item open after toggle({i})");
        }
    }

    #[test]
    fn opening_one_item_closes_the_other() {
        let mut faq = FaqState::default();
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut faq = FaqState::default();
        faq.toggle(0);
        assert_eq!(faq.open_item(), None);
        faq.toggle(4);
        faq.toggle(4);
        assert_eq!(faq.open_item(), None);
    }
}
