/// Auto-advance period for the testimonials slider.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// Slider position plus the viewport-derived page size.
///
/// `current_index` always stays within `[0, item_count - items_per_view]`.
/// Manual navigation clamps at the edges; the auto-advance tick wraps back
/// to the start instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub items_per_view: usize,
    pub item_count: usize,
}

/// Transitions applied by the carousel component.
pub enum CarouselAction {
    Next,
    Prev,
    /// Timer-driven advance; wraps at the end of the range.
    Tick,
    /// Viewport width changed; recompute the page size and re-clamp.
    Resize(f64),
}

impl CarouselState {
    pub fn new(item_count: usize, viewport_width: f64) -> Self {
        Self {
            current_index: 0,
            items_per_view: Self::items_per_view_for(viewport_width),
            item_count,
        }
    }

    /// Breakpoints: <768px shows 1, 768-1023px shows 2, >=1024px shows 3.
    pub fn items_per_view_for(viewport_width: f64) -> usize {
        if viewport_width >= 1024.0 {
            3
        } else if viewport_width >= 768.0 {
            2
        } else {
            1
        }
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => {
                if self.can_go_next() {
                    self.current_index += 1;
                }
            }
            CarouselAction::Prev => {
                if self.can_go_prev() {
                    self.current_index -= 1;
                }
            }
            CarouselAction::Tick => {
                if self.can_go_next() {
                    self.current_index += 1;
                } else {
                    self.current_index = 0;
                }
            }
            CarouselAction::Resize(width) => {
                self.items_per_view = Self::items_per_view_for(width);
                // Only ever clamp downward; a wider viewport never moves us.
                if self.current_index > self.max_index() {
                    self.current_index = self.max_index();
                }
            }
        }
    }

    /// Width of one slide as a percentage of the track.
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.items_per_view as f64
    }

    /// Track translation for the current position.
    pub fn offset_percent(&self) -> f64 {
        self.current_index as f64 * self.slide_width_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel_at(index: usize, per_view: usize, count: usize) -> CarouselState {
        CarouselState {
            current_index: index,
            items_per_view: per_view,
            item_count: count,
        }
    }

    #[test]
    fn breakpoints_match_viewport_widths() {
        assert_eq!(CarouselState::items_per_view_for(320.0), 1);
        assert_eq!(CarouselState::items_per_view_for(767.9), 1);
        assert_eq!(CarouselState::items_per_view_for(768.0), 2);
        assert_eq!(CarouselState::items_per_view_for(1023.0), 2);
        assert_eq!(CarouselState::items_per_view_for(1024.0), 3);
    }

    #[test]
    fn manual_next_clamps_at_the_end() {
        let mut c = carousel_at(2, 3, 5);
        assert!(!c.can_go_next());
        c.apply(CarouselAction::Next);
        assert_eq!(c.current_index, 2, "manual next at the end is a no-op");
    }

    #[test]
    fn manual_prev_clamps_at_zero() {
        let mut c = carousel_at(0, 1, 5);
        c.apply(CarouselAction::Prev);
        assert_eq!(c.current_index, 0);
    }

    #[test]
    fn tick_wraps_from_the_last_position() {
        let mut c = carousel_at(2, 3, 5);
        c.apply(CarouselAction::Tick);
        assert_eq!(c.current_index, 0, "auto-advance wraps to the start");
        c.apply(CarouselAction::Tick);
        assert_eq!(c.current_index, 1);
    }

    #[test]
    fn resize_re_clamps_downward_only() {
        let mut c = carousel_at(4, 1, 5);
        c.apply(CarouselAction::Resize(1280.0));
        assert_eq!(c.items_per_view, 3);
        assert_eq!(c.current_index, 2, "index clamped into the new range");

        c.apply(CarouselAction::Resize(320.0));
        assert_eq!(c.items_per_view, 1);
        assert_eq!(c.current_index, 2, "shrinking the page size never moves us");
    }

    #[test]
    fn index_stays_in_range_across_arbitrary_transitions() {
        let mut c = CarouselState::new(5, 1280.0);
        let actions = [
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Resize(320.0),
            CarouselAction::Tick,
            CarouselAction::Tick,
            CarouselAction::Tick,
            CarouselAction::Resize(800.0),
            CarouselAction::Prev,
            CarouselAction::Resize(1280.0),
            CarouselAction::Tick,
        ];
        for action in actions {
            c.apply(action);
            assert!(c.current_index <= c.max_index());
        }
    }

    #[test]
    fn fewer_items_than_page_size_pins_to_zero() {
        let mut c = carousel_at(0, 3, 2);
        assert_eq!(c.max_index(), 0);
        c.apply(CarouselAction::Next);
        assert_eq!(c.current_index, 0);
        c.apply(CarouselAction::Tick);
        assert_eq!(c.current_index, 0);
    }
}
