//! Scroll, drag and snap state for the horizontal project carousel.
//!
//! The browser owns the actual scroll container; this type only decides which
//! card is active and where the container should move next. Offsets and pointer
//! coordinates are CSS pixels.

/// Pointer travel (px) after which the drag counts as a drag and not a click.
const CLICK_SLOP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    origin_x: f64,
    origin_offset: f64,
    travel: f64,
}

/// Where the container should animate to, and the card that becomes active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub index: usize,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    card_count: usize,
    pitch: f64,
    active_index: usize,
    drag: Option<DragSession>,
    suppress_click: bool,
}

impl Carousel {
    pub fn new(card_count: usize, pitch: f64) -> Self {
        Self {
            card_count,
            pitch,
            active_index: 0,
            drag: None,
            suppress_click: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.drag.is_some() {
            CarouselPhase::Dragging
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Re-measure after a resize or a change of the card list.
    pub fn set_layout(&mut self, card_count: usize, pitch: f64) {
        self.card_count = card_count;
        self.pitch = pitch;
        self.active_index = self.active_index.min(self.last_index());
    }

    fn last_index(&self) -> usize {
        self.card_count.saturating_sub(1)
    }

    /// `clamp(round(offset / pitch), 0, card_count - 1)`.
    pub fn nearest_index(&self, offset: f64) -> usize {
        if self.card_count == 0 || !(self.pitch > 0.0) {
            return 0;
        }
        let raw = (offset / self.pitch).round();
        if raw.is_nan() || raw <= 0.0 {
            return 0;
        }
        (raw as usize).min(self.last_index())
    }

    pub fn offset_for(&self, index: usize) -> f64 {
        index.min(self.last_index()) as f64 * self.pitch
    }

    /// Called on every native scroll event. Returns the new index only when it
    /// differs from the current one.
    pub fn on_scroll(&mut self, offset: f64) -> Option<usize> {
        let index = self.nearest_index(offset);
        if index == self.active_index {
            None
        } else {
            self.active_index = index;
            Some(index)
        }
    }

    pub fn pointer_down(&mut self, x: f64, offset: f64) {
        self.drag = Some(DragSession {
            origin_x: x,
            origin_offset: offset,
            travel: 0.0,
        });
        self.suppress_click = false;
    }

    /// New scroll offset for the container, or `None` when no drag is active.
    /// The container moves against the pointer.
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        let delta = x - drag.origin_x;
        drag.travel = drag.travel.max(delta.abs());
        Some(drag.origin_offset - delta)
    }

    /// Ends the drag wherever the pointer is and resolves the snap.
    pub fn pointer_up(&mut self, offset: f64) -> Option<SnapTarget> {
        let drag = self.drag.take()?;
        self.suppress_click = drag.travel > CLICK_SLOP;
        Some(self.snap(offset))
    }

    /// Nearest card boundary for `offset`. The index is committed right away so
    /// the indicators do not wait for the scroll animation.
    pub fn snap(&mut self, offset: f64) -> SnapTarget {
        let index = self.nearest_index(offset);
        self.active_index = index;
        SnapTarget {
            index,
            offset: self.offset_for(index),
        }
    }

    /// Consumes the click that the browser synthesizes after a real drag.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }

    /// Link activation is blocked while dragging and for the click right after.
    pub fn blocks_activation(&mut self) -> bool {
        self.is_dragging() || self.take_click_suppression()
    }

    pub fn go_to(&mut self, index: usize) -> SnapTarget {
        let index = index.min(self.last_index());
        self.active_index = index;
        SnapTarget {
            index,
            offset: self.offset_for(index),
        }
    }

    pub fn can_prev(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.active_index < self.last_index()
    }

    pub fn prev(&mut self) -> Option<SnapTarget> {
        if !self.can_prev() {
            return None;
        }
        Some(self.go_to(self.active_index - 1))
    }

    pub fn next(&mut self) -> Option<SnapTarget> {
        if !self.can_next() {
            return None;
        }
        Some(self.go_to(self.active_index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PITCH: f64 = 344.0;

    #[test]
    fn test_starts_idle_at_first_card() {
        let c = Carousel::new(8, PITCH);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert!(!c.can_prev());
        assert!(c.can_next());
    }

    #[test]
    fn test_on_scroll_reports_only_changes() {
        let mut c = Carousel::new(8, PITCH);
        assert_eq!(c.on_scroll(10.0), None);
        assert_eq!(c.on_scroll(PITCH * 0.6), Some(1));
        assert_eq!(c.on_scroll(PITCH * 1.2), None);
        assert_eq!(c.on_scroll(PITCH * 40.0), Some(7));
        assert_eq!(c.on_scroll(-50.0), Some(0));
    }

    #[test]
    fn test_drag_moves_against_pointer() {
        let mut c = Carousel::new(8, PITCH);
        assert_eq!(c.pointer_move(100.0), None);
        c.pointer_down(500.0, 200.0);
        assert_eq!(c.phase(), CarouselPhase::Dragging);
        assert_eq!(c.pointer_move(400.0), Some(300.0));
        assert_eq!(c.pointer_move(650.0), Some(50.0));
    }

    #[test]
    fn test_settled_index_matches_final_offset() {
        let count = 6;
        let offsets = [0.0, 171.0, 172.0, 515.9, 1033.0, 1719.0, 9000.0, -30.0];
        for offset in offsets {
            let mut c = Carousel::new(count, PITCH);
            c.pointer_down(0.0, 0.0);
            c.pointer_move(-offset);
            let snap = c.pointer_up(offset).expect("drag should end with a snap");
            let expected = ((offset / PITCH).round().max(0.0) as usize).min(count - 1);
            assert_eq!(snap.index, expected, "offset {offset}");
            assert_eq!(c.active_index(), expected);
            assert_eq!(snap.offset, expected as f64 * PITCH);
        }
    }

    #[test]
    fn test_release_outside_container_still_ends_drag() {
        let mut c = Carousel::new(8, PITCH);
        c.pointer_down(300.0, 0.0);
        // pointer left the container (and the window) to the far left
        let offset = c.pointer_move(-2000.0).unwrap();
        let snap = c.pointer_up(offset).expect("global release ends the drag");
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(snap.index, 7);
        assert_eq!(c.pointer_up(offset), None);
    }

    #[test]
    fn test_click_suppressed_only_after_real_drag() {
        let mut c = Carousel::new(8, PITCH);
        c.pointer_down(100.0, 0.0);
        assert!(c.blocks_activation());
        c.pointer_move(102.0);
        c.pointer_up(0.0);
        assert!(!c.blocks_activation());

        c.pointer_down(100.0, 0.0);
        c.pointer_move(40.0);
        c.pointer_up(60.0);
        assert!(c.blocks_activation());
        assert!(!c.blocks_activation());
    }

    #[test]
    fn test_dot_navigation_sets_index_immediately() {
        let mut c = Carousel::new(8, PITCH);
        c.pointer_down(0.0, 0.0);
        c.pointer_move(-900.0);
        let target = c.go_to(5);
        assert_eq!(c.active_index(), 5);
        assert_eq!(target.offset, 5.0 * PITCH);

        let mut c = Carousel::new(8, PITCH);
        assert_eq!(c.go_to(3).index, 3);
        assert_eq!(c.go_to(99).index, 7);
    }

    #[test]
    fn test_prev_next_stay_in_bounds() {
        let mut c = Carousel::new(3, PITCH);
        assert_eq!(c.prev(), None);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.next().map(|t| t.index), Some(1));
        assert_eq!(c.next().map(|t| t.index), Some(2));
        assert!(!c.can_next());
        assert_eq!(c.next(), None);
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.prev().map(|t| t.index), Some(1));
    }

    #[test]
    fn test_degenerate_layouts() {
        let mut c = Carousel::new(0, PITCH);
        assert_eq!(c.on_scroll(1000.0), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);

        let mut c = Carousel::new(4, 0.0);
        assert_eq!(c.nearest_index(500.0), 0);
        c.set_layout(4, PITCH);
        assert_eq!(c.on_scroll(PITCH * 2.0), Some(2));
    }

    #[test]
    fn test_set_layout_clamps_active_index() {
        let mut c = Carousel::new(16, PITCH);
        c.go_to(12);
        c.set_layout(8, PITCH);
        assert_eq!(c.active_index(), 7);
        c.set_layout(0, PITCH);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_pointer_events_inert_without_drag() {
        let mut c = Carousel::new(8, PITCH);
        assert_eq!(c.pointer_move(120.0), None);
        assert_eq!(c.pointer_up(500.0), None);
        assert_eq!(c.active_index(), 0);

        c.pointer_down(300.0, 0.0);
        assert!(c.pointer_up(0.0).is_some());
        // a late event after release changes nothing
        assert_eq!(c.pointer_up(900.0), None);
        assert_eq!(c.pointer_move(10.0), None);
        assert_eq!(c.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn test_card_starts_are_settled_positions() {
        // native scroll snapping parks the track at a card's left edge
        let mut c = Carousel::new(8, PITCH);
        for index in 0..8 {
            let offset = c.offset_for(index);
            assert_eq!(c.nearest_index(offset), index);
            assert_eq!(c.snap(offset), SnapTarget { index, offset });
        }
        assert_eq!(c.on_scroll(c.offset_for(2)), Some(2));
        assert_eq!(c.on_scroll(c.offset_for(2)), None);
        assert_eq!(c.on_scroll(c.offset_for(5)), Some(5));
    }
}
