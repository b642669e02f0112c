//! The carousel's index and gesture bookkeeping, free of any timer or UI.

/// Pointer travel, in pixels, beyond which a press counts as a drag rather
/// than a click.
pub const CLICK_SLOP: f32 = 4.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Dragging {
        /// Pointer x where the drag began.
        start: f32,
        /// Visual offset from the last pointer move.
        offset: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Advanced(Direction),
    Reverted,
    /// No drag was in progress.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    autoplay: bool,
    is_auto_playing: bool,
    phase: CarouselPhase,
    suppress_click: bool,
    drag_threshold: f32,
    max_drag_offset: f32,
}

impl CarouselState {
    /// `drag_threshold` and `max_drag_offset` are in pixels.
    pub fn new(len: usize, autoplay: bool, drag_threshold: f32, max_drag_offset: f32) -> Self {
        Self {
            len,
            current_index: 0,
            autoplay,
            is_auto_playing: autoplay,
            phase: CarouselPhase::Idle,
            suppress_click: false,
            drag_threshold,
            max_drag_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging { .. })
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn drag_start_offset(&self) -> Option<f32> {
        match self.phase {
            CarouselPhase::Dragging { start, .. } => Some(start),
            CarouselPhase::Idle => None,
        }
    }

    /// Horizontal offset to render the track at while a drag is in progress.
    pub fn drag_offset(&self) -> f32 {
        match self.phase {
            CarouselPhase::Dragging { offset, .. } => offset,
            CarouselPhase::Idle => 0.,
        }
    }

    /// Whether the last finished drag travelled far enough that the release
    /// must not also click whatever is under the pointer.
    pub fn suppresses_click(&self) -> bool {
        self.suppress_click
    }

    /// Whether an auto-advance timer should be pending right now.
    pub fn wants_tick(&self) -> bool {
        self.is_auto_playing && !self.is_dragging() && self.len > 1
    }

    /// Enables or disables autoplay. Takes effect once any drag ends.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
        if !self.is_dragging() {
            self.is_auto_playing = autoplay;
        }
    }

    /// Moves one card, wrapping at both ends. Returns whether the index changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.len <= 1 {
            return false;
        }

        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % self.len,
            Direction::Previous => (self.current_index + self.len - 1) % self.len,
        };

        true
    }

    /// Shows the card at `index`. Out of range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current_index {
            return false;
        }

        self.current_index = index;
        true
    }

    /// Enters the dragging phase and pauses autoplay. A second start while
    /// already dragging is ignored.
    pub fn drag_start(&mut self, position: f32) -> bool {
        if self.len == 0 || self.is_dragging() {
            return false;
        }

        self.phase = CarouselPhase::Dragging {
            start: position,
            offset: 0.,
        };
        self.suppress_click = false;
        self.is_auto_playing = false;
        true
    }

    /// Records the pointer position and returns the visual offset, bounded to
    /// one card in either direction.
    pub fn drag_move(&mut self, position: f32) -> f32 {
        let CarouselPhase::Dragging { start, offset } = &mut self.phase else {
            return 0.;
        };

        *offset = (position - *start).clamp(-self.max_drag_offset, self.max_drag_offset);
        *offset
    }

    /// Leaves the dragging phase, advancing if the pointer travelled further
    /// than the threshold. Dragging leftwards reveals the next card.
    pub fn drag_end(&mut self, position: f32) -> DragOutcome {
        let Some(start) = self.drag_start_offset() else {
            return DragOutcome::Ignored;
        };

        self.phase = CarouselPhase::Idle;
        self.is_auto_playing = self.autoplay;

        let distance = position - start;
        self.suppress_click = distance.abs() > CLICK_SLOP;

        if distance.abs() <= self.drag_threshold {
            return DragOutcome::Reverted;
        }

        let direction = if distance < 0. {
            Direction::Next
        } else {
            Direction::Previous
        };

        if self.advance(direction) {
            DragOutcome::Advanced(direction)
        } else {
            DragOutcome::Reverted
        }
    }

    /// Timer-driven advance. Does nothing while dragging or paused.
    pub fn tick(&mut self) -> bool {
        self.wants_tick() && self.advance(Direction::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> CarouselState {
        CarouselState::new(len, true, 95., 380.)
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for len in 0..6 {
            let mut state = state(len);
            for _ in 0..(len * 3 + 2) {
                state.advance(Direction::Next);
                assert!(state.is_empty() || state.current_index() < len);
            }
            for _ in 0..(len * 2 + 1) {
                state.advance(Direction::Previous);
                assert!(state.is_empty() || state.current_index() < len);
            }
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut state = state(4);

        assert!(state.advance(Direction::Previous));
        assert_eq!(state.current_index(), 3);

        assert!(state.advance(Direction::Next));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_single_and_empty_are_inert() {
        for len in [0, 1] {
            let mut state = state(len);

            assert!(!state.advance(Direction::Next));
            assert!(!state.advance(Direction::Previous));
            assert!(!state.tick());
            assert!(!state.wants_tick());
            assert_eq!(state.current_index(), 0);
        }

        assert!(!state(0).drag_start(10.));
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut state = state(3);

        assert!(state.jump_to(2));
        assert_eq!(state.current_index(), 2);

        assert!(!state.jump_to(3));
        assert!(!state.jump_to(usize::MAX));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_short_drag_reverts() {
        let mut state = state(4);

        assert!(state.drag_start(500.));
        assert_eq!(state.drag_move(450.), -50.);
        assert_eq!(state.drag_end(420.), DragOutcome::Reverted);

        assert_eq!(state.current_index(), 0);
        assert!(!state.is_dragging());
        assert_eq!(state.drag_offset(), 0.);
    }

    #[test]
    fn test_long_drag_moves_one_step_in_drag_direction() {
        let mut state = state(4);

        state.drag_start(500.);
        assert_eq!(
            state.drag_end(100.),
            DragOutcome::Advanced(Direction::Next)
        );
        assert_eq!(state.current_index(), 1);

        state.drag_start(100.);
        assert_eq!(
            state.drag_end(300.),
            DragOutcome::Advanced(Direction::Previous)
        );
        assert_eq!(state.current_index(), 0);

        state.drag_start(100.);
        assert_eq!(
            state.drag_end(900.),
            DragOutcome::Advanced(Direction::Previous)
        );
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn test_drag_pauses_and_resumes_autoplay() {
        let mut state = state(3);
        assert!(state.wants_tick());

        state.drag_start(0.);
        assert!(!state.is_auto_playing());
        assert!(!state.wants_tick());
        assert!(!state.tick(), "Ticks are ignored while dragging");

        state.drag_end(0.);
        assert!(state.is_auto_playing());
        assert!(state.wants_tick());
    }

    #[test]
    fn test_second_drag_start_keeps_original_origin() {
        let mut state = state(3);

        assert!(state.drag_start(200.));
        assert!(!state.drag_start(50.));
        assert_eq!(state.drag_start_offset(), Some(200.));
    }

    #[test]
    fn test_drag_move_is_bounded_and_idle_moves_are_ignored() {
        let mut state = state(3);
        assert_eq!(state.drag_move(1000.), 0.);

        state.drag_start(0.);
        assert_eq!(state.drag_move(1000.), 380.);
        assert_eq!(state.drag_move(-1000.), -380.);
        assert_eq!(state.drag_end(5.), DragOutcome::Reverted);
        assert_eq!(state.drag_end(5.), DragOutcome::Ignored);
    }

    #[test]
    fn test_autoplay_toggle_is_deferred_while_dragging() {
        let mut state = state(3);

        state.drag_start(0.);
        state.set_autoplay(false);
        state.drag_end(0.);
        assert!(!state.is_auto_playing());

        state.set_autoplay(true);
        assert!(state.wants_tick());
    }

    #[test]
    fn test_only_travelled_drags_suppress_clicks() {
        let mut state = state(3);
        assert!(!state.suppresses_click());

        state.drag_start(100.);
        state.drag_end(102.);
        assert!(!state.suppresses_click(), "A press without travel is a click");

        state.drag_start(100.);
        state.drag_end(60.);
        assert!(state.suppresses_click(), "A reverted drag still swallows the click");

        state.drag_start(100.);
        assert!(!state.suppresses_click(), "Each press starts clean");
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut state = state(2);

        assert!(state.tick());
        assert_eq!(state.current_index(), 1);
        assert!(state.tick());
        assert_eq!(state.current_index(), 0);
    }
}
