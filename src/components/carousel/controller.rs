use gpui::{Context, EventEmitter, FocusHandle, Pixels, Task, px};

use super::{CarouselConfig, CarouselState, Direction, DragOutcome};

/// Emitted whenever the visible card changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Changed { index: usize },
}

/// Owns the single pending auto-advance callback.
///
/// Arming replaces (and so cancels) the previous task. Dropping the handle,
/// which happens when the controller entity is released, cancels it too.
#[derive(Default)]
pub struct TimerHandle {
    task: Option<Task<()>>,
    generation: usize,
}

impl TimerHandle {
    /// Bumps the generation and returns it, for the callback to check against.
    fn next_generation(&mut self) -> usize {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn arm(&mut self, generation: usize, task: Task<()>) {
        debug_assert_eq!(generation, self.generation);
        self.task = Some(task);
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.task = None;
    }

    fn is_current(&self, generation: usize) -> bool {
        self.task.is_some() && generation == self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// Entity driving a [`Carousel`](super::Carousel): the index, gestures and the
/// autoplay timer.
pub struct CarouselController {
    state: CarouselState,
    config: CarouselConfig,
    timer: TimerHandle,
    focus_handle: FocusHandle,
}

impl EventEmitter<CarouselEvent> for CarouselController {}

impl CarouselController {
    /// `len` is the number of cards, fixed for the controller's lifetime.
    pub fn new(len: usize, config: CarouselConfig, cx: &mut Context<Self>) -> Self {
        let config = config.normalized();
        let mut this = Self {
            state: CarouselState::new(
                len,
                config.autoplay,
                config.drag_threshold_px(),
                config.card_width,
            ),
            config,
            timer: TimerHandle::default(),
            focus_handle: cx.focus_handle(),
        };

        this.rearm(cx);
        this
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn timer(&self) -> &TimerHandle {
        &self.timer
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }

    pub fn advance(&mut self, direction: Direction, cx: &mut Context<Self>) {
        let changed = self.state.advance(direction);
        self.rearm(cx);
        self.changed(changed, cx);
    }

    pub fn jump_to(&mut self, index: usize, cx: &mut Context<Self>) {
        if index >= self.state.len() {
            log::debug!("carousel ignored jump to {index} of {}", self.state.len());
            return;
        }

        let changed = self.state.jump_to(index);
        self.rearm(cx);
        self.changed(changed, cx);
    }

    pub fn set_autoplay(&mut self, autoplay: bool, cx: &mut Context<Self>) {
        self.state.set_autoplay(autoplay);
        self.rearm(cx);
        cx.notify();
    }

    pub fn drag_start(&mut self, position: Pixels, cx: &mut Context<Self>) {
        if self.state.drag_start(position.to_f64() as f32) {
            self.timer.cancel();
            cx.notify();
        }
    }

    /// Returns the offset the track should be rendered at.
    pub fn drag_move(&mut self, position: Pixels, cx: &mut Context<Self>) -> Pixels {
        if !self.state.is_dragging() {
            return px(0.);
        }

        let offset = self.state.drag_move(position.to_f64() as f32);
        cx.notify();
        px(offset)
    }

    pub fn drag_end(&mut self, position: Pixels, cx: &mut Context<Self>) -> DragOutcome {
        let outcome = self.state.drag_end(position.to_f64() as f32);
        if outcome == DragOutcome::Ignored {
            return outcome;
        }

        log::trace!("carousel drag ended: {outcome:?}");
        self.rearm(cx);
        self.changed(matches!(outcome, DragOutcome::Advanced(_)), cx);
        outcome
    }

    fn tick(&mut self, generation: usize, cx: &mut Context<Self>) {
        if !self.timer.is_current(generation) {
            return;
        }

        let changed = self.state.tick();
        self.rearm(cx);
        self.changed(changed, cx);
    }

    fn rearm(&mut self, cx: &mut Context<Self>) {
        self.timer.cancel();

        if !self.state.wants_tick() {
            return;
        }

        let delay = self.config.autoplay_delay;
        let generation = self.timer.next_generation();
        let task = cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            this.update(cx, |controller, cx| controller.tick(generation, cx))
                .ok();
        });

        self.timer.arm(generation, task);
    }

    fn changed(&mut self, changed: bool, cx: &mut Context<Self>) {
        if changed {
            let index = self.state.current_index();
            log::trace!("carousel showing card {index}");
            cx.emit(CarouselEvent::Changed { index });
        }

        cx.notify();
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use gpui::{AppContext, Entity, TestAppContext};

    const DELAY: Duration = Duration::from_millis(5000);

    fn controller(cx: &mut TestAppContext, len: usize) -> Entity<CarouselController> {
        cx.update(|cx| {
            cx.new(|cx| {
                CarouselController::new(len, CarouselConfig::default().autoplay_delay(DELAY), cx)
            })
        })
    }

    fn index(cx: &mut TestAppContext, controller: &Entity<CarouselController>) -> usize {
        controller.read_with(cx, |controller, _| controller.current_index())
    }

    fn wait(cx: &mut TestAppContext, duration: Duration) {
        cx.executor().advance_clock(duration);
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_autoplay_advances_once_per_delay(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);

        wait(cx, DELAY - Duration::from_millis(1));
        assert_eq!(index(cx, &controller), 0, "Nothing fires before the delay");

        wait(cx, Duration::from_millis(1));
        assert_eq!(index(cx, &controller), 1);

        for expected in [2, 0, 1, 2] {
            wait(cx, DELAY);
            assert_eq!(index(cx, &controller), expected);
        }
    }

    #[gpui::test]
    fn test_manual_navigation_restarts_the_delay(cx: &mut TestAppContext) {
        let controller = controller(cx, 4);

        wait(cx, Duration::from_millis(4000));
        controller.update(cx, |controller, cx| controller.advance(Direction::Next, cx));
        assert_eq!(index(cx, &controller), 1);

        // The original deadline passes without a second advance.
        wait(cx, Duration::from_millis(4000));
        assert_eq!(index(cx, &controller), 1);

        wait(cx, Duration::from_millis(1000));
        assert_eq!(index(cx, &controller), 2);
    }

    #[gpui::test]
    fn test_jump_to_out_of_range_keeps_state_and_timer(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);
        let generation = controller.read_with(cx, |c, _| c.timer().generation());

        controller.update(cx, |controller, cx| controller.jump_to(7, cx));

        controller.read_with(cx, |controller, _| {
            assert_eq!(controller.current_index(), 0);
            assert_eq!(controller.timer().generation(), generation);
            assert!(controller.timer().is_armed());
        });

        controller.update(cx, |controller, cx| controller.jump_to(2, cx));
        assert_eq!(index(cx, &controller), 2);
    }

    #[gpui::test]
    fn test_drag_pauses_autoplay_until_release(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);

        controller.update(cx, |controller, cx| {
            controller.drag_start(px(300.), cx);
            controller.drag_start(px(10.), cx);
            assert!(!controller.timer().is_armed(), "Dragging holds no timer");
        });

        wait(cx, DELAY * 3);
        assert_eq!(index(cx, &controller), 0, "No autoplay while dragging");

        let outcome = controller.update(cx, |controller, cx| {
            assert_eq!(controller.drag_move(px(250.), cx), px(-50.));
            controller.drag_end(px(260.), cx)
        });
        assert_eq!(outcome, DragOutcome::Reverted);
        assert!(controller.read_with(cx, |c, _| c.timer().is_armed()));

        wait(cx, DELAY);
        assert_eq!(index(cx, &controller), 1, "Autoplay resumes after release");
    }

    #[gpui::test]
    fn test_drag_past_threshold_moves_one_card(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);

        let outcome = controller.update(cx, |controller, cx| {
            controller.drag_start(px(400.), cx);
            controller.drag_end(px(100.), cx)
        });

        assert_eq!(outcome, DragOutcome::Advanced(Direction::Next));
        assert_eq!(index(cx, &controller), 1);
    }

    #[gpui::test]
    fn test_single_card_never_schedules(cx: &mut TestAppContext) {
        for len in [0, 1] {
            let controller = controller(cx, len);

            controller.update(cx, |controller, cx| {
                assert!(!controller.timer().is_armed());
                controller.advance(Direction::Next, cx);
                assert!(!controller.timer().is_armed());
            });

            wait(cx, DELAY * 2);
            assert_eq!(index(cx, &controller), 0);
        }
    }

    #[gpui::test]
    fn test_disabling_autoplay_cancels_the_timer(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);

        controller.update(cx, |controller, cx| controller.set_autoplay(false, cx));
        wait(cx, DELAY * 2);
        assert_eq!(index(cx, &controller), 0);

        controller.update(cx, |controller, cx| controller.set_autoplay(true, cx));
        wait(cx, DELAY);
        assert_eq!(index(cx, &controller), 1);
    }

    #[gpui::test]
    fn test_emits_changed_events(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = cx.update({
            let seen = seen.clone();
            |cx| {
                cx.subscribe(&controller, move |_, event: &CarouselEvent, _cx| {
                    seen.borrow_mut().push(*event);
                })
            }
        });

        controller.update(cx, |controller, cx| {
            controller.advance(Direction::Previous, cx);
            controller.jump_to(2, cx);
            controller.jump_to(1, cx);
        });

        assert_eq!(
            *seen.borrow(),
            vec![
                CarouselEvent::Changed { index: 2 },
                CarouselEvent::Changed { index: 1 },
            ]
        );
    }

    #[gpui::test]
    fn test_released_controller_stops_ticking(cx: &mut TestAppContext) {
        let controller = controller(cx, 3);
        let weak = controller.downgrade();

        drop(controller);
        wait(cx, DELAY * 2);

        assert!(weak.upgrade().is_none());
    }
}
