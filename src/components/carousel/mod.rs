//! A horizontally sliding card carousel with autoplay, drag gestures,
//! directional buttons and pagination dots.
//!
//! The [`CarouselController`] entity owns the state and must outlive the
//! frames it is rendered in; the [`Carousel`] element is rebuilt every frame
//! with the cards as children.

use std::time::Duration;

use gpui::{
    AnyElement, App, CursorStyle, ElementId, Entity, InteractiveElement, IntoElement, KeyBinding,
    MouseButton, ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window, actions,
    div, prelude::FluentBuilder, px,
};

use crate::{
    ElementIdExt, FolioIconKind,
    components::NavButton,
    conditional_transition,
    theme::ThemeExt,
    utils::RgbaExt,
};

mod config;
pub use config::*;

mod controller;
pub use controller::*;

mod state;
pub use state::*;

actions!(carousel, [Next, Previous]);

const KEY_CONTEXT: &str = "Carousel";

pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("right", Next, Some(KEY_CONTEXT)),
        KeyBinding::new("left", Previous, Some(KEY_CONTEXT)),
    ]);
}

#[derive(IntoElement)]
pub struct Carousel {
    id: ElementId,
    controller: Entity<CarouselController>,
    cards: Vec<AnyElement>,
}

impl Carousel {
    pub fn new(id: impl Into<ElementId>, controller: Entity<CarouselController>) -> Self {
        Self {
            id: id.into(),
            controller,
            cards: Vec::new(),
        }
    }
}

impl ParentElement for Carousel {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.cards.extend(elements);
    }
}

impl RenderOnce for Carousel {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let controller = self.controller.read(cx);
        let config = controller.config().clone();
        let state = controller.state().clone();
        let focus_handle = controller.focus_handle().clone();

        debug_assert_eq!(
            self.cards.len(),
            state.len(),
            "carousel was given a different number of cards than its controller"
        );

        let card_width = config.card_width_px();
        let step = config.card_width + config.gap;
        let current = state.current_index();

        let colors = cx.active_variant().colors.clone();

        let offset_transition = conditional_transition!(
            self.id.with_suffix("state:transition:offset"),
            window,
            cx,
            Duration::from_millis(450),
            current as f32
        );
        let track_x = -(*offset_transition.evaluate(window, cx) * step) + state.drag_offset();

        let viewport = div()
            .id(self.id.with_suffix("viewport"))
            .w_full()
            .overflow_hidden()
            .cursor(if state.is_dragging() {
                CursorStyle::ClosedHand
            } else {
                CursorStyle::OpenHand
            })
            .child(
                div()
                    .relative()
                    .left(px(track_x))
                    .flex()
                    .gap(config.gap_px())
                    .children(self.cards.into_iter().enumerate().map(|(ix, card)| {
                        div()
                            .flex_none()
                            .w(card_width)
                            .when(ix != current, |this| this.opacity(0.55))
                            .child(card)
                    })),
            )
            .on_mouse_down(MouseButton::Left, {
                let controller = self.controller.clone();
                let focus_handle = focus_handle.clone();
                move |event, window, cx| {
                    window.prevent_default();
                    focus_handle.focus(window, cx);
                    controller.update(cx, |controller, cx| {
                        controller.drag_start(event.position.x, cx)
                    });
                }
            })
            .on_mouse_move({
                let controller = self.controller.clone();
                move |event, _window, cx| {
                    if !controller.read(cx).state().is_dragging() {
                        return;
                    }

                    controller.update(cx, |controller, cx| {
                        if event.pressed_button == Some(MouseButton::Left) {
                            controller.drag_move(event.position.x, cx);
                        } else {
                            // Released somewhere no mouse-up reached us.
                            controller.drag_end(event.position.x, cx);
                        }
                    });
                }
            })
            // Runs before the cards' click handlers so a drag never clicks.
            .capture_any_mouse_up({
                let controller = self.controller.clone();
                move |event, _window, cx| {
                    if event.button != MouseButton::Left {
                        return;
                    }

                    let swallow = controller.update(cx, |controller, cx| {
                        controller.drag_end(event.position.x, cx) != DragOutcome::Ignored
                            && controller.state().suppresses_click()
                    });

                    if swallow {
                        cx.stop_propagation();
                    }
                }
            })
            .on_mouse_up_out(MouseButton::Left, {
                let controller = self.controller.clone();
                move |event, _window, cx| {
                    controller.update(cx, |controller, cx| {
                        controller.drag_end(event.position.x, cx);
                    });
                }
            });

        let arrow = |suffix: &str, icon: FolioIconKind, direction: Direction| {
            let controller = self.controller.clone();
            NavButton::new(self.id.with_suffix(suffix.to_string()))
                .icon(icon)
                .circular()
                .on_click(move |_event, _window, cx| {
                    controller.update(cx, |controller, cx| controller.advance(direction, cx));
                })
        };

        div()
            .id(self.id.clone())
            .key_context(KEY_CONTEXT)
            .track_focus(&focus_handle)
            .on_action({
                let controller = self.controller.clone();
                move |_: &Next, _window, cx| {
                    controller.update(cx, |controller, cx| {
                        controller.advance(Direction::Next, cx)
                    });
                }
            })
            .on_action({
                let controller = self.controller.clone();
                move |_: &Previous, _window, cx| {
                    controller.update(cx, |controller, cx| {
                        controller.advance(Direction::Previous, cx)
                    });
                }
            })
            .w_full()
            .flex()
            .flex_col()
            .gap(px(16.))
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap(px(12.))
                    .when(config.show_navigation && state.len() > 1, |this| {
                        this.child(arrow(
                            "previous",
                            FolioIconKind::ArrowLeft,
                            Direction::Previous,
                        ))
                    })
                    .child(div().flex_1().min_w_0().child(viewport))
                    .when(config.show_navigation && state.len() > 1, |this| {
                        this.child(arrow("next", FolioIconKind::ArrowRight, Direction::Next))
                    }),
            )
            .when(config.show_pagination && state.len() > 1, |this| {
                this.child(
                    div()
                        .w_full()
                        .flex()
                        .justify_center()
                        .gap(px(8.))
                        .children((0..state.len()).map(|ix| {
                            let controller = self.controller.clone();
                            let is_current = ix == current;

                            div()
                                .id(self.id.with_index("dot", ix))
                                .cursor(CursorStyle::PointingHand)
                                .h(px(8.))
                                .w(if is_current { px(24.) } else { px(8.) })
                                .rounded(px(100.))
                                .bg(if is_current {
                                    colors.accent.primary
                                } else {
                                    colors.text.muted.alpha(0.4)
                                })
                                .on_click(move |_event, _window, cx| {
                                    controller
                                        .update(cx, |controller, cx| controller.jump_to(ix, cx));
                                })
                        })),
                )
            })
    }
}
