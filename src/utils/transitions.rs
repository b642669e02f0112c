use std::time::Duration;

use gpui::{App, ElementId, Rgba, Window, ease_out_quint};
use gpui_transitions::Transition;

use crate::ElementIdExt;

/// Picks the first branch whose condition holds and animates towards its value.
///
/// ```ignore
/// conditional_transition!(id, window, cx, Duration::from_millis(365), {
///     is_hover => hover_color,
///     _ => color
/// })
/// ```
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        let transition = $window.use_keyed_transition(
            $id,
            $cx,
            $duration,
            |_window, _cx| value,
        )
        .with_easing(gpui::ease_out_quint());

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[macro_export]
macro_rules! conditional_transition_branches {
    // Default branch wasn't last.
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    // Entry point.
    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ])  }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ])  }
    }};

    // Last branch.
    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    // Last branch wasn't default.
    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    // Single unconditional value.
    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Background color that eases towards `hover_color` while hovered.
pub fn hover_bg_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_hover: bool,
    color: Rgba,
    hover_color: Rgba,
) -> Transition<Rgba> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:bg"),
        window,
        cx,
        Duration::from_millis(200),
        {
            is_hover => hover_color,
            _ => color
        }
    )
    .with_easing(ease_out_quint())
}
