use std::sync::Arc;

use crate::scene::action::Action;
use crate::scene::model::{Ring, SceneState};

/// Pure transition `(state, action) -> state`.
///
/// Only the addressed subtree is rebuilt; untouched subtrees are cloned as-is.
/// [`Action::Unknown`] returns the very same `Arc`.
#[tracing::instrument(level = "debug", skip_all, fields(action = action.kind()))]
pub fn reduce(state: &Arc<SceneState>, action: Action) -> Arc<SceneState> {
    match action {
        Action::ResizeCanvas { width, height } => Arc::new(SceneState {
            width,
            height,
            ring: Ring {
                scale_x: saturating_i32(width),
                scale_y: saturating_i32(height),
                ..state.ring.clone()
            },
            ..(**state).clone()
        }),
        Action::SetBackgroundGradient(background_gradient) => Arc::new(SceneState {
            background_gradient,
            ..(**state).clone()
        }),
        Action::SetRing(update) => Arc::new(SceneState {
            ring: Ring {
                enabled: update.enabled,
                color_stops: update.color_stops,
                shine: update.shine,
                x: update.x,
                y: update.y,
                radius: update.radius,
                stroke_width: update.stroke_width,
                ..state.ring.clone()
            },
            ..(**state).clone()
        }),
        Action::SetClockFace(clock_face) => Arc::new(SceneState {
            clock_face,
            ..(**state).clone()
        }),
        Action::ReplaceWholeState { snapshot } => {
            let SceneState {
                background_gradient,
                ring,
                clock_face,
                ..
            } = *snapshot;
            Arc::new(SceneState {
                width: state.width,
                height: state.height,
                background_gradient,
                ring,
                clock_face,
            })
        }
        Action::Reset => Arc::new(SceneState::default()),
        Action::Unknown => Arc::clone(state),
    }
}

fn saturating_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reducer.rs"]
mod tests;
