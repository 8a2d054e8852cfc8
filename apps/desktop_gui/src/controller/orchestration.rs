//! Applies UI intents gathered during a frame to the color-state controller.

use color_core::{ColorStateController, TimerFacility};
use shared::protocol::Intent;

/// Returns `true` when any intent was handled, meaning the next frame has
/// something new to paint.
pub fn apply_frame_intents<T: TimerFacility>(
    controller: &mut ColorStateController<T>,
    intents: Vec<Intent>,
    status: &mut String,
) -> bool {
    let handled = !intents.is_empty();
    for intent in intents {
        let intent_name = intent.name();
        let rejection = match &intent {
            Intent::SelectHistory(index) => {
                Some(format!("No recently used color at position {}", index + 1))
            }
            Intent::SelectPreset(index) => Some(format!("No preset color at position {}", index + 1)),
            _ => None,
        };

        if controller.dispatch(intent) {
            tracing::debug!(intent = intent_name, "applied ui intent");
            status.clear();
        } else if let Some(message) = rejection {
            tracing::debug!(intent = intent_name, "ui intent rejected");
            *status = message;
        }
    }
    handled
}
