//! Action vocabulary
//!
//! An [`Action`] describes a single driver invocation: the target
//! selector plus the action kind and its fixed parameters. Actions are
//! produced by the interpreter and immediately consumed by the driver;
//! they are never retained between steps. The serde derives exist so the
//! dry-run binary can emit an invocation log.

use serde::Serialize;
use std::time::Duration;

use crate::selector::Selector;

/// Horizontal pan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanDirection {
    Left,
    Right,
}

/// Pinch direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PinchDirection {
    /// Fingers move together (zoom out)
    In,
    /// Fingers spread apart (zoom in)
    Out,
}

/// A single driver invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Tap the target once
    Tap { target: Selector },
    /// Press and hold the target
    LongPress { target: Selector },
    /// Drag from one view to another
    Drag {
        from: Selector,
        to: Selector,
        /// Number of interpolated move events
        steps: u32,
        /// Hold time before the drag starts
        #[serde(with = "duration_millis")]
        hold: Duration,
        /// Hang time after the drag ends
        #[serde(with = "duration_millis")]
        hang: Duration,
    },
    /// Pan across the target in a direction
    Pan {
        target: Selector,
        direction: PanDirection,
    },
    /// Pinch on the target in a direction
    Pinch {
        target: Selector,
        direction: PinchDirection,
    },
    /// Type text into the target field
    EnterText { target: Selector, text: String },
    /// Clear all text in the target field
    ClearText { target: Selector },
    /// Run a UI query for the target without interacting
    Query { target: Selector },
    /// Press the device back button (no target)
    PressBack,
}

impl Action {
    /// Short stable label, used in traces and test assertions.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Tap { .. } => "tap",
            Action::LongPress { .. } => "long-press",
            Action::Drag { .. } => "drag",
            Action::Pan {
                direction: PanDirection::Left,
                ..
            } => "pan-left",
            Action::Pan {
                direction: PanDirection::Right,
                ..
            } => "pan-right",
            Action::Pinch {
                direction: PinchDirection::In,
                ..
            } => "pinch-in",
            Action::Pinch {
                direction: PinchDirection::Out,
                ..
            } => "pinch-out",
            Action::EnterText { .. } => "enter-text",
            Action::ClearText { .. } => "clear-text",
            Action::Query { .. } => "query",
            Action::PressBack => "back",
        }
    }

    /// Primary target selector, if the action has one.
    ///
    /// For drags this is the source view.
    pub fn target(&self) -> Option<&Selector> {
        match self {
            Action::Tap { target }
            | Action::LongPress { target }
            | Action::Pan { target, .. }
            | Action::Pinch { target, .. }
            | Action::EnterText { target, .. }
            | Action::ClearText { target }
            | Action::Query { target } => Some(target),
            Action::Drag { from, .. } => Some(from),
            Action::PressBack => None,
        }
    }
}

/// Serialize a `Duration` as integer milliseconds.
mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(d.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DRAG_GESTURE_STEPS, DRAG_HANG_TIME, DRAG_HOLD_TIME};

    #[test]
    fn test_labels() {
        assert_eq!(
            Action::Tap {
                target: Selector::id("a")
            }
            .label(),
            "tap"
        );
        assert_eq!(
            Action::Pan {
                target: Selector::id("a"),
                direction: PanDirection::Left,
            }
            .label(),
            "pan-left"
        );
        assert_eq!(
            Action::Pinch {
                target: Selector::id("a"),
                direction: PinchDirection::Out,
            }
            .label(),
            "pinch-out"
        );
        assert_eq!(Action::PressBack.label(), "back");
    }

    #[test]
    fn test_drag_target_is_source() {
        let action = Action::Drag {
            from: Selector::id("from"),
            to: Selector::id("to"),
            steps: DRAG_GESTURE_STEPS,
            hold: DRAG_HOLD_TIME,
            hang: DRAG_HANG_TIME,
        };
        assert_eq!(action.target().map(ToString::to_string).as_deref(), Some("* id:'from'"));
    }

    #[test]
    fn test_serialize_drag_durations_as_millis() {
        let action = Action::Drag {
            from: Selector::id("a"),
            to: Selector::id("b"),
            steps: 10,
            hold: Duration::from_millis(500),
            hang: Duration::from_millis(500),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["kind"], "drag");
        assert_eq!(json["steps"], 10);
        assert_eq!(json["hold"], 500);
        assert_eq!(json["hang"], 500);
    }

    #[test]
    fn test_serialize_direction_casing() {
        let action = Action::Pan {
            target: Selector::id("panel"),
            direction: PanDirection::Left,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["direction"], "LEFT");
    }
}
