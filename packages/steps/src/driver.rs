//! Gesture driver seam
//!
//! The interpreter talks to the device through the [`GestureDriver`]
//! trait. The real implementation lives in the automation library that
//! owns the device connection and element resolution; this crate only
//! ships [`RecordingDriver`], an in-memory implementation that logs every
//! invocation, used by the test suites and the dry-run binary.
//!
//! # Example
//!
//! ```
//! use tapkit_steps::{GestureDriver, RecordingDriver, Selector};
//!
//! let driver = RecordingDriver::new();
//! driver.tap(&Selector::id("button_1")).unwrap();
//! assert_eq!(driver.len(), 1);
//! assert_eq!(driver.actions()[0].label(), "tap");
//! ```

use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

use crate::action::{Action, PanDirection, PinchDirection};
use crate::selector::Selector;

/// Failure reported by the automation driver.
///
/// Opaque to the interpreter: these are surfaced as-is, never wrapped,
/// retried, or reinterpreted.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No element matched the selector
    #[error("No element matches query {0}")]
    ElementNotFound(Selector),

    /// The device refused or failed the gesture
    #[error("Gesture '{gesture}' rejected on {target}: {reason}")]
    GestureRejected {
        gesture: &'static str,
        target: Selector,
        reason: String,
    },

    /// The device connection dropped mid-interaction
    #[error("Connection to device lost: {0}")]
    ConnectionLost(String),

    /// Any other driver-defined failure
    #[error("{0}")]
    Other(String),
}

/// Result type for driver calls
pub type DriverResult = std::result::Result<(), DriverError>;

/// Trait for UI-automation driver implementations.
///
/// One method per action in the vocabulary. Calls are synchronous: each
/// returns only once the device interaction completed or failed.
pub trait GestureDriver: Send + Sync {
    /// Tap the element once.
    fn tap(&self, target: &Selector) -> DriverResult;

    /// Press and hold the element.
    fn long_press(&self, target: &Selector) -> DriverResult;

    /// Drag from one element to another.
    fn drag(
        &self,
        from: &Selector,
        to: &Selector,
        steps: u32,
        hold: Duration,
        hang: Duration,
    ) -> DriverResult;

    /// Pan across the element in a direction.
    fn pan(&self, target: &Selector, direction: PanDirection) -> DriverResult;

    /// Pinch on the element in a direction.
    fn pinch(&self, target: &Selector, direction: PinchDirection) -> DriverResult;

    /// Type text into the element.
    fn enter_text(&self, target: &Selector, text: &str) -> DriverResult;

    /// Clear all text in the element.
    fn clear_text(&self, target: &Selector) -> DriverResult;

    /// Run a UI query for the element without interacting.
    fn query(&self, target: &Selector) -> DriverResult;

    /// Press the device back button.
    fn press_back(&self) -> DriverResult;
}

/// In-memory driver that records every invocation in order.
///
/// Interior mutability keeps the trait object usable behind `&self`
/// across threads, matching the `Send + Sync` bound.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    log: Mutex<Vec<Action>>,
}

impl RecordingDriver {
    /// Create a driver with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, action: Action) -> DriverResult {
        if let Ok(mut log) = self.log.lock() {
            log.push(action);
        }
        Ok(())
    }

    /// Snapshot of all recorded actions, in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.log.lock().map(|log| log.len()).unwrap_or(0)
    }

    /// True when nothing has been dispatched yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all recorded actions.
    pub fn clear(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}

impl GestureDriver for RecordingDriver {
    fn tap(&self, target: &Selector) -> DriverResult {
        self.record(Action::Tap {
            target: target.clone(),
        })
    }

    fn long_press(&self, target: &Selector) -> DriverResult {
        self.record(Action::LongPress {
            target: target.clone(),
        })
    }

    fn drag(
        &self,
        from: &Selector,
        to: &Selector,
        steps: u32,
        hold: Duration,
        hang: Duration,
    ) -> DriverResult {
        self.record(Action::Drag {
            from: from.clone(),
            to: to.clone(),
            steps,
            hold,
            hang,
        })
    }

    fn pan(&self, target: &Selector, direction: PanDirection) -> DriverResult {
        self.record(Action::Pan {
            target: target.clone(),
            direction,
        })
    }

    fn pinch(&self, target: &Selector, direction: PinchDirection) -> DriverResult {
        self.record(Action::Pinch {
            target: target.clone(),
            direction,
        })
    }

    fn enter_text(&self, target: &Selector, text: &str) -> DriverResult {
        self.record(Action::EnterText {
            target: target.clone(),
            text: text.to_string(),
        })
    }

    fn clear_text(&self, target: &Selector) -> DriverResult {
        self.record(Action::ClearText {
            target: target.clone(),
        })
    }

    fn query(&self, target: &Selector) -> DriverResult {
        self.record(Action::Query {
            target: target.clone(),
        })
    }

    fn press_back(&self) -> DriverResult {
        self.record(Action::PressBack)
    }
}
