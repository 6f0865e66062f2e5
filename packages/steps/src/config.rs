//! Configuration constants for step execution
//!
//! Fixed timing and iteration parameters shared by all gesture patterns.
//! These mirror the values the underlying automation library was tuned
//! with; changing them changes observable device behaviour, so they are
//! compile-time constants rather than runtime configuration.

use std::time::Duration;

/// Number of interpolated move events in a drag-and-drop gesture.
pub const DRAG_GESTURE_STEPS: u32 = 10;

/// Hold time on the source view before a drag starts.
pub const DRAG_HOLD_TIME: Duration = Duration::from_millis(500);

/// Hang time on the destination view after a drag ends.
pub const DRAG_HANG_TIME: Duration = Duration::from_millis(500);

/// Settle delay after each nested step invocation.
///
/// Deliberate wait for the UI to quiesce between repetitions, not a
/// concurrency yield.
pub const NESTED_STEP_SETTLE: Duration = Duration::from_millis(100);

/// Maximum depth for nested step re-entry.
///
/// Prevents unbounded recursion through mutually nested steps. Real
/// scenarios nest one level deep; 16 is far beyond legitimate use.
pub const MAX_NESTED_STEP_DEPTH: usize = 16;
