//! Step interpreter
//!
//! Translates a matched step (text plus optional data table) into an
//! ordered sequence of driver invocations. Execution is synchronous and
//! strictly sequential: the outer loop runs the captured repeat count,
//! the inner loop walks table rows in insertion order, and every driver
//! call completes (or fails) before the next begins. A driver failure
//! aborts the remainder of the step and propagates unchanged.
//!
//! The interpreter holds no mutable state between invocations; the only
//! suspension point is the fixed settle delay after each nested step.
//!
//! # Example
//!
//! ```
//! use tapkit_steps::{RecordingDriver, StepInterpreter, StepTable};
//!
//! let interpreter = StepInterpreter::new(RecordingDriver::new());
//! let table = StepTable::from_rows(&[
//!     vec!["view".to_string()],
//!     vec!["button_1".to_string()],
//! ]);
//! interpreter.run_step("I tap <view> for 2 times", Some(&table)).unwrap();
//! assert_eq!(interpreter.driver().len(), 2);
//! ```

use std::thread;
use tracing::{debug, error};

use crate::action::{PanDirection, PinchDirection};
use crate::config::{
    DRAG_GESTURE_STEPS, DRAG_HANG_TIME, DRAG_HOLD_TIME, MAX_NESTED_STEP_DEPTH, NESTED_STEP_SETTLE,
};
use crate::driver::GestureDriver;
use crate::error::{Result, StepError};
use crate::pattern::PatternKind;
use crate::registry::{StepMatch, StepRegistry};
use crate::selector::Selector;
use crate::table::{StepTable, TableRow};

/// Executes steps against a gesture driver.
pub struct StepInterpreter<D> {
    driver: D,
    registry: StepRegistry,
}

impl<D: GestureDriver> StepInterpreter<D> {
    /// Create an interpreter with the built-in step vocabulary.
    pub fn new(driver: D) -> Self {
        Self::with_registry(driver, StepRegistry::default())
    }

    /// Create an interpreter with a custom pattern registry.
    pub fn with_registry(driver: D, registry: StepRegistry) -> Self {
        Self { driver, registry }
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the interpreter, returning the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Execute one step.
    ///
    /// # Arguments
    /// * `text` - The step text as matched by the runner
    /// * `table` - The step's data table, if one was attached
    ///
    /// # Errors
    /// * `UnknownStep` - no registered pattern matches the text
    /// * `MalformedCount` - the repeat count is not a non-negative integer
    /// * `MissingTable` / `MissingField` - table arguments are incomplete
    /// * `Driver` - the automation driver rejected an action
    pub fn run_step(&self, text: &str, table: Option<&StepTable>) -> Result<()> {
        self.dispatch(text, table, 0)
    }

    /// Dispatch entry point, re-entered by the nested pattern.
    fn dispatch(&self, text: &str, table: Option<&StepTable>, depth: usize) -> Result<()> {
        if depth > MAX_NESTED_STEP_DEPTH {
            return Err(StepError::NestingTooDeep(MAX_NESTED_STEP_DEPTH));
        }

        let matched = self
            .registry
            .find(text)
            .ok_or_else(|| StepError::UnknownStep(text.to_string()))?;

        let count = if matched.kind().has_count() {
            parse_count(matched.capture("count").unwrap_or(""))?
        } else {
            1
        };

        debug!(step = text, pattern = ?matched.kind(), count, depth, "dispatching step");

        match matched.kind() {
            PatternKind::Tap => self.each_row(count, table, PatternKind::Tap, |row| {
                let target = Selector::id(row.require("view")?);
                Ok(self.driver.tap(&target)?)
            }),
            PatternKind::LongTap => self.each_row(count, table, PatternKind::LongTap, |row| {
                let target = Selector::id(row.require("view")?);
                Ok(self.driver.long_press(&target)?)
            }),
            PatternKind::DragAndDrop => {
                self.each_row(count, table, PatternKind::DragAndDrop, |row| {
                    let from = Selector::id(row.require("first_view")?);
                    let to = Selector::id(row.require("second_view")?);
                    Ok(self.driver.drag(
                        &from,
                        &to,
                        DRAG_GESTURE_STEPS,
                        DRAG_HOLD_TIME,
                        DRAG_HANG_TIME,
                    )?)
                })
            }
            PatternKind::Swipe => {
                let target = Selector::id(required_capture(&matched, "view"));
                self.run_iterations(count, PatternKind::Swipe, |_| {
                    self.driver.pan(&target, PanDirection::Left)?;
                    self.driver.pan(&target, PanDirection::Right)?;
                    Ok(())
                })
            }
            PatternKind::PinchAndSpread => {
                let target = Selector::id(required_capture(&matched, "view"));
                self.run_iterations(count, PatternKind::PinchAndSpread, |_| {
                    self.driver.pinch(&target, PinchDirection::In)?;
                    self.driver.pinch(&target, PinchDirection::Out)?;
                    Ok(())
                })
            }
            PatternKind::Nested => {
                let inner = required_capture(&matched, "step").to_string();
                self.run_iterations(count, PatternKind::Nested, |_| {
                    self.dispatch(&inner, None, depth + 1)?;
                    thread::sleep(NESTED_STEP_SETTLE);
                    Ok(())
                })
            }
            PatternKind::TypeText => {
                let text_to_enter = required_capture(&matched, "text").to_string();
                let field = Selector::id(required_capture(&matched, "field"));
                self.run_iterations(count, PatternKind::TypeText, |_| {
                    self.driver.enter_text(&field, &text_to_enter)?;
                    self.driver.clear_text(&field)?;
                    Ok(())
                })
            }
            PatternKind::FindById => self.each_row(count, table, PatternKind::FindById, |row| {
                let target = Selector::id(row.require("view")?);
                Ok(self.driver.query(&target)?)
            }),
            PatternKind::FindByDescription => {
                self.each_row(count, table, PatternKind::FindByDescription, |row| {
                    let target = Selector::description(row.require("view")?);
                    Ok(self.driver.query(&target)?)
                })
            }
            PatternKind::FindByContent => {
                self.each_row(count, table, PatternKind::FindByContent, |row| {
                    let target = Selector::text(row.require("view_content")?);
                    Ok(self.driver.query(&target)?)
                })
            }
            PatternKind::GoBack => self.run_iterations(count, PatternKind::GoBack, |_| {
                Ok(self.driver.press_back()?)
            }),
        }
    }

    /// Run a per-row action template: repeat count outer, rows inner, in
    /// insertion order.
    fn each_row<F>(
        &self,
        count: u32,
        table: Option<&StepTable>,
        kind: PatternKind,
        action: F,
    ) -> Result<()>
    where
        F: Fn(&TableRow) -> Result<()>,
    {
        let table = table.ok_or(StepError::MissingTable(kind.template()))?;
        for iteration in 0..count {
            for row in table.rows() {
                if let Err(e) = action(row) {
                    error!(
                        pattern = kind.template(),
                        iteration,
                        row = row.index(),
                        error = %e,
                        "step aborted"
                    );
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Run the repeat loop, reporting the failing iteration before a
    /// failure propagates.
    fn run_iterations<F>(&self, count: u32, kind: PatternKind, mut body: F) -> Result<()>
    where
        F: FnMut(u32) -> Result<()>,
    {
        for iteration in 0..count {
            if let Err(e) = body(iteration) {
                error!(pattern = kind.template(), iteration, error = %e, "step aborted");
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Validate a captured repeat count.
fn parse_count(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| StepError::MalformedCount(raw.to_string()))
}

/// A capture the pattern's schema guarantees to exist.
fn required_capture<'t>(matched: &'t StepMatch<'_>, name: &str) -> &'t str {
    matched.capture(name).unwrap_or("")
}
