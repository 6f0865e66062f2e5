//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use std::fmt;
use tapkit_steps::{Action, RecordingDriver, StepError, StepInterpreter, StepTable};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(World)]
#[world(init = Self::new)]
pub struct TapkitWorld {
    /// Interpreter wired to a recording driver
    pub interpreter: StepInterpreter<RecordingDriver>,
    /// Data table staged by a Given step, consumed by the next run
    pub pending_table: Option<StepTable>,
    /// Last execution error (if the step failed)
    pub error: Option<StepError>,
}

impl fmt::Debug for TapkitWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapkitWorld")
            .field("pending_table", &self.pending_table)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field(
                "driver",
                &format!("<{} actions recorded>", self.interpreter.driver().len()),
            )
            .finish()
    }
}

impl Default for TapkitWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TapkitWorld {
    /// Create a new world with a fresh recording driver.
    pub fn new() -> Self {
        Self {
            interpreter: StepInterpreter::new(RecordingDriver::new()),
            pending_table: None,
            error: None,
        }
    }

    /// Run a step against the interpreter, consuming any staged table
    /// and storing the error if execution failed.
    pub fn run(&mut self, text: &str) {
        let table = self.pending_table.take();
        match self.interpreter.run_step(text, table.as_ref()) {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e),
        }
    }

    /// Snapshot of the recorded driver actions.
    pub fn actions(&self) -> Vec<Action> {
        self.interpreter.driver().actions()
    }

    /// Check if the last execution was successful.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get error message if execution failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::TapkitWorld;

    #[test]
    fn test_world_initialization() {
        let world = TapkitWorld::new();
        assert!(world.is_success());
        assert!(world.actions().is_empty());
    }
}
