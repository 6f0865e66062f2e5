//! tapkit step interpreter
//!
//! Translates Cucumber-style gesture steps ("I tap <view> for N times")
//! into ordered calls against a mobile UI-automation driver. This crate
//! owns the step vocabulary, the pattern registry, and the repeat/table
//! execution shape; device communication, element resolution, and touch
//! injection belong to the driver implementation behind the
//! [`GestureDriver`] seam.
//!
//! # Example
//!
//! ```
//! use tapkit_steps::{RecordingDriver, StepInterpreter, StepTable};
//!
//! let interpreter = StepInterpreter::new(RecordingDriver::new());
//!
//! let views = StepTable::from_rows(&[
//!     vec!["view".to_string()],
//!     vec!["button_1".to_string()],
//!     vec!["button_2".to_string()],
//! ]);
//! interpreter.run_step("I tap <view> for 3 times", Some(&views))?;
//!
//! assert_eq!(interpreter.driver().len(), 6);
//! # Ok::<(), tapkit_steps::StepError>(())
//! ```

pub mod action;
pub mod config;
pub mod driver;
pub mod error;
pub mod interpreter;
pub mod pattern;
pub mod registry;
pub mod selector;
pub mod table;

// Re-export commonly used items
pub use action::{Action, PanDirection, PinchDirection};
pub use driver::{DriverError, DriverResult, GestureDriver, RecordingDriver};
pub use error::{Result, StepError};
pub use interpreter::StepInterpreter;
pub use pattern::{PatternKind, StepPattern};
pub use registry::{StepMatch, StepRegistry};
pub use selector::{Selector, SelectorAttribute};
pub use table::{StepTable, TableRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
