//! Table conversion helpers for Gherkin data tables
//!
//! Converts cucumber's raw table rows into the interpreter's
//! [`StepTable`], first row being the header.

use tapkit_steps::StepTable;

/// Convert a Gherkin data table to a step table.
pub fn to_step_table(table: &cucumber::gherkin::Table) -> StepTable {
    StepTable::from_rows(&table.rows)
}
