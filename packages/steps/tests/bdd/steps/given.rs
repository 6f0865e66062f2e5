//! Given step definitions
//!
//! Steps that stage data tables for the next interpreter run.

use cucumber::{gherkin::Step, given};

use crate::helpers::tables::to_step_table;
use crate::world::TapkitWorld;

#[given("the step table:")]
fn set_step_table(world: &mut TapkitWorld, step: &Step) {
    if let Some(table) = &step.table {
        world.pending_table = Some(to_step_table(table));
    }
}

#[given("the following views:")]
fn set_views_table(world: &mut TapkitWorld, step: &Step) {
    if let Some(table) = &step.table {
        world.pending_table = Some(to_step_table(table));
    }
}
