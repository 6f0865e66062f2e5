//! When step definitions
//!
//! Steps that run interpreter dispatch.

use cucumber::{gherkin::Step, when};

use crate::helpers::tables::to_step_table;
use crate::world::TapkitWorld;

#[when(regex = r"^I run the step: (.+)$")]
fn run_step(world: &mut TapkitWorld, step: &Step, text: String) {
    // A table attached to this step overrides any staged table
    if let Some(table) = &step.table {
        world.pending_table = Some(to_step_table(table));
    }
    world.run(&text);
}
