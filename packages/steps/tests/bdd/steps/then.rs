//! Then step definitions
//!
//! Steps that verify the recorded driver log and error outcomes.

use cucumber::then;

use crate::world::TapkitWorld;

#[then(regex = r"^the driver performs (\d+) actions?$")]
fn assert_action_count(world: &mut TapkitWorld, expected: String) {
    assert!(
        world.is_success(),
        "Expected successful execution, got error: {:?}",
        world.error_message()
    );

    let expected: usize = expected
        .parse()
        .unwrap_or_else(|_| panic!("Invalid action count: {}", expected));
    let actual = world.actions().len();
    assert_eq!(
        actual, expected,
        "Expected {} driver actions, got {}",
        expected, actual
    );
}

#[then(regex = r#"^action (\d+) is ([a-z-]+) on "([^"]*)"$"#)]
fn assert_action_at(world: &mut TapkitWorld, index: String, label: String, target: String) {
    let index: usize = index
        .parse()
        .unwrap_or_else(|_| panic!("Invalid action index: {}", index));
    assert!(index >= 1, "Action indices are 1-based");

    let actions = world.actions();
    let action = actions
        .get(index - 1)
        .unwrap_or_else(|| panic!("No action at position {} (have {})", index, actions.len()));

    assert_eq!(
        action.label(),
        label,
        "Expected action {} to be {}, got {}",
        index,
        label,
        action.label()
    );

    let actual_target = action.target().map(ToString::to_string);
    assert_eq!(
        actual_target.as_deref(),
        Some(target.as_str()),
        "Expected action {} to target {}, got {:?}",
        index,
        target,
        actual_target
    );
}

#[then(regex = r"^every action is ([a-z-]+)$")]
fn assert_all_actions_are(world: &mut TapkitWorld, label: String) {
    assert!(
        world.is_success(),
        "Expected successful execution, got error: {:?}",
        world.error_message()
    );

    for (i, action) in world.actions().iter().enumerate() {
        assert_eq!(
            action.label(),
            label,
            "Expected action {} to be {}, got {}",
            i + 1,
            label,
            action.label()
        );
    }
}

#[then(regex = r#"^the step fails with "([^"]*)"$"#)]
fn assert_failure_message(world: &mut TapkitWorld, expected: String) {
    let message = world
        .error_message()
        .unwrap_or_else(|| panic!("Expected the step to fail, but it succeeded"));
    assert!(
        message.contains(&expected),
        "Expected error containing '{}', got '{}'",
        expected,
        message
    );
}

#[then("no actions reach the driver")]
fn assert_no_actions(world: &mut TapkitWorld) {
    let actions = world.actions();
    assert!(
        actions.is_empty(),
        "Expected no driver actions, got {}",
        actions.len()
    );
}
