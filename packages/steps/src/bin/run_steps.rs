//! CLI binary for dry-running steps via stdin.
//!
//! Usage:
//!   echo '{"steps": [{"text": "I go back"}]}' | cargo run --bin run-steps
//!
//! Input (JSON on stdin):
//!   - steps: Array — steps to execute, in order
//!     - text: String — the step text, e.g. "I tap <view> for 2 times"
//!     - table: Optional<Array<Array<String>>> — data table, first row
//!       being the header
//!
//! Output (JSON on stdout):
//!   - actions: Array — the driver invocations the steps produced
//!   - error: Optional<String> — error message if a step failed; actions
//!     dispatched before the failure are still reported

use std::io::Read;

use tapkit_steps::{RecordingDriver, StepInterpreter, StepTable};

#[derive(serde::Deserialize)]
struct StepRequest {
    text: String,
    #[serde(default)]
    table: Option<Vec<Vec<String>>>,
}

#[derive(serde::Deserialize)]
struct RunRequest {
    steps: Vec<StepRequest>,
}

#[derive(serde::Serialize)]
struct RunResponse {
    actions: Vec<tapkit_steps::Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run(request: RunRequest) -> RunResponse {
    let interpreter = StepInterpreter::new(RecordingDriver::new());

    let mut error = None;
    for step in &request.steps {
        let table = step.table.as_deref().map(StepTable::from_rows);
        if let Err(e) = interpreter.run_step(&step.text, table.as_ref()) {
            error = Some(format!("step '{}' failed: {}", step.text, e));
            break;
        }
    }

    RunResponse {
        actions: interpreter.driver().actions(),
        error,
    }
}

fn main() {
    let mut input = String::new();
    let response = match std::io::stdin().read_to_string(&mut input) {
        Ok(_) => match serde_json::from_str::<RunRequest>(&input) {
            Ok(request) => run(request),
            Err(e) => RunResponse {
                actions: Vec::new(),
                error: Some(format!("invalid request: {}", e)),
            },
        },
        Err(e) => RunResponse {
            actions: Vec::new(),
            error: Some(format!("failed to read stdin: {}", e)),
        },
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize response: {}", e),
    }
}
