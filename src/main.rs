//! Headless replay: reads editor events as JSON lines on stdin, applies them
//! to a fresh session, and prints each resulting action list as a JSON line.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use text_styler::config::EditorConfig;
use text_styler::editor::EditorCore;
use text_styler::input::EditorEvent;
use text_styler::web::actions_json;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "invalid editor config");
            return ExitCode::FAILURE;
        }
    };

    let mut core = EditorCore::new(config);
    tracing::info!(session = %core.id(), "replay started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut failed = 0_usize;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event: EditorEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping malformed event");
                failed += 1;
                continue;
            }
        };

        let actions = match core.handle(event) {
            Ok(actions) => actions,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, code = e.error_code(), "event rejected");
                failed += 1;
                continue;
            }
        };

        let written = actions_json(&actions)
            .map_err(io::Error::from)
            .and_then(|json| writeln!(stdout, "{json}"));
        if let Err(e) = written {
            tracing::error!(error = %e, "stdout write failed");
            return ExitCode::FAILURE;
        }
    }

    let snapshot = core.snapshot();
    let position = core.position();
    tracing::info!(
        text = %snapshot.text,
        style = %snapshot.style,
        x = position.x,
        y = position.y,
        entries = core.history().len(),
        failed,
        "replay finished"
    );
    ExitCode::SUCCESS
}
