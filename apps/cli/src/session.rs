//! The stdin-driven session loop, generic over its input and output so it
//! can run against in-memory buffers.

use std::io::Write;

use anyhow::{Context, Result};
use color_core::{ColorStateController, Expired, TimerFacility, TokioTimers};
use shared::protocol::{ColorSnapshot, Intent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub pretty: bool,
    /// Stop as soon as input ends instead of waiting for pending timers.
    pub no_settle: bool,
}

enum SessionEvent {
    Line(Option<String>),
    Timer(Expired),
}

/// Prints the initial snapshot, then one snapshot per state change. Only
/// snapshots are written to `output`; rejected lines are logged.
pub async fn run_session<R, W>(
    controller: &mut ColorStateController<TokioTimers>,
    input: R,
    output: &mut W,
    options: SessionOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let updates = controller.subscribe();
    emit(output, &controller.snapshot(), options.pretty)?;

    let mut lines = input.lines();
    let mut input_open = true;
    loop {
        let event = tokio::select! {
            line = lines.next_line(), if input_open => {
                SessionEvent::Line(line.context("failed to read input")?)
            }
            Some(expired) = controller.next_timer_expiry() => SessionEvent::Timer(expired),
            else => break,
        };

        match event {
            SessionEvent::Line(Some(line)) => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if matches!(line, "quit" | "exit") {
                    break;
                }
                match line.parse::<Intent>() {
                    Ok(intent) => {
                        if !controller.dispatch(intent) {
                            tracing::warn!(line, "intent referenced a missing entry");
                        }
                    }
                    Err(err) => tracing::warn!(line, error = %err, "ignoring unparseable intent"),
                }
            }
            SessionEvent::Line(None) => {
                input_open = false;
                if options.no_settle {
                    break;
                }
            }
            SessionEvent::Timer(expired) => {
                controller.on_timer_expired(expired);
            }
        }

        for snapshot in updates.try_iter() {
            emit(output, &snapshot, options.pretty)?;
        }
        if !input_open && controller.timers().pending_count() == 0 {
            break;
        }
    }

    for snapshot in updates.try_iter() {
        emit(output, &snapshot, options.pretty)?;
    }
    output.flush().context("failed to flush output")?;
    Ok(())
}

pub fn render_snapshot(snapshot: &ColorSnapshot, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    rendered.context("failed to serialize snapshot")
}

fn emit<W: Write>(output: &mut W, snapshot: &ColorSnapshot, pretty: bool) -> Result<()> {
    writeln!(output, "{}", render_snapshot(snapshot, pretty)?).context("failed to write snapshot")
}
