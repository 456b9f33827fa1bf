//! `sync`: run the blocking sync from a terminal.
//!
//! The response body is decoded with [`EventStreamDecoder`] and fed through
//! the same [`SyncController`] the browser uses, so terminal handling is
//! identical: the first `SYNC_ERROR`, completion line or transport failure
//! ends the run and nothing after it is read.

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use feed::{Command, Exit, LogLine, SyncController};
use futures_util::{Stream, StreamExt};
use wire::EventStreamDecoder;

use crate::{CliContext, CliError, SyncArgs, endpoint, ensure_success, http_client};

const MESSAGE_EVENT: &str = "message";

/// Writes log lines the controller has appended since the last call.
#[derive(Default)]
struct LogPrinter {
    printed: usize,
    show_progress: bool,
    last_progress: Option<(u64, Option<u64>)>,
}

impl LogPrinter {
    fn flush<W: Write>(&mut self, controller: &SyncController, out: &mut W) -> Result<(), CliError> {
        let view = controller.view();
        for line in view.log.iter().skip(self.printed) {
            write_line(out, line)?;
        }
        self.printed = view.log.len();

        let progress = (view.progress.value, view.progress.max);
        if self.show_progress && self.last_progress != Some(progress) && progress != (0, None) {
            match progress.1 {
                Some(max) => writeln!(out, "progress {}/{max}", progress.0)?,
                None => writeln!(out, "progress {}", progress.0)?,
            }
        }
        self.last_progress = Some(progress);
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, line: &LogLine) -> Result<(), CliError> {
    writeln!(out, "{}", line.render())?;
    Ok(())
}

/// Carry out `commands`, following any scheduled restore. Returns the exit
/// once the session is over.
async fn apply<W: Write>(
    controller: &mut SyncController,
    commands: Vec<Command>,
    printer: &mut LogPrinter,
    out: &mut W,
) -> Result<Option<Exit>, CliError> {
    printer.flush(controller, out)?;
    let mut queue = VecDeque::from(commands);
    while let Some(command) = queue.pop_front() {
        match command {
            Command::ScheduleRestore(delay) => {
                tokio::time::sleep(delay).await;
                queue.extend(controller.on_restore_timer(Utc::now()));
            }
            Command::CloseChannel => tracing::debug!("closing sync stream"),
            Command::ShowBlocking | Command::OpenChannel | Command::ScrollLog | Command::RestoreUi => {}
            Command::ReloadPage => tracing::debug!("sync complete; a browser would reload here"),
        }
    }
    Ok(if controller.is_active() { None } else { controller.exit() })
}

/// Feed a response body through the controller until the session ends.
///
/// A body that ends, or fails, before a terminal message is a transport
/// failure.
pub(crate) async fn drive<S, B, E, W>(
    controller: &mut SyncController,
    body: S,
    show_progress: bool,
    out: &mut W,
) -> Result<Exit, CliError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
    W: Write,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = EventStreamDecoder::new();
    let mut printer = LogPrinter { show_progress, ..LogPrinter::default() };

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                tracing::warn!(%err, "sync stream read failed");
                break;
            }
        };
        for event in decoder.push(chunk.as_ref()) {
            if event.event != MESSAGE_EVENT {
                tracing::debug!(event = %event.event, "ignoring named event");
                continue;
            }
            let commands = match controller.on_data(&event.data, Utc::now()) {
                Ok(commands) => commands,
                Err(err) => {
                    tracing::warn!(%err, "dropped sync message");
                    continue;
                }
            };
            if let Some(exit) = apply(controller, commands, &mut printer, out).await? {
                return Ok(exit);
            }
        }
    }

    let commands = controller.on_transport_error(Utc::now());
    let exit = apply(controller, commands, &mut printer, out).await?;
    Ok(exit.unwrap_or(Exit::Disconnected))
}

/// Treat a stream that never opened as a transport failure, so the session
/// ends the same way a dropped connection does. Returns `err` for the caller.
async fn abandon<W: Write>(
    controller: &mut SyncController,
    err: CliError,
    printer: &mut LogPrinter,
    out: &mut W,
) -> Result<CliError, CliError> {
    tracing::warn!(%err, "sync stream failed to open");
    let commands = controller.on_transport_error(Utc::now());
    apply(controller, commands, printer, out).await?;
    Ok(err)
}

/// Error text of the last failed line, without the log prefix.
fn failure_text(controller: &SyncController) -> String {
    controller
        .view()
        .log
        .last()
        .map(|line| line.text.trim_start_matches("Sync failed: ").to_owned())
        .unwrap_or_default()
}

pub(crate) async fn run(ctx: &CliContext, args: SyncArgs) -> Result<(), CliError> {
    let url = endpoint(&ctx.base_url, &args.path)?;
    let client = http_client(ctx)?;

    // No page to reload, so there is nothing to wait for after completion.
    let mut controller = SyncController::with_reload_delay(Duration::ZERO);
    let mut stdout = std::io::stdout().lock();
    let mut printer = LogPrinter::default();
    let commands = match controller.start(Utc::now()) {
        Ok(commands) => commands,
        Err(err) => return Err(CliError::SyncFailed(err.to_string())),
    };
    apply(&mut controller, commands, &mut printer, &mut stdout).await?;

    tracing::info!(%url, "opening sync stream");
    let response = client.get(&url).header(reqwest::header::ACCEPT, "text/event-stream").send().await;
    let opened = match response {
        Ok(response) => ensure_success(response).await,
        Err(err) => Err(CliError::from(err)),
    };
    let body = match opened {
        Ok(response) => response.bytes_stream(),
        Err(err) => return Err(abandon(&mut controller, err, &mut printer, &mut stdout).await?),
    };

    match drive(&mut controller, body, args.progress, &mut stdout).await? {
        Exit::Completed => Ok(()),
        Exit::Failed => Err(CliError::SyncFailed(failure_text(&controller))),
        Exit::Disconnected => Err(CliError::StreamEnded),
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;
