//! The profile screen: mounts the view model and prints its snapshots.

use crate::error::Result;
use colored::Colorize;
use profile_core::FetchOutcome;
use profile_presenter::{render, LineStyle, ProfileState, ProfileViewModel};
use std::future::Future;
use std::io::Write;
use tracing::{debug, info};

/// How snapshots are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered lines, errors in red when color is enabled
    Text { color: bool },
    /// One JSON object per snapshot
    Json,
}

/// Mount the screen and run until the fetch started on mount finishes.
///
/// Writes the current snapshot, starts exactly one fetch, then writes every
/// new snapshot until an outcome arrives. If `shutdown` completes first the
/// fetch is cancelled and [`PresenterError::Cancelled`] is returned.
///
/// [`PresenterError::Cancelled`]: profile_presenter::PresenterError::Cancelled
pub async fn mount<W, F>(
    view_model: &ProfileViewModel,
    out: &mut W,
    format: OutputFormat,
    shutdown: F,
) -> Result<FetchOutcome>
where
    W: Write,
    F: Future<Output = ()>,
{
    let mut snapshots = view_model.subscribe();
    let initial = snapshots.borrow_and_update().clone();
    write_state(out, &initial, format)?;

    let handle = view_model.start_fetch();
    info!(fetch_id = %handle.id(), "Screen mounted");

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = snapshots.borrow_and_update().clone();
                debug!(phase = ?state.phase(), "Rendering snapshot");
                write_state(out, &state, format)?;
                if !state.is_pending() {
                    break;
                }
            }
            () = &mut shutdown => {
                info!(fetch_id = %handle.id(), "Interrupted, cancelling fetch");
                handle.cancel();
                break;
            }
        }
    }

    Ok(handle.wait().await?)
}

/// Write one snapshot.
pub fn write_state<W: Write>(out: &mut W, state: &ProfileState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, state)?;
            writeln!(out)?;
        }
        OutputFormat::Text { color } => {
            for line in render(state) {
                match line.style {
                    LineStyle::Error if color => writeln!(out, "{}", line.text.red())?,
                    _ => writeln!(out, "{}", line.text)?,
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_presenter::FAILED_TO_LOAD;

    #[test]
    fn test_write_state_text_without_color() {
        let mut out = Vec::new();
        write_state(
            &mut out,
            &ProfileState::failed(FAILED_TO_LOAD),
            OutputFormat::Text { color: false },
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Failed to load user data!\n");
    }

    #[test]
    fn test_write_state_json_line() {
        let mut out = Vec::new();
        write_state(&mut out, &ProfileState::pending(), OutputFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"profile\":null,\"error_message\":null}\n");
    }
}
