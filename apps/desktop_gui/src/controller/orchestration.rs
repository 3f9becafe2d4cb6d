//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI thread. On failure the reason is
/// written to `status` and `false` is returned.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dispatch_backend_command;
    use crate::backend_bridge::commands::BackendCommand;
    use crossbeam_channel::bounded;

    #[test]
    fn reports_full_queue_in_status() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&cmd_tx, BackendCommand::ListKatas, &mut status));
        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::ListKatas, &mut status));
        assert!(status.contains("queue is full"));
    }

    #[test]
    fn reports_disconnected_backend_in_status() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::ListKatas, &mut status));
        assert!(status.contains("disconnected"));
    }
}
