// src/refresh.rs

use std::process::Stdio;
use tokio::process::Command;
use tracing::warn;

/// Kicks off the external `update_logs` command without waiting for it.
/// The ingester is idempotent, so overlapping runs across concurrent
/// requests are harmless; its output is not consumed.
pub fn trigger(command: Option<&str>) {
    let Some(command) = command else {
        return;
    };
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return;
    };

    let mut cmd = Command::new(program);
    cmd.args(parts).stdout(Stdio::null()).stderr(Stdio::null());
    match cmd.spawn() {
        Ok(mut child) => {
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) if !status.success() => {
                        warn!(%status, "update_logs exited with failure");
                    }
                    Err(err) => warn!(%err, "update_logs did not finish"),
                    Ok(_) => {}
                }
            });
        }
        Err(err) => warn!(%err, "failed to spawn update_logs"),
    }
}
