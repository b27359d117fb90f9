use crate::{errors::BoardError, models::Post};
use chrono::Local;
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::mpsc, task::JoinHandle};
use tracing::{error, info, warn};

/// Append-only log of accepted posts.
///
/// `record` only queues the line; a background task owns the file and does
/// the writing, so callers holding the board lock never wait on disk.
pub struct AuditLog {
    tx: Option<mpsc::UnboundedSender<String>>,
}

/// Handle to the task that drains an [`AuditLog`] into its file.
pub struct AuditWriter {
    handle: JoinHandle<()>,
}

impl AuditLog {
    /// Open (or create) the log file in append mode and start its writer.
    pub async fn open(path: impl AsRef<Path>) -> Result<(Self, AuditWriter), BoardError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .await
            .map_err(|source| BoardError::AuditLog {
                path: path.to_path_buf(),
                source,
            })?;

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let handle = tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                if let Err(e) = file.write_all(line.as_bytes()).await {
                    error!("Failed to append to audit log: {}", e);
                    continue;
                }
                if let Err(e) = file.flush().await {
                    error!("Failed to flush audit log: {}", e);
                }
            }
        });

        info!(path = %path.display(), "Audit log opened");

        Ok((Self { tx: Some(tx) }, AuditWriter { handle }))
    }

    pub fn record(&self, post: &Post) {
        let Some(tx) = &self.tx else {
            warn!("Audit log closed, dropping entry for {}", post.name);
            return;
        };

        if tx.send(format_line(post)).is_err() {
            warn!("Audit log writer stopped, dropping entry for {}", post.name);
        }
    }

    /// Stop accepting entries. Queued lines are still written.
    pub fn close(&mut self) {
        self.tx.take();
    }
}

impl AuditWriter {
    /// Wait until every queued line has reached the file.
    pub async fn finish(self) {
        if let Err(e) = self.handle.await {
            error!("Audit log writer failed: {}", e);
        }
    }
}

/// `2006/01/02 15:04:05 name: content`, local time. Always a single line.
fn format_line(post: &Post) -> String {
    format!(
        "{} {}: {}\n",
        post.time.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S"),
        escape_line_breaks(&post.name),
        escape_line_breaks(&post.content)
    )
}

/// Spell out CR and LF so logged text cannot start a new line.
pub fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}
