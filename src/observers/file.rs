//! # File writer observer.
//!
//! [`FileWriter`] persists each flushed block to its own log file, one
//! command label per line. The file is named after the moment the block
//! *started*: the writer captures a unix-seconds stamp at the first
//! `on_command` following a flush (the [`Observe`] ordering contract makes
//! this the block's first append) and names the artifact `bulk<stamp>.log`.
//!
//! ## Artifact layout
//! ```text
//! <dir>/bulk1735689600.log:
//!   cmd1
//!   cmd2
//! ```
//!
//! I/O failures are reported via `tracing::warn!` and swallowed: an observer
//! must never interrupt the fan-out. A flush arriving with no captured stamp
//! would violate the core's ordering contract; it is reported via
//! `tracing::error!` and the emission is skipped.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{error, warn};

use crate::commands::Block;
use crate::observers::Observe;

/// Observer that writes each flushed block to `bulk<stamp>.log`.
///
/// Enabled via the `logging` feature. The stamp is the unix time (seconds)
/// of the block's first command.
pub struct FileWriter {
    dir: PathBuf,
    session_start: Option<i64>,
}

impl FileWriter {
    /// Creates a writer emitting into `dir`.
    ///
    /// The directory is not created or checked here; a missing directory
    /// surfaces as a warning at flush time.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            session_start: None,
        }
    }

    fn artifact_path(&self, stamp: i64) -> PathBuf {
        self.dir.join(format!("bulk{stamp}.log"))
    }
}

impl Observe for FileWriter {
    fn on_command(&mut self, _block: &Block) {
        if self.session_start.is_none() {
            self.session_start = Some(Utc::now().timestamp());
        }
    }

    fn on_flush(&mut self, block: &Block) {
        let Some(stamp) = self.session_start.take() else {
            error!(observer = self.name(), "flush without a preceding command; skipping emission");
            return;
        };

        let path = self.artifact_path(stamp);
        let mut out = String::new();
        for label in block.labels() {
            out.push_str(label);
            out.push('\n');
        }

        if let Err(err) = fs::File::create(&path).and_then(|mut f| f.write_all(out.as_bytes())) {
            warn!(observer = self.name(), path = %path.display(), %err, "failed to write bulk log");
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bulkline-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_artifact_name_embeds_stamp() {
        let writer = FileWriter::new("/var/log/bulks");
        assert_eq!(
            writer.artifact_path(1735689600),
            PathBuf::from("/var/log/bulks/bulk1735689600.log")
        );
    }

    #[test]
    fn test_flush_writes_one_label_per_line() {
        let dir = scratch_dir("flush");
        let mut writer = FileWriter::new(&dir);

        let mut block = Block::new();
        block.push(Command::new("cmd1"));
        writer.on_command(&block);
        block.push(Command::new("cmd2"));
        writer.on_command(&block);

        let stamp = writer.session_start.expect("stamp captured on first add");
        writer.on_flush(&block);

        let written = fs::read_to_string(dir.join(format!("bulk{stamp}.log"))).unwrap();
        assert_eq!(written, "cmd1\ncmd2\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_stamp_resets_after_flush() {
        let dir = scratch_dir("reset");
        let mut writer = FileWriter::new(&dir);

        let mut block = Block::new();
        block.push(Command::new("a"));
        writer.on_command(&block);
        writer.on_flush(&block);
        assert!(
            writer.session_start.is_none(),
            "next block must capture a fresh stamp"
        );
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_flush_without_stamp_skips_emission() {
        let dir = scratch_dir("nostamp");
        let mut writer = FileWriter::new(&dir);

        let mut block = Block::new();
        block.push(Command::new("orphan"));
        writer.on_flush(&block);

        assert_eq!(
            fs::read_dir(&dir).unwrap().count(),
            0,
            "no artifact may be written without a session stamp"
        );
        fs::remove_dir_all(&dir).ok();
    }
}
