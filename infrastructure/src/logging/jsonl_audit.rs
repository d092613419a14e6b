//! JSONL file writer for audit entries.
//!
//! Each [`AuditEntry`] is serialized as a single JSON line with a `type`
//! field (`"<kind>.<action>"`) and an RFC3339 `timestamp`, appended to the
//! file via a buffered writer. Existing content is kept across restarts.

use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use steward_application::{AuditError, AuditLog};
use steward_domain::AuditEntry;
use tracing::warn;

/// JSONL audit log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every entry and on `Drop`.
pub struct JsonlAuditLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAuditLog {
    /// Open (or create) the audit file at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened for appending.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the audit file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_line(entry: &AuditEntry) -> Result<String, AuditError> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge the entry with type + timestamp
        let record = match serde_json::to_value(entry)? {
            Value::Object(mut map) => {
                map.insert("type".to_string(), Value::String(entry.event_type()));
                map.insert("timestamp".to_string(), Value::String(timestamp));
                Value::Object(map)
            }
            other => serde_json::json!({
                "type": entry.event_type(),
                "timestamp": timestamp,
                "data": other,
            }),
        };

        Ok(serde_json::to_string(&record)?)
    }
}

impl AuditLog for JsonlAuditLog {
    fn append(&self, entry: AuditEntry) -> Result<(), AuditError> {
        let line = Self::to_line(&entry)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| AuditError::Unavailable("audit writer lock poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        // JSONL is append-only; flush every entry for crash safety
        writer.flush()?;
        Ok(())
    }

    fn entries_for(&self, subject_id: &str) -> Result<Vec<AuditEntry>, AuditError> {
        // Hold the writer while reading so no half-written line is observed
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| AuditError::Unavailable("audit writer lock poisoned".to_string()))?;
        writer.flush()?;

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) if entry.subject_id == subject_id => entries.push(entry),
                Ok(_) => {}
                Err(e) => warn!(
                    "Skipping malformed audit line {} in {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(entries)
    }
}

impl Drop for JsonlAuditLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
