use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::entities::health_record::HealthCheckRecord;
use crate::domain::ports::sink::{RecordSink, SinkError};

const DEFAULT_DATA_DIR: &str = "~/.local/share/pulsewatch";
const RULE: &str = "===============================";
const ENTRY_SEPARATOR: &str = "----------------------------------------";

/// Keeps one human-readable text file per target under `data_dir`.
pub struct TextFileSink {
    data_dir: PathBuf,
}

impl TextFileSink {
    #[must_use]
    pub fn new(data_dir: &str) -> Self {
        let expanded = shellexpand::tilde(data_dir);
        Self {
            data_dir: PathBuf::from(expanded.as_ref()),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding the history of the target called `name`.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", sanitize_file_name(name)))
    }

    fn ensure_data_dir(&self) -> Result<(), SinkError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| SinkError::Io(format!("cannot create data directory: {e}")))
    }

    fn write_header(&self, path: &Path, name: &str, url: &str) -> Result<(), SinkError> {
        let header = format!(
            "Website Health Monitor - Status Log\n{RULE}\nWebsite Name: {name}\nURL: {url}\nCreated: {}\n\n{RULE}\nHealth Check Logs:\n{RULE}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        std::fs::write(path, header)
            .map_err(|e| SinkError::Io(format!("cannot write {}: {e}", path.display())))
    }
}

impl Default for TextFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl RecordSink for TextFileSink {
    fn open(&self, name: &str, url: &str) -> Result<(), SinkError> {
        self.ensure_data_dir()?;
        self.write_header(&self.file_path(name), name, url)
    }

    fn append(&self, name: &str, record: &HealthCheckRecord) -> Result<(), SinkError> {
        self.ensure_data_dir()?;
        let path = self.file_path(name);
        if !path.exists() {
            self.write_header(&path, name, record.url())?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SinkError::Io(format!("cannot open {}: {e}", path.display())))?;

        let health = if record.is_healthy() {
            "Healthy"
        } else {
            "Unhealthy"
        };
        write!(
            file,
            "[{}]\nStatus Code: {}\nHealth Status: {health}\nURL: {}\n{ENTRY_SEPARATOR}\n\n",
            record.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
            record.status_code(),
            record.url(),
        )
        .map_err(|e| SinkError::Io(format!("cannot append to {}: {e}", path.display())))
    }
}

/// Lowercases `name` and replaces anything outside `[a-z0-9]` with `_`.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
