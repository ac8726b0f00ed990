use csv::{Reader, ReaderBuilder, Trim};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::backend::storage::traits::DataLoadError;

pub const DEFAULT_SCHEDULE_FILE: &str = "일정.csv";
pub const DEFAULT_TRADES_FILE: &str = "매매.csv";

/// CsvConnection resolves worksheet file paths inside the data directory
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    schedule_file: String,
    trades_file: String,
}

impl CsvConnection {
    /// Create a connection using the default worksheet file names
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self::with_file_names(base_directory, DEFAULT_SCHEDULE_FILE, DEFAULT_TRADES_FILE)
    }

    pub fn with_file_names<P: AsRef<Path>>(
        base_directory: P,
        schedule_file: &str,
        trades_file: &str,
    ) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
            schedule_file: schedule_file.to_string(),
            trades_file: trades_file.to_string(),
        }
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn schedule_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.schedule_file)
    }

    pub fn trades_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.trades_file)
    }

    /// Open a worksheet export for reading with its header row
    pub fn open_reader(&self, path: &Path) -> Result<Reader<BufReader<File>>, DataLoadError> {
        debug!("Opening worksheet {}", path.display());
        let file = File::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DataLoadError::NotFound(path.to_path_buf())
            } else {
                DataLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(BufReader::new(file)))
    }
}
