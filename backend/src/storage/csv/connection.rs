use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// CsvConnection manages the data directory the ledger file lives in.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory:
    /// `~/Documents/Mera Khata`, falling back to the home directory when no
    /// Documents folder exists.
    pub fn new_default() -> Result<Self> {
        let parent = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("could not determine a data directory"))?;
        let data_dir = parent.join("Mera Khata");
        info!("using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Path of the single ledger file.
    pub fn ledger_file_path(&self) -> PathBuf {
        self.base_directory.join("ledger.csv")
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
