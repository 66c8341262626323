use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::journal::codec::{decode_journal, encode_journal, parse_rules, parse_trades};
use crate::journal::Journal;
use crate::models::{Rule, Trade};

/// Where a journal is kept between runs.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<Journal>>;
    async fn save(&self, journal: &Journal) -> Result<()>;

    async fn load_or_default(&self) -> Result<Journal> {
        Ok(self.load().await?.unwrap_or_default())
    }
}

/// A journal kept as one pretty-printed JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.journal_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JournalStore for FileStore {
    async fn load(&self) -> Result<Option<Journal>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No journal at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(JournalError::io(&self.path, e)),
        };
        let journal = decode_journal(&content)?;
        info!(
            "Loaded {} day(s) from {}",
            journal.day_count(),
            self.path.display()
        );
        Ok(Some(journal))
    }

    async fn save(&self, journal: &Journal) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| JournalError::io(parent, e))?;
            }
        }
        let json = encode_journal(journal)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| JournalError::io(&self.path, e))?;
        info!(
            "Saved {} day(s) to {}",
            journal.day_count(),
            self.path.display()
        );
        Ok(())
    }
}

/// Keeps the encoded document in memory. Goes through the same codec as
/// `FileStore`, so a load always rehydrates rather than sharing state.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(content: &str) -> Self {
        Self {
            document: Mutex::new(Some(content.to_string())),
        }
    }

    pub async fn document(&self) -> Option<String> {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn load(&self) -> Result<Option<Journal>> {
        match self.document.lock().await.as_deref() {
            Some(content) => Ok(Some(decode_journal(content)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, journal: &Journal) -> Result<()> {
        let json = encode_journal(journal)?;
        *self.document.lock().await = Some(json);
        Ok(())
    }
}

pub async fn read_rules_file(path: &Path) -> Result<Vec<Rule>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| JournalError::io(path, e))?;
    parse_rules(&content)
}

pub async fn read_trades_file(path: &Path) -> Result<Vec<Trade>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| JournalError::io(path, e))?;
    parse_trades(&content)
}
