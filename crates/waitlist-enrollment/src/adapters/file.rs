//! JSON Lines file `WaitlistStore` adapter

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::{duplicate_emails, NewWaitlistEntry, WaitlistEntry};
use crate::error::StoreError;
use crate::ports::WaitlistStore;

/// File-backed waitlist store.
///
/// Persists entries as JSON Lines, one serialized `WaitlistEntry` per line.
/// The whole file is loaded at open; inserts append a line and sync it before
/// returning. A failed append is rolled back, and a torn last line left by a
/// crash is dropped at open. Suitable for a single process.
pub struct FileBackedWaitlistStore {
    entries: Mutex<Vec<WaitlistEntry>>,
    path: PathBuf,
}

impl FileBackedWaitlistStore {
    /// Open the store at `path`, loading any existing entries.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path).await {
            Ok(contents) => {
                let contents = Self::repair_tail(&path, contents).await?;
                Self::parse(&contents)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No existing waitlist file");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        if !entries.is_empty() {
            tracing::info!(
                path = %path.display(),
                entries = entries.len(),
                "Loaded waitlist entries"
            );
        }

        let duplicates = duplicate_emails(&entries);
        if !duplicates.is_empty() {
            tracing::warn!(
                path = %path.display(),
                duplicates = ?duplicates,
                "Waitlist file holds duplicate emails"
            );
        }

        Ok(Self {
            entries: Mutex::new(entries),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    fn parse(contents: &str) -> Result<Vec<WaitlistEntry>, StoreError> {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    StoreError::Serialization(format!("line {}: {}", i + 1, e))
                })
            })
            .collect()
    }

    /// Make the file end on a line boundary.
    ///
    /// A complete entry missing only its newline gets one; any other unterminated
    /// tail is a partial write and is cut off.
    async fn repair_tail(path: &Path, mut contents: String) -> Result<String, StoreError> {
        if contents.is_empty() || contents.ends_with('\n') {
            return Ok(contents);
        }

        let tail_start = contents.rfind('\n').map_or(0, |i| i + 1);
        let tail = &contents[tail_start..];

        if tail.trim().is_empty() || serde_json::from_str::<WaitlistEntry>(tail).is_ok() {
            let mut file = OpenOptions::new().append(true).open(path).await?;
            file.write_all(b"\n").await?;
            file.sync_data().await?;
            contents.push('\n');
        } else {
            tracing::warn!(
                path = %path.display(),
                dropped_bytes = tail.len(),
                "Dropping torn last line of waitlist file"
            );
            let file = OpenOptions::new().write(true).open(path).await?;
            file.set_len(tail_start as u64).await?;
            file.sync_data().await?;
            contents.truncate(tail_start);
        }

        Ok(contents)
    }

    async fn append(&self, entry: &WaitlistEntry) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        let len = file.metadata().await?.len();

        let written = async {
            file.write_all(&line).await?;
            file.sync_data().await
        }
        .await;

        truncate_on_error(&file, len, written).await
    }
}

/// Cut `file` back to `len` when `result` is an error, so a partial line never stays behind.
async fn truncate_on_error<T>(
    file: &File,
    len: u64,
    result: io::Result<T>,
) -> Result<T, StoreError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(rollback) = file.set_len(len).await {
                tracing::warn!(error = %rollback, len, "Failed to roll back partial append");
            }
            Err(e.into())
        }
    }
}

#[async_trait]
impl WaitlistStore for FileBackedWaitlistStore {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().filter(|e| e.email == email).cloned().collect())
    }

    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        // Held across the append so memory never runs ahead of the file
        let mut entries = self.entries.lock().await;

        let entry = entry.into_entry();
        self.append(&entry).await?;
        entries.push(entry.clone());

        Ok(entry)
    }
}
