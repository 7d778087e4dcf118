use async_trait::async_trait;
use bypass_dns_application::ports::BanListStore;
use bypass_dns_domain::DomainError;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;
use tracing::{debug, info};

#[derive(Default)]
struct Snapshot {
    /// The whole list file, one `\n` after every line (including the last).
    /// Queried as a substring-search corpus, never parsed into entries.
    raw: String,
    /// Stat values observed at the last successful load.
    mtime: Option<SystemTime>,
    size: u64,
}

/// File-backed ban list.
///
/// The snapshot is guarded by a single read/write lock: query handlers take
/// the read side in [`FileBanList::contains`], the reload task takes the
/// write side for the brief swap in [`FileBanList::reload`]. The lock never
/// leaks out of this type.
///
/// Starts empty; the caller performs the first load explicitly so that a
/// missing file delays nothing at startup.
pub struct FileBanList {
    path: PathBuf,
    state: RwLock<Snapshot>,
}

impl FileBanList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(Snapshot::default()),
        }
    }
}

#[async_trait]
impl BanListStore for FileBanList {
    /// Substring containment over the raw blob, not line-exact matching: a
    /// query name that happens to be a substring of a longer listed name
    /// also matches. Kept for parity with deployed behavior; switching to
    /// per-line or suffix-label matching would change what gets bypassed.
    fn contains(&self, domain: &str) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.raw.contains(domain)
    }

    /// Staleness-checked reload. Not safe to call concurrently with itself;
    /// the single reload job plus the one startup call serialize naturally.
    async fn reload(&self) -> Result<bool, DomainError> {
        let meta = tokio::fs::metadata(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("stat {}: {}", self.path.display(), e))
        })?;
        let mtime = meta.modified().map_err(|e| {
            DomainError::IoError(format!("mtime of {}: {}", self.path.display(), e))
        })?;
        let size = meta.len();

        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if state.mtime == Some(mtime) && state.size == size {
                debug!(path = %self.path.display(), "ban list unchanged");
                return Ok(false);
            }
        }

        // Read outside the lock; queries only wait for the swap below.
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("read {}: {}", self.path.display(), e))
        })?;

        let mut raw = String::with_capacity(text.len() + 1);
        for line in text.lines() {
            raw.push_str(line);
            raw.push('\n');
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.raw = raw;
        state.mtime = Some(mtime);
        state.size = size;

        info!(path = %self.path.display(), bytes = state.raw.len(), "ban list loaded");
        Ok(true)
    }
}
