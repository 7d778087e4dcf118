use async_trait::async_trait;
use bypass_dns_domain::DomainError;

/// Application-layer port for the ban list store.
///
/// The hot-path method (`contains`) is synchronous: the list lives in
/// memory behind a read lock. Only `reload` is async because it touches the
/// filesystem.
#[async_trait]
pub trait BanListStore: Send + Sync {
    /// Whether `domain` (no trailing root dot) is on the ban list.
    ///
    /// Matching is substring containment over the raw list blob, not
    /// per-line equality, and is case-sensitive.
    fn contains(&self, domain: &str) -> bool;

    /// Re-read the backing file if its modification time or size changed.
    ///
    /// Returns `Ok(true)` when a new snapshot was installed, `Ok(false)`
    /// when the file was unchanged. On error the previous snapshot stays in
    /// effect; callers log and carry on. A broken or missing list file must
    /// never take the query path down.
    async fn reload(&self) -> Result<bool, DomainError>;
}
