use async_trait::async_trait;
use bytes::Bytes;
use bypass_dns_application::ports::{BanListStore, UpstreamAnswer, UpstreamExchange};
use bypass_dns_domain::{DnsQuery, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory ban list with the same substring-containment semantics as the
/// file-backed store.
pub struct MockBanList {
    raw: String,
    reloads: AtomicUsize,
}

impl MockBanList {
    pub fn with_lines(lines: &[&str]) -> Self {
        let mut raw = String::new();
        for line in lines {
            raw.push_str(line);
            raw.push('\n');
        }
        Self {
            raw,
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::with_lines(&[])
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BanListStore for MockBanList {
    fn contains(&self, domain: &str) -> bool {
        self.raw.contains(domain)
    }

    async fn reload(&self) -> Result<bool, DomainError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}

/// Exchange stub that always answers with fixed wire bytes.
pub struct MockExchange {
    answer: Bytes,
    calls: AtomicUsize,
}

impl MockExchange {
    pub fn answering(wire: &[u8]) -> Self {
        Self {
            answer: Bytes::copy_from_slice(wire),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamExchange for MockExchange {
    async fn exchange(&self, _query: &DnsQuery) -> Result<UpstreamAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(UpstreamAnswer::new(self.answer.clone()))
    }
}

/// Exchange stub that always fails, as if the resolver were unreachable.
pub struct FailingExchange {
    calls: AtomicUsize,
}

impl FailingExchange {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FailingExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamExchange for FailingExchange {
    async fn exchange(&self, _query: &DnsQuery) -> Result<UpstreamAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::ExchangeFailed("connection refused".to_string()))
    }
}
