//! Request counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    contacts_created: AtomicU64,
    lookups_hit: AtomicU64,
    lookups_missed: AtomicU64,
    requests_rejected: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_created(&self) {
        self.contacts_created.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "contacts_created", "Metric incremented");
    }

    pub fn lookup_hit(&self) {
        self.lookups_hit.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "lookups_hit", "Metric incremented");
    }

    pub fn lookup_missed(&self) {
        self.lookups_missed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "lookups_missed", "Metric incremented");
    }

    /// Any request answered with an error body
    pub fn request_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "requests_rejected", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            contacts_created: self.contacts_created.load(Ordering::Relaxed),
            lookups_hit: self.lookups_hit.load(Ordering::Relaxed),
            lookups_missed: self.lookups_missed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub contacts_created: u64,
    pub lookups_hit: u64,
    pub lookups_missed: u64,
    pub requests_rejected: u64,
}
