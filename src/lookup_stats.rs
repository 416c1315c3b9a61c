use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy)]
pub enum LookupKind {
    Block,
    Transaction,
    Asset,
}

/// Process-wide counters for lookups served against the indexer.
#[derive(Debug, Default)]
pub struct LookupStats {
    blocks: AtomicU64,
    transactions: AtomicU64,
    assets: AtomicU64,
}

impl LookupStats {
    pub const fn new() -> Self {
        Self {
            blocks: AtomicU64::new(0),
            transactions: AtomicU64::new(0),
            assets: AtomicU64::new(0),
        }
    }

    pub fn record(&self, kind: LookupKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }

    fn counter(&self, kind: LookupKind) -> &AtomicU64 {
        match kind {
            LookupKind::Block => &self.blocks,
            LookupKind::Transaction => &self.transactions,
            LookupKind::Asset => &self.assets,
        }
    }

    pub fn snapshot(&self) -> LookupSnapshot {
        LookupSnapshot {
            blocks: self.blocks.load(Ordering::Relaxed),
            transactions: self.transactions.load(Ordering::Relaxed),
            assets: self.assets.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LookupSnapshot {
    pub blocks: u64,
    pub transactions: u64,
    pub assets: u64,
}

pub static LOOKUP_STATS: LookupStats = LookupStats::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_lookups() {
        let stats = LookupStats::new();
        stats.record(LookupKind::Block);
        stats.record(LookupKind::Block);
        stats.record(LookupKind::Transaction);
        stats.record(LookupKind::Asset);
        let snap = stats.snapshot();
        assert_eq!(snap.blocks, 2);
        assert_eq!(snap.transactions, 1);
        assert_eq!(snap.assets, 1);
    }
}
