use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Count and share of one transaction type within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub name: String,
    pub value: u64,
    /// Share of the block total, two decimal places with a trailing `%`.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: u64,
}

/// Chart-ready aggregates over one block's transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAnalysis {
    #[serde(rename = "transactionTypes")]
    pub transaction_types: Vec<TypeCount>,
    #[serde(rename = "topSenders")]
    pub top_senders: Vec<SenderCount>,
}

const TOP_SENDERS_LIMIT: usize = 5;

/// Aggregates a block's transactions into a type distribution and the top
/// five senders by transaction count.
///
/// Pure and total: the input is scanned once and never mutated, entries keep
/// first-seen order, and a transaction with an empty type or sender is
/// counted under the empty-string key rather than dropped. Empty input
/// yields empty aggregates (the percentage division is skipped entirely).
pub fn analyze_transactions(transactions: &[Transaction]) -> BlockAnalysis {
    let mut type_counts = FirstSeenCounter::new();
    let mut sender_counts = FirstSeenCounter::new();

    for tx in transactions {
        type_counts.increment(&tx.tx_type);
        sender_counts.increment(&tx.sender);
    }

    let total = transactions.len() as u64;

    let transaction_types = type_counts
        .into_entries()
        .into_iter()
        .map(|(name, value)| TypeCount {
            percentage: format_percentage(value, total),
            name,
            value,
        })
        .collect();

    let mut top_senders: Vec<SenderCount> = sender_counts
        .into_entries()
        .into_iter()
        .map(|(sender, count)| SenderCount { sender, count })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    top_senders.sort_by(|a, b| b.count.cmp(&a.count));
    top_senders.truncate(TOP_SENDERS_LIMIT);

    BlockAnalysis {
        transaction_types,
        top_senders,
    }
}

/// Naive two-decimal rounding, not reconciled against a 100% total. The
/// per-entry error stays within 0.005%.
fn format_percentage(count: u64, total: u64) -> String {
    format!("{:.2}%", (count as f64 / total as f64) * 100.0)
}

/// Occurrence counter that remembers the order in which keys first appeared.
struct FirstSeenCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FirstSeenCounter {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}
