//! Label callbacks for transaction and cell glyphs.

use crate::capacity::{Capacity, format_capacity};
use crate::model::CellInfo;

pub type TransactionLabelFn = Box<dyn Fn(&str) -> String + Send + Sync>;
pub type CellLabelFn = Box<dyn Fn(&CellInfo) -> String + Send + Sync>;

/// Label text for a transaction root: the raw hash.
pub fn default_transaction_label(tx_hash: &str) -> String {
    tx_hash.to_string()
}

/// Label text for a cell: its capacity in CKB.
///
/// Falls back to the raw capacity string if it does not parse; the emitter
/// validates capacities before asking for labels, so this only matters for
/// callers using the function directly.
pub fn default_cell_label(cell: &CellInfo) -> String {
    match Capacity::parse(&cell.capacity) {
        Ok(capacity) => format_capacity(&capacity),
        Err(_) => cell.capacity.clone(),
    }
}

/// Keep the first `start` and last `end` characters around an ellipsis.
pub fn truncate_middle(s: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= start + end + 3 {
        return s.to_string();
    }
    let head: String = chars[..start].iter().collect();
    let tail: String = chars[chars.len() - end..].iter().collect();
    format!("{head}...{tail}")
}

/// The pair of label callbacks used by one render.
pub struct Labels {
    transaction: TransactionLabelFn,
    cell: CellLabelFn,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            transaction: Box::new(default_transaction_label),
            cell: Box::new(default_cell_label),
        }
    }
}

impl Labels {
    pub fn with_transaction(mut self, f: TransactionLabelFn) -> Self {
        self.transaction = f;
        self
    }

    pub fn with_cell(mut self, f: CellLabelFn) -> Self {
        self.cell = f;
        self
    }

    pub fn transaction(&self, tx_hash: &str) -> String {
        (self.transaction)(tx_hash)
    }

    pub fn cell(&self, cell: &CellInfo) -> String {
        (self.cell)(cell)
    }
}

impl std::fmt::Debug for Labels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Labels").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_labels.rs"]
mod tests;
