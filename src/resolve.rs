//! Transaction resolution — turns raw chain transactions into
//! [`TransactionData`] by following each input to the output it spends.
//!
//! The lookup itself is behind [`TransactionSource`]; this crate ships an
//! in-memory source only. Input lookups run concurrently and fail
//! independently, so one bad reference never disturbs its siblings.

use std::collections::HashMap;
use std::future::{self, Future};

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::{InputFailure, ResolveError};
use crate::model::{CellInfo, OutPoint, Script, TransactionData};

// ─── Raw transaction ─────────────────────────────────────────────────────────

/// An input as returned by the chain: a reference to a prior output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    #[serde(alias = "previous_output")]
    pub previous_output: OutPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

/// An output without its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutput {
    pub capacity: String,
    pub lock: Script,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Script>,
}

/// A transaction as returned by the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub hash: String,
    #[serde(default)]
    pub inputs: Vec<RawInput>,
    #[serde(default)]
    pub outputs: Vec<RawOutput>,
    #[serde(default, alias = "outputs_data")]
    pub outputs_data: Vec<String>,
}

impl RawTransaction {
    /// The `index`-th output as a cell, with its data and out point.
    pub fn cell(&self, index: u32) -> Option<CellInfo> {
        let i = index as usize;
        let output = self.outputs.get(i)?;
        Some(CellInfo {
            capacity: output.capacity.clone(),
            lock: output.lock.clone(),
            type_: output.type_.clone(),
            data: self
                .outputs_data
                .get(i)
                .cloned()
                .unwrap_or_else(|| "0x".to_string()),
            out_point: Some(OutPoint::new(self.hash.clone(), index)),
        })
    }

    pub fn cells(&self) -> Vec<CellInfo> {
        (0..self.outputs.len() as u32)
            .filter_map(|i| self.cell(i))
            .collect()
    }
}

// ─── Source trait ────────────────────────────────────────────────────────────

/// Looks transactions up by hash.
pub trait TransactionSource {
    fn get_transaction(
        &self,
        tx_hash: &str,
    ) -> impl Future<Output = Result<RawTransaction, ResolveError>> + Send;
}

/// Transactions held in memory, keyed by hash.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    transactions: HashMap<String, RawTransaction>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of raw transactions.
    pub fn from_json(src: &str) -> Result<Self, ResolveError> {
        let list: Vec<RawTransaction> = serde_json::from_str(src)?;
        Ok(list.into_iter().collect())
    }

    pub fn insert(&mut self, tx: RawTransaction) {
        self.transactions.insert(tx.hash.clone(), tx);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl FromIterator<RawTransaction> for MemorySource {
    fn from_iter<I: IntoIterator<Item = RawTransaction>>(iter: I) -> Self {
        let mut source = Self::new();
        for tx in iter {
            source.insert(tx);
        }
        source
    }
}

impl TransactionSource for MemorySource {
    fn get_transaction(
        &self,
        tx_hash: &str,
    ) -> impl Future<Output = Result<RawTransaction, ResolveError>> + Send {
        let found = self
            .transactions
            .get(tx_hash)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(tx_hash.to_string()));
        future::ready(found)
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// A transaction whose inputs were looked up one by one.
#[derive(Debug)]
pub struct ResolvedTransaction {
    pub tx_hash: String,
    /// One entry per input, in input order.
    pub inputs: Vec<Result<CellInfo, InputFailure>>,
    pub outputs: Vec<CellInfo>,
}

impl ResolvedTransaction {
    pub fn failures(&self) -> impl Iterator<Item = &InputFailure> {
        self.inputs.iter().filter_map(|r| r.as_ref().err())
    }

    /// All inputs or nothing: any failure fails the whole transaction.
    pub fn into_complete(self) -> Result<TransactionData, ResolveError> {
        let mut inputs = Vec::with_capacity(self.inputs.len());
        let mut failures = Vec::new();
        for input in self.inputs {
            match input {
                Ok(cell) => inputs.push(cell),
                Err(failure) => failures.push(failure),
            }
        }
        if !failures.is_empty() {
            return Err(ResolveError::UnresolvedInputs {
                tx_hash: self.tx_hash,
                failures,
            });
        }
        Ok(TransactionData {
            inputs,
            outputs: self.outputs,
            tx_hash: self.tx_hash,
        })
    }

    /// Drop unresolved inputs and hand them back next to the data.
    pub fn into_partial(self) -> (TransactionData, Vec<InputFailure>) {
        let mut inputs = Vec::with_capacity(self.inputs.len());
        let mut failures = Vec::new();
        for input in self.inputs {
            match input {
                Ok(cell) => inputs.push(cell),
                Err(failure) => {
                    log::warn!("excluding unresolved {failure}");
                    failures.push(failure);
                }
            }
        }
        let data = TransactionData {
            inputs,
            outputs: self.outputs,
            tx_hash: self.tx_hash,
        };
        (data, failures)
    }
}

async fn resolve_input<S: TransactionSource>(
    source: &S,
    index: usize,
    input: &RawInput,
) -> Result<CellInfo, InputFailure> {
    let previous_output = &input.previous_output;
    let fail = |reason: ResolveError| InputFailure {
        index,
        previous_output: previous_output.clone(),
        reason: Box::new(reason),
    };
    let previous = source
        .get_transaction(&previous_output.tx_hash)
        .await
        .map_err(fail)?;
    previous.cell(previous_output.index).ok_or_else(|| {
        fail(ResolveError::MissingOutput {
            out_point: previous_output.clone(),
        })
    })
}

/// Look up `tx_hash`, then every output its inputs spend.
///
/// Only the first lookup can fail the call; input failures are recorded
/// per input in the result.
pub async fn resolve_transaction<S: TransactionSource>(
    source: &S,
    tx_hash: &str,
) -> Result<ResolvedTransaction, ResolveError> {
    let tx = source.get_transaction(tx_hash).await?;
    log::debug!(
        "resolving {} input(s) of transaction {}",
        tx.inputs.len(),
        tx.hash
    );

    let lookups = tx
        .inputs
        .iter()
        .enumerate()
        .map(|(index, input)| resolve_input(source, index, input));
    let inputs = join_all(lookups).await;

    Ok(ResolvedTransaction {
        tx_hash: tx.hash.clone(),
        outputs: tx.cells(),
        inputs,
    })
}

#[cfg(test)]
#[path = "../tests/rust/test_resolve.rs"]
mod tests;
