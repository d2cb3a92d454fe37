//! Transaction and cell data consumed by the illustration pipeline.
//!
//! JSON field names are camelCase; the snake_case spelling used by the node
//! RPC is accepted as an alias so raw RPC payloads deserialize unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ─── ScriptHashType ──────────────────────────────────────────────────────────

/// How a script's `code_hash` is matched against the script code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHashType {
    #[default]
    Data,
    Type,
    Data1,
    Data2,
}

impl fmt::Display for ScriptHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Type => write!(f, "type"),
            Self::Data1 => write!(f, "data1"),
            Self::Data2 => write!(f, "data2"),
        }
    }
}

// ─── Script ──────────────────────────────────────────────────────────────────

/// A lock or type script attached to a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(alias = "code_hash")]
    pub code_hash: String,
    #[serde(alias = "hash_type")]
    pub hash_type: ScriptHashType,
    /// Opaque argument bytes, hex encoded. Also the owner key for coloring.
    pub args: String,
}

// ─── OutPoint ────────────────────────────────────────────────────────────────

/// Reference to the `index`-th output of transaction `tx_hash`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutPoint {
    #[serde(alias = "tx_hash")]
    pub tx_hash: String,
    #[serde(deserialize_with = "deserialize_index")]
    pub index: u32,
}

impl OutPoint {
    pub fn new(tx_hash: impl Into<String>, index: u32) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            index,
        }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tx_hash, self.index)
    }
}

/// Accepts `3`, `"3"` or `"0x3"`; the RPC encodes indices as hex strings.
fn deserialize_index<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndex {
        Number(u32),
        Text(String),
    }

    match RawIndex::deserialize(deserializer)? {
        RawIndex::Number(n) => Ok(n),
        RawIndex::Text(s) => {
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => u32::from_str_radix(hex, 16),
                None => s.parse::<u32>(),
            };
            parsed.map_err(|_| serde::de::Error::custom(format!("invalid output index {s:?}")))
        }
    }
}

// ─── CellInfo ────────────────────────────────────────────────────────────────

fn empty_data() -> String {
    "0x".to_string()
}

/// A transaction output as it existed at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInfo {
    /// Shannons, as a decimal or `0x` hex string. Parsed lazily.
    pub capacity: String,
    pub lock: Script,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Script>,
    #[serde(default = "empty_data")]
    pub data: String,
    /// Where this cell lives on chain, when the data source knows it.
    #[serde(
        default,
        alias = "out_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub out_point: Option<OutPoint>,
}

impl CellInfo {
    pub fn new(capacity: impl Into<String>, lock: Script) -> Self {
        Self {
            capacity: capacity.into(),
            lock,
            type_: None,
            data: empty_data(),
            out_point: None,
        }
    }

    pub fn with_out_point(mut self, out_point: OutPoint) -> Self {
        self.out_point = Some(out_point);
        self
    }
}

// ─── TransactionData ─────────────────────────────────────────────────────────

/// Fully resolved input to the illustration pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    #[serde(default)]
    pub inputs: Vec<CellInfo>,
    #[serde(default)]
    pub outputs: Vec<CellInfo>,
    #[serde(alias = "tx_hash")]
    pub tx_hash: String,
}

impl TransactionData {
    pub fn from_json(src: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_model.rs"]
mod tests;
