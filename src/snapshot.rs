//! Snapshot records.
//!
//! A snapshot is one immutable analysis run. The field names below are
//! the persisted json schema, so they stay camelCase on the wire.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: String,
    pub related_keywords: Vec<String>,
    pub competitors: Vec<Competitor>,
    pub keyword_analysis: Vec<KeywordAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub url: String,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub pc_rank: u8,
    pub mobile_rank: u8,
    pub bid_price: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: u64,
    pub cpc: u64,
}

impl Snapshot {
    /// Current instant in the same shape browsers emit: `2024-01-01T00:00:00.000Z`
    pub fn now_timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Local-time label used by the snapshot picker.
    /// Falls back to the raw string when the timestamp does not parse.
    pub fn label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}
