use serde::{Deserialize, Serialize};

use crate::constants::{JUPITER_PROTOCOL, PYTH_PROTOCOL};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityEntry {
    pub protocol: String,
    pub protocol_label: String,
    pub token: String,
    pub ticker: String,
    pub eligible: bool,
    pub amount: f64,
    pub note: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EligibilityQueryResult {
    pub address: String,
    pub eligibility: Vec<EligibilityEntry>,
    pub error: Option<String>,
}

impl EligibilityQueryResult {
    /// Result standing in for an address whose query failed.
    pub fn failed(address: &str, error: impl ToString) -> Self {
        Self {
            address: address.to_string(),
            eligibility: vec![],
            error: Some(error.to_string()),
        }
    }

    pub fn entry(&self, protocol: &str) -> Option<&EligibilityEntry> {
        self.eligibility.iter().find(|e| e.protocol == protocol)
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRecord {
    pub address: String,
    pub jupiter_eligible: bool,
    pub jupiter_volume: f64,
    pub jupiter_note: String,
    pub pyth_eligible: bool,
    pub pyth_points: f64,
    pub pyth_note: String,
}

impl EligibilityRecord {
    /// Flattens a raw result into a record for `address`. Missing protocol
    /// entries leave the defaults in place.
    pub fn normalize(address: &str, result: &EligibilityQueryResult) -> Self {
        let mut record = Self {
            address: address.to_string(),
            ..Default::default()
        };

        if let Some(jupiter) = result.entry(JUPITER_PROTOCOL) {
            record.jupiter_eligible = jupiter.eligible;
            record.jupiter_volume = jupiter.amount;
            record.jupiter_note = jupiter.note.clone();
        }

        if let Some(pyth) = result.entry(PYTH_PROTOCOL) {
            record.pyth_eligible = pyth.eligible;
            record.pyth_points = pyth.amount;
            record.pyth_note = pyth.note.clone();
        }

        record
    }

    pub fn eligible_any(&self) -> bool {
        self.jupiter_eligible || self.pyth_eligible
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub jupiter_volume: f64,
    pub pyth_points: f64,
    pub eligible_any: usize,
}

impl Totals {
    pub fn from_records(records: &[EligibilityRecord]) -> Self {
        records.iter().fold(Self::default(), |mut totals, record| {
            totals.jupiter_volume += record.jupiter_volume;
            totals.pyth_points += record.pyth_points;
            totals.eligible_any += usize::from(record.eligible_any());
            totals
        })
    }
}
