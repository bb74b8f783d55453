use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{EMPTY_TABLE_ERROR, INVALID_WEIGHT_ERROR, MISSING_NAME_ERROR};
use crate::validation::{is_complete_weight_total, validate_reward_name, validate_weight};

const DEFAULT_REWARDS_JSON: &str = include_str!("rewards.json");

/// A single prize on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RewardEntry {
    pub name: String,
    /// Relative likelihood in percentage points.
    pub weight: f64,
    pub icon: String,
    pub color: String,
    pub description: String,
}

impl RewardEntry {
    pub fn new(name: &str, weight: f64, icon: &str, color: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            weight,
            icon: icon.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RewardTableError {
    Empty,
    MissingName { index: usize },
    InvalidWeight { name: String, weight: f64 },
    Parse(String),
}

impl fmt::Display for RewardTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardTableError::Empty => write!(f, "{}", EMPTY_TABLE_ERROR),
            RewardTableError::MissingName { index } => {
                write!(f, "{} (entry {})", MISSING_NAME_ERROR, index)
            }
            RewardTableError::InvalidWeight { name, weight } => {
                write!(f, "{}: {} has weight {}", INVALID_WEIGHT_ERROR, name, weight)
            }
            RewardTableError::Parse(msg) => write!(f, "Failed to parse reward table: {}", msg),
        }
    }
}

impl std::error::Error for RewardTableError {}

impl From<serde_json::Error> for RewardTableError {
    fn from(err: serde_json::Error) -> Self {
        RewardTableError::Parse(err.to_string())
    }
}

/// Ordered, non-empty list of rewards. Order fixes both the cumulative weight
/// boundaries and the segment each reward occupies on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RewardTable {
    entries: Vec<RewardEntry>,
}

impl RewardTable {
    /// Validates the entries and rejects an unusable table up front, so no spin
    /// can ever start against an empty or malformed configuration.
    pub fn new(entries: Vec<RewardEntry>) -> Result<Self, RewardTableError> {
        if entries.is_empty() {
            return Err(RewardTableError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if validate_reward_name(&entry.name).is_err() {
                return Err(RewardTableError::MissingName { index });
            }
            if validate_weight(entry.weight).is_err() {
                return Err(RewardTableError::InvalidWeight {
                    name: entry.name.clone(),
                    weight: entry.weight,
                });
            }
        }

        let table = Self { entries };
        let total = table.weight_total();
        if !is_complete_weight_total(total) {
            // Accepted on purpose: the selector falls back to the first entry
            // for draws past the last boundary.
            log::warn!(
                "Reward weights sum to {} instead of 100; draws past the last boundary fall back to {}",
                total,
                table.first().name
            );
        }
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, RewardTableError> {
        let entries: Vec<RewardEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The five rewards the wheel ships with.
    pub fn default_table() -> Result<Self, RewardTableError> {
        Self::from_json(DEFAULT_REWARDS_JSON)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RewardEntry> {
        self.entries.get(index)
    }

    pub fn first(&self) -> &RewardEntry {
        &self.entries[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RewardEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RewardEntry] {
        &self.entries
    }

    pub fn weight_total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }

    /// Segment index of the first reward with the given name.
    pub fn segment_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

impl<'a> IntoIterator for &'a RewardTable {
    type Item = &'a RewardEntry;
    type IntoIter = std::slice::Iter<'a, RewardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
