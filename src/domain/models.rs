// src/domain/models.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rentable item with an identifying serial and a daily price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub model: String,
    pub serial: String,
    pub daily_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl Equipment {
    /// Label used for the equipment select and the rentals table,
    /// e.g. "Notebook - ThinkPad T14 (SN-0042)".
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.equipment_type, self.model, self.serial)
    }
}

/// A booking of one equipment by a renter over a date range.
///
/// `days` and `total` are a price snapshot frozen at creation time. They are
/// never recomputed, even if the referenced equipment's rate changes later or
/// the equipment is deleted outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    /// Reference by id, not ownership: the equipment may be deleted later,
    /// leaving this dangling.
    pub equipment_id: String,
    pub renter: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub total: f64,
    #[serde(default)]
    pub notes: String,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

/// Rental lifecycle status. Closing is terminal and one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Closed,
}

impl RentalStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RentalStatus::Active)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalStatus::Active => write!(f, "active"),
            RentalStatus::Closed => write!(f, "closed"),
        }
    }
}
