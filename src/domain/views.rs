// src/domain/views.rs

use crate::domain::models::Rental;

/// A rental joined with its resolved equipment label. One structure behind
/// both the rentals table and the spreadsheet export.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRow {
    pub rental: Rental,
    /// `None` when the referenced equipment has since been deleted.
    pub equipment_label: Option<String>,
}

impl RentalRow {
    /// Display label, with a placeholder for dangling references.
    pub fn label(&self) -> &str {
        self.equipment_label.as_deref().unwrap_or("-")
    }

    /// Period column text, e.g. "2024-01-10 to 2024-01-12 (3 days)".
    pub fn period(&self) -> String {
        format!(
            "{} to {} ({} {})",
            self.rental.start_date,
            self.rental.end_date,
            self.rental.days,
            if self.rental.days == 1 { "day" } else { "days" }
        )
    }
}
