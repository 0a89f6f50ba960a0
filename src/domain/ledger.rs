// src/domain/ledger.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::id::uid;
use crate::domain::models::{Equipment, Rental, RentalStatus};
use crate::domain::pricing::{self, Quote};
use crate::domain::views::RentalRow;
use crate::errors::ServerError;

/// The whole application state: equipment items and rentals, insertion order
/// preserved (insertion order is the display order).
///
/// This struct is also the persisted document: serializing it yields the
/// `{ "equipments": [...], "rentals": [...] }` layout written to the store
/// and served by the export download. Both top-level sequences are required
/// on deserialize.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    equipments: Vec<Equipment>,
    rentals: Vec<Rental>,
}

impl Ledger {
    pub fn equipments(&self) -> &[Equipment] {
        &self.equipments
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn find_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipments.iter().find(|e| e.id == id)
    }

    /// Register a new equipment item. Always succeeds; an unparsable daily
    /// rate coerces to 0.
    pub fn add_equipment(
        &mut self,
        equipment_type: &str,
        model: &str,
        serial: &str,
        daily_rate_text: &str,
    ) -> &Equipment {
        let equipment = Equipment {
            id: uid(),
            equipment_type: equipment_type.to_string(),
            model: model.to_string(),
            serial: serial.to_string(),
            daily_rate: pricing::parse_daily_rate(daily_rate_text),
            created_at: Utc::now(),
        };
        self.equipments.push(equipment);
        self.equipments.last().unwrap()
    }

    /// Overwrite every mutable field of an equipment item. The id and
    /// creation timestamp stay; existing rentals keep their frozen figures.
    pub fn edit_equipment(
        &mut self,
        id: &str,
        equipment_type: &str,
        model: &str,
        serial: &str,
        daily_rate_text: &str,
    ) -> Result<(), ServerError> {
        let equipment = self
            .equipments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ServerError::NotFound)?;

        equipment.equipment_type = equipment_type.to_string();
        equipment.model = model.to_string();
        equipment.serial = serial.to_string();
        equipment.daily_rate = pricing::parse_daily_rate(daily_rate_text);
        Ok(())
    }

    /// Remove an equipment item. Rentals referencing it are left alone and
    /// keep their (now dangling) equipment id.
    pub fn delete_equipment(&mut self, id: &str) {
        self.equipments.retain(|e| e.id != id);
    }

    /// Price a prospective rental without recording anything. `None` when the
    /// equipment cannot be resolved or either date is missing/unparsable.
    pub fn quote(&self, equipment_id: &str, start_text: &str, end_text: &str) -> Option<Quote> {
        let equipment = self.find_equipment(equipment_id)?;
        let start = pricing::parse_date(start_text)?;
        let end = pricing::parse_date(end_text)?;
        Some(pricing::quote_for(equipment.daily_rate, start, end))
    }

    /// Open a rental against an equipment item. The day count and total are
    /// computed with the same formula as `quote` and frozen onto the record.
    pub fn create_rental(
        &mut self,
        equipment_id: &str,
        renter: &str,
        start_text: &str,
        end_text: &str,
        notes: &str,
    ) -> Result<&Rental, ServerError> {
        let equipment = self
            .find_equipment(equipment_id)
            .ok_or_else(|| ServerError::Validation("select a valid equipment".into()))?;

        let start = pricing::parse_date(start_text)
            .ok_or_else(|| ServerError::Validation("start date is missing or invalid".into()))?;
        let end = pricing::parse_date(end_text)
            .ok_or_else(|| ServerError::Validation("end date is missing or invalid".into()))?;

        if end < start {
            return Err(ServerError::Validation(
                "end date must be on or after the start date".into(),
            ));
        }

        let Quote { days, total } = pricing::quote_for(equipment.daily_rate, start, end);
        let rental = Rental {
            id: uid(),
            equipment_id: equipment.id.clone(),
            renter: renter.to_string(),
            start_date: start,
            end_date: end,
            days,
            total,
            notes: notes.to_string(),
            status: RentalStatus::Active,
            created_at: Utc::now(),
        };
        self.rentals.push(rental);
        Ok(self.rentals.last().unwrap())
    }

    /// Close a rental. No-op on an unknown id; idempotent on a closed one.
    pub fn close_rental(&mut self, id: &str) {
        if let Some(rental) = self.rentals.iter_mut().find(|r| r.id == id) {
            rental.status = RentalStatus::Closed;
        }
    }

    /// Remove a rental unconditionally, whatever its status.
    pub fn delete_rental(&mut self, id: &str) {
        self.rentals.retain(|r| r.id != id);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.equipments.clear();
        self.rentals.clear();
    }

    /// Rentals joined with their equipment label for the table and the
    /// spreadsheet export. A dangling reference resolves to no label.
    pub fn rental_rows(&self) -> Vec<RentalRow> {
        self.rentals
            .iter()
            .map(|rental| RentalRow {
                equipment_label: self.find_equipment(&rental.equipment_id).map(Equipment::label),
                rental: rental.clone(),
            })
            .collect()
    }

    /// Serialize the whole ledger as the persisted/exported document.
    pub fn to_document(&self) -> Result<String, ServerError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ServerError::StoreError(format!("serialize ledger failed: {e}")))
    }

    /// Parse a whole document. A document missing either top-level sequence
    /// (or otherwise malformed) is a validation error; the caller's state is
    /// untouched because replacement only happens on success.
    pub fn from_document(document: &str) -> Result<Ledger, ServerError> {
        serde_json::from_str(document)
            .map_err(|e| ServerError::Validation(format!("invalid ledger document: {e}")))
    }
}
