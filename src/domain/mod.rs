pub mod id;
pub mod ledger;
pub mod models;
pub mod pricing;
pub mod views;

pub use ledger::Ledger;
pub use models::{Equipment, Rental, RentalStatus};
pub use pricing::Quote;
pub use views::RentalRow;
