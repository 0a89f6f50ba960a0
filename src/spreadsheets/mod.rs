pub mod rentals_xlsx;

pub use rentals_xlsx::export_rentals_xlsx;
