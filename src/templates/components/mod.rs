pub mod card;
pub mod quote;

pub use card::card;
pub use quote::quote_box;
