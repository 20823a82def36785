//! Listing collaborator: rate configuration storage at its read-only interface.

pub mod lookup;
pub mod models;
pub mod queries;

pub use lookup::PgRateLookup;
pub use models::RateConfiguration;
