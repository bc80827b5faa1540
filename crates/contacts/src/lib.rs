//! Contacts domain module (records of named contacts and their phone numbers).
//!
//! This crate contains the business rules for the contact directory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod directory;
pub mod name;
pub mod phone;
pub mod record;

pub use directory::Directory;
pub use name::ContactName;
pub use phone::{PHONE_DIGITS, PhoneNumber};
pub use record::Record;
