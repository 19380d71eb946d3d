//! Core domain types for the admin dashboard.
//!
//! This crate contains the pure logic shared by the UI packages:
//! - StatusCategory and the status classification table
//! - StatusVariant hints for the entity a status belongs to
//! - AdminRecord rows for admin lists
//! - Text helpers such as pluralization

mod record;
mod status;
mod text;
mod variant;

pub use record::AdminRecord;
pub use status::StatusCategory;
pub use text::pluralize;
pub use variant::{ParseVariantError, StatusVariant};
