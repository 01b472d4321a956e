//! Search-engine metadata and schema.org structured data

pub mod metadata;
pub mod schema;

pub use metadata::*;
pub use schema::*;
