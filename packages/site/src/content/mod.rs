//! Content registry - services, industries and blog posts

mod registry;
mod types;

pub use registry::*;
pub use types::*;
