//! Reusable UI components

mod blocks;
mod breadcrumbs;
mod cards;
mod cta;
mod head;
mod layout;
mod stats;

pub use blocks::*;
pub use breadcrumbs::*;
pub use cards::*;
pub use cta::*;
pub use head::*;
pub use layout::*;
pub use stats::*;
