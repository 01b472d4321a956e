//! Page bodies
//!
//! Each page receives the records it shows as props; looking them up and
//! building the head metadata happens in [`crate::render`].

mod about;
mod blog;
mod contact;
mod grow;
mod home;
mod industry;
mod not_found;
mod portfolio;
mod services;

pub use about::*;
pub use blog::*;
pub use contact::*;
pub use grow::*;
pub use home::*;
pub use industry::*;
pub use not_found::*;
pub use portfolio::*;
pub use services::*;
