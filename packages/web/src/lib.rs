//! Plastix Marketing - Web
//!
//! Dioxus components rendered to HTML on the server. The same renderer
//! backs the static export (`plastix build`) and the preview server
//! (`plastix serve`).

#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod export;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;

pub use config::Config;
pub use render::{render_path, render_route, RenderedPage};
pub use routes::Route;
