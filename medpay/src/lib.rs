mod app;
pub mod app_core;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod export;
pub mod filters;
pub mod format;
pub mod input;
pub mod log_buffer;
pub mod logging;
pub mod seed;
pub mod state;
pub mod surface;
pub mod ui;
mod utils;
pub mod views;

pub use app::App;
pub use controller::Controller;
pub use error::{Error, Result};

// Always expose testing module (integration tests need it)
pub mod testing;
