pub mod api;
pub mod charts;
pub mod config;
pub mod error;
pub mod gateway;
pub mod settings;
pub mod utils;
