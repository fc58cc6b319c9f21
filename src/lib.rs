pub mod api;
pub mod cli;
pub mod config;

pub use api::{Dispatcher, FormDesignClient, HttpDispatcher};
pub use config::{ClientConfig, Config};
