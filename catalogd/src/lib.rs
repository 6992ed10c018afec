#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod app;
pub use app::CatalogApp;

mod cli;
pub use cli::{Cli, Command};

mod config;
pub use config::{AppConfig, ConnectFailurePolicy};
