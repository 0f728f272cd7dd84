//! tempwatch - a terminal client for a networked temperature sensor
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod coordinator;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod notifications;
pub mod settings;
pub mod startup;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
