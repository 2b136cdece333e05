pub mod api;
pub mod collection;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod errors;
pub mod logging;
pub mod models;
#[cfg(feature = "native")]
pub mod server;
pub mod services;
