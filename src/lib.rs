pub mod config;
pub mod model;
pub mod server;
pub mod service;
pub mod ui;
