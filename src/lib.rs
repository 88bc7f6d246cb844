pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
