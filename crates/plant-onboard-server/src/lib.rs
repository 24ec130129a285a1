//! # plant-onboard-server
//!
//! HTTP API for the plant onboarding wizard, built on axum.
//!
//! The binary (`plant-onboard`) reads a [`ServerConfig`], loads an
//! [`AppState`] from it and serves [`build_router`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ErrorResponse;
pub use routes::build_router;
pub use state::AppState;
