//! Cinemate - search movies, rate the ones you watched
//!
//! This library provides a debounced, cancellable search controller over the
//! OMDb API, a detail controller for the selected title, and a small
//! persisted collection of user ratings backed by an embedded database.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod fetch;
pub mod models;
pub mod output;
pub mod search;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CinemateError {
    /// Rating store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Request to the movie API failed
    #[error("{0}")]
    FetchError(#[from] api::FetchError),
    /// Rating could not be committed
    #[error("{0}")]
    RateError(#[from] detail::RateError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
