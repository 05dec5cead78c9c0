//! Core macrolog library (API client, models, config, local storage).

pub mod api;
pub mod config;
pub mod logging;
pub mod menu;
pub mod models;
pub mod overview;
pub mod storage;
