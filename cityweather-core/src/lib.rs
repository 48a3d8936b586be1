//! Core library for the `cityweather` lookup screen.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind the [`WeatherProvider`] seam
//! - The condition-to-background classifier
//! - The screen controller that ties input, fetch and displayed state together
//!
//! It is used by `cityweather-cli`, but carries no terminal code and can back
//! any other front end.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod screen;

pub use classify::classify;
pub use config::Config;
pub use error::{FetchError, ScreenError};
pub use model::{DisplayCategory, WeatherResult};
pub use provider::{WeatherProvider, client_from_config, weatherapi::WeatherClient};
pub use screen::{Effect, ScreenController, ScreenState, Submission, Ticket};
