#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod presenter;

pub use config::{Config, ConfigError};
pub use presenter::{DEFAULT_MAX_EVENTS, parse_max_events, present, run};
