#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod client;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GitHubEventsClient};
