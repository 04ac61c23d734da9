#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod formatter;
mod templates;
mod timestamp;

pub use formatter::{EventFormatter, Template, format_event};
pub use timestamp::format_timestamp;
