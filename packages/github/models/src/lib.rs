#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod event;
pub mod kind;

pub use event::{ActivityEvent, EventRepo};
pub use kind::EventKind;
