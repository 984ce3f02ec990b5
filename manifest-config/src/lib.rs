//! Crash-reporting client configuration from platform metadata.
//!
//! Configuration values are looked up in a namespaced key/value
//! [`MetadataSource`] and merged over built-in defaults, with an optional
//! caller-supplied API key taking precedence over the metadata one.

#![deny(missing_docs)]

#[macro_use]
extern crate commons;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate smart_default;

mod configuration;
mod errors;
pub mod keys;
mod loader;
mod metadata;

pub use crate::configuration::{
    Configuration, EndpointConfiguration, DEFAULT_LAUNCH_CRASH_THRESHOLD_MS,
    DEFAULT_MAX_BREADCRUMBS, DEFAULT_NOTIFY_ENDPOINT, DEFAULT_SESSIONS_ENDPOINT,
};
pub use crate::errors::ConfigError;
pub use crate::loader::{load, load_filepath};
pub use crate::metadata::{MetadataSource, MetadataValue};
