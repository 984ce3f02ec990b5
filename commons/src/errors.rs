//! Error handling helpers.

/// Fallible result, carrying a dynamic error with context.
pub type Fallible<T> = Result<T, anyhow::Error>;

/// Commonly used imports for error handling.
pub mod prelude {
    pub use super::Fallible;
    pub use anyhow::{anyhow as format_err, bail, ensure, Context, Error};
}
