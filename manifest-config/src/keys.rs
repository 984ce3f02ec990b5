//! Metadata keys understood by the loader.
//!
//! All keys live under the [`NAMESPACE`] prefix.

/// Namespace shared by all metadata keys.
pub const NAMESPACE: &str = "com.bugsnag.android";

macro_rules! ns_key {
    ( $name:literal ) => {
        concat!("com.bugsnag.android.", $name)
    };
}

// mandatory
/// API key (mandatory unless supplied by the caller).
pub const API_KEY: &str = ns_key!("API_KEY");
/// Build identifier.
pub const BUILD_UUID: &str = ns_key!("BUILD_UUID");

// detection
/// Automatic detection of unhandled errors.
pub const AUTO_DETECT_ERRORS: &str = ns_key!("AUTO_DETECT_ERRORS");
/// Automatic detection of ANRs.
pub const AUTO_DETECT_ANRS: &str = ns_key!("AUTO_DETECT_ANRS");
/// Automatic detection of native crashes.
pub const AUTO_DETECT_NDK_CRASHES: &str = ns_key!("AUTO_DETECT_NDK_CRASHES");
/// Automatic session tracking.
pub const AUTO_TRACK_SESSIONS: &str = ns_key!("AUTO_TRACK_SESSIONS");
/// Thread state capture.
pub const SEND_THREADS: &str = ns_key!("SEND_THREADS");
/// User information persistence.
pub const PERSIST_USER: &str = ns_key!("PERSIST_USER");

// endpoints
/// Error ingestion endpoint; its presence gates both endpoints.
pub const ENDPOINT_NOTIFY: &str = ns_key!("ENDPOINT");
/// Session tracking endpoint.
pub const ENDPOINT_SESSIONS: &str = ns_key!("SESSIONS_ENDPOINT");

// app/project packages
/// Application version.
pub const APP_VERSION: &str = ns_key!("APP_VERSION");
/// Application version code.
pub const VERSION_CODE: &str = ns_key!("VERSION_CODE");
/// Release stage.
pub const RELEASE_STAGE: &str = ns_key!("RELEASE_STAGE");
/// Comma-separated release stages for which reports are sent.
pub const ENABLED_RELEASE_STAGES: &str = ns_key!("ENABLED_RELEASE_STAGES");
/// Comma-separated error classes to ignore.
pub const IGNORE_CLASSES: &str = ns_key!("IGNORE_CLASSES");
/// Comma-separated packages considered part of the project.
pub const PROJECT_PACKAGES: &str = ns_key!("PROJECT_PACKAGES");
/// Comma-separated metadata keys to redact.
pub const REDACTED_KEYS: &str = ns_key!("REDACTED_KEYS");

// misc
/// Maximum number of stored breadcrumbs.
pub const MAX_BREADCRUMBS: &str = ns_key!("MAX_BREADCRUMBS");
/// Threshold (ms) under which a crash counts as a launch crash.
pub const LAUNCH_CRASH_THRESHOLD_MS: &str = ns_key!("LAUNCH_CRASH_THRESHOLD_MS");
/// Code bundle identifier.
pub const CODE_BUNDLE_ID: &str = ns_key!("CODE_BUNDLE_ID");
/// Application type.
pub const APP_TYPE: &str = ns_key!("APP_TYPE");

// deprecated aliases
/// Deprecated alias of [`AUTO_DETECT_ERRORS`].
pub const ENABLE_EXCEPTION_HANDLER: &str = ns_key!("ENABLE_EXCEPTION_HANDLER");
