//! Client configuration record.

use custom_debug_derive::Debug as CustomDebug;
use std::collections::HashSet;

/// Default error ingestion endpoint.
pub static DEFAULT_NOTIFY_ENDPOINT: &str = "https://notify.bugsnag.com";

/// Default session tracking endpoint.
pub static DEFAULT_SESSIONS_ENDPOINT: &str = "https://sessions.bugsnag.com";

/// Default application type.
pub static DEFAULT_APP_TYPE: &str = "android";

/// Default metadata keys to redact.
pub static DEFAULT_REDACTED_KEYS: &[&str] = &["password"];

/// Default maximum number of breadcrumbs.
pub static DEFAULT_MAX_BREADCRUMBS: i32 = 25;

/// Default launch crash threshold, in milliseconds.
pub static DEFAULT_LAUNCH_CRASH_THRESHOLD_MS: i64 = 5000;

/// Network destinations, always replaced as a pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SmartDefault)]
pub struct EndpointConfiguration {
    /// Error ingestion endpoint.
    #[default(DEFAULT_NOTIFY_ENDPOINT.to_string())]
    pub notify: String,

    /// Session tracking endpoint.
    #[default(DEFAULT_SESSIONS_ENDPOINT.to_string())]
    pub sessions: String,
}

impl EndpointConfiguration {
    /// Build an endpoint pair.
    pub fn new<N, S>(notify: N, sessions: S) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            notify: notify.into(),
            sessions: sessions.into(),
        }
    }
}

/// Runtime client configuration.
#[derive(Clone, CustomDebug, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// API key identifying the project.
    #[debug(skip)]
    pub api_key: String,

    /// Build identifier.
    pub build_uuid: Option<String>,

    /// Automatically report unhandled errors.
    pub auto_detect_errors: bool,

    /// Automatically report ANRs.
    pub auto_detect_anrs: bool,

    /// Automatically report native crashes.
    pub auto_detect_ndk_crashes: bool,

    /// Automatically track sessions.
    pub auto_track_sessions: bool,

    /// Capture thread state in reports.
    pub send_threads: bool,

    /// Persist user information across launches.
    pub persist_user: bool,

    /// Delivery endpoints.
    pub endpoints: EndpointConfiguration,

    /// Release stage.
    pub release_stage: Option<String>,

    /// Application version.
    pub app_version: Option<String>,

    /// Application type.
    pub app_type: Option<String>,

    /// Code bundle identifier.
    pub code_bundle_id: Option<String>,

    /// Application version code.
    pub version_code: Option<i32>,

    /// Release stages for which reports are sent; `None` enables all.
    pub enabled_release_stages: Option<HashSet<String>>,

    /// Error classes never reported.
    pub ignore_classes: HashSet<String>,

    /// Packages considered part of the project.
    pub project_packages: HashSet<String>,

    /// Metadata keys whose values are redacted.
    pub redacted_keys: HashSet<String>,

    /// Maximum number of stored breadcrumbs.
    pub max_breadcrumbs: i32,

    /// Crashes within this many milliseconds of launch are launch crashes.
    pub launch_crash_threshold_ms: i64,
}

impl Configuration {
    /// Build a configuration with built-in defaults for everything but the API key.
    pub fn new<S>(api_key: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_key: api_key.into(),
            build_uuid: None,
            auto_detect_errors: true,
            auto_detect_anrs: true,
            auto_detect_ndk_crashes: true,
            auto_track_sessions: true,
            send_threads: true,
            persist_user: false,
            endpoints: EndpointConfiguration::default(),
            release_stage: None,
            app_version: None,
            app_type: Some(DEFAULT_APP_TYPE.to_string()),
            code_bundle_id: None,
            version_code: None,
            enabled_release_stages: None,
            ignore_classes: HashSet::new(),
            project_packages: HashSet::new(),
            redacted_keys: DEFAULT_REDACTED_KEYS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            max_breadcrumbs: DEFAULT_MAX_BREADCRUMBS,
            launch_crash_threshold_ms: DEFAULT_LAUNCH_CRASH_THRESHOLD_MS,
        }
    }
}
