//! Configuration loading from platform metadata.
//!
//! Values are resolved per field, in passes: identity, detection flags,
//! endpoints, app/project metadata and misc numeric fields. Absent keys
//! leave the current value untouched.

use crate::configuration::{Configuration, EndpointConfiguration};
use crate::errors::ConfigError;
use crate::keys::*;
use crate::metadata::MetadataSource;
use commons::prelude_errors::*;
use commons::{parse_comma_set, MergeOptions};
use std::collections::HashSet;
use std::path;

/// Build a configuration from metadata, with an optional caller-supplied API key.
///
/// A non-empty `user_supplied_api_key` takes precedence over the metadata one.
pub fn load(
    data: &MetadataSource,
    user_supplied_api_key: Option<&str>,
) -> Result<Configuration, ConfigError> {
    let api_key = resolve_api_key(data, user_supplied_api_key)?;

    let mut config = Configuration::new(api_key);
    // Merging metadata never fails; only reading it can.
    config
        .try_merge(data)
        .map_err(ConfigError::SourceUnavailable)?;

    Ok(config)
}

/// Read metadata from a TOML file and build a configuration from it.
pub fn load_filepath<P>(
    metadata_path: P,
    user_supplied_api_key: Option<&str>,
) -> Result<Configuration, ConfigError>
where
    P: AsRef<path::Path>,
{
    let data =
        MetadataSource::read_filepath(metadata_path).map_err(ConfigError::SourceUnavailable)?;
    load(&data, user_supplied_api_key)
}

fn resolve_api_key(
    data: &MetadataSource,
    user_supplied_api_key: Option<&str>,
) -> Result<String, ConfigError> {
    match user_supplied_api_key.filter(|key| !key.is_empty()) {
        Some(key) => Ok(key.to_string()),
        None => data
            .get_string(API_KEY)
            .map(str::to_string)
            .ok_or(ConfigError::MissingApiKey),
    }
}

fn delimited_set(data: &MetadataSource, key: &str) -> Option<HashSet<String>> {
    data.get_string(key).map(parse_comma_set)
}

impl<'a> MergeOptions<&'a MetadataSource> for Configuration {
    fn try_merge(&mut self, data: &'a MetadataSource) -> Fallible<()> {
        self.merge_detection(data);
        self.merge_endpoints(data);
        self.merge_app(data);

        // Misc config.
        assign_if_some!(self.build_uuid, data.get_string(BUILD_UUID).map(str::to_string));
        self.max_breadcrumbs = data.get_int_or(MAX_BREADCRUMBS, self.max_breadcrumbs);
        assign_if_some!(
            self.launch_crash_threshold_ms,
            data.get_int(LAUNCH_CRASH_THRESHOLD_MS)
        );

        Ok(())
    }
}

impl Configuration {
    fn merge_detection(&mut self, data: &MetadataSource) {
        if data.contains_key(ENABLE_EXCEPTION_HANDLER) {
            warn!(
                "metadata key '{}' has been deprecated, please use '{}' instead",
                ENABLE_EXCEPTION_HANDLER, AUTO_DETECT_ERRORS
            );
        }

        // Canonical key wins over its deprecated alias.
        self.auto_detect_errors =
            data.get_bool_or(ENABLE_EXCEPTION_HANDLER, self.auto_detect_errors);
        self.auto_detect_errors = data.get_bool_or(AUTO_DETECT_ERRORS, self.auto_detect_errors);

        self.auto_detect_anrs = data.get_bool_or(AUTO_DETECT_ANRS, self.auto_detect_anrs);
        self.auto_detect_ndk_crashes =
            data.get_bool_or(AUTO_DETECT_NDK_CRASHES, self.auto_detect_ndk_crashes);
        self.auto_track_sessions = data.get_bool_or(AUTO_TRACK_SESSIONS, self.auto_track_sessions);
        self.send_threads = data.get_bool_or(SEND_THREADS, self.send_threads);
        self.persist_user = data.get_bool_or(PERSIST_USER, self.persist_user);
    }

    fn merge_endpoints(&mut self, data: &MetadataSource) {
        if !data.contains_key(ENDPOINT_NOTIFY) {
            if data.contains_key(ENDPOINT_SESSIONS) {
                warn!(
                    "metadata key '{}' has no effect without '{}'",
                    ENDPOINT_SESSIONS, ENDPOINT_NOTIFY
                );
            }
            return;
        }

        let notify = data.get_string_or(ENDPOINT_NOTIFY, &self.endpoints.notify);
        let sessions = data.get_string_or(ENDPOINT_SESSIONS, &self.endpoints.sessions);
        debug!("endpoints: notify={}, sessions={}", notify, sessions);
        self.endpoints = EndpointConfiguration::new(notify, sessions);
    }

    fn merge_app(&mut self, data: &MetadataSource) {
        assign_if_some!(
            self.release_stage,
            data.get_string(RELEASE_STAGE).map(str::to_string)
        );
        assign_if_some!(
            self.app_version,
            data.get_string(APP_VERSION).map(str::to_string)
        );
        assign_if_some!(self.app_type, data.get_string(APP_TYPE).map(str::to_string));
        assign_if_some!(
            self.code_bundle_id,
            data.get_string(CODE_BUNDLE_ID).map(str::to_string)
        );

        if data.contains_key(VERSION_CODE) {
            self.version_code = Some(data.get_int_or(VERSION_CODE, 0));
        }

        assign_if_some!(
            self.enabled_release_stages,
            delimited_set(data, ENABLED_RELEASE_STAGES)
        );
        assign_if_some!(self.ignore_classes, delimited_set(data, IGNORE_CLASSES));
        assign_if_some!(self.project_packages, delimited_set(data, PROJECT_PACKAGES));
        assign_if_some!(self.redacted_keys, delimited_set(data, REDACTED_KEYS));
    }
}
