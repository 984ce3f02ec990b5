//! Configuration lookup, parsing and validation.
//!
//! This module provides helpers for sourcing configuration options from
//! multiple inputs, merging, and validating them.

#[macro_export]
/// Assign to destination if source value is `Some`.
macro_rules! assign_if_some {
    ( $dst:expr, $src:expr ) => {{
        if let Some(x) = $src {
            $dst = x.into();
        };
    }};
}

/// Try to merge configuration options into runtime settings.
///
/// This consumes a generic configuration object, trying to merge its options
/// into runtime settings. It only overlays populated values from config,
/// leaving unset ones preserved as-is from existing settings.
pub trait MergeOptions<T> {
    /// MergeOptions values from `options` into current settings.
    fn try_merge(&mut self, options: T) -> crate::Fallible<()>;
}

#[cfg(test)]
mod tests {
    use super::MergeOptions;
    use crate::Fallible;

    #[derive(Debug, Default)]
    struct Settings {
        port: u16,
        name: String,
    }

    struct Overlay {
        port: Option<u16>,
        name: Option<&'static str>,
    }

    impl MergeOptions<Overlay> for Settings {
        fn try_merge(&mut self, opts: Overlay) -> Fallible<()> {
            assign_if_some!(self.port, opts.port);
            assign_if_some!(self.name, opts.name);
            Ok(())
        }
    }

    #[test]
    fn merge_only_populated() {
        let mut settings = Settings {
            port: 8080,
            name: "base".to_string(),
        };

        let overlay = Overlay {
            port: None,
            name: Some("overlay"),
        };
        settings.try_merge(overlay).unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.name, "overlay");
    }
}
