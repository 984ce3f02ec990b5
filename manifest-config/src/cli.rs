//! Command-line options.

/// CLI configuration flags, top-level.
#[derive(Debug, StructOpt)]
pub struct CliOptions {
    /// Verbosity level
    #[structopt(short = "v", parse(from_occurrences))]
    pub verbosity: u64,

    /// Path to metadata file (TOML)
    #[structopt(short = "c")]
    pub metadata_path: String,

    /// API key, overriding the one in metadata
    #[structopt(long = "api-key")]
    pub api_key: Option<String>,
}

impl CliOptions {
    /// Log level for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliOptions;
    use structopt::StructOpt;

    #[test]
    fn cli_basic() {
        let no_path = vec!["argv0"];
        CliOptions::from_iter_safe(no_path).unwrap_err();

        let args = vec!["argv0", "-c", "/a/b.toml"];
        let cli = CliOptions::from_iter_safe(args).unwrap();
        assert_eq!(cli.verbosity, 0);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        assert_eq!(cli.metadata_path, "/a/b.toml");
        assert!(cli.api_key.is_none());

        let verbose_args = vec!["argv0", "-vvv", "-c", "x", "--api-key", "k"];
        let verbose_cli = CliOptions::from_iter_safe(verbose_args).unwrap();
        assert_eq!(verbose_cli.verbosity, 3);
        assert_eq!(verbose_cli.log_level(), log::LevelFilter::Trace);
        assert_eq!(verbose_cli.api_key, Some("k".to_string()));
    }
}
