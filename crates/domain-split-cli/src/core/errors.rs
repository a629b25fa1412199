//! CLI error types rendered as miette diagnostics.

use domain_split_po::PoError;
use domain_split_rewrite::RewriteError;
use domain_split_toml::ConfigError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Error when an explicitly requested configuration file does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("configuration file not found: {}", .expected_path.display())]
#[diagnostic(
    code(domain_split::config::not_found),
    help("Drop --config to use domain-split.toml from the project root, or the built-in defaults")
)]
pub struct ConfigNotFoundError {
    /// The path where the config was expected.
    pub expected_path: PathBuf,
}

/// Error when the configuration file is not valid TOML for this tool.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse domain-split configuration")]
#[diagnostic(code(domain_split::config::parse_error))]
pub struct ConfigParseError {
    /// The source content of the config file.
    #[source_code]
    pub src: NamedSource<String>,

    /// The span where the error occurred.
    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    /// The underlying parse error message.
    #[help]
    pub help: String,
}

/// Error when the configuration parses but describes an unusable routing table.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid domain-split configuration")]
#[diagnostic(code(domain_split::config::invalid))]
pub struct ConfigInvalidError {
    #[help]
    pub help: String,
}

/// Error when the source directory to rewrite does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("source directory not found: {}", .path.display())]
#[diagnostic(
    code(domain_split::rewrite::source_not_found),
    help("Run from the project root, pass --path, or set source_dir in domain-split.toml")
)]
pub struct SourceDirNotFoundError {
    pub path: PathBuf,
}

/// Error when the catalogs of the selected locale do not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("locale directory for '{locale}' not found: {}", .path.display())]
#[diagnostic(
    code(domain_split::catalog::locale_not_found),
    help("Pass an existing locale with --locale, or set gettext_dir in domain-split.toml")
)]
pub struct LocaleDirNotFoundError {
    pub locale: String,
    pub path: PathBuf,
}

/// Error when the pre-split catalog is missing.
#[derive(Debug, Diagnostic, Error)]
#[error("backup not found: {}", .path.display())]
#[diagnostic(
    code(domain_split::catalog::backup_not_found),
    help("Copy the combined default.po to this path before extracting the split domains")
)]
pub struct BackupNotFoundError {
    pub path: PathBuf,
}

/// Outcome of a failed verification. The details are printed before it.
#[derive(Debug, Diagnostic, Error)]
#[error(
    "verification failed: {missing_count} backup entr(ies) missing, {lost_count} translation(s) lost"
)]
#[diagnostic(
    code(domain_split::verify::report),
    help("Run `domain-split backfill`, or restore the listed entries from the backup")
)]
pub struct VerificationReport {
    /// Backup keys absent from every catalog.
    pub missing_count: usize,

    /// Backup translations found in no catalog.
    pub lost_count: usize,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigNotFound(#[from] ConfigNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParse(#[from] ConfigParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigInvalid(#[from] ConfigInvalidError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    SourceDirNotFound(#[from] SourceDirNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LocaleDirNotFound(#[from] LocaleDirNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    BackupNotFound(#[from] BackupNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Verification(#[from] VerificationReport),

    #[error(transparent)]
    #[diagnostic(code(domain_split::rewrite))]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    #[diagnostic(code(domain_split::catalog))]
    Po(#[from] PoError),

    #[error("IO error: {0}")]
    #[diagnostic(code(domain_split::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(domain_split::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(expected_path) => ConfigNotFoundError { expected_path }.into(),
            other => ConfigInvalidError {
                help: other.to_string(),
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_split_toml::{RoutingRule, validate_rules};

    #[test]
    fn test_shadowed_rule_becomes_invalid_config() {
        let err = validate_rules(&[
            RoutingRule::new("web/", "web"),
            RoutingRule::new("web/live/", "live"),
        ])
        .unwrap_err();

        match CliError::from(err) {
            CliError::ConfigInvalid(invalid) => {
                assert!(invalid.help.contains("'web/live/'"));
                assert!(invalid.help.contains("'web/'"));
            },
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_keeps_its_path() {
        let err = ConfigError::NotFound(PathBuf::from("conf/split.toml"));
        let cli_err = CliError::from(err);
        assert!(matches!(cli_err, CliError::ConfigNotFound(_)));
        assert_eq!(
            cli_err.to_string(),
            "configuration file not found: conf/split.toml"
        );
    }

    #[test]
    fn test_anyhow_context_is_kept() {
        let err = anyhow::anyhow!("disk full").context("Failed to write lib/a.ex");
        assert_eq!(
            CliError::from(err).to_string(),
            "Failed to write lib/a.ex: disk full"
        );
    }
}
