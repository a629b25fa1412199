#![doc = include_str!("../README.md")]

mod defaults;

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "domain-split.toml";

/// Reserved domain label meaning "leave the file in the default domain".
pub const DEFAULT_DOMAIN: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("{} not found at {}", CONFIG_FILE_NAME, .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A routing rule has an empty prefix and would swallow every path.
    #[error("Routing rule #{index} has an empty prefix")]
    EmptyPrefix {
        /// Zero-based position of the rule in the table.
        index: usize,
    },
    /// A routing rule has an empty domain label.
    #[error("Routing rule #{index} ('{prefix}') has an empty domain")]
    EmptyDomain {
        /// Zero-based position of the rule in the table.
        index: usize,
        /// The rule's prefix.
        prefix: String,
    },
    /// A routing rule can never match because an earlier, broader rule wins.
    #[error("Routing rule '{prefix}' is shadowed by the earlier rule '{shadowed_by}'")]
    ShadowedRule {
        /// The unreachable rule's prefix.
        prefix: String,
        /// The earlier prefix that always matches first.
        shadowed_by: String,
    },
}

/// One entry of the ordered routing table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoutingRule {
    /// Path prefix relative to the source directory, using `/` separators.
    pub prefix: String,
    /// Gettext domain the matching files are routed to.
    pub domain: String,
}

impl RoutingRule {
    pub fn new(prefix: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            domain: domain.into(),
        }
    }
}

/// The configuration for `domain-split`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainSplitConfig {
    /// Directory holding the sources to rewrite, relative to the project root.
    pub source_dir: PathBuf,
    /// File extensions (without the dot) considered by the rewriter.
    pub source_extensions: Vec<String>,
    /// Directory names never descended into while walking sources.
    pub excluded_dirs: Vec<String>,
    /// Backend module passed as the first argument of qualified calls,
    /// e.g. `Gettext.gettext(StoryarnWeb.Gettext, "x")`.
    pub gettext_backend: String,
    /// Root of the gettext catalogs, relative to the project root.
    /// Expected structure: {gettext_dir}/{locale}/LC_MESSAGES/{domain}.po
    pub gettext_dir: PathBuf,
    /// Locale whose catalogs are back-filled and verified.
    pub locale: String,
    /// File name of the pre-split combined catalog inside the locale directory.
    pub backup_file: String,
    /// Paths never rewritten, whatever their routing.
    pub skip_files: Vec<String>,
    /// Ordered routing table. The first matching prefix wins.
    pub rules: Vec<RoutingRule>,
}

impl Default for DomainSplitConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(defaults::SOURCE_DIR),
            source_extensions: defaults::strings(defaults::SOURCE_EXTENSIONS),
            excluded_dirs: defaults::strings(defaults::EXCLUDED_DIRS),
            gettext_backend: defaults::GETTEXT_BACKEND.to_string(),
            gettext_dir: PathBuf::from(defaults::GETTEXT_DIR),
            locale: defaults::LOCALE.to_string(),
            backup_file: defaults::BACKUP_FILE.to_string(),
            skip_files: defaults::strings(defaults::SKIP_FILES),
            rules: defaults::rules(),
        }
    }
}

impl DomainSplitConfig {
    /// Reads and validates the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DomainSplitConfig = toml::from_str(content)?;
        validate_rules(&config.rules)?;
        Ok(config)
    }

    /// Reads `domain-split.toml` from the project root, or returns the
    /// built-in defaults when the file does not exist.
    pub fn from_project_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::read_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the source directory resolved against the project root.
    pub fn source_dir_from(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Returns `{gettext_dir}/{locale}/LC_MESSAGES` resolved against the
    /// project root. `locale` overrides the configured locale.
    pub fn locale_dir_from(&self, root: &Path, locale: Option<&str>) -> PathBuf {
        root.join(&self.gettext_dir)
            .join(locale.unwrap_or(&self.locale))
            .join("LC_MESSAGES")
    }

    /// Returns the path of the backup catalog inside a locale directory.
    pub fn backup_path_in(&self, locale_dir: &Path) -> PathBuf {
        locale_dir.join(&self.backup_file)
    }
}

/// Checks the construction contract of a routing table.
///
/// Prefixes and domains must be non-empty, and no rule may extend the prefix
/// of an earlier rule: the earlier rule would always win and the later one
/// would be dead.
pub fn validate_rules(rules: &[RoutingRule]) -> Result<(), ConfigError> {
    for (index, rule) in rules.iter().enumerate() {
        if rule.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix { index });
        }
        if rule.domain.trim().is_empty() {
            return Err(ConfigError::EmptyDomain {
                index,
                prefix: rule.prefix.clone(),
            });
        }
        if let Some(earlier) = rules[..index]
            .iter()
            .find(|earlier| rule.prefix.starts_with(&earlier.prefix))
        {
            return Err(ConfigError::ShadowedRule {
                prefix: rule.prefix.clone(),
                shadowed_by: earlier.prefix.clone(),
            });
        }
    }
    Ok(())
}
