use crate::core::{
    BackupNotFoundError, CliError, ConfigNotFoundError, ConfigParseError,
    LocaleDirNotFoundError, SourceDirNotFoundError,
};
use clap::Args;
use domain_split_toml::{CONFIG_FILE_NAME, ConfigError, DomainSplitConfig};
use fs_err as fs;
use miette::NamedSource;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Path to the project root (defaults to current directory).
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Configuration file (defaults to domain-split.toml in the project root).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Locale to process, overriding the configured one.
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Arguments shared by the commands that write files.
#[derive(Debug, Clone, Args)]
pub struct WriteArgs {
    /// Dry run - show what would change without making changes.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a diff of every changed file.
    #[arg(long)]
    pub diff: bool,
}

/// A project root with its loaded configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: DomainSplitConfig,
    locale: Option<String>,
}

impl Project {
    /// Loads the configuration named by `args`, falling back to
    /// `domain-split.toml` in the root and then to the built-in defaults.
    pub fn load(args: ProjectArgs) -> Result<Self, CliError> {
        let root = args.path.unwrap_or_else(|| PathBuf::from("."));

        let config = match args.config {
            Some(path) => read_config(&path)?,
            None => {
                let path = root.join(CONFIG_FILE_NAME);
                if path.exists() {
                    read_config(&path)?
                } else {
                    tracing::info!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                    DomainSplitConfig::default()
                }
            },
        };

        Ok(Self {
            root,
            config,
            locale: args.locale,
        })
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.config.locale)
    }

    /// The source directory, which must exist.
    pub fn source_dir(&self) -> Result<PathBuf, CliError> {
        let path = self.config.source_dir_from(&self.root);
        if !path.is_dir() {
            return Err(SourceDirNotFoundError { path }.into());
        }
        Ok(path)
    }

    /// The `LC_MESSAGES` directory of the selected locale, which must exist.
    pub fn locale_dir(&self) -> Result<PathBuf, CliError> {
        let path = self
            .config
            .locale_dir_from(&self.root, self.locale.as_deref());
        if !path.is_dir() {
            return Err(LocaleDirNotFoundError {
                locale: self.locale().to_string(),
                path,
            }
            .into());
        }
        Ok(path)
    }

    /// The backup catalog inside `locale_dir`, which must exist.
    pub fn backup_path(&self, locale_dir: &Path) -> Result<PathBuf, CliError> {
        let path = self.config.backup_path_in(locale_dir);
        if !path.is_file() {
            return Err(BackupNotFoundError { path }.into());
        }
        Ok(path)
    }
}

fn read_config(path: &Path) -> Result<DomainSplitConfig, CliError> {
    if !path.exists() {
        return Err(ConfigNotFoundError {
            expected_path: path.to_path_buf(),
        }
        .into());
    }

    let content = fs::read_to_string(path)?;
    match DomainSplitConfig::from_toml_str(&content) {
        Ok(config) => {
            tracing::debug!(
                "Loaded {} routing rules from {}",
                config.rules.len(),
                path.display()
            );
            Ok(config)
        },
        Err(ConfigError::ParseError(err)) => Err(ConfigParseError {
            span: err.span().map(Into::into),
            help: err.message().to_string(),
            src: NamedSource::new(path.display().to_string(), content),
        }
        .into()),
        Err(err) => Err(err.into()),
    }
}
