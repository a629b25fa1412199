use crate::error::RewriteError;
use path_slash::PathExt as _;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A source file found under the source directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Path on disk.
    pub path: PathBuf,
    /// Path relative to the source directory, `/` separated.
    pub relative: String,
}

/// Lists the files of `root` whose extension is one of `extensions`,
/// without descending into directories named in `excluded_dirs`.
///
/// Files are returned in walk order, directory entries sorted by name.
pub fn discover_sources(
    root: &Path,
    extensions: &[String],
    excluded_dirs: &[String],
) -> Result<Vec<SourceFile>, RewriteError> {
    tracing::info!("Discovering sources in {}", root.display());

    let is_excluded = |entry: &DirEntry| {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && excluded_dirs
                .iter()
                .any(|dir| entry.file_name() == dir.as_str())
    };

    let sources = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file()
                    && let Some(ext) = path.extension()
                    && extensions.iter().any(|wanted| ext == wanted.as_str())
                {
                    let relative = path.strip_prefix(root).unwrap_or(path).to_slash_lossy();
                    Some(Ok(SourceFile {
                        path: path.to_path_buf(),
                        relative: relative.into_owned(),
                    }))
                } else {
                    None
                }
            },
            Err(e) => Some(Err(RewriteError::WalkDir(root.to_path_buf(), e))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Found {} source files.", sources.len());
    Ok(sources)
}
