use fs_err as fs;
use std::path::{Path, PathBuf};

/// Lists the `.po` catalogs directly inside `locale_dir`, sorted by file
/// name. `backup_file` is never listed, whatever its extension.
pub fn discover_catalogs(locale_dir: &Path, backup_file: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut catalogs = Vec::new();

    for entry in fs::read_dir(locale_dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path.extension().is_some_and(|ext| ext == "po")
            && entry.file_name() != backup_file
        {
            catalogs.push(path);
        }
    }

    catalogs.sort();
    tracing::debug!(
        "Found {} catalogs in {}",
        catalogs.len(),
        locale_dir.display()
    );
    Ok(catalogs)
}

/// File name of a catalog, as shown in reports.
pub fn catalog_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
