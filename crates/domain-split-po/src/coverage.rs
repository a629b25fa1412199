//! Comparison of a backup catalog with the catalogs that replaced it.

use crate::catalog::{Catalog, Key};
use indexmap::{IndexMap, IndexSet};

/// Translated/total counts of one current catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStats {
    pub name: String,
    pub translated: usize,
    pub total: usize,
}

impl FileStats {
    /// Share of translated entries, 0 for an empty catalog.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.translated as f64 / self.total as f64 * 100.0
        }
    }
}

/// What happened to the backup's entries after the split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coverage {
    /// Per-file stats, sorted by file name.
    pub files: Vec<FileStats>,
    /// Backup keys absent from every current catalog, in backup order.
    pub missing: Vec<Key>,
    /// Backup keys that were translated in the backup but are translated
    /// nowhere now, with their backup translation, in backup order.
    pub lost: Vec<(Key, String)>,
    /// Entries of the backup.
    pub backup_total: usize,
    /// Translated entries of the backup.
    pub backup_translated: usize,
    /// Keys translated in at least one current catalog, with the translation
    /// that won the aggregation.
    pub translations: IndexMap<Key, String>,
}

impl Coverage {
    /// Compares `backup` with the current catalogs.
    ///
    /// Catalogs are aggregated in file name order; for a key translated in
    /// several files the first non-empty translation wins.
    pub fn compute<'a, I>(backup: &Catalog, current: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Catalog)>,
    {
        let mut current: Vec<(&str, &Catalog)> = current.into_iter().collect();
        current.sort_by(|a, b| a.0.cmp(b.0));

        let mut present: IndexSet<&Key> = IndexSet::new();
        let mut translated: IndexMap<&Key, &str> = IndexMap::new();
        let mut files = Vec::with_capacity(current.len());

        for (name, catalog) in &current {
            files.push(FileStats {
                name: name.to_string(),
                translated: catalog.translated_count(),
                total: catalog.len(),
            });
            for (key, value) in catalog.iter() {
                present.insert(key);
                if !value.is_empty() {
                    translated.entry(key).or_insert(value);
                }
            }
        }

        let missing = backup
            .keys()
            .filter(|key| !present.contains(key))
            .cloned()
            .collect();

        let lost = backup
            .iter()
            .filter(|(key, value)| !value.is_empty() && !translated.contains_key(key))
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();

        Self {
            files,
            missing,
            lost,
            backup_total: backup.len(),
            backup_translated: backup.translated_count(),
            translations: translated
                .into_iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect(),
        }
    }

    /// Distinct keys translated in at least one current catalog.
    pub fn current_translated(&self) -> usize {
        self.translations.len()
    }

    /// No backup entry went missing or lost its translation.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.lost.is_empty()
    }
}
