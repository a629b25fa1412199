use crate::block::{Keyword, scan_declarations, split_blocks};
use crate::error::PoError;
use fs_err as fs;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Identity of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// `msgid` only.
    Singular(String),
    /// `msgid` and `msgid_plural`.
    Plural { singular: String, plural: String },
}

impl Key {
    pub fn singular(msgid: impl Into<String>) -> Self {
        Key::Singular(msgid.into())
    }

    pub fn plural(msgid: impl Into<String>, msgid_plural: impl Into<String>) -> Self {
        Key::Plural {
            singular: msgid.into(),
            plural: msgid_plural.into(),
        }
    }

    /// The `msgid` part of the key.
    pub fn msgid(&self) -> &str {
        match self {
            Key::Singular(msgid) => msgid,
            Key::Plural { singular, .. } => singular,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Singular(msgid) => write!(f, "{:?}", msgid),
            Key::Plural { singular, plural } => write!(f, "{:?} / {:?}", singular, plural),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryValue {
    /// `msgstr`.
    Simple(String),
    /// `msgstr[N]`, by plural form index.
    Plural(BTreeMap<usize, String>),
}

/// One translatable unit of a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: Key,
    pub value: EntryValue,
}

impl Entry {
    /// The translation the split cares about: `msgstr`, or plural form 0
    /// (empty when absent).
    pub fn translation(&self) -> &str {
        match &self.value {
            EntryValue::Simple(value) => value,
            EntryValue::Plural(forms) => forms.get(&0).map(String::as_str).unwrap_or(""),
        }
    }
}

/// Parses every entry of a catalog, header excluded, in file order.
///
/// Blocks without a `msgid`, and singular blocks without a `msgstr`,
/// contribute nothing.
pub fn parse_entries(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();

    for block in split_blocks(text.trim()) {
        let lines: Vec<&str> = block.text.trim().lines().collect();

        let mut msgid = None;
        let mut msgid_plural = None;
        let mut msgstr = None;
        let mut forms = BTreeMap::new();

        for declaration in scan_declarations(&lines) {
            match declaration.keyword {
                Keyword::Msgid => msgid = Some(declaration.value),
                Keyword::MsgidPlural => msgid_plural = Some(declaration.value),
                Keyword::Msgstr => msgstr = Some(declaration.value),
                Keyword::MsgstrIndexed(index) => {
                    forms.insert(index, declaration.value);
                },
            }
        }

        let Some(msgid) = msgid else { continue };
        if msgid.is_empty() {
            continue;
        }

        match (msgid_plural, msgstr) {
            (Some(plural), _) => entries.push(Entry {
                key: Key::plural(msgid, plural),
                value: EntryValue::Plural(forms),
            }),
            (None, Some(msgstr)) => entries.push(Entry {
                key: Key::Singular(msgid),
                value: EntryValue::Simple(msgstr),
            }),
            (None, None) => {
                tracing::debug!("Skipping entry without msgstr: {:?}", msgid);
            },
        }
    }

    entries
}

/// Translation table: entry key to its translation (plural form 0 for
/// plural entries), in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<Key, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a translation. An overwritten key keeps its
    /// original position.
    pub fn insert(&mut self, key: Key, translation: impl Into<String>) {
        self.entries.insert(key, translation.into());
    }

    pub fn get(&self, key: &Key) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with a non-empty translation.
    pub fn translated_count(&self) -> usize {
        self.entries.values().filter(|v| !v.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }
}

impl FromIterator<(Key, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (Key, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Builds the translation table of a catalog. Later duplicates overwrite
/// earlier ones.
pub fn parse(text: &str) -> Catalog {
    let mut catalog = Catalog::new();
    for entry in parse_entries(text) {
        let translation = entry.translation().to_string();
        catalog.insert(entry.key, translation);
    }
    catalog
}

/// Reads and parses a catalog file.
pub fn read_catalog(path: &Path) -> Result<Catalog, PoError> {
    let content = fs::read_to_string(path)?;
    let catalog = parse(&content);
    tracing::debug!("Parsed {} entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"msgid ""
msgstr ""
"Language: es\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"
"#;

    #[test]
    fn test_parse_skips_header() {
        let text = format!("{HEADER}\nmsgid \"Save\"\nmsgstr \"Guardar\"\n");
        let catalog = parse(&text);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&Key::singular("Save")), Some("Guardar"));
        assert!(!catalog.contains(&Key::singular("")));
    }

    #[test]
    fn test_parse_plural_uses_form_zero() {
        let text = r#"msgid "%{count} flow"
msgid_plural "%{count} flows"
msgstr[0] "%{count} flujo"
msgstr[1] "%{count} flujos"

msgid "%{count} map"
msgid_plural "%{count} maps"
msgstr[1] "%{count} mapas"
"#;
        let catalog = parse(text);
        assert_eq!(
            catalog.get(&Key::plural("%{count} flow", "%{count} flows")),
            Some("%{count} flujo")
        );
        assert_eq!(
            catalog.get(&Key::plural("%{count} map", "%{count} maps")),
            Some("")
        );
        assert!(!catalog.contains(&Key::singular("%{count} flow")));
    }

    #[test]
    fn test_parse_entries_keeps_all_plural_forms() {
        let text = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\nmsgstr[1] \"xs\"\n";
        let entries = parse_entries(text);
        assert_eq!(entries.len(), 1);
        let EntryValue::Plural(forms) = &entries[0].value else {
            panic!("expected plural value");
        };
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[&1], "xs");
    }

    #[test]
    fn test_parse_multiline_key_and_value() {
        let text = r#"#, elixir-autogen, elixir-format
msgid ""
"This sheet is shared "
"with your workspace."
msgstr ""
"Esta hoja se comparte "
"con tu espacio de trabajo."
"#;
        let catalog = parse(text);
        assert_eq!(
            catalog.get(&Key::singular(
                "This sheet is shared with your workspace."
            )),
            Some("Esta hoja se comparte con tu espacio de trabajo.")
        );
    }

    #[test]
    fn test_parse_ignores_blocks_without_key_or_value() {
        let text = "# just a comment\n\nmsgid \"orphan\"\n\n#~ msgid \"old\"\n#~ msgstr \"viejo\"\n";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn test_parse_later_duplicate_overwrites_in_place() {
        let text = "msgid \"a\"\nmsgstr \"1\"\n\nmsgid \"b\"\nmsgstr \"2\"\n\nmsgid \"a\"\nmsgstr \"3\"\n";
        let catalog = parse(text);
        let pairs: Vec<(String, &str)> = catalog
            .iter()
            .map(|(k, v)| (k.msgid().to_string(), v))
            .collect();
        assert_eq!(pairs, vec![("a".to_string(), "3"), ("b".to_string(), "2")]);
    }

    #[test]
    fn test_parse_crlf_catalog() {
        let text = "msgid \"\"\r\nmsgstr \"\"\r\n\"Language: es\\n\"\r\n\r\nmsgid \"Save\"\r\nmsgstr \"Guardar\"\r\n\r\nmsgid \"Cancel\"\r\nmsgstr \"Cancelar\"\r\n";
        let catalog = parse(text);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&Key::singular("Save")), Some("Guardar"));
        assert_eq!(catalog.get(&Key::singular("Cancel")), Some("Cancelar"));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::singular("Save").to_string(), "\"Save\"");
        assert_eq!(
            Key::plural("file", "files").to_string(),
            "\"file\" / \"files\""
        );
    }

    #[test]
    fn test_translated_count() {
        let catalog: Catalog = [
            (Key::singular("a"), "x".to_string()),
            (Key::singular("b"), String::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.translated_count(), 1);
    }
}
