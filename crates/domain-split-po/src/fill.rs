use crate::block::{Declaration, Keyword, scan_declarations, split_blocks};
use crate::catalog::{Catalog, Key};
use crate::escape::escape;
use std::borrow::Cow;

/// Result of filling one catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// The catalog text after filling.
    pub content: String,
    /// Entries whose empty translation was filled.
    pub filled: usize,
    /// Entries seen, header excluded.
    pub total: usize,
    /// Keys of the filled entries, in file order.
    pub filled_keys: Vec<Key>,
    /// Whether `content` differs from the input.
    pub changed: bool,
}

enum BlockFill {
    /// Header, comment-only or obsolete block.
    NotAnEntry,
    Kept,
    Filled(Key),
}

/// Fills the empty translations of `text` from `catalog`.
///
/// Only a `msgstr` (or `msgstr[0]` for plural entries) that is exactly empty
/// is written, and only with a non-empty translation. Everything else,
/// including the blank-line separators, is copied byte for byte.
pub fn fill(text: &str, catalog: &Catalog) -> FillOutcome {
    let mut outcome = FillOutcome::default();
    let mut content = String::with_capacity(text.len());

    for block in split_blocks(text) {
        let (new_text, result) = fill_block(block.text, catalog);
        match result {
            BlockFill::NotAnEntry => {},
            BlockFill::Kept => outcome.total += 1,
            BlockFill::Filled(key) => {
                outcome.total += 1;
                outcome.filled += 1;
                outcome.filled_keys.push(key);
            },
        }
        content.push_str(&new_text);
        content.push_str(block.separator);
    }

    outcome.changed = content != text;
    outcome.content = content;
    outcome
}

fn fill_block<'a>(block: &'a str, catalog: &Catalog) -> (Cow<'a, str>, BlockFill) {
    let lines: Vec<&str> = block.split('\n').collect();
    let declarations = scan_declarations(&lines);

    let last = |keyword: Keyword| declarations.iter().rev().find(|d| d.keyword == keyword);

    let Some(msgid) = last(Keyword::Msgid) else {
        return (Cow::Borrowed(block), BlockFill::NotAnEntry);
    };
    if msgid.value.is_empty() {
        return (Cow::Borrowed(block), BlockFill::NotAnEntry);
    }

    let (key, slot) = match last(Keyword::MsgidPlural) {
        Some(plural) => (
            Key::plural(msgid.value.as_str(), plural.value.as_str()),
            last(Keyword::MsgstrIndexed(0)),
        ),
        None => (Key::singular(msgid.value.as_str()), last(Keyword::Msgstr)),
    };

    let Some(slot) = slot.filter(|slot| slot.value.is_empty()) else {
        return (Cow::Borrowed(block), BlockFill::Kept);
    };

    let Some(translation) = catalog.get(&key).filter(|t| !t.is_empty()) else {
        return (Cow::Borrowed(block), BlockFill::Kept);
    };

    tracing::debug!("Filling {}", key);
    let filled = replace_declaration(&lines, slot, translation);
    (Cow::Owned(filled), BlockFill::Filled(key))
}

/// Replaces the lines of `slot` with a single declaration holding `value`.
fn replace_declaration(lines: &[&str], slot: &Declaration<'_>, value: &str) -> String {
    let cr = if lines[slot.lines.start].ends_with('\r') {
        "\r"
    } else {
        ""
    };
    let replacement = format!("{}\"{}\"{}", slot.lead, escape(value), cr);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..slot.lines.start]);
    out.push(&replacement);
    out.extend_from_slice(&lines[slot.lines.end..]);
    out.join("\n")
}
