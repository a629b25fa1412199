//! Block splitting and declaration scanning shared by the parser and the
//! back-filler.

use crate::escape::unescape;
use std::ops::Range;

/// One blank-line separated chunk of a catalog, with the separator that
/// follows it (empty for the last block).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawBlock<'a> {
    pub(crate) text: &'a str,
    pub(crate) separator: &'a str,
}

/// Splits `text` on blank lines. A separator runs from the end of the last
/// non-blank line of a block to the start of the next one, so `\n\n` and
/// `\r\n\r\n` both split. Concatenating every block's text and separator
/// yields `text` again.
pub(crate) fn split_blocks(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    let mut content_end = None;
    let mut separator_start = None;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\n', '\r']);

        if content.is_empty() {
            if separator_start.is_none() {
                separator_start = Some(content_end.unwrap_or(line_start));
            }
            continue;
        }

        if let Some(sep) = separator_start.take() {
            blocks.push(RawBlock {
                text: &text[start..sep],
                separator: &text[sep..line_start],
            });
            start = line_start;
        }
        content_end = Some(line_start + content.len());
    }

    if let Some(sep) = separator_start {
        blocks.push(RawBlock {
            text: &text[start..sep],
            separator: &text[sep..],
        });
        start = text.len();
    }

    blocks.push(RawBlock {
        text: &text[start..],
        separator: "",
    });
    blocks
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Keyword {
    Msgid,
    MsgidPlural,
    Msgstr,
    MsgstrIndexed(usize),
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "msgid" => Some(Self::Msgid),
            "msgid_plural" => Some(Self::MsgidPlural),
            "msgstr" => Some(Self::Msgstr),
            _ => token
                .strip_prefix("msgstr[")
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|index| index.parse().ok())
                .map(Self::MsgstrIndexed),
        }
    }
}

/// A keyword line plus its continuation lines.
#[derive(Debug)]
pub(crate) struct Declaration<'a> {
    pub(crate) keyword: Keyword,
    /// First line up to the opening quote, e.g. `msgstr[0] `.
    pub(crate) lead: &'a str,
    /// Lines of the block covered by the declaration.
    pub(crate) lines: Range<usize>,
    /// Unescaped, continuation-joined value.
    pub(crate) value: String,
}

/// Scans the lines of one block for declarations, in order of appearance.
///
/// A declaration starts at column 0 with a keyword, whitespace and a quoted
/// literal. Directly following lines that start with `"` continue it. Any
/// other line (comments, `msgctxt`, obsolete `#~` entries) is skipped.
pub(crate) fn scan_declarations<'a>(lines: &[&'a str]) -> Vec<Declaration<'a>> {
    let mut declarations = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = strip_cr(lines[i]);
        let Some((keyword, lead, first)) = parse_keyword_line(line) else {
            i += 1;
            continue;
        };

        let mut raw = first.to_string();
        let mut end = i + 1;
        while end < lines.len() {
            let next = strip_cr(lines[end]);
            if !next.starts_with('"') {
                break;
            }
            raw.push_str(quoted_fragment(next));
            end += 1;
        }

        declarations.push(Declaration {
            keyword,
            lead,
            lines: i..end,
            value: unescape(&raw),
        });
        i = end;
    }

    declarations
}

/// Splits `msgstr[0] "text"` into its keyword, lead and raw fragment.
fn parse_keyword_line(line: &str) -> Option<(Keyword, &str, &str)> {
    let quote = line.find('"')?;
    let lead = &line[..quote];
    let token = lead.trim_end();
    if token.is_empty() || token.len() == lead.len() || token.contains(char::is_whitespace) {
        return None;
    }
    let keyword = Keyword::from_token(token)?;
    Some((keyword, lead, quoted_fragment(&line[quote..])))
}

/// Strips the surrounding quotes of a literal, leaving escapes untouched.
fn quoted_fragment(literal: &str) -> &str {
    let inner = literal.strip_prefix('"').unwrap_or(literal);
    match inner.strip_suffix('"') {
        Some(inner) => inner,
        None => {
            tracing::warn!("Unterminated PO string literal: {}", literal);
            inner
        },
    }
}

pub(crate) fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(blocks: &[RawBlock<'_>]) -> String {
        blocks
            .iter()
            .map(|b| format!("{}{}", b.text, b.separator))
            .collect()
    }

    #[test]
    fn test_split_blocks_keeps_separators() {
        let text = "a\nb\n\nc\n\n\n\nd\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, "a\nb");
        assert_eq!(blocks[1].separator, "\n\n\n\n");
        assert_eq!(blocks[2].text, "d\n");
        assert_eq!(rejoin(&blocks), text);
    }

    #[test]
    fn test_split_blocks_crlf() {
        let text = "msgid \"a\"\r\nmsgstr \"\"\r\n\r\n\r\nmsgid \"b\"\r\nmsgstr \"\"\r\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "msgid \"a\"\r\nmsgstr \"\"");
        assert_eq!(blocks[0].separator, "\r\n\r\n\r\n");
        assert_eq!(blocks[1].text, "msgid \"b\"\r\nmsgstr \"\"\r\n");
        assert_eq!(rejoin(&blocks), text);
    }

    #[test]
    fn test_split_blocks_trailing_blank_lines() {
        let blocks = split_blocks("a\n\n\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "a");
        assert_eq!(blocks[0].separator, "\n\n\n");
        assert_eq!(blocks[1].text, "");
    }

    #[test]
    fn test_split_blocks_single_newlines_do_not_split() {
        let blocks = split_blocks("msgid \"a\"\nmsgstr \"b\"");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].separator, "");
    }

    #[test]
    fn test_scan_multiline_declaration() {
        let lines = [
            "#: lib/web/live/flow_live/show.ex:12",
            "msgid \"\"",
            "\"Hello \\\"you\\\"\\n\"",
            "\"there\"",
            "msgstr \"\"",
        ];
        let decls = scan_declarations(&lines);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].keyword, Keyword::Msgid);
        assert_eq!(decls[0].lines, 1..4);
        assert_eq!(decls[0].value, "Hello \"you\"\nthere");
        assert_eq!(decls[1].keyword, Keyword::Msgstr);
        assert_eq!(decls[1].value, "");
    }

    #[test]
    fn test_scan_indexed_and_ignored_lines() {
        let lines = [
            "msgctxt \"menu\"",
            "msgid \"file\"",
            "msgid_plural \"files\"",
            "msgstr[0] \"archivo\"",
            "msgstr[1]  \"archivos\"",
            "#~ msgid \"old\"",
            "msgstr[x] \"bad index\"",
        ];
        let decls = scan_declarations(&lines);
        let keywords: Vec<Keyword> = decls.iter().map(|d| d.keyword).collect();
        assert_eq!(
            keywords,
            vec![
                Keyword::Msgid,
                Keyword::MsgidPlural,
                Keyword::MsgstrIndexed(0),
                Keyword::MsgstrIndexed(1),
            ]
        );
        assert_eq!(decls[2].lead, "msgstr[0] ");
        assert_eq!(decls[3].value, "archivos");
    }

    #[test]
    fn test_keyword_must_start_at_column_zero() {
        let decls = scan_declarations(&["  msgid \"indented\"", "msgid\"nospace\""]);
        assert!(decls.is_empty());
    }
}
