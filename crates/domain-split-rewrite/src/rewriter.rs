use crate::error::RewriteError;
use domain_split_toml::DEFAULT_DOMAIN;
use regex::Regex;
use std::borrow::Cow;

/// Number of calls rewritten per call shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// `gettext(`
    pub gettext: usize,
    /// `ngettext(`
    pub ngettext: usize,
    /// `Gettext.gettext(Backend, `
    pub qualified_gettext: usize,
    /// `Gettext.ngettext(Backend, `
    pub qualified_ngettext: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.gettext + self.ngettext + self.qualified_gettext + self.qualified_ngettext
    }
}

/// Result of rewriting one file's content.
#[derive(Debug)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub counts: CallCounts,
}

impl Rewrite<'_> {
    pub fn is_changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

/// Injects a domain argument into the gettext calls of a source file.
#[derive(Clone, Debug)]
pub struct CallRewriter {
    backend: String,
    qualified_gettext: Regex,
    qualified_ngettext: Regex,
    gettext: Regex,
    ngettext: Regex,
}

impl CallRewriter {
    /// Builds the call patterns for the given backend module, e.g.
    /// `StoryarnWeb.Gettext`.
    pub fn new(backend: &str) -> Result<Self, RewriteError> {
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| RewriteError::Pattern(backend.to_string(), e))
        };
        let backend_pattern = regex::escape(backend);

        Ok(Self {
            backend: backend.to_string(),
            qualified_gettext: compile(format!(r"\bGettext\.gettext\(\s*{backend_pattern},\s*"))?,
            qualified_ngettext: compile(format!(r"\bGettext\.ngettext\(\s*{backend_pattern},\s*"))?,
            gettext: compile(r"\bgettext\(".to_string())?,
            ngettext: compile(r"\bngettext\(".to_string())?,
        })
    }

    /// Rewrites every call of `content` into its domain-qualified form.
    ///
    /// Content is returned borrowed when `domain` is `None`, the default
    /// domain, or when no call matched. Qualified calls are rewritten first;
    /// bare patterns skip any call preceded by `.`, so the four shapes never
    /// overlap.
    pub fn rewrite<'a>(&self, content: &'a str, domain: Option<&str>) -> Rewrite<'a> {
        let mut counts = CallCounts::default();
        let Some(domain) = domain.filter(|domain| *domain != DEFAULT_DOMAIN) else {
            return Rewrite {
                content: Cow::Borrowed(content),
                counts,
            };
        };

        let passes = [
            (
                &self.qualified_gettext,
                format!("Gettext.dgettext({}, \"{}\", ", self.backend, domain),
                false,
                &mut counts.qualified_gettext,
            ),
            (
                &self.qualified_ngettext,
                format!("Gettext.dngettext({}, \"{}\", ", self.backend, domain),
                false,
                &mut counts.qualified_ngettext,
            ),
            (
                &self.gettext,
                format!("dgettext(\"{}\", ", domain),
                true,
                &mut counts.gettext,
            ),
            (
                &self.ngettext,
                format!("dngettext(\"{}\", ", domain),
                true,
                &mut counts.ngettext,
            ),
        ];

        let mut current = Cow::Borrowed(content);
        for (pattern, replacement, bare, count) in passes {
            if let Some((replaced, n)) = substitute(pattern, &current, &replacement, bare) {
                current = Cow::Owned(replaced);
                *count = n;
            }
        }

        Rewrite {
            content: current,
            counts,
        }
    }
}

/// Replaces every match of `pattern` with `replacement`. Bare patterns leave
/// module-qualified calls alone. Returns `None` when nothing was replaced.
fn substitute(
    pattern: &Regex,
    haystack: &str,
    replacement: &str,
    bare: bool,
) -> Option<(String, usize)> {
    let mut out = String::new();
    let mut last = 0;
    let mut count = 0;

    for m in pattern.find_iter(haystack) {
        if bare && haystack[..m.start()].ends_with('.') {
            continue;
        }
        out.push_str(&haystack[last..m.start()]);
        out.push_str(replacement);
        last = m.end();
        count += 1;
    }

    if count == 0 {
        return None;
    }
    out.push_str(&haystack[last..]);
    Some((out, count))
}
