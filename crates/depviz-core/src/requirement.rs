use std::sync::LazyLock;

use regex::Regex;

use crate::package::PackageName;

// PEP 508 name grammar: leading alphanumeric, then alphanumerics mixed
// with `.`, `_`, `-`.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)").unwrap());
static EXTRAS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[([^\]]*)\]").unwrap());

/// A single parsed requirement, e.g. from a requirements file line or a
/// `requires_dist` entry.
///
/// Only the package name feeds the dependency graph. Extras, version
/// specifiers, and environment markers are parsed off so the name comes out
/// clean, and are kept around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub name: PackageName,
    pub extras: Vec<String>,
    pub specifier: Option<String>,
    pub marker: Option<String>,
}

impl Requirement {
    /// Parse one requirement line such as
    /// `requests[socks]>=2.28,<3 ; python_version >= "3.8"`.
    ///
    /// Returns `None` for lines that are not requirements: pip options
    /// (`-r`, `-e`, `--index-url`), bare URLs, and anything else that does
    /// not start with a valid package name followed by requirement syntax.
    pub fn parse(line: &str) -> Option<Self> {
        let text = strip_comment(line).trim();
        if text.is_empty() {
            return None;
        }

        let name_token = NAME_RE.captures(text)?.get(1)?.as_str();
        let mut rest = text[name_token.len()..].trim_start();

        let mut extras = Vec::new();
        if let Some(caps) = EXTRAS_RE.captures(rest) {
            extras = caps[1]
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            rest = rest[caps[0].len()..].trim_start();
        }

        let (head, marker_part) = match rest.split_once(';') {
            Some((h, m)) => (h.trim(), Some(m.trim())),
            None => (rest, None),
        };
        let marker = marker_part
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let specifier = if head.is_empty() {
            None
        } else if head.starts_with('@') {
            // Direct reference (`name @ url`); the URL is irrelevant to the graph.
            None
        } else if head.starts_with(['(', '=', '<', '>', '!', '~']) {
            let spec = head
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .unwrap_or(head)
                .trim();
            Some(spec.to_string())
        } else {
            // The name was followed by something that is not requirement
            // syntax, e.g. the `://...` tail of a URL line.
            return None;
        };

        Some(Self {
            name: PackageName::new(name_token),
            extras,
            specifier,
            marker,
        })
    }
}

/// Cut off an inline comment: a `#` at the start of the line or preceded by
/// whitespace, the way pip reads requirement files.
fn strip_comment(line: &str) -> &str {
    let mut prev_ws = true;
    for (i, ch) in line.char_indices() {
        if ch == '#' && prev_ws {
            return &line[..i];
        }
        prev_ws = ch.is_whitespace();
    }
    line
}
