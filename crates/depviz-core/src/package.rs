use std::fmt;

/// A Python package name, compared and hashed by its normalized form.
///
/// The index treats `Flask`, `flask`, and `flask` spelled with `.` or `_`
/// separators as the same project. Following PEP 503, normalization
/// lowercases the name and collapses every run of `-`, `_`, `.` into a
/// single `-`. The raw spelling from the first place the name was seen is
/// kept for display labels.
#[derive(Debug, Clone)]
pub struct PackageName {
    normalized: String,
    raw: String,
}

impl PackageName {
    /// Build a name from a raw spelling, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw: String = raw.into();
        let raw = raw.trim().to_string();
        let normalized = normalize(&raw);
        Self { normalized, raw }
    }

    /// The normalized form used as the graph key.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The spelling as it appeared in the input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when nothing remains after trimming. Empty names are rejected
    /// before resolution starts.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl PartialEq for PackageName {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for PackageName {}

impl std::hash::Hash for PackageName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for PackageName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// PEP 503 name normalization: lowercase, with every run of `-`, `_`, `.`
/// replaced by a single `-`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.chars() {
        if matches!(ch, '-' | '_' | '.') {
            pending_sep = true;
        } else {
            if pending_sep {
                out.push('-');
                pending_sep = false;
            }
            out.push(ch.to_ascii_lowercase());
        }
    }
    if pending_sep {
        out.push('-');
    }
    out
}
