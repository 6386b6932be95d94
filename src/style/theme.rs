use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Symbolic reference to a theme constant.
pub enum ThemeRef {
    /// `@id<N>` or `@ohos_id_<N>`.
    Id(u32),
    /// `@<name>`, usually a dotted path such as `@sys.color.primary`.
    Name(String),
}

impl ThemeRef {
    /// Recognize the reference syntax; literal values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let body = raw.trim().strip_prefix('@')?;
        for prefix in ["ohos_id_", "id"] {
            if let Some(n) = body.strip_prefix(prefix) {
                if let Ok(id) = n.parse::<u32>() {
                    return Some(Self::Id(id));
                }
            }
        }
        if body.is_empty() || body.contains(char::is_whitespace) {
            return None;
        }
        Some(Self::Name(body.to_owned()))
    }
}

/// Resolves theme references to literal value strings.
///
/// Implementations return the literal as it would have been written in a style,
/// for example `"#FF0000"` or `"16px"`; the caller parses it.
pub trait ThemeStore: Send + Sync {
    /// Look up a reference. `None` means the store has no such entry.
    fn resolve(&self, reference: &ThemeRef) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Map-backed [`ThemeStore`], deserializable from a JSON document.
pub struct StaticTheme {
    /// Numeric resource ids.
    pub ids: BTreeMap<u32, String>,
    /// Named constants, without the leading `@`.
    pub names: BTreeMap<String, String>,
}

impl StaticTheme {
    /// Add or replace a named constant.
    pub fn with_name(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.names.insert(name.into(), value.into());
        self
    }

    /// Add or replace a numeric constant.
    pub fn with_id(mut self, id: u32, value: impl Into<String>) -> Self {
        self.ids.insert(id, value.into());
        self
    }
}

impl ThemeStore for StaticTheme {
    fn resolve(&self, reference: &ThemeRef) -> Option<String> {
        match reference {
            ThemeRef::Id(id) => self.ids.get(id).cloned(),
            ThemeRef::Name(name) => self.names.get(name).cloned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
