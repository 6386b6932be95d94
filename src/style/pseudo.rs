use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Interaction-state bitmask. The empty set (`NORMAL`) is the baseline.
    ///
    /// `Ord` follows the raw bits, so cached layers iterate in ascending mask order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct PseudoState: u32 {
        /// No interaction state.
        const NORMAL = 0;
        /// Pressed.
        const ACTIVE = 1;
        /// Disabled.
        const DISABLED = 1 << 1;
        /// Focused.
        const FOCUS = 1 << 2;
        /// Checked.
        const CHECKED = 1 << 3;
        /// Waiting (busy).
        const WAITING = 1 << 4;
    }
}

impl Default for PseudoState {
    fn default() -> Self {
        PseudoState::NORMAL
    }
}

const MARKERS: [(&str, PseudoState); 5] = [
    (":active", PseudoState::ACTIVE),
    (":disabled", PseudoState::DISABLED),
    (":focus", PseudoState::FOCUS),
    (":checked", PseudoState::CHECKED),
    (":waiting", PseudoState::WAITING),
];

/// Split `"backgroundColor:active:focus"` into `("backgroundColor", ACTIVE | FOCUS)`.
///
/// Returns `None` for a key that carries a `:` but no recognized marker.
pub fn split_pseudo_key(raw: &str) -> Option<(&str, PseudoState)> {
    let Some(colon) = raw.find(':') else {
        return Some((raw, PseudoState::NORMAL));
    };
    let state = MARKERS
        .iter()
        .filter(|(marker, _)| raw.contains(marker))
        .fold(PseudoState::NORMAL, |acc, (_, s)| acc | *s);
    (!state.is_empty()).then(|| (&raw[..colon], state))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Style declarations in first-declaration order; redeclaring a key overwrites in place.
pub struct StyleDecls {
    entries: Vec<(String, String)>,
}

impl StyleDecls {
    /// Insert or overwrite `key`.
    pub fn upsert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => value.clone_into(v),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }

    /// Value declared for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
/// Per-bitmask style declarations of one node.
pub struct PseudoClassCache {
    cached: PseudoState, // never cleared
    maps: BTreeMap<PseudoState, StyleDecls>,
}

impl PseudoClassCache {
    /// Record a declaration; returns the bitmask it was filed under.
    ///
    /// Keys without a marker are filed under `NORMAL`.
    pub fn cache_style(&mut self, raw_key: &str, value: &str) -> Option<PseudoState> {
        let Some((key, state)) = split_pseudo_key(raw_key) else {
            tracing::trace!(key = raw_key, "unsupported pseudo class");
            return None;
        };
        self.cached |= state;
        self.maps.entry(state).or_default().upsert(key, value);
        Some(state)
    }

    /// Union of every bitmask ever declared.
    pub fn cached_mask(&self) -> PseudoState {
        self.cached
    }

    /// Any pseudo-class declaration was seen.
    pub fn has_pseudo(&self) -> bool {
        !self.cached.is_empty()
    }

    /// A declaration involving `state` was seen.
    pub fn declares(&self, state: PseudoState) -> bool {
        self.cached.contains(state)
    }

    /// Declarations filed under exactly `state`.
    pub fn get(&self, state: PseudoState) -> Option<&StyleDecls> {
        self.maps.get(&state)
    }

    /// Best entry for `status`: exact match, else the largest `mask & status`.
    ///
    /// Ties go to the lowest mask. `None` when nothing overlaps.
    pub fn select(&self, status: PseudoState) -> Option<PseudoState> {
        if self.maps.contains_key(&status) {
            return Some(status);
        }
        let mut best: Option<(u32, PseudoState)> = None;
        for mask in self.maps.keys() {
            let overlap = mask.intersection(status).bits();
            if overlap > best.map_or(0, |(o, _)| o) {
                best = Some((overlap, *mask));
            }
        }
        best.map(|(_, mask)| mask)
    }

    /// Cached maps in ascending bitmask order.
    pub fn iter(&self) -> impl Iterator<Item = (PseudoState, &StyleDecls)> {
        self.maps.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/pseudo.rs"]
mod tests;
