use std::collections::HashMap;

/// Key to handler lookup built once from a static entry list.
#[derive(Debug)]
pub(crate) struct PropertyTable<F: 'static> {
    entries: HashMap<&'static str, F>,
}

impl<F: Copy + 'static> PropertyTable<F> {
    pub(crate) fn new(entries: &[(&'static str, F)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for (key, handler) in entries {
            let previous = map.insert(*key, *handler);
            debug_assert!(previous.is_none(), "duplicate property key {key}");
        }
        Self { entries: map }
    }

    pub(crate) fn get(&self, key: &str) -> Option<F> {
        self.entries.get(key).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/table.rs"]
mod tests;
