use smallvec::SmallVec;

use crate::style::pseudo::{PseudoClassCache, PseudoState, StyleDecls};

/// Layers to apply, in order, after the node's defaults are restored.
#[derive(Clone, Debug)]
pub struct CascadePlan<'a> {
    /// Status the plan was computed for.
    pub status: PseudoState,
    /// Bitmask whose declarations win, if any.
    pub selected: Option<PseudoState>,
    layers: SmallVec<[&'a StyleDecls; 2]>,
}

impl<'a> CascadePlan<'a> {
    /// Declarations in application order. Later entries override earlier ones.
    pub fn declarations(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.layers.iter().copied().flat_map(StyleDecls::iter)
    }

    /// Number of layers (0, 1 or 2).
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

/// Select the layers for `status`: normal first when `status` is not normal,
/// then the best matching entry.
pub fn plan(cache: &PseudoClassCache, status: PseudoState) -> CascadePlan<'_> {
    let selected = cache.select(status);
    let mut layers = SmallVec::new();
    if !status.is_empty() {
        if let Some(normal) = cache.get(PseudoState::NORMAL) {
            layers.push(normal);
        }
    }
    if let Some(decls) = selected.and_then(|s| cache.get(s)) {
        layers.push(decls);
    }
    CascadePlan {
        status,
        selected,
        layers,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/cascade.rs"]
mod tests;
