use super::route::ViewId;
use std::collections::HashMap;

/// Maps view identifiers to loadable view units.
///
/// The core is generic over what a "view" is: the Dioxus shell registers
/// component functions, tests can register plain markers.
#[derive(Debug, Clone)]
pub struct ViewRegistry<V> {
    views: HashMap<ViewId, V>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view, returning the previous unit bound to the same id.
    pub fn register(&mut self, id: impl Into<ViewId>, view: V) -> Option<V> {
        self.views.insert(id.into(), view)
    }

    pub fn with(mut self, id: impl Into<ViewId>, view: V) -> Self {
        self.register(id, view);
        self
    }

    pub fn resolve(&self, id: &ViewId) -> Option<&V> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
