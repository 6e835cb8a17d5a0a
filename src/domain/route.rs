use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;

/// Identifier of a renderable view. The table never owns the view itself,
/// it only names it; a `ViewRegistry` maps the identifier to something loadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL path used as the matching key
    pub path: String,

    /// Symbolic name for programmatic navigation
    pub name: String,

    pub view: ViewId,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }
}

/// Ordered list of route descriptors. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn from_routes(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn iter(&self) -> slice::Iter<'_, RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Exact lookup on an already-normalized path.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(path))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Serialize for diagnostics. Order is preserved.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDescriptor;
    type IntoIter = slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
