use crate::config::RouterConfig;
use crate::domain::route::{RouteDescriptor, RouteTable};
use crate::services::error_handling::NavigationError;
use crate::services::history::{History, MemoryHistory};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where to navigate: a URL path or a route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(String),
    Name(String),
}

impl Location {
    /// The location exactly as the caller gave it.
    pub fn as_str(&self) -> &str {
        match self {
            Location::Path(path) => path,
            Location::Name(name) => name,
        }
    }

    /// Strings starting with `/` are paths, anything else is a route name.
    pub fn parse(location: &str) -> Self {
        if location.starts_with('/') {
            Location::Path(location.to_string())
        } else {
            Location::Name(location.to_string())
        }
    }
}

impl From<&str> for Location {
    fn from(location: &str) -> Self {
        Location::parse(location)
    }
}

impl From<String> for Location {
    fn from(location: String) -> Self {
        Location::parse(&location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "path {path}"),
            Location::Name(name) => write!(f, "route named {name:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Unresolved,
    Resolved(RouteDescriptor),
    /// Raw path or name that matched nothing
    NotFound(String),
}

/// Matches locations against a shared route table and tracks the current view.
pub struct Navigator<H: History = MemoryHistory> {
    table: Arc<RouteTable>,
    config: RouterConfig,
    state: NavigationState,
    history: H,
}

impl Navigator<MemoryHistory> {
    pub fn new(table: Arc<RouteTable>, config: RouterConfig) -> Self {
        Self::with_history(table, config, MemoryHistory::new())
    }
}

impl<H: History> Navigator<H> {
    pub fn with_history(table: Arc<RouteTable>, config: RouterConfig, history: H) -> Self {
        Self {
            table,
            config,
            state: NavigationState::Unresolved,
            history,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current(&self) -> Option<&RouteDescriptor> {
        match &self.state {
            NavigationState::Resolved(route) => Some(route),
            _ => None,
        }
    }

    /// Look up a location without changing state.
    pub fn resolve(&self, location: &Location) -> Result<&RouteDescriptor, NavigationError> {
        let found = match location {
            Location::Path(url) => self
                .route_path(url)
                .and_then(|path| self.table.find_by_path(&path)),
            Location::Name(name) => self.table.find_by_name(name),
        };

        found.ok_or_else(|| NavigationError::NoMatch {
            location: location.clone(),
        })
    }

    /// Full URL of a named route, including the base URL.
    pub fn href(&self, name: &str) -> Result<String, NavigationError> {
        let route = self.resolve(&Location::Name(name.to_string()))?;
        let base = self.config.base_url.trim_end_matches('/');
        Ok(format!("{}{}", base, route.path))
    }

    pub fn navigate(
        &mut self,
        location: impl Into<Location>,
    ) -> Result<&RouteDescriptor, NavigationError> {
        let location = location.into();

        let Some(index) = self.position(&location) else {
            warn!(%location, "no route matches");
            self.state = NavigationState::NotFound(location.as_str().to_string());
            return Err(NavigationError::NoMatch { location });
        };

        let route = &self.table.routes()[index];
        debug!(
            from = self.current().map(|r| r.name.as_str()),
            to = %route.name,
            "navigated"
        );
        self.history.push(route.path.clone());
        self.state = NavigationState::Resolved(route.clone());
        Ok(&self.table.routes()[index])
    }

    pub fn back(&mut self) -> Result<&RouteDescriptor, NavigationError> {
        let path = self
            .history
            .back()
            .map(str::to_string)
            .ok_or(NavigationError::HistoryExhausted { direction: "back" })?;
        self.restore(path)
    }

    pub fn forward(&mut self) -> Result<&RouteDescriptor, NavigationError> {
        let path = self
            .history
            .forward()
            .map(str::to_string)
            .ok_or(NavigationError::HistoryExhausted { direction: "forward" })?;
        self.restore(path)
    }

    // History entries are table paths already, so they skip base handling.
    fn restore(&mut self, path: String) -> Result<&RouteDescriptor, NavigationError> {
        let index = self
            .table
            .iter()
            .position(|route| route.path == path)
            .ok_or(NavigationError::NoMatch {
                location: Location::Path(path),
            })?;

        let route = &self.table.routes()[index];
        debug!(to = %route.name, "restored from history");
        self.state = NavigationState::Resolved(route.clone());
        Ok(&self.table.routes()[index])
    }

    fn position(&self, location: &Location) -> Option<usize> {
        let route = self.resolve(location).ok()?;
        self.table.iter().position(|r| std::ptr::eq(r, route))
    }

    /// Turn an incoming URL into a table path: drop query and fragment,
    /// strip the base URL and any trailing slash. `None` when the URL lies
    /// outside the base.
    fn route_path(&self, url: &str) -> Option<String> {
        let url = url.split(['?', '#']).next().unwrap_or_default();

        let base = self.config.base_url.as_str();
        let relative = if base == "/" {
            url.to_string()
        } else if url.eq_ignore_ascii_case(base.trim_end_matches('/')) {
            "/".to_string()
        } else {
            format!("/{}", strip_prefix_ignore_case(url, base)?)
        };

        let trimmed = relative.trim_end_matches('/');
        Some(if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        })
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
