//! In-process path router.
//!
//! Screens are addressed by path strings (`/`, `/details/{id}`) so that
//! components only need to know the path they navigate to.

use tracing::{debug, warn};

/// A resolved screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The paginated coin table.
    Home,
    /// Detail screen for one coin id.
    Details(String),
    /// Any path no screen is registered for.
    NotFound(String),
}

impl Route {
    /// Resolves a path into a route.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        match trimmed.strip_prefix("/details/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Details(id.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Returns the canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Details(id) => details_path(id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Path of the detail screen for `id`.
pub fn details_path(id: &str) -> String {
    format!("/details/{id}")
}

/// Navigation history with the current route on top.
#[derive(Debug)]
pub struct Router {
    history: Vec<Route>,
}

impl Router {
    /// Creates a router positioned at `/`.
    pub fn new() -> Self {
        Self {
            history: vec![Route::Home],
        }
    }

    /// Pushes the route for `path`.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        if let Route::NotFound(_) = route {
            warn!(path, "Navigating to unknown path");
        } else {
            debug!(path, "Navigating");
        }
        self.history.push(route);
    }

    /// Pops back to the previous route. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty: `back` keeps the root entry
        &self.history[self.history.len() - 1]
    }

    /// Path of the current route.
    pub fn current_path(&self) -> String {
        self.current().path()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
