// SPDX-License-Identifier: MPL-2.0
//! Client-side routes between the portfolio and its documentation.

use std::fmt;

/// Pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Portfolio,
    Documentation,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Portfolio => "/portfolio",
            Route::Documentation => "/documentation",
        }
    }

    /// Resolves a path. `/` redirects to the portfolio, and so does any path
    /// that names no page.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" | "/portfolio" | "portfolio" => Route::Portfolio,
            "/documentation" | "documentation" => Route::Documentation,
            _ => {
                tracing::warn!(path = trimmed, "unknown route, showing the portfolio");
                Route::Portfolio
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_portfolio() {
        assert_eq!(Route::parse("/"), Route::Portfolio);
        assert_eq!(Route::parse(""), Route::Portfolio);
    }

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::parse("/portfolio"), Route::Portfolio);
        assert_eq!(Route::parse("/documentation"), Route::Documentation);
        assert_eq!(Route::parse("/documentation/"), Route::Documentation);
        assert_eq!(Route::parse("documentation"), Route::Documentation);
    }

    #[test]
    fn unknown_paths_fall_back_to_portfolio() {
        assert_eq!(Route::parse("/blog"), Route::Portfolio);
        assert_eq!(Route::parse("/portfolio/extra"), Route::Portfolio);
    }

    #[test]
    fn display_uses_the_path() {
        assert_eq!(Route::Documentation.to_string(), "/documentation");
        assert_eq!(Route::parse(Route::Portfolio.path()), Route::Portfolio);
    }
}
