//! The three addressable views: `/`, `/search` and `/property/:id`.

use crate::error::{PropsearchError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Property(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Search => write!(f, "/search"),
            Route::Property(id) => write!(f, "/property/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = PropsearchError;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["search"] => Ok(Route::Search),
            ["property", id] => Ok(Route::Property((*id).to_string())),
            _ => Err(PropsearchError::UnknownRoute(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/search".parse::<Route>().unwrap(), Route::Search);
        assert_eq!("/search/".parse::<Route>().unwrap(), Route::Search);
        assert_eq!(
            "/property/prop7".parse::<Route>().unwrap(),
            Route::Property("prop7".into())
        );
        assert_eq!(
            "/property/prop7?tab=map".parse::<Route>().unwrap(),
            Route::Property("prop7".into())
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!("/property".parse::<Route>().is_err());
        assert!("/about".parse::<Route>().is_err());
        assert!("/property/a/b".parse::<Route>().is_err());
    }

    #[test]
    fn display_roundtrips() {
        for route in [Route::Home, Route::Search, Route::Property("x".into())] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }
}
