//! Drag-and-drop between the result list and the favorites list.
//!
//! The drag widget reports one event per drop: where the card came from,
//! where it landed (if anywhere) and the id of the dragged property.
//! [`resolve`] turns that into a [`DropAction`] without looking at any
//! earlier event.

use crate::catalog::Catalog;
use crate::error::{PropsearchError, Result};
use crate::model::Property;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    PropertyList,
    FavoritesList,
}

impl Zone {
    pub fn id(&self) -> &'static str {
        match self {
            Zone::PropertyList => "propertyList",
            Zone::FavoritesList => "favoritesList",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Zone {
    type Err = PropsearchError;

    /// Accepts the widget ids (`propertyList`, `favoritesList`) and the
    /// shorthands `results`/`list` and `favorites`/`favs`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "propertylist" | "results" | "list" => Ok(Zone::PropertyList),
            "favoriteslist" | "favouriteslist" | "favorites" | "favourites" | "favs" => {
                Ok(Zone::FavoritesList)
            }
            _ => Err(PropsearchError::UnknownZone(s.to_string())),
        }
    }
}

/// A finished drag. `destination` is `None` when the card was dropped outside every zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: Zone,
    pub destination: Option<Zone>,
    pub draggable_id: String,
}

impl DragEnd {
    pub fn new(source: Zone, destination: Option<Zone>, draggable_id: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            draggable_id: draggable_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Dropped outside any zone.
    Cancelled,
    /// Moved within its own zone; ordering is not tracked.
    Reordered,
    AddFavorite(Property),
    RemoveFavorite(String),
    /// Dropped into favorites but the id is not in the catalog.
    UnknownProperty(String),
}

pub fn resolve(event: &DragEnd, catalog: &Catalog) -> DropAction {
    let Some(destination) = event.destination else {
        return DropAction::Cancelled;
    };

    match (event.source, destination) {
        (Zone::PropertyList, Zone::FavoritesList) => match catalog.get(&event.draggable_id) {
            Some(property) => DropAction::AddFavorite(property.clone()),
            None => DropAction::UnknownProperty(event.draggable_id.clone()),
        },
        (Zone::FavoritesList, Zone::PropertyList) => {
            DropAction::RemoveFavorite(event.draggable_id.clone())
        }
        (Zone::PropertyList, Zone::PropertyList) | (Zone::FavoritesList, Zone::FavoritesList) => {
            DropAction::Reordered
        }
    }
}
