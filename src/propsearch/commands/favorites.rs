//! Favorites mutations. Each one writes the resulting set to the store,
//! whether or not the membership changed.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoriteSet;
use crate::model::Property;
use crate::store::KeyValueStore;

pub fn list(favorites: &FavoriteSet) -> CmdResult {
    let result = CmdResult::default().with_listed_properties(favorites.as_slice().to_vec());
    if favorites.is_empty() {
        return result.with_message(CmdMessage::info(
            "No favorites yet. Drag a property here or use `fav add <id>`.",
        ));
    }
    result
}

pub fn toggle<S: KeyValueStore>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    property: &Property,
) -> CmdResult {
    let now_favorite = favorites.toggle(property);
    favorites.save(store);

    let verb = if now_favorite {
        "Added to"
    } else {
        "Removed from"
    };
    CmdResult::default().with_message(CmdMessage::success(format!(
        "{} favorites: {} ({})",
        verb, property.location, property.id
    )))
}

pub fn add<S: KeyValueStore>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    property: Property,
) -> CmdResult {
    let id = property.id.clone();
    let location = property.location.clone();
    let added = favorites.add(property);
    favorites.save(store);

    let message = if added {
        CmdMessage::success(format!("Added to favorites: {} ({})", location, id))
    } else {
        CmdMessage::info(format!("Already a favorite: {}", id))
    };
    CmdResult::default().with_message(message)
}

pub fn remove<S: KeyValueStore>(store: &mut S, favorites: &mut FavoriteSet, id: &str) -> CmdResult {
    let removed = favorites.remove(id);
    favorites.save(store);

    let message = if removed {
        CmdMessage::success(format!("Removed from favorites: {}", id))
    } else {
        CmdMessage::info(format!("Not a favorite: {}", id))
    };
    CmdResult::default().with_message(message)
}

pub fn clear<S: KeyValueStore>(store: &mut S, favorites: &mut FavoriteSet) -> CmdResult {
    let removed = favorites.clear();
    favorites.save(store);

    let message = match removed {
        0 => CmdMessage::info("Favorites already empty"),
        1 => CmdMessage::success("Cleared 1 favorite"),
        n => CmdMessage::success(format!("Cleared {} favorites", n)),
    };
    CmdResult::default().with_message(message)
}

/// Looks `id` up in the catalog before toggling; unknown ids only produce a warning.
pub fn toggle_by_id<S: KeyValueStore>(
    store: &mut S,
    catalog: &Catalog,
    favorites: &mut FavoriteSet,
    id: &str,
) -> CmdResult {
    match catalog.get(id) {
        Some(property) => toggle(store, favorites, property),
        None if favorites.contains(id) => remove(store, favorites, id),
        None => not_found(id),
    }
}

pub fn add_by_id<S: KeyValueStore>(
    store: &mut S,
    catalog: &Catalog,
    favorites: &mut FavoriteSet,
    id: &str,
) -> CmdResult {
    match catalog.get(id) {
        Some(property) => add(store, favorites, property.clone()),
        None => not_found(id),
    }
}

fn not_found(id: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!("Property not found: {}", id)))
}
