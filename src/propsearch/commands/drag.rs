use crate::catalog::Catalog;
use crate::commands::{favorites, CmdMessage, CmdResult};
use crate::dnd::{resolve, DragEnd, DropAction};
use crate::favorites::FavoriteSet;
use crate::store::KeyValueStore;
use tracing::debug;

/// Handles one drag-end event. Only list<->favorites drops change state.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    catalog: &Catalog,
    favs: &mut FavoriteSet,
    event: &DragEnd,
) -> CmdResult {
    let action = resolve(event, catalog);
    debug!(?event, ?action, "drag ended");

    match action {
        DropAction::Cancelled => {
            CmdResult::default().with_message(CmdMessage::info("Dropped outside a list, nothing changed"))
        }
        DropAction::Reordered => CmdResult::default(),
        DropAction::AddFavorite(property) => favorites::add(store, favs, property),
        DropAction::RemoveFavorite(id) => favorites::remove(store, favs, &id),
        DropAction::UnknownProperty(id) => CmdResult::default()
            .with_message(CmdMessage::warning(format!("Property not found: {}", id))),
    }
}
