use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

/// Detail view for one listing. An id that is not in the catalog yields a
/// "not found" message rather than an error.
pub fn run(catalog: &Catalog, id: &str) -> CmdResult {
    match catalog.get(id) {
        Some(property) => CmdResult::default().with_detail(property.clone()),
        None => {
            CmdResult::default().with_message(CmdMessage::warning(format!("Property not found: {}", id)))
        }
    }
}

pub fn locations(catalog: &Catalog) -> CmdResult {
    CmdResult::default().with_locations(catalog.locations())
}
