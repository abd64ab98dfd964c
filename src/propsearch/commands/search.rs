use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::criteria::SearchCriteria;
use crate::model::Property;
use crate::store::{KeyValueStore, CRITERIA_KEY};
use tracing::{debug, warn};

/// Properties that satisfy `criteria`, in catalog order.
pub fn filter(catalog: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    catalog
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// The last submitted criteria, or the unconstrained criteria when the slot
/// is missing, corrupt, or holds out-of-order bounds.
pub fn load_criteria<S: KeyValueStore>(store: &S) -> SearchCriteria {
    let criteria: SearchCriteria = store.get(CRITERIA_KEY, SearchCriteria::default());
    if !criteria.is_valid() {
        warn!(?criteria, "stored criteria has inverted bounds, ignoring it");
        return SearchCriteria::default();
    }
    criteria
}

/// Submits a search: remembers the criteria and returns the matching listings.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    catalog: &Catalog,
    criteria: &SearchCriteria,
) -> CmdResult {
    store.set(CRITERIA_KEY, criteria);
    let results = filter(catalog.properties(), criteria);
    debug!(
        results = results.len(),
        active_filters = criteria.active_filters(),
        "search submitted"
    );

    let summary = match (results.len(), catalog.len()) {
        (n, total) if n == total => format!("Showing all {} properties", total),
        (1, total) => format!("1 of {} properties matches", total),
        (n, total) => format!("{} of {} properties match", n, total),
    };
    CmdResult::default()
        .with_listed_properties(results)
        .with_message(CmdMessage::info(summary))
}
