use crate::catalog::Catalog;
use crate::commands::{CmdResult, HomeSummary};
use crate::criteria::SearchCriteria;
use crate::favorites::FavoriteSet;

pub fn run(
    catalog: &Catalog,
    favorites: &FavoriteSet,
    criteria: &SearchCriteria,
    results: usize,
) -> CmdResult {
    CmdResult::default().with_home(HomeSummary {
        listings: catalog.len(),
        locations: catalog.locations().len(),
        favorites: favorites.len(),
        active_filters: criteria.active_filters(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaUpdate;
    use crate::model::PropertyType;

    #[test]
    fn summarises_session() {
        let catalog = Catalog::bundled().unwrap();
        let mut favorites = FavoriteSet::new();
        favorites.add(catalog.get("prop1").unwrap().clone());
        let criteria =
            SearchCriteria::default().with(CriteriaUpdate::SetType(Some(PropertyType::Flat)));

        let summary = run(&catalog, &favorites, &criteria, 3).home.unwrap();
        assert_eq!(summary.listings, catalog.len());
        assert_eq!(summary.favorites, 1);
        assert_eq!(summary.active_filters, 1);
        assert_eq!(summary.results, 3);
    }
}
