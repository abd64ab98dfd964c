//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and owns the
//! session state: the catalog, the favorites set, and the last submitted
//! criteria with its result list.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (zone names, routes, criteria edits)
//! - **Returns structured types** (`CmdResult`)
//!
//! It does no printing and no formatting; that is the CLI's job.
//!
//! ## Generic Over KeyValueStore
//!
//! `PropsearchApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `PropsearchApi<FileStore>`
//! - Testing: `PropsearchApi<InMemoryStore>`
//!
//! ## Session Lifecycle
//!
//! Construction reads both store slots once. The result list starts as the
//! catalog filtered by the restored criteria, so a reopened session shows
//! what the previous one last searched for.

use crate::catalog::Catalog;
use crate::commands;
use crate::criteria::{CriteriaUpdate, SearchCriteria};
use crate::dnd::{DragEnd, Zone};
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::model::Property;
use crate::route::Route;
use crate::store::KeyValueStore;
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for propsearch operations.
#[derive(Debug)]
pub struct PropsearchApi<S: KeyValueStore> {
    store: S,
    catalog: Catalog,
    favorites: FavoriteSet,
    criteria: SearchCriteria,
    results: Vec<Property>,
    data_dir: PathBuf,
}

impl<S: KeyValueStore> PropsearchApi<S> {
    pub fn new(store: S, catalog: Catalog, data_dir: PathBuf) -> Self {
        let favorites = FavoriteSet::load(&store);
        let criteria = commands::search::load_criteria(&store);
        let results = commands::search::filter(catalog.properties(), &criteria);
        Self {
            store,
            catalog,
            favorites,
            criteria,
            results,
            data_dir,
        }
    }

    pub fn home(&self) -> CmdResult {
        commands::home::run(
            &self.catalog,
            &self.favorites,
            &self.criteria,
            self.results.len(),
        )
    }

    /// Current result list without submitting anything.
    pub fn results(&self) -> CmdResult {
        let mut result = CmdResult::default().with_listed_properties(self.results.clone());
        if self.criteria.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "Showing all {} properties",
                self.catalog.len()
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "{} of {} properties, {} filter(s) active",
                self.results.len(),
                self.catalog.len(),
                self.criteria.active_filters()
            )));
        }
        result
    }

    /// Submits `criteria` as is.
    pub fn search(&mut self, criteria: SearchCriteria) -> CmdResult {
        let result = commands::search::run(&mut self.store, &self.catalog, &criteria);
        self.results = result.listed_properties.clone();
        self.criteria = criteria;
        result
    }

    /// Applies `updates` in order, starting from the last submitted criteria
    /// when `refine` is set and from the unconstrained criteria otherwise,
    /// then submits. Rejected edits are reported and skipped.
    pub fn search_with(&mut self, updates: Vec<CriteriaUpdate>, refine: bool) -> CmdResult {
        let mut criteria = if refine {
            self.criteria.clone()
        } else {
            SearchCriteria::default()
        };

        let mut rejected = Vec::new();
        for update in updates {
            if !criteria.apply(update.clone()) {
                rejected.push(CmdMessage::warning(format!(
                    "Ignored {}: minimum would exceed maximum",
                    describe(&update)
                )));
            }
        }

        let mut result = self.search(criteria);
        rejected.append(&mut result.messages);
        result.messages = rejected;
        result
    }

    pub fn reset(&mut self) -> CmdResult {
        self.search(SearchCriteria::default())
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn show(&self, id: &str) -> CmdResult {
        commands::view::run(&self.catalog, id)
    }

    /// Resolves a path such as `/property/prop1` to its view.
    pub fn open(&self, path: &str) -> Result<CmdResult> {
        Ok(match Route::from_str(path)? {
            Route::Home => self.home(),
            Route::Search => self.results(),
            Route::Property(id) => self.show(&id),
        })
    }

    pub fn locations(&self) -> CmdResult {
        commands::view::locations(&self.catalog)
    }

    pub fn favorites(&self) -> CmdResult {
        commands::favorites::list(&self.favorites)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> CmdResult {
        commands::favorites::toggle_by_id(&mut self.store, &self.catalog, &mut self.favorites, id)
    }

    pub fn add_favorite(&mut self, id: &str) -> CmdResult {
        commands::favorites::add_by_id(&mut self.store, &self.catalog, &mut self.favorites, id)
    }

    pub fn remove_favorite(&mut self, id: &str) -> CmdResult {
        commands::favorites::remove(&mut self.store, &mut self.favorites, id)
    }

    pub fn clear_favorites(&mut self) -> CmdResult {
        commands::favorites::clear(&mut self.store, &mut self.favorites)
    }

    pub fn drag_end(&mut self, event: &DragEnd) -> CmdResult {
        commands::drag::run(&mut self.store, &self.catalog, &mut self.favorites, event)
    }

    /// [`drag_end`](Self::drag_end) from zone names; `None` is a drop outside every zone.
    pub fn drag(&mut self, source: &str, destination: Option<&str>, id: &str) -> Result<CmdResult> {
        let source = Zone::from_str(source)?;
        let destination = destination.map(Zone::from_str).transpose()?;
        Ok(self.drag_end(&DragEnd::new(source, destination, id)))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

fn describe(update: &CriteriaUpdate) -> &'static str {
    match update {
        CriteriaUpdate::SetPriceRange { .. } => "price range",
        CriteriaUpdate::SetMinPrice(_) => "minimum price",
        CriteriaUpdate::SetMaxPrice(_) => "maximum price",
        CriteriaUpdate::SetBedroomRange { .. } => "bedroom range",
        CriteriaUpdate::SetMinBedrooms(_) => "minimum bedrooms",
        CriteriaUpdate::SetMaxBedrooms(_) => "maximum bedrooms",
        CriteriaUpdate::SetDateRange { .. } => "date range",
        CriteriaUpdate::SetType(_) => "type",
        CriteriaUpdate::SetLocation(_) => "location",
        CriteriaUpdate::Reset => "reset",
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, HomeSummary, MessageLevel};
