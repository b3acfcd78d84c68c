//! Screen-scoped list view-model.
//!
//! A [`ListView`] owns everything one list screen shows: the owner whose
//! items are listed, the fetched items, the filter and sort the user picked,
//! and the loading state. Fetches are tracked with [`FetchTicket`]s so a
//! response that arrives after a newer fetch was started is dropped instead
//! of overwriting fresher data.

use std::fmt::Display;

use shelf_core::{
    Aggregation, CatalogItem, ExportError, FilterState, SortSpec, aggregate, export_items,
    visible_items,
};
use shelf_db::ItemStore;

/// Prefix of the message shown when a fetch fails; the error follows it.
pub const FETCH_FAILED_MESSAGE: &str = "Could not load items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded,
}

/// Proof that a fetch was started, checked when its result arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct ListView<T: CatalogItem> {
    owner_id: String,
    items: Vec<T>,
    filter: FilterState<T::Field>,
    sort: SortSpec<T::Field>,
    state: ViewState,
    message: Option<String>,
    generation: u64,
}

impl<T: CatalogItem> ListView<T> {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            items: Vec::new(),
            filter: FilterState::new(),
            sort: SortSpec::default(),
            state: ViewState::Loading,
            message: None,
            generation: 0,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Switch to another owner. Items already fetched belong to the old
    /// owner and are dropped; any fetch in flight becomes stale.
    pub fn set_owner(&mut self, owner_id: impl Into<String>) {
        self.owner_id = owner_id.into();
        self.items.clear();
        self.message = None;
        self.state = ViewState::Loading;
        self.generation += 1;
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// User-visible message from the last failed fetch.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Every fetched item, unfiltered.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> &FilterState<T::Field> {
        &self.filter
    }

    pub fn set_filter(&mut self, field: T::Field, value: impl Into<String>) {
        self.filter.set(field, value);
    }

    pub fn sort(&self) -> &SortSpec<T::Field> {
        &self.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec<T::Field>) {
        self.sort = sort;
    }

    /// Clear the filter and restore the default sort.
    pub fn reset(&mut self) {
        self.filter.clear();
        self.sort = SortSpec::default();
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result if `ticket` is the latest one issued.
    ///
    /// Returns `false` when the result was stale and dropped. A failed fetch
    /// leaves an empty list and a user-visible message.
    pub fn finish_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, E>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale {} fetch (generation {}, current {})",
                T::KIND,
                ticket.generation,
                self.generation
            );
            return false;
        }
        match result {
            Ok(items) => {
                log::debug!("Fetched {} {} for {}", items.len(), T::KIND, self.owner_id);
                self.items = items;
                self.message = None;
            }
            Err(e) => {
                log::debug!("Failed to fetch {} for {}: {}", T::KIND, self.owner_id, e);
                self.items.clear();
                self.message = Some(format!("{FETCH_FAILED_MESSAGE}: {e}"));
            }
        }
        self.state = ViewState::Loaded;
        true
    }

    /// Fetch this owner's items from `store` and apply them.
    pub fn refresh<S: ItemStore>(&mut self, store: &S) {
        let ticket = self.begin_fetch();
        let result = store.fetch_all::<T>(&self.owner_id);
        self.finish_fetch(ticket, result);
    }

    /// The list as displayed: filtered, then sorted.
    pub fn visible(&self) -> Vec<T> {
        visible_items(&self.items, &self.filter, &self.sort)
    }

    /// `true` once loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.state == ViewState::Loaded && self.visible().is_empty()
    }

    /// Category counts over every fetched item for the statistics chart.
    pub fn aggregate(&self, field: T::Field) -> Aggregation {
        aggregate(&self.items, field)
    }

    /// CSV text of the visible list.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        export_items(&self.visible())
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
