//! The directory session.
//!
//! Owns the catalog, the filter selection, the derived per-item state,
//! the pagination window, and the history sink, and wires them into an
//! explicit cascade: mutate -> recompute -> resort -> re-encode the
//! URL. Subscribers observe each stage through [`SessionEvent`]s.
//!
//! All of it is synchronous and single-threaded; a mutation runs the
//! whole cascade to completion before returning.

use crate::catalog::{Catalog, Item};
use crate::config::DirectoryConfig;
use crate::engine::{self, ItemState};
use crate::selection::Selection;
use crate::urlsync::{self, History, MemoryHistory};
use crate::window::{self, PageWindow};

/// Published after each stage of the mutation cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The filter selection was mutated
    SelectionChanged,
    /// Active flags and scores were rebuilt
    Recomputed { active: usize },
    /// The visible window changed (recompute or load-more)
    WindowChanged { visible: usize },
    /// A new query string was pushed to history
    QueryChanged(String),
    /// Bootstrap finished; the skeleton state is over
    Ready,
}

type Subscriber = Box<dyn FnMut(&SessionEvent)>;

/// One page's worth of engine state, owned in a single object.
pub struct Session {
    catalog: Catalog,
    selection: Selection,
    window: PageWindow,
    states: Vec<ItemState>,
    /// Ranked indices of the currently active items
    order: Vec<usize>,
    ready: bool,
    history: Box<dyn History>,
    subscribers: Vec<Subscriber>,
}

impl Session {
    /// Create a session with an in-memory history.
    pub fn new(catalog: Catalog, config: &DirectoryConfig) -> Self {
        Self::with_history(catalog, config, Box::new(MemoryHistory::new()))
    }

    /// Create a session writing URL updates to the given history sink.
    /// The sink's current query seeds the initial selection at
    /// [`Session::bootstrap`] time.
    pub fn with_history(
        catalog: Catalog,
        config: &DirectoryConfig,
        history: Box<dyn History>,
    ) -> Self {
        let states = vec![ItemState::default(); catalog.len()];
        Self {
            catalog,
            selection: Selection::new(),
            window: PageWindow::new(config.pagination.initial_page_size, config.pagination.step),
            states,
            order: Vec::new(),
            ready: false,
            history,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback for cascade events.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SessionEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// First-render initialization: run the initial activation pass,
    /// restore the selection from the current URL, fall back to
    /// "everything selected" when the URL carries no filter at all,
    /// then apply filters for real and leave the skeleton state.
    pub fn bootstrap(&mut self) {
        self.activate_initial();

        let initial = self.history.current().to_string();
        self.selection = urlsync::decode(&initial, &self.catalog);

        if self.selection.is_empty() {
            self.selection.set_regions(self.catalog.region_slugs());
            self.selection.set_categories(self.catalog.category_slugs());
            self.sync_url();
        }

        self.recompute();
        self.ready = true;
        self.emit(&SessionEvent::Ready);
    }

    /// Mark the first page of catalog items active so the first render
    /// has something to show behind the skeleton. Superseded by the
    /// first real filter application.
    fn activate_initial(&mut self) {
        let count = self.catalog.len().min(self.window.page_size());
        for state in self.states.iter_mut().take(count) {
            state.active = true;
        }
        self.order = (0..count).collect();
    }

    /// Toggle a region slug. Unknown slugs are a silent no-op.
    /// Returns whether the selection changed.
    pub fn toggle_region(&mut self, slug: &str) -> bool {
        if !self.catalog.is_known_region(slug) {
            return false;
        }
        self.selection.toggle_region(slug);
        self.after_mutation();
        true
    }

    /// Toggle a category slug. Unknown slugs are a silent no-op.
    /// Returns whether the selection changed.
    pub fn toggle_category(&mut self, slug: &str) -> bool {
        if !self.catalog.is_known_category(slug) {
            return false;
        }
        self.selection.toggle_category(slug);
        self.after_mutation();
        true
    }

    pub fn select_all_regions(&mut self) {
        self.selection.set_regions(self.catalog.region_slugs());
        self.after_mutation();
    }

    pub fn select_none_regions(&mut self) {
        self.selection.clear_regions();
        self.after_mutation();
    }

    pub fn select_all_categories(&mut self) {
        self.selection.set_categories(self.catalog.category_slugs());
        self.after_mutation();
    }

    pub fn select_none_categories(&mut self) {
        self.selection.clear_categories();
        self.after_mutation();
    }

    /// All selected -> none; anything else -> all.
    pub fn toggle_all_regions(&mut self) {
        if self.is_all_regions_selected() {
            self.select_none_regions();
        } else {
            self.select_all_regions();
        }
    }

    /// All selected -> none; anything else -> all.
    pub fn toggle_all_categories(&mut self) {
        if self.is_all_categories_selected() {
            self.select_none_categories();
        } else {
            self.select_all_categories();
        }
    }

    /// Set the platform tab. Recomputes, but neither matching nor the
    /// URL currently depend on it (extension point).
    pub fn select_platform(&mut self, slug: &str) {
        self.selection.select_platform(slug);
        self.emit(&SessionEvent::SelectionChanged);
        self.recompute();
    }

    /// Grow the visible window by one step. Saturates past the active
    /// count; no URL update.
    pub fn load_more(&mut self) {
        self.window.load_more();
        self.emit(&SessionEvent::WindowChanged {
            visible: self.visible_len(),
        });
    }

    /// Shrink the window back to its initial size.
    pub fn reset_window(&mut self) {
        self.window.reset();
        self.emit(&SessionEvent::WindowChanged {
            visible: self.visible_len(),
        });
    }

    /// Re-enter the decode pipeline for a navigation event (the
    /// popstate analogue): overwrite the selection atomically from the
    /// query and recompute. No URL write happens here.
    pub fn handle_navigation(&mut self, query: &str) {
        self.selection = urlsync::decode(query, &self.catalog);
        self.emit(&SessionEvent::SelectionChanged);
        self.recompute();
    }

    /// Step the owned history back and re-decode, if possible.
    pub fn navigate_back(&mut self) -> bool {
        match self.history.back() {
            Some(query) => {
                self.handle_navigation(&query);
                true
            }
            None => false,
        }
    }

    /// Step the owned history forward and re-decode, if possible.
    pub fn navigate_forward(&mut self) -> bool {
        match self.history.forward() {
            Some(query) => {
                self.handle_navigation(&query);
                true
            }
            None => false,
        }
    }

    fn after_mutation(&mut self) {
        self.emit(&SessionEvent::SelectionChanged);
        self.recompute();
        self.sync_url();
    }

    fn recompute(&mut self) {
        let active = engine::apply_filters(&self.catalog.items, &self.selection, &mut self.states);
        self.order = window::rank(&self.catalog.items, &self.states);
        self.emit(&SessionEvent::Recomputed { active });
        self.emit(&SessionEvent::WindowChanged {
            visible: self.visible_len(),
        });
    }

    fn sync_url(&mut self) {
        let current = self.history.current().to_string();
        let query = urlsync::encode(&current, &self.selection, &self.catalog);
        self.history.push(&query);
        self.emit(&SessionEvent::QueryChanged(query));
    }

    fn emit(&mut self, event: &SessionEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// The ranked visible window with each item's derived state.
    pub fn visible(&self) -> impl Iterator<Item = (&Item, ItemState)> + '_ {
        self.order[..self.visible_len()]
            .iter()
            .map(|&index| (&self.catalog.items[index], self.states[index]))
    }

    pub fn visible_len(&self) -> usize {
        self.window.visible_len(self.order.len())
    }

    pub fn active_count(&self) -> usize {
        self.order.len()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.order.len())
    }

    pub fn any_active(&self) -> bool {
        self.states.iter().any(|state| state.active)
    }

    pub fn any_regions(&self) -> bool {
        !self.catalog.regions.is_empty()
    }

    pub fn any_categories(&self) -> bool {
        !self.catalog.categories.is_empty()
    }

    pub fn is_all_regions_selected(&self) -> bool {
        self.selection.is_all_regions(self.catalog.regions.len())
    }

    pub fn is_all_categories_selected(&self) -> bool {
        self.selection.is_all_categories(self.catalog.categories.len())
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// The current query string held by the history sink.
    pub fn query(&self) -> &str {
        self.history.current()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        self.states.get(index).copied()
    }
}
