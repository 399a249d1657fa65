use contracts::domain::a001_skip_option::{CatalogQuery, SkipOption, SkipOptionId};
use contracts::enums::{CatalogTab, SortOrder};
use leptos::prelude::*;

use crate::domain::a001_skip_option::api::CatalogLoadError;

/// What the grid area renders. Error and empty result never overlap.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogPhase {
    Loading,
    Failed(String),
    Empty,
    Ready(Vec<SkipOption>),
}

/// Result of activating a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The card was the confirmed choice and is now deselected
    Deselected,
    /// The card is held for confirmation, dialog shown
    Pending,
}

#[derive(Clone, Debug)]
pub struct SkipCatalogState {
    // catalog
    pub items: Vec<SkipOption>,
    pub is_loading: bool,
    pub error: Option<String>,

    // filters
    pub query: CatalogQuery,
    pub filters_open: bool,

    // selection
    pub selected_id: Option<SkipOptionId>,
    pub pending: Option<SkipOption>,
}

impl Default for SkipCatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // the fetch starts with the page
            is_loading: true,
            error: None,
            query: CatalogQuery::default(),
            filters_open: false,
            selected_id: None,
            pending: None,
        }
    }
}

impl SkipCatalogState {
    // ------------------------------------------------------------------
    // load
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    pub fn load_succeeded(&mut self, items: Vec<SkipOption>) {
        self.items = items;
        self.error = None;
        self.is_loading = false;
    }

    pub fn load_failed(&mut self, err: &CatalogLoadError) {
        self.items.clear();
        self.error = Some(err.user_message().to_string());
        self.is_loading = false;
    }

    // ------------------------------------------------------------------
    // filters
    // ------------------------------------------------------------------

    pub fn set_tab(&mut self, tab: CatalogTab) {
        self.query.tab = tab;
    }

    /// Tab a code from the tab list switches to, `None` when it is already active.
    /// Unknown codes mean every size.
    pub fn tab_change(&self, code: &str) -> Option<CatalogTab> {
        let tab = CatalogTab::from_code_or_default(code);
        (tab != self.query.tab).then_some(tab)
    }

    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    pub fn open_filters(&mut self) {
        self.filters_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filters_open = false;
    }

    // ------------------------------------------------------------------
    // selection
    // ------------------------------------------------------------------

    /// Activating the selected card deselects it directly.
    /// Any other card becomes pending until confirmed or cancelled.
    pub fn activate(&mut self, skip: SkipOption) -> Activation {
        if self.selected_id == Some(skip.id) {
            self.selected_id = None;
            Activation::Deselected
        } else {
            self.pending = Some(skip);
            Activation::Pending
        }
    }

    /// Promotes the pending skip. No-op when nothing is pending.
    pub fn confirm(&mut self) -> Option<SkipOptionId> {
        let skip = self.pending.take()?;
        self.selected_id = Some(skip.id);
        self.selected_id
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn dialog_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_selected(&self, id: SkipOptionId) -> bool {
        self.selected_id == Some(id)
    }

    // ------------------------------------------------------------------
    // derived
    // ------------------------------------------------------------------

    pub fn visible(&self) -> Vec<SkipOption> {
        self.query.apply(&self.items)
    }

    pub fn phase(&self) -> CatalogPhase {
        if self.is_loading {
            return CatalogPhase::Loading;
        }
        if let Some(msg) = &self.error {
            return CatalogPhase::Failed(msg.clone());
        }
        let visible = self.visible();
        if visible.is_empty() {
            CatalogPhase::Empty
        } else {
            CatalogPhase::Ready(visible)
        }
    }
}

pub fn create_state() -> RwSignal<SkipCatalogState> {
    RwSignal::new(SkipCatalogState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(id: i64, size: u32, price: f64) -> SkipOption {
        SkipOption {
            id: SkipOptionId(id),
            size,
            price_before_vat: price,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: true,
            allows_heavy_waste: false,
        }
    }

    fn loaded() -> SkipCatalogState {
        let mut state = SkipCatalogState::default();
        state.load_succeeded(vec![skip(1, 4, 100.0), skip(2, 20, 500.0)]);
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = SkipCatalogState::default();
        assert!(state.is_loading);
        assert_eq!(state.phase(), CatalogPhase::Loading);
    }

    #[test]
    fn test_load_success_clears_error() {
        let mut state = SkipCatalogState::default();
        state.error = Some("old".into());
        state.load_succeeded(vec![skip(1, 4, 100.0)]);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert!(matches!(state.phase(), CatalogPhase::Ready(items) if items.len() == 1));
    }

    #[test]
    fn test_load_failure_is_not_empty_result() {
        let mut state = SkipCatalogState::default();
        state.load_failed(&CatalogLoadError::Status(500));
        assert!(!state.is_loading);
        assert!(state.items.is_empty());
        assert_eq!(
            state.phase(),
            CatalogPhase::Failed("Failed to load skip options. Please try again later.".into())
        );
    }

    #[test]
    fn test_no_match_is_empty_phase() {
        let mut state = loaded();
        state.set_search("99".into());
        assert_eq!(state.phase(), CatalogPhase::Empty);
        state.set_search(String::new());
        state.set_tab(CatalogTab::Medium);
        assert_eq!(state.phase(), CatalogPhase::Empty);
    }

    #[test]
    fn test_visible_follows_query() {
        let mut state = loaded();
        state.set_sort(SortOrder::PriceDesc);
        let ids: Vec<i64> = state.visible().iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);

        state.set_tab(CatalogTab::Small);
        state.set_search("4".into());
        let ids: Vec<i64> = state.visible().iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_activate_sets_pending_only() {
        let mut state = loaded();
        assert_eq!(state.activate(skip(1, 4, 100.0)), Activation::Pending);
        assert!(state.dialog_open());
        assert_eq!(state.selected_id, None);
        assert!(!state.is_selected(SkipOptionId(1)));
    }

    #[test]
    fn test_confirm_promotes_pending() {
        let mut state = loaded();
        state.activate(skip(1, 4, 100.0));
        assert_eq!(state.confirm(), Some(SkipOptionId(1)));
        assert!(!state.dialog_open());
        assert!(state.is_selected(SkipOptionId(1)));
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut state = loaded();
        assert_eq!(state.confirm(), None);
        assert_eq!(state.selected_id, None);

        state.activate(skip(1, 4, 100.0));
        state.confirm();
        assert_eq!(state.confirm(), None);
        assert_eq!(state.selected_id, Some(SkipOptionId(1)));
    }

    #[test]
    fn test_cancel_keeps_previous_selection() {
        let mut state = loaded();
        state.activate(skip(1, 4, 100.0));
        state.confirm();

        state.activate(skip(2, 20, 500.0));
        assert!(state.dialog_open());
        // still the old one until confirmed
        assert_eq!(state.selected_id, Some(SkipOptionId(1)));
        state.cancel();
        assert!(!state.dialog_open());
        assert_eq!(state.selected_id, Some(SkipOptionId(1)));

        let mut fresh = loaded();
        fresh.activate(skip(2, 20, 500.0));
        fresh.cancel();
        assert_eq!(fresh.selected_id, None);
    }

    #[test]
    fn test_activate_selected_deselects_without_dialog() {
        let mut state = loaded();
        state.activate(skip(1, 4, 100.0));
        state.confirm();
        assert_eq!(state.activate(skip(1, 4, 100.0)), Activation::Deselected);
        assert_eq!(state.selected_id, None);
        assert!(!state.dialog_open());
    }

    #[test]
    fn test_confirming_other_skip_overwrites_selection() {
        let mut state = loaded();
        state.activate(skip(1, 4, 100.0));
        state.confirm();
        state.activate(skip(2, 20, 500.0));
        state.confirm();
        assert!(state.is_selected(SkipOptionId(2)));
        assert!(!state.is_selected(SkipOptionId(1)));
    }

    #[test]
    fn test_tab_change_only_for_other_tab() {
        let mut state = loaded();
        assert_eq!(state.tab_change("all"), None);
        assert_eq!(state.tab_change("large"), Some(CatalogTab::Large));

        state.set_tab(CatalogTab::Large);
        assert_eq!(state.tab_change(CatalogTab::Large.code()), None);
        assert_eq!(state.tab_change("unknown"), Some(CatalogTab::All));
        // the query is the only owner of the active tab
        assert_eq!(state.query.tab, CatalogTab::Large);
    }

    #[test]
    fn test_filter_sheet_is_independent_of_tab() {
        let mut state = loaded();
        state.open_filters();
        state.set_tab(CatalogTab::Large);
        assert!(state.filters_open);
        state.close_filters();
        assert!(!state.filters_open);
        assert_eq!(state.query.tab, CatalogTab::Large);
    }
}
