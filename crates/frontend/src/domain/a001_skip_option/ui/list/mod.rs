pub mod state;

use self::state::{create_state, Activation, CatalogPhase, SkipCatalogState};
use crate::domain::a001_skip_option::api::fetch_skips;
use crate::domain::a001_skip_option::ui::card::SkipCard;
use crate::domain::a001_skip_option::ui::confirm::ConfirmSkipDialog;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Button, Select};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_skip_option::SkipOption;
use contracts::domain::common::AggregateId;
use contracts::enums::{CatalogTab, SortOrder};
use leptos::prelude::*;
use thaw::{Tab, TabList};

/// Number of placeholder cards while the catalog loads
const SKELETON_CARDS: usize = 6;

#[component]
fn CatalogHero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2 class="hero__title">"Choose Your Perfect Skip"</h2>
            <p class="hero__subtitle">
                "Find the ideal waste solution for your project with our premium skip hire service"
            </p>
            <div class="hero__badges">
                <span>{icon("star")}" 5-Star Service"</span>
                <span>{icon("award")}" Eco-Friendly"</span>
            </div>
        </section>
    }
}

#[component]
fn HelpPanel() -> impl IntoView {
    view! {
        <section class="help">
            <span class="help__icon">{icon("help")}</span>
            <div class="help__body">
                <h3 class="help__title">"Need Expert Guidance?"</h3>
                <p>
                    "Our waste management specialists are ready to help you choose the perfect skip size for your specific project requirements."
                </p>
                <div class="help__actions">
                    <a class="button button--primary" href="tel:08001234567">
                        {icon("phone")}" Call: 0800 123 4567"
                    </a>
                    <a class="button button--secondary" href="mailto:hello@wewantwaste.co.uk">
                        {icon("mail")}" Get Quote via Email"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Mobile filter sheet with the category choices
#[component]
fn FilterSheet(state: RwSignal<SkipCatalogState>) -> impl IntoView {
    let close = move || state.update(|s| s.close_filters());

    view! {
        <div class="sheet-overlay" on:click=move |_| close()>
            <aside class="sheet" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <div class="sheet__header">
                    <h3>"Filter Options"</h3>
                    <Button variant="ghost" size="sm" aria_label="Close filters" on_click=Callback::new(move |_| close())>
                        {icon("x")}
                    </Button>
                </div>
                <h4 class="sheet__section">"Skip Categories"</h4>
                <div class="sheet__options">
                    {CatalogTab::all()
                        .into_iter()
                        .map(|tab| {
                            let is_active = move || state.with(|s| s.query.tab == tab);
                            view! {
                                <Button
                                    variant=Signal::derive(move || {
                                        if is_active() { "primary".to_string() } else { "secondary".to_string() }
                                    })
                                    class="sheet__option"
                                    on_click=Callback::new(move |_| state.update(|s| s.set_tab(tab)))
                                >
                                    {tab.display_name()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>
        </div>
    }
}

#[component]
fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class="skip-grid" aria-busy="true">
            {(0..SKELETON_CARDS)
                .map(|_| view! {
                    <div class="skip-card skip-card--skeleton">
                        <div class="skeleton skeleton--image"></div>
                        <div class="skip-card__body">
                            <div class="skeleton skeleton--title"></div>
                            <div class="skeleton skeleton--line"></div>
                            <div class="skeleton skeleton--line skeleton--short"></div>
                            <div class="skeleton skeleton--button"></div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkipCatalogPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let state = create_state();

    // Thaw's TabList only binds an RwSignal<String>; it follows `state.query.tab`
    // and forwards clicks back through the reducer
    let active_tab = Memo::new(move |_| state.with(|s| s.query.tab));
    let tab_value = RwSignal::new(active_tab.get_untracked().code().to_string());
    Effect::new(move |_| {
        let code = active_tab.get().code();
        if tab_value.with_untracked(|v| v != code) {
            tab_value.set(code.to_string());
        }
    });
    Effect::new(move |_| {
        let code = tab_value.get();
        if let Some(tab) = state.with_untracked(|s| s.tab_change(&code)) {
            state.update(|s| s.set_tab(tab));
        }
    });

    // Single load at page start, no retry
    state.update(|s| s.begin_load());
    let catalog = config.catalog.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_skips(&catalog).await {
            Ok(items) => {
                log::info!("Loaded {} skip options", items.len());
                state.update(|s| s.load_succeeded(items));
            }
            Err(e) => {
                log::error!("Failed to fetch skip options: {}", e);
                state.update(|s| s.load_failed(&e));
            }
        }
    });

    let phase = Memo::new(move |_| state.with(|s| s.phase()));
    let pending = Memo::new(move |_| state.with(|s| s.pending.clone()));

    let activate = Callback::new(move |skip: SkipOption| {
        let id = skip.id.as_string();
        let change = state.try_update(|s| s.activate(skip));
        match change {
            Some(Activation::Deselected) => log::debug!("Skip {} deselected", id),
            Some(Activation::Pending) => log::debug!("Skip {} awaiting confirmation", id),
            None => {}
        }
    });
    let confirm = Callback::new(move |_: ()| {
        if let Some(Some(id)) = state.try_update(|s| s.confirm()) {
            log::debug!("Skip {} selected", id.as_string());
        }
    });
    let cancel = Callback::new(move |_: ()| {
        state.update(|s| s.cancel());
        log::debug!("Skip selection cancelled");
    });

    let search = Signal::derive(move || state.with(|s| s.query.search.clone()));
    let sort_value = Signal::derive(move || state.with(|s| s.query.sort.code().to_string()));
    let sort_options: Vec<(String, String)> = SortOrder::all()
        .into_iter()
        .map(|o| (o.code().to_string(), o.display_name().to_string()))
        .collect();

    view! {
        <div class="catalog">
            <CatalogHero />
            <HelpPanel />

            <div class="catalog__toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_search(v)))
                    placeholder="Search by skip size or capacity..."
                />
                <Select
                    value=sort_value
                    options=sort_options
                    aria_label="Sort by"
                    on_change=Callback::new(move |code: String| {
                        state.update(|s| s.set_sort(SortOrder::from_code_or_default(&code)))
                    })
                />
                <Button
                    variant="secondary"
                    class="catalog__filters-toggle"
                    on_click=Callback::new(move |_| state.update(|s| s.open_filters()))
                >
                    {icon("filter")}
                    " Filters"
                </Button>
            </div>

            {move || state.with(|s| s.filters_open).then(|| view! {
                <FilterSheet state=state />
            })}

            <div class="catalog__tabs">
                <TabList selected_value=tab_value>
                    {CatalogTab::all()
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.code()>{tab.display_name()}</Tab> })
                        .collect_view()}
                </TabList>
            </div>

            {move || match phase.get() {
                CatalogPhase::Loading => view! { <SkeletonGrid /> }.into_any(),
                CatalogPhase::Failed(message) => view! {
                    <div class="catalog__error" role="alert">
                        {icon("alert-triangle")}
                        <p>{message}</p>
                    </div>
                }.into_any(),
                CatalogPhase::Empty => view! {
                    <div class="catalog__empty">
                        <h3>"No skips found"</h3>
                        <p>"Try adjusting your filters or search terms"</p>
                    </div>
                }.into_any(),
                CatalogPhase::Ready(items) => view! {
                    <div class="skip-grid">
                        <For
                            each=move || items.clone()
                            key=|skip| skip.id
                            children=move |skip: SkipOption| {
                                let id = skip.id;
                                view! {
                                    <SkipCard
                                        skip=skip
                                        selected=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                        on_activate=activate
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any(),
            }}

            {move || pending.get().map(|skip| view! {
                <ConfirmSkipDialog skip=skip on_confirm=confirm on_cancel=cancel />
            })}
        </div>
    }
}
