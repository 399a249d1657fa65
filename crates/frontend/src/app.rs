use crate::domain::a001_skip_option::ui::list::SkipCatalogPage;
use crate::layout::footer::Footer;
use crate::layout::header::{Header, ProgressTracker, SELECT_SKIP_STEP};
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Catalog endpoint settings for the whole page
    provide_context(load_config());

    view! {
        <div class="app">
            <Header />
            <ProgressTracker current_step=SELECT_SKIP_STEP />
            <main class="main">
                <SkipCatalogPage />
            </main>
            <Footer />
        </div>
    }
}
