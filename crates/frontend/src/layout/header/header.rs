use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__brand">
                    <span class="header__logo">{icon("trash")}</span>
                    <h1 class="header__title">"We Want Waste"</h1>
                </div>
                <p class="header__tagline">"Professional Waste Management Solutions"</p>
            </div>
        </header>
    }
}
