use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box with leading icon and a clear button.
/// Every keystroke is reported; the catalog is small enough to refilter immediately.
#[component]
pub fn SearchInput(
    /// Current search term
    #[prop(into)]
    value: Signal<String>,
    /// Callback for every change, including clearing
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        type="button"
                        class="search-input__clear"
                        on:click=clear
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
