use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use contracts::domain::a001_skip_option::SkipOption;
use leptos::prelude::*;

const ILLUSTRATION_NOTICE: &str = "Please note that the images shown are for illustration purposes only. \
The actual skip delivered may vary in exact shape, design, and color from what is displayed.";

/// Confirmation step for a pending skip.
/// Closing the dialog any other way than "I Understand" is a cancel.
#[component]
pub fn ConfirmSkipDialog(
    skip: SkipOption,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title="Important Notice"
            title_icon="info"
            on_close=on_cancel
        >
            <p class="confirm__notice">{ILLUSTRATION_NOTICE}</p>
            <div class="confirm__summary">
                <div class="confirm__heading">
                    <h4>{skip.title()}</h4>
                    <span class="confirm__price">{skip.formatted_total_price()}</span>
                </div>
                <p class="confirm__period">{skip.hire_period_label()}</p>
            </div>
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button variant="primary" on_click=Callback::new(move |_| on_confirm.run(()))>
                    "I Understand, Select Skip"
                </Button>
            </div>
        </Modal>
    }
}
