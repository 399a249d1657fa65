use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::a001_skip_option::SkipOption;
use leptos::prelude::*;

/// Yes/no indicator line in the card's feature list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

impl Feature {
    fn new(available: bool, label: &'static str) -> Self {
        if available {
            Self { label, icon: "check-circle", class: "skip-card__feature--yes" }
        } else {
            Self { label, icon: "x-circle", class: "skip-card__feature--no" }
        }
    }
}

/// Everything the card prints, taken from the skip before rendering
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub size_badge: String,
    pub price: String,
    pub hire_period: String,
    pub description: String,
    pub image: &'static str,
    pub uses: Vec<&'static str>,
    pub road_restricted: bool,
    pub road: Feature,
    pub waste: Feature,
}

impl From<&SkipOption> for CardContent {
    fn from(skip: &SkipOption) -> Self {
        Self {
            title: skip.title(),
            size_badge: skip.size_badge(),
            price: skip.formatted_total_price(),
            hire_period: skip.hire_period_label(),
            description: skip.description(),
            image: skip.image(),
            uses: skip.suitable_uses(),
            road_restricted: skip.has_road_restrictions(),
            road: Feature::new(skip.allowed_on_road, skip.road_label()),
            waste: Feature::new(skip.allows_heavy_waste, skip.waste_label()),
        }
    }
}

/// Card for one skip in the catalog grid
#[component]
pub fn SkipCard(
    skip: SkipOption,
    /// Whether this skip is the confirmed choice
    #[prop(into)]
    selected: Signal<bool>,
    /// Select / deselect click
    on_activate: Callback<SkipOption>,
) -> impl IntoView {
    // component children become move closures, so nothing below borrows `skip`
    let CardContent {
        title,
        size_badge,
        price,
        hire_period,
        description,
        image,
        uses,
        road_restricted,
        road,
        waste,
    } = CardContent::from(&skip);
    let image_alt = title.clone();

    view! {
        <article class=move || {
            if selected.get() { "skip-card skip-card--selected" } else { "skip-card" }
        }>
            <div class="skip-card__media">
                <img class="skip-card__image" src=image alt=image_alt />
                <Badge variant="primary" class="skip-card__size">
                    {size_badge}
                </Badge>
                {road_restricted.then(|| view! {
                    <Badge variant="warning" class="skip-card__restriction">
                        {icon("alert-triangle")}
                        " Road Restrictions"
                    </Badge>
                })}
            </div>

            <div class="skip-card__body">
                <div class="skip-card__heading">
                    <h3 class="skip-card__title">{title}</h3>
                    <span class="skip-card__price">{price}</span>
                </div>
                <p class="skip-card__period">{icon("calendar")}" "{hire_period}</p>
                <p class="skip-card__description">{description}</p>

                <div class="skip-card__uses">
                    {uses
                        .into_iter()
                        .map(|label| view! { <Badge variant="outline">{label}</Badge> })
                        .collect_view()}
                </div>

                <ul class="skip-card__features">
                    <li class=road.class>{icon(road.icon)}" "{road.label}</li>
                    <li class=waste.class>{icon(waste.icon)}" "{waste.label}</li>
                </ul>

                <Button
                    class="skip-card__action"
                    variant=Signal::derive(move || {
                        if selected.get() { "success".to_string() } else { "primary".to_string() }
                    })
                    size="lg"
                    on_click=Callback::new(move |_| on_activate.run(skip.clone()))
                >
                    {move || if selected.get() {
                        view! { {icon("check-circle")}" Selected" }.into_any()
                    } else {
                        view! { "Select This Skip "{icon("chevron-right")} }.into_any()
                    }}
                </Button>
            </div>
        </article>
    }
}
