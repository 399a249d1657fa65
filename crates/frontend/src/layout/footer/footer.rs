use crate::shared::icons::icon;
use leptos::prelude::*;

const SERVICES: [&str; 4] = [
    "Skip Hire",
    "Commercial Waste",
    "Recycling Services",
    "Waste Consultation",
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <div class="footer__brand">
                        {icon("trash")}
                        <span>"We Want Waste"</span>
                    </div>
                    <p>
                        "Leading the way in sustainable waste management solutions for residential and commercial customers across the UK."
                    </p>
                    <div class="footer__badges">
                        <span>{icon("star")}" 5-Star Service"</span>
                        <span>{icon("award")}" Eco-Friendly"</span>
                    </div>
                </div>
                <div class="footer__column">
                    <h3>"Services"</h3>
                    <ul>
                        {SERVICES
                            .iter()
                            .map(|name| view! { <li><a href="#">{*name}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__column">
                    <h3>"Contact"</h3>
                    <ul>
                        <li>{icon("phone")}" 0800 123 4567"</li>
                        <li>{icon("mail")}" hello@wewantwaste.co.uk"</li>
                        <li>{icon("map-pin")}" London, United Kingdom"</li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">
                "© 2025 We Want Waste. All rights reserved. | Sustainable waste solutions."
            </p>
        </footer>
    }
}
