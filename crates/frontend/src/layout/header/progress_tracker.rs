use crate::shared::icons::icon;
use leptos::prelude::*;

/// Booking flow step shown in the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: u8,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const STEPS: [Step; 6] = [
    Step { id: 1, name: "Location", icon: "map-pin" },
    Step { id: 2, name: "Waste Type", icon: "trash" },
    Step { id: 3, name: "Select Skip", icon: "package" },
    Step { id: 4, name: "Permit Check", icon: "file-check" },
    Step { id: 5, name: "Schedule", icon: "calendar" },
    Step { id: 6, name: "Payment", icon: "credit-card" },
];

/// Step this page belongs to
pub const SELECT_SKIP_STEP: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn of(step: u8, current: u8) -> Self {
        if step < current {
            StepStatus::Done
        } else if step == current {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Done => "progress__step--done",
            StepStatus::Current => "progress__step--current",
            StepStatus::Upcoming => "progress__step--upcoming",
        }
    }
}

#[component]
pub fn ProgressTracker(current_step: u8) -> impl IntoView {
    let last = STEPS.len() - 1;

    view! {
        <nav class="progress" aria-label="Booking progress">
            <ol class="progress__steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let status = StepStatus::of(step.id, current_step);
                        // connector to the next step is filled once this step is done
                        let connector = (index < last).then(|| {
                            let filled = if status == StepStatus::Done { " progress__connector--filled" } else { "" };
                            view! { <span class=format!("progress__connector{}", filled)></span> }
                        });
                        view! {
                            <li class=format!("progress__step {}", status.css_class())>
                                {connector}
                                <span class="progress__icon">
                                    {if status == StepStatus::Done { icon("check-circle") } else { icon(step.icon) }}
                                </span>
                                <span class="progress__label">{step.name}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
