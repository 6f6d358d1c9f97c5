//! Client-side widgets for the workflow dashboard.
//!
//! [`StatsCard`] drives its counter with the shared
//! [`CounterDriver`](flowboard_app::services::counter_driver::CounterDriver)
//! on `requestAnimationFrame`, so the browser and the native renderer animate
//! the same way.

use flowboard_domain::status::WorkflowStatus;
use flowboard_domain::variant::Variant;
use leptos::prelude::*;

pub mod components;
pub mod frames;

pub use components::{CardIcon, StatsCard, StatusBadge};

/// Root application component: a gallery of every widget state.
#[component]
pub fn App() -> impl IntoView {
    let (total, set_total) = signal(128_i64);
    let (status_index, set_status_index) = signal(0_usize);
    let status = Signal::derive(move || {
        WorkflowStatus::ALL[status_index.get() % WorkflowStatus::ALL.len()]
    });

    view! {
        <main class="p-6 space-y-6">
            <section class="flex flex-wrap gap-2">
                {WorkflowStatus::ALL
                    .into_iter()
                    .map(|status| view! { <StatusBadge status=status/> })
                    .collect_view()}
                <StatusBadge status=WorkflowStatus::Passed show_dot=false/>
            </section>
            <section class="grid grid-cols-3 gap-4">
                <StatsCard label="Total Workflows" value=total subtitle="All time"/>
                <StatsCard
                    label="Completed"
                    value=Signal::derive(move || total.get() * 3 / 4)
                    variant=Variant::Success
                    show_progress=true
                    progress=75.0
                />
                <StatsCard label="Failed" value=7 variant=Variant::Danger>
                    <CardIcon slot>
                        <span class="text-lg">"\u{26A0}"</span>
                    </CardIcon>
                </StatsCard>
            </section>
            <section class="flex items-center gap-3">
                <button on:click=move |_| set_total.update(|t| *t += 250)>"Add 250"</button>
                <button on:click=move |_| set_total.update(|t| *t -= 100)>"Remove 100"</button>
                <button on:click=move |_| set_status_index.update(|i| *i += 1)>"Next status"</button>
                <StatusBadge status=status/>
            </section>
        </main>
    }
}
