//! Pill-shaped workflow status indicator.

use flowboard_domain::status::WorkflowStatus;
use flowboard_domain::widget::StatusBadgeProps;
use leptos::prelude::*;

/// A colored pill with the human label of a workflow status.
///
/// `IN_PROGRESS` gets a pulsing dot; every other status a static one.
#[component]
pub fn StatusBadge(
    /// Status to display.
    #[prop(into)]
    status: Signal<WorkflowStatus>,
    /// Render the leading dot.
    #[prop(default = true)]
    show_dot: bool,
) -> impl IntoView {
    let badge = Memo::new(move |_| StatusBadgeProps::new(status.get()).with_dot(show_dot).view());

    view! {
        <span class=move || badge.with(|b| b.class.clone())>
            {move || {
                badge
                    .with(|b| b.dot.clone())
                    .map(|dot| view! { <span class=dot.class aria-hidden="true"></span> })
            }}
            {move || badge.with(|b| b.label)}
        </span>
    }
}
