//! Metric card with an animated counter, optional progress bar and icon slot.

use flowboard_app::services::counter_driver::CounterDriver;
use flowboard_domain::animation::{AnimationSettings, CounterFrame};
use flowboard_domain::icon::{ICON_VIEW_BOX, Icon};
use flowboard_domain::variant::Variant;
use flowboard_domain::widget::StatsCardProps;
use leptos::prelude::*;

use crate::frames::{PerformanceClock, RafScheduler};

/// Replaces the built-in icon of a [`StatsCard`].
#[slot]
pub struct CardIcon {
    children: ChildrenFn,
}

type BrowserCounter = CounterDriver<RafScheduler, PerformanceClock>;

/// A card showing a labelled metric.
///
/// The value counts up from `0` when the card mounts and animates from the
/// displayed number whenever `value` changes.
#[component]
pub fn StatsCard(
    /// Caption above the value.
    #[prop(into)]
    label: Signal<String>,
    /// Target value of the counter.
    #[prop(into)]
    value: Signal<i64>,
    /// Smaller line under the value.
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Color preset.
    #[prop(optional, into)]
    variant: Signal<Variant>,
    /// Render the progress bar.
    #[prop(optional)]
    show_progress: bool,
    /// Progress bar fill, clamped to `0..=100`.
    #[prop(optional, into)]
    progress: MaybeProp<f64>,
    /// SVG path data for the built-in icon.
    #[prop(optional, into)]
    icon_path: Option<String>,
    /// Custom icon content.
    #[prop(optional)]
    card_icon: Option<CardIcon>,
    /// Counter duration and easing.
    #[prop(optional)]
    animation: Option<AnimationSettings>,
) -> impl IntoView {
    let (displayed, set_displayed) = signal(0_i64);

    let counter = mount_counter(
        value.get_untracked(),
        animation.unwrap_or_default(),
        set_displayed,
    );
    let counter = StoredValue::new_local(counter);

    Effect::new(move |_| {
        let target = value.get();
        counter.with_value(|counter| match counter {
            Some(counter) => counter.set_target(target),
            None => set_displayed.set(target),
        });
    });
    on_cleanup(move || {
        counter.with_value(|counter| {
            if let Some(counter) = counter {
                counter.cancel();
            }
        });
    });

    let card = Memo::new(move |_| {
        let mut builder = StatsCardProps::builder()
            .label(label.get())
            .value(value.get())
            .variant(variant.get())
            .show_progress(show_progress);
        if let Some(subtitle) = subtitle.get() {
            builder = builder.subtitle(subtitle);
        }
        if show_progress {
            builder = builder.progress(progress.get().unwrap_or_default());
        }
        builder.build().view(displayed.get())
    });

    let icon = match Icon::resolve(icon_path, card_icon) {
        Icon::Custom(slot) => (slot.children)().into_any(),
        Icon::Vector(glyph) => view! {
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox=ICON_VIEW_BOX aria-hidden="true">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d=glyph.path().to_string()
                ></path>
            </svg>
        }
        .into_any(),
    };

    view! {
        <div class=move || card.with(|c| c.card_class)>
            <div class="flex items-start justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-500">{move || card.with(|c| c.label.clone())}</p>
                    <p class=move || card.with(|c| c.value_class.clone())>
                        {move || card.with(|c| c.value_text.clone())}
                    </p>
                    {move || {
                        card.with(|c| c.subtitle.clone())
                            .map(|subtitle| view! { <p class="mt-1 text-xs text-gray-400">{subtitle}</p> })
                    }}
                </div>
                <div class=move || card.with(|c| c.icon_class.clone())>{icon}</div>
            </div>
            {move || {
                card.with(|c| c.progress.clone())
                    .map(|bar| {
                        view! {
                            <div class=bar.track_class>
                                <div class=bar.fill_class style=bar.width_style></div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Start the counter on browser frames, or `None` when the page has no
/// Performance API, in which case the card shows targets without animating.
fn mount_counter(
    target: i64,
    settings: AnimationSettings,
    set_displayed: WriteSignal<i64>,
) -> Option<BrowserCounter> {
    let Some(clock) = PerformanceClock::new() else {
        leptos::logging::warn!("performance clock unavailable, counter will not animate");
        set_displayed.set(target);
        return None;
    };
    let counter = CounterDriver::new(
        target,
        settings,
        RafScheduler,
        clock,
        move |frame: CounterFrame| set_displayed.set(frame.displayed),
    );
    counter.start();
    Some(counter)
}
