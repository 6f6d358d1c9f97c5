//! Stats card.

use serde::{Deserialize, Serialize};

use crate::format::group_thousands;
use crate::progress::Percent;
use crate::variant::Variant;

const CARD_CLASS: &str = "card p-5";
const VALUE_BASE_CLASS: &str = "mt-2 text-3xl font-semibold tabular-nums";
const ICON_BASE_CLASS: &str = "flex items-center justify-center w-10 h-10 rounded-lg";
const PROGRESS_TRACK_CLASS: &str = "mt-4 w-full h-2 bg-gray-200 rounded-full overflow-hidden";
const PROGRESS_FILL_BASE_CLASS: &str = "h-full rounded-full transition-all";

/// Inputs of a stats card.
///
/// The icon override is not part of the props: its type depends on the
/// renderer, see [`Icon`](crate::icon::Icon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsCardProps {
    pub label: String,
    pub value: i64,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub show_progress: bool,
    #[serde(default)]
    pub progress: Percent,
    #[serde(default)]
    pub icon_path: Option<String>,
}

/// The progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub track_class: &'static str,
    pub fill_class: String,
    pub width_style: String,
}

/// Everything needed to draw a card showing a given counter value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsCardView {
    pub card_class: &'static str,
    pub label: String,
    pub value_text: String,
    pub value_class: String,
    pub subtitle: Option<String>,
    pub icon_class: String,
    pub progress: Option<ProgressView>,
}

impl StatsCardProps {
    /// Create a builder for constructing [`StatsCardProps`].
    #[must_use]
    pub fn builder() -> StatsCardBuilder {
        StatsCardBuilder::default()
    }

    /// Derive the view for a card whose counter currently shows `displayed`.
    #[must_use]
    pub fn view(&self, displayed: i64) -> StatsCardView {
        let style = self.variant.style();
        let progress = self.show_progress.then(|| ProgressView {
            track_class: PROGRESS_TRACK_CLASS,
            fill_class: format!("{PROGRESS_FILL_BASE_CLASS} {}", style.progress_fill),
            width_style: self.progress.width_style(),
        });
        StatsCardView {
            card_class: CARD_CLASS,
            label: self.label.clone(),
            value_text: group_thousands(displayed),
            value_class: format!("{VALUE_BASE_CLASS} {}", style.value_text),
            subtitle: self.subtitle.clone(),
            icon_class: format!(
                "{ICON_BASE_CLASS} {} {}",
                style.icon_background, style.icon_text
            ),
            progress,
        }
    }
}

/// Step-by-step builder for [`StatsCardProps`].
#[derive(Debug, Default)]
pub struct StatsCardBuilder {
    label: Option<String>,
    value: Option<i64>,
    subtitle: Option<String>,
    variant: Option<Variant>,
    show_progress: bool,
    progress: Option<Percent>,
    icon_path: Option<String>,
}

impl StatsCardBuilder {
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Set the percentage and turn the progress bar on.
    #[must_use]
    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = Some(Percent::new(progress));
        self.show_progress = true;
        self
    }

    #[must_use]
    pub fn icon_path(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = Some(icon_path.into());
        self
    }

    /// Consume the builder. Missing fields take their defaults.
    #[must_use]
    pub fn build(self) -> StatsCardProps {
        StatsCardProps {
            label: self.label.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            subtitle: self.subtitle,
            variant: self.variant.unwrap_or_default(),
            show_progress: self.show_progress,
            progress: self.progress.unwrap_or_default(),
            icon_path: self.icon_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn should_carry_label_and_formatted_value() {
        let card = StatsCardProps::builder()
            .label("Total Workflows")
            .value(12_500)
            .build();
        let view = card.view(12_500);
        assert_eq!(view.label, "Total Workflows");
        assert_eq!(view.value_text, "12,500");
        assert!(classes(view.card_class).contains(&"card"));
    }

    #[test]
    fn should_show_displayed_value_not_target() {
        let card = StatsCardProps::builder().label("Active").value(10).build();
        assert_eq!(card.view(0).value_text, "0");
    }

    #[test]
    fn should_omit_subtitle_by_default() {
        let card = StatsCardProps::builder().label("Active").value(10).build();
        assert!(card.view(10).subtitle.is_none());
    }

    #[test]
    fn should_keep_subtitle_verbatim() {
        let card = StatsCardProps::builder()
            .label("Active")
            .value(10)
            .subtitle("Currently running")
            .build();
        assert_eq!(card.view(10).subtitle.as_deref(), Some("Currently running"));
    }

    #[test]
    fn should_color_value_by_variant() {
        let card = StatsCardProps::builder()
            .label("Completed")
            .value(100)
            .variant(Variant::Success)
            .build();
        assert!(classes(&card.view(100).value_class).contains(&"text-emerald-700"));

        let card = StatsCardProps::builder()
            .label("Failed")
            .value(5)
            .variant(Variant::Danger)
            .build();
        assert!(classes(&card.view(5).value_class).contains(&"text-red-700"));
    }

    #[test]
    fn should_hide_progress_by_default() {
        let card = StatsCardProps::builder().label("Count").value(100).build();
        assert!(card.view(100).progress.is_none());
    }

    #[test]
    fn should_size_progress_fill_to_percentage() {
        let card = StatsCardProps::builder()
            .label("Progress")
            .value(75)
            .progress(75.0)
            .build();
        let progress = card.view(75).progress.unwrap();
        assert_eq!(progress.width_style, "width: 75%");
        assert!(classes(progress.track_class).contains(&"bg-gray-200"));
        assert!(classes(&progress.fill_class).contains(&"h-full"));
        assert!(classes(&progress.fill_class).contains(&"rounded-full"));
    }

    #[test]
    fn should_carry_clamped_progress_in_width_style_only() {
        let card = StatsCardProps::builder()
            .label("Progress")
            .value(1)
            .variant(Variant::Success)
            .progress(150.0)
            .build();
        assert_eq!(
            card.view(1).progress,
            Some(ProgressView {
                track_class: PROGRESS_TRACK_CLASS,
                fill_class: "h-full rounded-full transition-all bg-emerald-500".to_string(),
                width_style: "width: 100%".to_string(),
            })
        );
    }

    #[test]
    fn should_hide_progress_when_explicitly_disabled() {
        let card = StatsCardProps::builder()
            .label("Progress")
            .value(75)
            .progress(75.0)
            .show_progress(false)
            .build();
        assert!(card.view(75).progress.is_none());
    }

    #[test]
    fn should_deserialize_with_defaults() {
        let card: StatsCardProps =
            serde_json::from_str(r#"{"label":"Total Workflows","value":100}"#).unwrap();
        assert_eq!(card.variant, Variant::Default);
        assert!(!card.show_progress);
        assert!(card.subtitle.is_none());
        assert!(card.icon_path.is_none());
    }

    #[test]
    fn should_deserialize_camel_case_fields() {
        let card: StatsCardProps = serde_json::from_str(
            r#"{"label":"P","value":1,"showProgress":true,"progress":140,"variant":"warning","iconPath":"M0 0"}"#,
        )
        .unwrap();
        assert!(card.show_progress);
        assert_eq!(card.progress.width_style(), "width: 100%");
        assert_eq!(card.variant, Variant::Warning);
        assert_eq!(card.icon_path.as_deref(), Some("M0 0"));
    }
}
