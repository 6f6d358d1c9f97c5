//! Card variants: named color presets for stats cards.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Visual style preset of a stats card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

/// Class tokens a variant contributes to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Color of the big value text.
    pub value_text: &'static str,
    /// Background of the icon chip.
    pub icon_background: &'static str,
    /// Stroke color of the icon.
    pub icon_text: &'static str,
    /// Fill of the progress bar.
    pub progress_fill: &'static str,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    /// Resolve a variant name; unknown names fall back to [`Self::Default`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => Self::Primary,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "info" => Self::Info,
            _ => Self::Default,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    /// Palette family backing this variant.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Default => Tone::Neutral,
            Self::Primary => Tone::Primary,
            Self::Success => Tone::Success,
            Self::Warning => Tone::Warning,
            Self::Danger => Tone::Danger,
            Self::Info => Tone::Info,
        }
    }

    /// Class tokens for this variant.
    #[must_use]
    pub const fn style(self) -> VariantStyle {
        let tone = self.tone();
        let value_text = match self {
            Self::Default => "text-gray-900",
            _ => tone.text(),
        };
        let progress_fill = match self {
            Self::Default => "bg-indigo-500",
            _ => tone.solid(),
        };
        VariantStyle {
            value_text,
            icon_background: tone.soft_background(),
            icon_text: tone.text(),
            progress_fill,
        }
    }
}

impl From<String> for Variant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl FromStr for Variant {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(name))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
