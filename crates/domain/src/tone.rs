//! Tone palette: the semantic colors shared by badges and cards.
//!
//! Every token is a utility class name. Renderers paste them into `class`
//! attributes verbatim.

/// Semantic color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// Pale background used behind tinted text (badges, icon chips).
    #[must_use]
    pub const fn soft_background(self) -> &'static str {
        match self {
            Self::Neutral => "bg-gray-100",
            Self::Primary => "bg-indigo-50",
            Self::Info => "bg-blue-50",
            Self::Success => "bg-emerald-50",
            Self::Warning => "bg-amber-50",
            Self::Danger => "bg-red-50",
        }
    }

    /// Foreground text color.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Neutral => "text-gray-700",
            Self::Primary => "text-indigo-700",
            Self::Info => "text-blue-700",
            Self::Success => "text-emerald-700",
            Self::Warning => "text-amber-700",
            Self::Danger => "text-red-700",
        }
    }

    /// Saturated fill for small solid shapes (status dots, progress fills).
    #[must_use]
    pub const fn solid(self) -> &'static str {
        match self {
            Self::Neutral => "bg-gray-400",
            Self::Primary => "bg-indigo-500",
            Self::Info => "bg-blue-500",
            Self::Success => "bg-emerald-500",
            Self::Warning => "bg-amber-500",
            Self::Danger => "bg-red-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_emerald_for_success() {
        assert_eq!(Tone::Success.soft_background(), "bg-emerald-50");
        assert_eq!(Tone::Success.text(), "text-emerald-700");
    }

    #[test]
    fn should_use_red_for_danger() {
        assert_eq!(Tone::Danger.soft_background(), "bg-red-50");
        assert_eq!(Tone::Danger.text(), "text-red-700");
        assert_eq!(Tone::Danger.solid(), "bg-red-500");
    }

    #[test]
    fn should_use_amber_for_warning() {
        assert_eq!(Tone::Warning.soft_background(), "bg-amber-50");
        assert_eq!(Tone::Warning.text(), "text-amber-700");
    }

    #[test]
    fn should_default_to_neutral() {
        assert_eq!(Tone::default(), Tone::Neutral);
    }
}
