//! Card icons: a built-in vector glyph or a caller-supplied renderable.

/// Path data of the built-in bar-chart glyph (24×24 outline).
pub const DEFAULT_ICON_PATH: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";

/// View box shared by every vector icon.
pub const ICON_VIEW_BOX: &str = "0 0 24 24";

/// An outline glyph described by a single SVG path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorIcon {
    path: String,
}

impl VectorIcon {
    /// Glyph with custom path data.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// SVG `d` attribute.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for VectorIcon {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_PATH)
    }
}

/// Icon of a stats card.
///
/// `R` is whatever the renderer accepts as injected content: raw markup for
/// the server-side renderer, a view closure for the Leptos components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon<R> {
    Vector(VectorIcon),
    Custom(R),
}

impl<R> Icon<R> {
    /// Pick the icon for a card: an injected renderable wins outright,
    /// otherwise a vector glyph from `path` or the built-in one.
    pub fn resolve(path: Option<String>, custom: Option<R>) -> Self {
        match (custom, path) {
            (Some(custom), _) => Self::Custom(custom),
            (None, Some(path)) => Self::Vector(VectorIcon::new(path)),
            (None, None) => Self::Vector(VectorIcon::default()),
        }
    }

    /// Whether the built-in glyph rendering was replaced.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl<R> Default for Icon<R> {
    fn default() -> Self {
        Self::Vector(VectorIcon::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_builtin_glyph_by_default() {
        let icon: Icon<String> = Icon::resolve(None, None);
        assert_eq!(icon, Icon::Vector(VectorIcon::new(DEFAULT_ICON_PATH)));
    }

    #[test]
    fn should_use_custom_path_when_given() {
        let path = "M12 2L2 7l10 5 10-5-10-5z";
        let icon: Icon<String> = Icon::resolve(Some(path.to_string()), None);
        match icon {
            Icon::Vector(vector) => assert_eq!(vector.path(), path),
            Icon::Custom(_) => panic!("expected a vector icon"),
        }
    }

    #[test]
    fn should_prefer_injected_icon_over_path() {
        let icon = Icon::resolve(
            Some("M0 0h24v24H0z".to_string()),
            Some("<span class=\"custom-icon\">★</span>"),
        );
        assert!(icon.is_custom());
    }
}
