//! Stats card markup.

use askama::Template;

use flowboard_domain::icon::{ICON_VIEW_BOX, Icon};
use flowboard_domain::widget::{ProgressView, StatsCardProps};

use crate::error::RenderError;

#[derive(Template)]
#[template(path = "stats_card.html")]
struct StatsCardTemplate<'a> {
    card_class: &'a str,
    label: &'a str,
    value_class: &'a str,
    value_text: &'a str,
    subtitle: Option<&'a str>,
    icon_class: &'a str,
    custom_icon: Option<&'a str>,
    view_box: &'a str,
    icon_path: &'a str,
    progress: Option<&'a ProgressView>,
}

/// Render a card showing `displayed` as its counter value.
///
/// `custom_icon` is trusted markup that replaces the vector glyph entirely;
/// without it the glyph uses the card's `icon_path` or the built-in path.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_stats_card(
    props: &StatsCardProps,
    displayed: i64,
    custom_icon: Option<&str>,
) -> Result<String, RenderError> {
    let view = props.view(displayed);
    let icon = Icon::resolve(props.icon_path.clone(), custom_icon);
    let (custom_icon, icon_path) = match &icon {
        Icon::Custom(markup) => (Some(*markup), ""),
        Icon::Vector(vector) => (None, vector.path()),
    };
    let template = StatsCardTemplate {
        card_class: view.card_class,
        label: &view.label,
        value_class: &view.value_class,
        value_text: &view.value_text,
        subtitle: view.subtitle.as_deref(),
        icon_class: &view.icon_class,
        custom_icon,
        view_box: ICON_VIEW_BOX,
        icon_path,
        progress: view.progress.as_ref(),
    };
    Ok(template.render()?)
}
