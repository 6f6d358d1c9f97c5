//! Status badge markup.

use askama::Template;

use flowboard_domain::widget::StatusBadgeProps;

use crate::error::RenderError;

#[derive(Template)]
#[template(path = "status_badge.html")]
struct StatusBadgeTemplate<'a> {
    class: &'a str,
    dot_class: Option<&'a str>,
    label: &'a str,
}

/// Render a badge as a single `<span>` whose text is the status label.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_status_badge(props: &StatusBadgeProps) -> Result<String, RenderError> {
    let view = props.view();
    let template = StatusBadgeTemplate {
        class: &view.class,
        dot_class: view.dot.as_ref().map(|dot| dot.class.as_str()),
        label: view.label,
    };
    Ok(template.render()?)
}
