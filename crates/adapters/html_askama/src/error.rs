//! Rendering errors.

/// A template failed to render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed")]
    Template(#[from] askama::Error),
}
