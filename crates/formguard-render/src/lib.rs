//! Rendering utilities for presentation surfaces (Markdown, inline field errors).

#![forbid(unsafe_code)]

mod inline;
mod markdown;
mod model;

pub use inline::render_inline_errors;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableField, RenderableFinding, RenderableReport, RenderableVerdict,
};
