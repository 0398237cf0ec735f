//! Render use cases: markdown and inline field errors from in-memory reports.

use formguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    formguard_render::render_markdown(report)
}

pub fn render_inline_errors(report: &RenderableReport, max: usize) -> Vec<String> {
    formguard_render::render_inline_errors(report)
        .into_iter()
        .take(max)
        .collect()
}
