//! Rendering for the demo pager: gutter, document text with underline
//! decorations applied, and the status bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::host::HoverTarget;
use crate::view::TextView;

/// Render the full frame: document area above, one-row status bar below.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let doc_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let status_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

    frame.render_widget(document_widget(model, doc_area), doc_area);
    frame.render_widget(status_widget(model, status_area), status_area);
}

fn document_widget(model: &Model, area: Rect) -> Paragraph<'static> {
    let view = &model.view;
    let theme = view.theme();
    let mut lines = Vec::with_capacity(usize::from(area.height));

    for line_idx in view.visible_range(usize::from(area.height)) {
        let mut spans = Vec::new();
        if model.gutter_cols > 0 {
            let width = usize::from(model.gutter_cols.saturating_sub(1));
            spans.push(Span::styled(
                format!("{:>width$} ", line_idx + 1),
                theme.gutter,
            ));
        }
        spans.extend(line_spans(view, line_idx));
        lines.push(Line::from(spans));
    }

    Paragraph::new(Text::from(lines))
}

/// Split a line into spans, applying marker styles over the base text style.
///
/// Consecutive chars with the same style collapse into one span.
fn line_spans(view: &TextView, line_idx: usize) -> Vec<Span<'static>> {
    let Some(text) = view.buffer().line_at(line_idx) else {
        return Vec::new();
    };
    let line_start = view.buffer().line_start(line_idx);
    let markers = view.marker_set();
    let markers = markers.borrow();
    let base = view.theme().text;

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = base;
    for (i, c) in text.chars().enumerate() {
        let style = markers.style_at(line_start + i).unwrap_or(base);
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}

fn status_widget(model: &Model, area: Rect) -> Paragraph<'static> {
    let theme = model.view.theme();
    let file = model
        .file_path
        .file_name()
        .map_or_else(|| model.file_path.display().to_string(), |n| {
            n.to_string_lossy().into_owned()
        });

    let mut status = format!(
        " {file}  {}/{}",
        model.view.scroll() + 1,
        model.view.buffer().line_count()
    );
    if let Some((_, word)) = &model.hovered {
        status.push_str(&format!("  hover `{word}`"));
    }
    if let Some(notice) = &model.jump_notice {
        status.push_str(&format!("  {notice}"));
    }
    status.push_str("  q quit");

    // Pad to the full width so the bar background is solid.
    let width = usize::from(area.width);
    let padded = format!("{status:<width$}");

    Paragraph::new(Line::from(Span::styled(
        padded,
        Style::default().fg(theme.status_fg).bg(theme.status_bg),
    )))
}
