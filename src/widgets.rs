//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target registration,
//! following a component-oriented pattern where visual output and interactive
//! behaviour are co-located.
//!
//! # Components
//!
//! - [`ClickableList`]: Scrollable lines with column-span click targets.
//! - [`Button`] / [`push_button_row`]: Colored buttons laid out side by side.
//! - [`Modal`]: Centered notification overlay with a dismiss button.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::theme;

// ── ClickableList ──────────────────────────────────────────────

/// A click target inside one line, in columns from the area's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LineTarget {
    line: u16,
    col: u16,
    width: u16,
    action_id: u16,
}

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Lines never wrap: one logical line is one visual row, so a target's row
/// follows from its line index and the scroll offset.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Header (not clickable)"));
/// cl.push_with_targets(Line::from("Left  Right"), &[(0, 5, LEFT), (6, 5, RIGHT)]);
/// cl.register_targets(area, &mut cs, scroll);
/// f.render_widget(Paragraph::new(cl.into_lines()).scroll((scroll, 0)), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    targets: Vec<LineTarget>,
}

impl<'a> Default for ClickableList<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line with several targets, each `(column, width, action_id)`
    /// relative to the left edge of the content area.
    pub fn push_with_targets(&mut self, line: Line<'a>, targets: &[(u16, u16, u16)]) {
        let line_idx = self.lines.len() as u16;
        self.targets.extend(targets.iter().map(|&(col, width, action_id)| LineTarget {
            line: line_idx,
            col,
            width,
            action_id,
        }));
        self.lines.push(line);
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for every visible line, clipped to `area`.
    ///
    /// * `area`: where the lines are drawn (no borders).
    /// * `scroll`: vertical scroll offset in rows.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, scroll: u16) {
        let content_end = area.y + area.height;

        for t in &self.targets {
            if t.line < scroll || t.col >= area.width {
                continue;
            }
            let row = area.y + (t.line - scroll);
            if row >= content_end {
                continue;
            }
            let width = t.width.min(area.width - t.col);
            cs.add_click_target(Rect::new(area.x + t.col, row, width, 1), t.action_id);
        }
    }
}

// ── Buttons ────────────────────────────────────────────────────

/// Rows occupied by one button: padding, label, padding.
pub const BUTTON_HEIGHT: usize = 3;

/// One colored button in a row.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub color: ratzilla::ratatui::style::Color,
    pub action_id: u16,
    /// Visual scale from the press animator (1.0 for plain buttons).
    pub scale: f32,
    /// Finger currently down on this button.
    pub pressed: bool,
}

/// Columns trimmed from each side of a `width`-wide face at `scale`.
///
/// Any scale below 1.0 trims at least one column so a press is visible on
/// a cell grid; the face never drops below one column.
pub fn scaled_inset(width: u16, scale: f32) -> u16 {
    let per_side = width as f32 * (1.0 - scale) / 2.0;
    if per_side <= 0.0 {
        return 0;
    }
    (per_side.ceil() as u16).min(width.saturating_sub(1) / 2)
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> usize {
    Line::from(text).width()
}

/// Truncate `label` to at most `max` columns.
pub fn fit_label(label: &str, max: usize) -> String {
    if text_width(label) <= max {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        out.push(ch);
        if text_width(&out) > max {
            out.pop();
            break;
        }
    }
    out
}

/// Lay out `buttons` side by side across `width` columns with `gap`
/// columns between them, pushing [`BUTTON_HEIGHT`] lines into `cl`.
///
/// Each button's click target covers its whole slot, so a shrunken face
/// stays as easy to hit as a resting one.
pub fn push_button_row(cl: &mut ClickableList, buttons: &[Button], width: u16, gap: u16) {
    let n = buttons.len() as u16;
    if n == 0 {
        return;
    }
    let slot = width.saturating_sub(gap * (n - 1)) / n;
    if slot == 0 {
        return;
    }

    let targets: Vec<(u16, u16, u16)> = buttons
        .iter()
        .enumerate()
        .map(|(i, b)| (i as u16 * (slot + gap), slot, b.action_id))
        .collect();

    for row in 0..BUTTON_HEIGHT {
        let mut spans: Vec<Span> = Vec::new();
        for (i, b) in buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(gap as usize)));
            }
            let inset = scaled_inset(slot, b.scale);
            let face = (slot - inset * 2) as usize;
            let style = theme::button_face(b.color, b.pressed);

            spans.push(Span::raw(" ".repeat(inset as usize)));
            if row == BUTTON_HEIGHT / 2 {
                let label = fit_label(&b.label, face);
                let lw = text_width(&label);
                let left = (face - lw) / 2;
                let right = face - lw - left;
                spans.push(Span::styled(
                    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right)),
                    style,
                ));
            } else {
                spans.push(Span::styled(" ".repeat(face), style));
            }
            spans.push(Span::raw(" ".repeat(inset as usize)));
        }
        cl.push_with_targets(Line::from(spans), &targets);
    }
}

// ── Modal ──────────────────────────────────────────────────────

/// Widest the modal gets, borders included.
const MODAL_MAX_WIDTH: u16 = 44;

/// A centered notification overlay.
///
/// Renders over whatever is below it. The whole popup is registered as a
/// surface target and the dismiss button on top of it, so no tap inside
/// the popup reaches the content underneath.
pub struct Modal<'a> {
    title: &'a str,
    body: &'a str,
    dismiss_label: &'a str,
    pending: usize,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, body: &'a str, dismiss_label: &'a str) -> Self {
        Self {
            title,
            body,
            dismiss_label,
            pending: 0,
        }
    }

    /// Number of notifications queued behind this one.
    pub fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    fn body_paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
    }

    /// Outer rect of the modal when centered in `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(MODAL_MAX_WIDTH).max(area.width.min(12));
        let inner_width = width.saturating_sub(4);
        let body_rows = self.body_paragraph().line_count(inner_width.max(1)) as u16;
        // borders + blank + body + blank + button (+ pending)
        let extra = if self.pending > 0 { 1 } else { 0 };
        let height = (2 + 1 + body_rows + 1 + 1 + extra).min(area.height);

        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// Render the modal, registering the popup as `surface_action` and its
    /// dismiss button as `dismiss_action`.
    pub fn render(
        self,
        f: &mut Frame,
        area: Rect,
        cs: &mut ClickState,
        surface_action: u16,
        dismiss_action: u16,
    ) {
        let popup = self.area(area);
        cs.add_click_target(popup, surface_action);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::STYLE_MODAL_BORDER)
            .title(Line::from(Span::styled(format!(" {} ", self.title), theme::STYLE_TITLE)))
            .title_alignment(Alignment::Center)
            .style(theme::STYLE_MODAL);
        let inner = block.inner(popup);

        f.render_widget(Clear, popup);
        f.render_widget(block, popup);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let body_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
        f.render_widget(self.body_paragraph(), body_area);

        let extra = if self.pending > 0 { 1 } else { 0 };
        let button_row = (inner.y + inner.height).saturating_sub(1 + extra).max(inner.y);
        let button = Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", self.dismiss_label),
            theme::STYLE_MODAL_BUTTON,
        )))
        .alignment(Alignment::Center);
        let button_area = Rect::new(inner.x, button_row, inner.width, 1);
        f.render_widget(button, button_area);

        if self.pending > 0 && button_row + 1 < inner.y + inner.height {
            let more = Paragraph::new(Span::styled(format!("+{} más", self.pending), theme::STYLE_HELP))
                .alignment(Alignment::Right);
            f.render_widget(more, Rect::new(inner.x, button_row + 1, inner.width, 1));
        }

        cs.add_click_target(button_area, dismiss_action);
    }
}
