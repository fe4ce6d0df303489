//! Screen composition: header, the three button sections, help bar and the
//! notification overlay.
//!
//! Content is built as one [`ClickableList`] so that every button's click
//! target is registered from the same code that draws it.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::Color;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use super::actions;
use super::Screen;
use crate::catalog::{self, CHARACTERS, ELEMENTS};
use crate::dispatch::{self, ButtonId, Roll};
use crate::input::{is_narrow_layout, ClickState};
use crate::theme;
use crate::widgets::{push_button_row, Button, ClickableList, Modal};

/// Widest the content column gets on large screens.
const MAX_COLUMN_WIDTH: u16 = 64;

/// Columns between buttons sharing a row.
const BUTTON_GAP: u16 = 1;

const CHARACTERS_PER_ROW: usize = 2;
const ELEMENTS_PER_ROW: usize = 3;

const HELP_TEXT: &str = "Toca un botón · ↑↓ desplazar · Esc cerrar";

/// Column the content is drawn in: full width on phones, a centered
/// column on anything wider. One column of padding on each side.
pub fn content_column(area: Rect) -> Rect {
    let outer = if is_narrow_layout(area.width) {
        area
    } else {
        let width = area.width.min(MAX_COLUMN_WIDTH);
        Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
    };
    Rect::new(
        outer.x + 1u16.min(outer.width),
        outer.y,
        outer.width.saturating_sub(2),
        outer.height,
    )
}

fn button<R: Roll>(screen: &Screen<R>, id: ButtonId, color: Color) -> Option<Button> {
    let action_id = actions::action_id(id);
    Some(Button {
        label: dispatch::label(id)?,
        color,
        action_id,
        scale: screen.scale_of(id),
        pressed: screen.is_pressed(action_id),
    })
}

fn push_section_title(cl: &mut ClickableList, title: &'static str) {
    cl.push(Line::from(""));
    cl.push(Line::styled(title, theme::STYLE_TITLE).centered());
    cl.push(Line::from(""));
}

/// Lay `buttons` out `per_row` at a time with a blank line between rows.
fn push_button_grid(cl: &mut ClickableList, buttons: &[Button], per_row: usize, width: u16) {
    for (i, row) in buttons.chunks(per_row.max(1)).enumerate() {
        if i > 0 {
            cl.push(Line::from(""));
        }
        push_button_row(cl, row, width, BUTTON_GAP);
    }
}

/// Text after "Personaje actual: ".
pub fn selection_label<R: Roll>(screen: &Screen<R>) -> &str {
    if screen.selection.is_none() {
        catalog::NO_SELECTION_LABEL
    } else {
        screen.selection.get()
    }
}

/// Build every content line for a column `width` columns wide.
pub fn build_content<R: Roll>(screen: &Screen<R>, width: u16) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    // Header
    cl.push(Line::from(""));
    cl.push(Line::styled(catalog::HEADER_TITLE, theme::STYLE_TITLE).centered());
    cl.push(Line::styled(catalog::HEADER_SUBTITLE, theme::STYLE_SUBTITLE).centered());
    cl.push(Line::from(""));
    cl.push(Line::styled("─".repeat(width as usize), theme::STYLE_DIVIDER));

    // Characters, with the selection label under the section title
    cl.push(Line::from(""));
    cl.push(Line::styled(catalog::CHARACTER_SECTION_TITLE, theme::STYLE_TITLE).centered());
    let selection_style = match catalog::character_by_name(screen.selection.get()) {
        Some(c) => theme::STYLE_SELECTION.fg(c.color),
        None => theme::STYLE_SELECTION,
    };
    cl.push(
        Line::styled(
            format!("{}{}", catalog::SELECTION_LABEL_PREFIX, selection_label(screen)),
            selection_style,
        )
        .centered(),
    );
    cl.push(Line::from(""));
    let characters: Vec<Button> = CHARACTERS
        .iter()
        .enumerate()
        .filter_map(|(i, c)| button(screen, ButtonId::Character(i), c.color))
        .collect();
    push_button_grid(&mut cl, &characters, CHARACTERS_PER_ROW, width);

    push_section_title(&mut cl, catalog::ELEMENT_SECTION_TITLE);
    let elements: Vec<Button> = ELEMENTS
        .iter()
        .enumerate()
        .filter_map(|(i, e)| button(screen, ButtonId::Element(i), e.color))
        .collect();
    push_button_grid(&mut cl, &elements, ELEMENTS_PER_ROW, width);

    push_section_title(&mut cl, catalog::ACTION_SECTION_TITLE);
    let rows: [&[(ButtonId, Color)]; 3] = [
        &[(ButtonId::Wish, catalog::WISH.color)],
        &[
            (ButtonId::Domain, catalog::DOMAIN.color),
            (ButtonId::Explore, catalog::EXPLORE.color),
        ],
        &[(ButtonId::OpenChest, catalog::OPEN_CHEST.color)],
    ];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            cl.push(Line::from(""));
        }
        let buttons: Vec<Button> = row
            .iter()
            .filter_map(|&(id, color)| button(screen, id, color))
            .collect();
        push_button_row(&mut cl, &buttons, width, BUTTON_GAP);
    }
    cl.push(Line::from(""));

    cl
}

pub fn render<R: Roll>(screen: &Screen<R>, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    f.render_widget(Block::default().style(theme::STYLE_SCREEN), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let column = content_column(chunks[0]);
    let cl = build_content(screen, column.width);

    let scroll_limit = (cl.len() as u16).saturating_sub(column.height);
    let scroll = screen.scroll.min(scroll_limit);
    cs.scroll_limit = scroll_limit;

    cl.register_targets(column, cs, scroll);
    f.render_widget(Paragraph::new(cl.into_lines()).scroll((scroll, 0)), column);

    f.render_widget(
        Paragraph::new(Line::styled(HELP_TEXT, theme::STYLE_HELP).centered()),
        chunks[1],
    );

    // Drawn and registered last so it covers the content's targets.
    if let Some(note) = screen.notifications.current() {
        Modal::new(&note.title, &note.body, &note.dismiss_label)
            .pending(screen.notifications.pending())
            .render(
                f,
                area,
                cs,
                actions::MODAL_SURFACE,
                actions::DISMISS_NOTIFICATION,
            );
    }
}
