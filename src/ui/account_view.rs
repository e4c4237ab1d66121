// Account view
// Title, two inert text inputs and a save button with no handler

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_components::{render_with_handle, RectRegistry};

use super::{row_at, ViewContext};
use crate::constants::HWND_INPUT_PREFIX;
use crate::core::InputField;

pub const TITLE: &str = "Account settings";
pub const BUTTON: &str = "Save changes";

// Row of each element, relative to the top of the view
const TITLE_ROW: u16 = 1;
const INPUT_ROWS: [(InputField, u16); 2] = [(InputField::Username, 3), (InputField::Email, 5)];
const BUTTON_ROW: u16 = 7;

/// Rows needed to show the whole view
pub const ROWS: u16 = BUTTON_ROW + 2;

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, registry: &mut RectRegistry) {
    let styles = ctx.styles;

    if let Some(row) = row_at(area, TITLE_ROW) {
        f.render_widget(Paragraph::new(Span::styled(TITLE, styles.title())), row);
    }

    for (field, offset) in INPUT_ROWS {
        let Some(row) = row_at(area, offset) else {
            continue;
        };
        let focused = ctx.focus == Some(field);
        render_with_handle(
            f,
            registry,
            Some(&format!("{}{}", HWND_INPUT_PREFIX, field.placeholder())),
            Paragraph::new(input_line(field, row.width, ctx, focused)),
            row,
        );
    }

    if let Some(row) = row_at(area, BUTTON_ROW) {
        let button = Span::styled(format!(" {} ", BUTTON), styles.button());
        f.render_widget(Paragraph::new(button), row);
    }
}

/// `[ placeholder      ]`, sized to the full row
fn input_line(field: InputField, width: u16, ctx: &ViewContext, focused: bool) -> Line<'static> {
    let outline = ctx.styles.input_outline(focused);
    let inner = (width as usize).saturating_sub(4);
    Line::from(vec![
        Span::styled("[ ", outline),
        Span::styled(
            format!("{:<inner$}", field.placeholder(), inner = inner),
            ctx.styles.input_text(),
        ),
        Span::styled(" ]", outline),
    ])
}
