// Password view
// Static explanation and a change-password button with no handler

use ratatui::{layout::Rect, Frame};

use super::{render_notice, Notice, ViewContext};

pub const NOTICE: Notice = Notice {
    title: "Password",
    description: "Change your password here. After saving, you'll be logged out.",
    button: "Change Password",
    gap_before_button: false,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    render_notice(f, area, ctx, &NOTICE);
}
