// Settings view
// Static explanation and an update button with no handler

use ratatui::{layout::Rect, Frame};

use super::{render_notice, Notice, ViewContext};

pub const NOTICE: Notice = Notice {
    title: "Settings",
    description: "Manage your notification and privacy settings.",
    button: "Update Settings",
    gap_before_button: true,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    render_notice(f, area, ctx, &NOTICE);
}
