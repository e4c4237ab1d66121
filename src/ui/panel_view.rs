// Panel View
// The bordered container: tab strip, sliding underline and the one visible content view

use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};
use tui_components::{centered_fixed, RectRegistry, TabStrip};

use super::{account_view, password_view, settings_view, Styles, ViewContext, CONTENT_PADDING_X};
use crate::constants::{HWND_INPUT_PREFIX, HWND_PANEL, HWND_TAB_PREFIX, HWND_TAB_STRIP};
use crate::core::{App, TabName};

/// Tab strip for the current selection and hover
pub fn tab_strip(app: &App, styles: &Styles) -> TabStrip {
    let labels = TabName::ALL.iter().map(|tab| tab.label().to_string()).collect();
    TabStrip::new(labels, app.panel.selected().index())
        .with_colors(styles.tab_strip())
        .with_hovered(app.hovered.map(TabName::index))
}

/// Panel width: the tab strip plus the two border columns
pub fn panel_width(strip: &TabStrip) -> u16 {
    strip.required_width() + 2
}

/// Forget the rects of the previous frame that only exist while drawn
fn clear_frame_rects(registry: &mut RectRegistry) {
    registry.unregister_by_name(HWND_TAB_STRIP);
    registry.unregister_prefix(HWND_TAB_PREFIX);
    registry.unregister_prefix(HWND_INPUT_PREFIX);
}

/// Render the panel centered in `area` and return the rect it occupies
///
/// Drawing also measures the layout: the panel, strip and label rects are
/// registered for hit-testing, and the motion targets are pointed at the
/// current selection.
pub fn render_panel(f: &mut Frame, area: Rect, app: &mut App, title: &str) -> Rect {
    let styles = Styles::new(app.config.palette);
    let strip = tab_strip(app, &styles);
    clear_frame_rects(&mut app.registry);

    app.motion.set_height_target(app.panel.target_height());
    let panel_area = centered_fixed(panel_width(&strip), app.motion.height(), area);
    app.registry.register(Some(HWND_PANEL), panel_area);
    if panel_area.width < 2 || panel_area.height < 2 {
        return panel_area;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.panel_border())
        .title(Span::styled(format!(" {} ", title), styles.panel_title()))
        .style(styles.panel_background());
    let inner = block.inner(panel_area);
    f.render_widget(Clear, panel_area);
    f.render_widget(block, panel_area);

    // Tab strip and underline
    let strip_area = Rect {
        height: TabStrip::HEIGHT.min(inner.height),
        ..inner
    };
    app.registry.register(Some(HWND_TAB_STRIP), strip_area);
    strip.register_labels(&mut app.registry, strip_area, HWND_TAB_PREFIX);

    if let Some(target) = strip.underline_for(strip_area, app.panel.selected().index()) {
        app.motion.set_underline_target(target);
    }
    let strip = strip.with_underline(app.motion.underline());
    strip.render(f, strip_area);

    // The outgoing view stays on screen until its exit finishes
    let view = app.motion.show_view(app.panel.visible_view());

    let bottom = inner.y + inner.height;
    let top = (strip_area.y + strip_area.height + app.motion.content_offset()).min(bottom);
    let content_area = Rect {
        x: inner.x + CONTENT_PADDING_X.min(inner.width),
        y: top,
        width: inner.width.saturating_sub(CONTENT_PADDING_X * 2),
        height: bottom - top,
    };

    let content_styles = styles.faded(app.motion.content_opacity());
    let ctx = ViewContext {
        styles: &content_styles,
        focus: app.panel.focus(),
    };
    match view {
        TabName::Account => account_view::render(f, content_area, &ctx, &mut app.registry),
        TabName::Password => password_view::render(f, content_area, &ctx),
        TabName::Settings => settings_view::render(f, content_area, &ctx),
    }

    panel_area
}
