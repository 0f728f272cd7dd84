//! Settings dialog for the server address and token.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::settings::{SettingsEditor, SettingsField};
use crate::ui::components::{
    input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::COLOR_DIM;

const HINTS: &str = "Tab switch  Enter save  Ctrl+T show token  Esc close";
const HINTS_SHORT: &str = "Tab  Enter save  ^T token  Esc";

/// Render the settings dialog over `area`.
pub fn render_settings_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    editor: &SettingsEditor,
) {
    // Two fields, a spacer and the hint line
    let content_height = input_field_height() * 2 + 2;
    let inner = render_dialog_frame(
        frame,
        area,
        ctx,
        &DialogFrameConfig::new("Settings", content_height).max_width(70),
    );

    let address = InputFieldConfig::new(SettingsField::Address.label(), editor.address())
        .focused(editor.focused() == SettingsField::Address)
        .placeholder("192.168.1.5:8080");
    let used = render_input_field(frame, inner, &address);

    let token_area = Rect {
        y: inner.y + used,
        height: inner.height.saturating_sub(used),
        ..inner
    };
    let token = InputFieldConfig::new(SettingsField::Token.label(), editor.token())
        .focused(editor.focused() == SettingsField::Token)
        .secret(!editor.is_token_visible());
    let used = used + render_input_field(frame, token_area, &token);

    if inner.height > used + 1 {
        let hints_area = Rect {
            x: inner.x + 2,
            y: inner.y + used + 1,
            width: inner.width.saturating_sub(4),
            height: 1,
        };
        let hints = if ctx.is_narrow() { HINTS_SHORT } else { HINTS };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)))),
            hints_area,
        );
    }
}
