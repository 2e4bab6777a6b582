use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::common::{centered_rect, panel};
use crate::i18n::t;
use crate::state::{AppState, Modal};
use crate::theme::theme;

/// Help overlay listing the key bindings.
fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let rect = centered_rect(64, 14, area);
    f.render_widget(Clear, rect);
    let keys = [
        "app.help.navigate",
        "app.help.pages",
        "app.help.back",
        "app.help.search",
        "app.help.tabs",
        "app.help.language",
        "app.help.retry",
        "app.help.quit",
    ];
    let mut lines: Vec<Line> = keys
        .iter()
        .map(|k| Line::from(Span::styled(t(app, k), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        t(app, "app.help.close"),
        Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(t(app, "app.help.title")).style(Style::default().bg(th.mantle))),
        rect,
    );
}

/// One-message alert box.
fn render_alert(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let th = theme();
    let rect = centered_rect(60, 7, area);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.yellow))),
        Line::from(""),
        Line::from(Span::styled(
            t(app, "app.help.close"),
            Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(t(app, "app.alert.title")).style(Style::default().bg(th.mantle))),
        rect,
    );
}

/// What: Draw the open modal, if any, above the screen.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full frame area
/// - `app`: Application state
pub fn render_modal(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, area, app),
        Modal::Alert { message } => render_alert(f, area, app, message),
    }
}
