use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::common::{pager_line, panel, render_error, render_loading};
use crate::i18n::t;
use crate::logic::BRANDS_PER_PAGE;
use crate::state::{AppState, LoadState};
use crate::theme::theme;

/// What: Render the brands screen.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Body area
/// - `app`: Application state
///
/// Details:
/// - Hero text on top, then one page of brands with the selection highlighted and
///   a pager underneath.
pub fn render_brands(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            t(app, "app.brands.hero"),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            t(app, "app.brands.hero_description"),
            Style::default().fg(th.subtext0),
        )),
        Line::from(Span::styled(
            t(app, "app.brands.select_preferred"),
            Style::default().fg(th.overlay2),
        )),
    ];
    f.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let body = rows[1];
    match &app.brands {
        LoadState::Idle | LoadState::Loading => render_loading(f, body, app, "app.brands.loading"),
        LoadState::Failed(e) => render_error(f, body, app, "app.brands.error", e),
        LoadState::Loaded(list) if list.is_empty() => {
            f.render_widget(
                Paragraph::new(t(app, "app.brands.empty"))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(th.overlay1))
                    .block(panel(t(app, "app.brands.featuring"))),
                body,
            );
        }
        LoadState::Loaded(_) => {
            let Some(page) = app.brands_page() else {
                return;
            };
            let block = panel(t(app, "app.brands.featuring"));
            let inner = block.inner(body);
            f.render_widget(block, body);
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

            let items: Vec<ListItem> = page
                .items
                .iter()
                .map(|b| {
                    ListItem::new(Line::from(vec![
                        Span::styled("♪ ", Style::default().fg(th.peach)),
                        Span::styled(
                            b.name.clone(),
                            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("   {}", t(app, "app.actions.view_guitars")),
                            Style::default().fg(th.overlay1),
                        ),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().bg(th.surface1).fg(th.lavender))
                .highlight_symbol("▶ ");
            let mut state = ListState::default();
            state.select(Some(app.brands_selected % BRANDS_PER_PAGE));
            f.render_stateful_widget(list, parts[0], &mut state);
            f.render_widget(Paragraph::new(pager_line(app, &page)), parts[1]);
        }
    }
}
