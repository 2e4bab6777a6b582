use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
};

use super::common::{pager_line, panel, render_error, render_loading};
use crate::i18n::{t, t_fmt};
use crate::logic::display_type_label;
use crate::state::{AppState, DetailRecord, DetailsTab, LoadState};
use crate::theme::theme;
use crate::util::format_price;

/// Name, type badge, price and description.
fn render_summary(f: &mut Frame, area: Rect, app: &AppState, rec: &DetailRecord) {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            rec.item.name.clone(),
            Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "app.details.type")),
                Style::default().fg(th.subtext0),
            ),
            Span::styled(
                format!("[{}]", display_type_label(app.locale.current(), &rec.item)),
                Style::default().fg(th.lavender),
            ),
        ]),
    ];
    if let Some(price) = format_price(rec.item.price) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "app.details.price")),
                Style::default().fg(th.subtext0),
            ),
            Span::styled(
                price,
                Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(match &rec.description {
        Some(d) => Line::from(Span::styled(d.clone(), Style::default().fg(th.text))),
        None => Line::from(Span::styled(
            t(app, "app.details.no_description"),
            Style::default().fg(th.overlay1),
        )),
    });
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(t(app, "app.details.title"))),
        area,
    );
}

/// Present specification rows, or the empty message.
fn render_specs(f: &mut Frame, area: Rect, app: &AppState, rec: &DetailRecord) {
    let th = theme();
    let rows = rec.specs.as_ref().map(|s| s.rows()).unwrap_or_default();
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            t(app, "app.details.specs.empty"),
            Style::default().fg(th.overlay1),
        ))]
    } else {
        rows.into_iter()
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<18}", t(app, key)),
                        Style::default().fg(th.subtext0),
                    ),
                    Span::styled(value.to_string(), Style::default().fg(th.text)),
                ])
            })
            .collect()
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Current page of musicians with counts and pager.
fn render_musicians(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let Some(page) = app.musicians_view() else {
        return;
    };
    if page.items.is_empty() {
        f.render_widget(
            Paragraph::new(t(app, "app.details.musicians.empty"))
                .style(Style::default().fg(th.overlay1)),
            area,
        );
        return;
    }
    let mut lines = vec![
        Line::from(Span::styled(
            t_fmt(
                app,
                "app.details.musicians.showing",
                &[&page.first_shown(), &page.last_shown(), &page.total_items],
            ),
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
    ];
    for m in &page.items {
        lines.push(Line::from(Span::styled(
            m.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )));
        if !m.bands.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", t(app, "app.details.musicians.bands")),
                    Style::default().fg(th.subtext0),
                ),
                Span::styled(m.bands.join(", "), Style::default().fg(th.lavender)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(pager_line(app, &page));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// What: Render the details screen of the open model.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Body area
/// - `app`: Application state
///
/// Details:
/// - A missing model and a failed request share the same error panel.
pub fn render_details(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let rec = match &app.details {
        LoadState::Idle | LoadState::Loading => {
            render_loading(f, area, app, "app.details.loading");
            return;
        }
        LoadState::Failed(e) => {
            render_error(f, area, app, "app.details.error", e);
            return;
        }
        LoadState::Loaded(rec) => rec,
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    render_summary(f, cols[0], app, rec);

    let block = panel(format!("← {}", t(app, "app.actions.back_to_models")));
    let inner = block.inner(cols[1]);
    f.render_widget(block, cols[1]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let selected = match app.details_tab {
        DetailsTab::Specs => 0,
        DetailsTab::Musicians => 1,
    };
    let tabs = Tabs::new(vec![
        t(app, "app.details.tabs.specifications"),
        t(app, "app.details.tabs.musicians"),
    ])
    .select(selected)
    .style(Style::default().fg(th.overlay2))
    .highlight_style(Style::default().fg(th.peach).add_modifier(Modifier::BOLD))
    .divider("│");
    f.render_widget(tabs, parts[0]);

    match app.details_tab {
        DetailsTab::Specs => render_specs(f, parts[1], app, rec),
        DetailsTab::Musicians => render_musicians(f, parts[1], app),
    }
}
