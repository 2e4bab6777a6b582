use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::common::{pager_line, panel, render_error, render_loading};
use crate::i18n::{t, t_fmt, t_fmt1};
use crate::logic::{DerivedView, display_type_label};
use crate::state::{AppState, LoadState, Route, TypeFilter};
use crate::theme::theme;
use crate::util::{format_price, truncate_to_width};

/// What: Pick the empty-state message for an empty derived view.
///
/// Inputs:
/// - `app`: Application state (search term, filter, locale)
///
/// Output:
/// - Translated message distinguishing search, type filter and plain listing.
fn empty_message(app: &AppState) -> String {
    let params = &app.models_params;
    if params.is_search() {
        t_fmt1(app, "app.models.empty_search", params.search_term.trim())
    } else if let TypeFilter::Only(_) = params.type_filter {
        t_fmt1(app, "app.models.empty_type", t(app, params.type_filter.label_key()))
    } else {
        t(app, "app.models.empty_listing")
    }
}

/// Search box and type filter row.
fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let term = &app.models_params.search_term;
    let search_line = if term.is_empty() && !app.search_focused {
        Line::from(Span::styled(
            t(app, "app.models.search_placeholder"),
            Style::default().fg(th.overlay1),
        ))
    } else {
        let mut spans = vec![Span::styled(term.clone(), Style::default().fg(th.text))];
        if app.search_focused {
            spans.push(Span::styled("▏", Style::default().fg(th.sapphire)));
        }
        Line::from(spans)
    };
    let mut search_block = panel(format!("/ {}", t(app, "app.models.search_title")));
    if app.search_focused {
        search_block = search_block.border_style(Style::default().fg(th.sapphire));
    }
    f.render_widget(Paragraph::new(search_line).block(search_block), cols[0]);

    let filter = Line::from(Span::styled(
        t(app, app.models_params.type_filter.label_key()),
        Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(filter).block(panel(format!("Tab {}", t(app, "app.models.filter_title")))),
        cols[1],
    );
}

/// One page of models with the "Showing a-b of n" line and pager.
fn render_listing(f: &mut Frame, area: Rect, app: &AppState, view: &DerivedView) {
    let th = theme();
    let block = panel(t(app, "app.models.selection"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if view.items.is_empty() {
        f.render_widget(
            Paragraph::new(empty_message(app))
                .alignment(Alignment::Center)
                .style(Style::default().fg(th.overlay1)),
            inner,
        );
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(t_fmt(
            app,
            "app.models.showing",
            &[&view.first_shown(), &view.last_shown(), &view.total_items],
        ))
        .style(Style::default().fg(th.subtext0)),
        parts[0],
    );

    let name_width = usize::from(parts[1].width).saturating_sub(40).max(12);
    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|m| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<name_width$}", truncate_to_width(&m.name, name_width)),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {:<18}", display_type_label(app.locale.current(), m)),
                    Style::default().fg(th.lavender),
                ),
            ];
            if let Some(price) = format_price(m.price) {
                spans.push(Span::styled(
                    format!("  {price}"),
                    Style::default().fg(th.green),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.models_selected));
    f.render_stateful_widget(list, parts[1], &mut state);

    f.render_widget(Paragraph::new(pager_line(app, view)), parts[2]);
}

/// What: Render the models screen of the current brand.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Body area
/// - `app`: Application state
pub fn render_models(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let Route::Models { brand_id } = &app.route else {
        return;
    };
    let brand = app
        .brand_name(brand_id)
        .map_or_else(|| brand_id.clone(), ToString::to_string);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let title = vec![
        Line::from(vec![
            Span::styled(
                t_fmt1(app, "app.models.title", &brand),
                Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", t(app, "app.models.hero")),
                Style::default().fg(th.subtext0),
            ),
        ]),
        Line::from(Span::styled(
            format!("← {}", t(app, "app.actions.back_to_brands")),
            Style::default().fg(th.overlay1),
        )),
    ];
    f.render_widget(Paragraph::new(title), rows[0]);
    render_controls(f, rows[1], app);

    match &app.models {
        LoadState::Idle | LoadState::Loading => {
            render_loading(f, rows[2], app, "app.models.loading");
        }
        LoadState::Failed(e) => render_error(f, rows[2], app, "app.models.error", e),
        LoadState::Loaded(_) => {
            if let Some(view) = app.models_view() {
                render_listing(f, rows[2], app, &view);
            }
        }
    }
}
