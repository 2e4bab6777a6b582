//! Shared widgets: header, footer, loading and error panels, pager line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n::{t, t_fmt};
use crate::logic::Page;
use crate::state::{AppState, Route};
use crate::theme::theme;

/// What: Compute a rectangle of at most `width` x `height` centered in `area`.
///
/// Inputs:
/// - `width`, `height`: Desired size
/// - `area`: Containing area
///
/// Output:
/// - Centered rectangle clamped to `area`.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Rounded, themed panel with a bold title.
#[must_use]
pub fn panel(title: String) -> Block<'static> {
    let th = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(th.base))
}

/// What: Render the top bar: shop name, tagline and current language.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Header area (3 rows)
/// - `app`: Application state (locale)
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let locale = app.locale.current();
    let lang = format!(
        "{}: {} [L]",
        t(app, "app.language"),
        t(app, locale.label_key())
    );
    let left = Line::from(vec![
        Span::styled(
            t(app, "app.shop_name"),
            Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(t(app, "app.tagline"), Style::default().fg(th.subtext0)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(th.surface1))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(left), inner);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            lang,
            Style::default().fg(th.sapphire),
        )))
        .alignment(Alignment::Right),
        inner,
    );
}

/// What: Render the bottom bar: key hints for the screen and the copyright line.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Footer area (2 rows)
/// - `app`: Application state
pub fn render_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let hint_key = if app.search_focused {
        "app.hints.search"
    } else {
        match app.route {
            Route::Brands => "app.hints.brands",
            Route::Models { .. } => "app.hints.models",
            Route::Details { .. } => "app.hints.details",
        }
    };
    let lines = vec![
        Line::from(Span::styled(t(app, hint_key), Style::default().fg(th.overlay2))),
        Line::from(Span::styled(t(app, "app.footer"), Style::default().fg(th.overlay1))),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(th.mantle)),
        area,
    );
}

/// What: Render a centered loading message.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Body area
/// - `app`: Application state
/// - `key`: Translation key of the message
pub fn render_loading(f: &mut Frame, area: Rect, app: &AppState, key: &str) {
    let th = theme();
    let rect = centered_rect(area.width, 3, area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            t(app, key),
            Style::default().fg(th.sapphire).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center),
        rect,
    );
}

/// What: Render an error panel with retry and back affordances.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Body area
/// - `app`: Application state
/// - `title_key`: Translation key of the headline
/// - `detail`: Untranslated error text (dimmed)
pub fn render_error(f: &mut Frame, area: Rect, app: &AppState, title_key: &str, detail: &str) {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            t(app, title_key),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail.to_string(), Style::default().fg(th.overlay1))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(th.yellow)),
            Span::styled(t(app, "app.actions.retry"), Style::default().fg(th.text)),
        ]),
    ];
    if let Some(parent) = app.parent_route() {
        let back_key = match parent {
            Route::Models { .. } => "app.actions.back_to_models",
            _ => "app.actions.back_to_brands",
        };
        lines.push(Line::from(vec![
            Span::styled("[Esc] ", Style::default().fg(th.yellow)),
            Span::styled(t(app, back_key), Style::default().fg(th.text)),
        ]));
    }
    let rect = centered_rect(area.width.saturating_sub(4).min(72), 8, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel(t(app, "app.alert.title"))),
        rect,
    );
}

/// What: Build the "< Previous  Page x of y  Next >" line for a page.
///
/// Inputs:
/// - `app`: Application state (labels)
/// - `page`: Page metadata
///
/// Output:
/// - Line with disabled controls dimmed.
#[must_use]
pub fn pager_line<T>(app: &AppState, page: &Page<T>) -> Line<'static> {
    let th = theme();
    let style_for = |enabled: bool| {
        if enabled {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.surface2)
        }
    };
    Line::from(vec![
        Span::styled(
            format!("← {}", t(app, "app.pagination.prev")),
            style_for(page.has_prev()),
        ),
        Span::raw("   "),
        Span::styled(
            t_fmt(
                app,
                "app.pagination.page",
                &[&(page.page_index + 1), &page.total_pages],
            ),
            Style::default().fg(th.subtext1),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} →", t(app, "app.pagination.next")),
            style_for(page.has_next()),
        ),
    ])
    .alignment(Alignment::Center)
}
