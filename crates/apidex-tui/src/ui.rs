// UI rendering logic
use crate::{App, InputMode};
use apidex_core::models::{ApiRecord, SuggestionKind};
use apidex_core::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Core theme color -> ratatui color
fn tc(c: apidex_core::theme::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_search_input(frame, app, chunks[1]);

    match app.state.view() {
        View::Browsing => render_browse(frame, app, chunks[2]),
        View::Filtered => render_results(frame, app, chunks[2]),
    }

    // Suggestion dropdown sits on top of the content, under the search box.
    if app.input_mode == InputMode::Searching && !app.suggestions.is_empty() {
        render_suggestions(frame, app, chunks[1], chunks[2]);
    }

    if app.state.modal_open() {
        render_detail_modal(frame, app, frame.area());
    }

    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    // Left: logo
    let logo = Paragraph::new(Line::from(Span::styled(
        "apidex",
        Style::default().fg(tc(colors.title)).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(tc(colors.border))));
    frame.render_widget(logo, header_chunks[0]);

    // Center: active category and theme name
    let center = Paragraph::new(Line::from(vec![
        Span::styled(
            app.category_label(),
            Style::default().fg(tc(colors.category)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(tc(colors.muted))),
        Span::styled(app.theme.name.as_str(), Style::default().fg(tc(colors.subtitle))),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(tc(colors.border))));
    frame.render_widget(center, header_chunks[1]);

    // Right: favorites and visible record counts
    let stats = Paragraph::new(Line::from(vec![
        Span::styled("★ ", Style::default().fg(tc(colors.favorite))),
        Span::styled(
            format!("{}", app.state.favorites.len()),
            Style::default().fg(tc(colors.favorite)).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} APIs", app.visible_records().len()),
            Style::default().fg(tc(colors.accent)),
        ),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(tc(colors.border))));
    frame.render_widget(stats, header_chunks[2]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let focused = app.input_mode == InputMode::Searching;

    let border = if focused {
        tc(colors.border_focused)
    } else {
        tc(colors.border)
    };

    let text = if app.state.query.is_empty() && !focused {
        Line::from(Span::styled(
            "Press / to search APIs by name, description, tag or use case",
            Style::default().fg(tc(colors.muted)),
        ))
    } else {
        Line::from(Span::styled(
            app.state.query.as_str(),
            Style::default().fg(tc(colors.foreground)),
        ))
    };

    let title = if focused { " Search (typing) " } else { " Search " };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    frame.render_widget(input, area);

    if focused {
        // Cursor after the typed query, inside the border.
        let x = area.x + 1 + cursor_offset(&app.state.query);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Column offset of the cursor after the query. Counts characters, not
/// bytes, so multi-byte input does not push the cursor off target.
fn cursor_offset(query: &str) -> u16 {
    query.chars().count() as u16
}

fn render_suggestions(frame: &mut Frame, app: &App, search_area: Rect, content_area: Rect) {
    let colors = &app.theme.colors;

    let height = (app.suggestions.len() as u16 + 2).min(content_area.height);
    let area = Rect {
        x: search_area.x + 2,
        y: content_area.y,
        width: search_area.width.saturating_sub(4).min(50),
        height,
    };

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| {
            let (marker, color) = match s.kind {
                SuggestionKind::Api => ("api ", tc(colors.accent)),
                SuggestionKind::Category => ("cat ", tc(colors.category)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(s.text.clone(), Style::default().fg(tc(colors.foreground))),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(colors.border_focused)))
            .title(" Suggestions "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_browse(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_trending(frame, app, chunks[0]);
    render_category_tiles(frame, app, chunks[1]);
}

fn render_trending(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = &app.theme.colors;

    let items: Vec<ListItem> = app
        .trending
        .iter()
        .map(|record| record_line(record, app))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tc(colors.border)))
                .title(" Trending APIs "),
        )
        .highlight_style(
            Style::default()
                .bg(tc(colors.selected_bg))
                .fg(tc(colors.selected))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_category_tiles(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let mut lines: Vec<Line> = Vec::new();
    for category in &app.categories {
        lines.push(Line::from(vec![
            Span::styled(
                category.name.clone(),
                Style::default().fg(tc(colors.category)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} APIs)", category.count),
                Style::default().fg(tc(colors.muted)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            category.description.clone(),
            Style::default().fg(tc(colors.subtitle)),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab cycles through categories",
        Style::default().fg(tc(colors.muted)),
    )));

    let tiles = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(colors.border)))
            .title(" Browse by Category "),
    );
    frame.render_widget(tiles, area);
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = &app.theme.colors;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let title = if app.state.query.trim().is_empty() {
        format!(" {} ", app.category_label())
    } else {
        format!(" Results for \"{}\" ", app.state.query.trim())
    };

    if app.state.is_searching {
        // Loading placeholder; distinct from the empty state below.
        let loading = Paragraph::new(Line::from(Span::styled(
            "Searching…",
            Style::default().fg(tc(colors.accent)),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tc(colors.border)))
                .title(title),
        );
        frame.render_widget(loading, chunks[0]);
    } else if app.state.results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No APIs found",
                Style::default().fg(tc(colors.subtitle)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search terms or browse by category",
                Style::default().fg(tc(colors.muted)),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tc(colors.border)))
                .title(title),
        );
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .state
            .results
            .iter()
            .map(|record| record_line(record, app))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(tc(colors.border)))
                    .title(title),
            )
            .highlight_style(
                Style::default()
                    .bg(tc(colors.selected_bg))
                    .fg(tc(colors.selected))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» ");

        frame.render_stateful_widget(list, chunks[0], &mut app.list_state);
    }

    render_preview(frame, app, chunks[1]);
}

/// One row of the record list: favorite marker, name, popularity.
fn record_line(record: &ApiRecord, app: &App) -> ListItem<'static> {
    let colors = &app.theme.colors;
    let marker = if app.state.favorites.contains(&record.id) {
        Span::styled("★ ", Style::default().fg(tc(colors.favorite)))
    } else {
        Span::raw("  ")
    };

    ListItem::new(Line::from(vec![
        marker,
        Span::styled(
            record.name.clone(),
            Style::default().fg(tc(colors.foreground)),
        ),
        Span::styled(
            format!("  ♥{}", record.metadata.popularity),
            Style::default().fg(tc(colors.popularity)),
        ),
    ]))
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let Some(record) = app.selected_record() else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(tc(colors.muted)),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tc(colors.border)))
                .title(" Details "),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = record_detail_lines(record, app);
    let preview = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(colors.border)))
            .title(" Details "),
    );
    frame.render_widget(preview, area);
}

fn record_detail_lines(record: &ApiRecord, app: &App) -> Vec<Line<'static>> {
    let colors = &app.theme.colors;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                record.name.clone(),
                Style::default().fg(tc(colors.title)).add_modifier(Modifier::BOLD),
            ),
            if app.state.favorites.contains(&record.id) {
                Span::styled("  ★ favorited", Style::default().fg(tc(colors.favorite)))
            } else {
                Span::raw("")
            },
        ]),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().fg(tc(colors.foreground)),
        )),
        Line::from(""),
    ];

    if !record.use_case().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Use case: ", Style::default().fg(tc(colors.subtitle))),
            Span::styled(record.use_case().to_string(), Style::default().fg(tc(colors.foreground))),
        ]));
    }

    if !record.tags().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(tc(colors.subtitle))),
            Span::styled(
                record.tags().join(", "),
                Style::default().fg(tc(colors.tag)),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Popularity: ", Style::default().fg(tc(colors.subtitle))),
        Span::styled(
            record.metadata.popularity.to_string(),
            Style::default().fg(tc(colors.popularity)),
        ),
    ]));

    if let Some(latency) = record.metadata.latency_ms {
        lines.push(Line::from(vec![
            Span::styled("Typical latency: ", Style::default().fg(tc(colors.subtitle))),
            Span::styled(format!("{} ms", latency), Style::default().fg(tc(colors.foreground))),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Auth: ", Style::default().fg(tc(colors.subtitle))),
        Span::styled(record.auth.to_string(), Style::default().fg(tc(colors.foreground))),
        Span::styled("   HTTPS: ", Style::default().fg(tc(colors.subtitle))),
        Span::styled(
            if record.https { "yes" } else { "no" },
            Style::default().fg(tc(colors.foreground)),
        ),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Docs: ", Style::default().fg(tc(colors.subtitle))),
        Span::styled(record.docs_url.clone(), Style::default().fg(tc(colors.accent))),
    ]));

    lines
}

fn render_detail_modal(frame: &mut Frame, app: &App, screen: Rect) {
    let colors = &app.theme.colors;
    let Some(record) = app.modal_record() else {
        return;
    };

    let area = centered_rect(60, 60, screen);
    let mut lines = record_detail_lines(record, app);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc closes  ·  f toggles favorite  ·  c compares (logged)",
        Style::default().fg(tc(colors.muted)),
    )));

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(colors.border_focused)))
            .title(format!(" {} ", record.name)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let hint = if let Some(err) = &app.error_message {
        Line::from(Span::styled(
            err.clone(),
            Style::default().fg(tc(colors.error)),
        ))
    } else {
        match app.input_mode {
            InputMode::Searching => Line::from(Span::styled(
                "type to search  ·  Enter/Esc done  ·  ↓ results",
                Style::default().fg(tc(colors.muted)),
            )),
            InputMode::Normal => Line::from(Span::styled(
                "/ search  ·  Tab category  ·  j/k move  ·  Enter details  ·  f favorite  ·  t theme  ·  q quit",
                Style::default().fg(tc(colors.muted)),
            )),
        }
    };

    frame.render_widget(Paragraph::new(hint), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_offset_counts_characters_not_bytes() {
        assert_eq!(cursor_offset(""), 0);
        assert_eq!(cursor_offset("github"), 6);
        // "café" is five bytes but four columns.
        assert_eq!(cursor_offset("café"), 4);
        assert_eq!(cursor_offset("météo"), 5);
    }
}

/// Centered popup rect, percentage-based
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
