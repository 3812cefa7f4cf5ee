use super::Frame;
use crate::state::{State, Step};
use crate::ui::widgets::{format, spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

/// Render the submission outcome and the applications listing.
///
pub fn applications(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(Step::Addons.title(), styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let receipt = match state.receipt() {
        Some(receipt) => vec![
            Line::from(vec![
                Span::styled("Application ", styling::normal_text_style(theme)),
                Span::styled(receipt.application_id.as_str(), styling::active_list_item_style(theme)),
                Span::raw(": "),
                Span::styled(format::outcome(receipt.eligible), styling::outcome_style(theme, receipt.eligible)),
            ]),
            Line::from(Span::styled(receipt.reason.as_str(), styling::normal_text_style(theme))),
        ],
        None => vec![Line::from(Span::styled(
            "No application submitted in this session.",
            styling::muted_text_style(theme),
        ))],
    };
    frame.render_widget(Paragraph::new(receipt).wrap(Wrap { trim: true }), rows[0]);

    let filters = state.filters();
    let eligible = match filters.eligible {
        None => "any",
        Some(true) => "eligible",
        Some(false) => "not eligible",
    };
    let purpose = filters.purpose.map(|p| p.label()).unwrap_or("any");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Showing: ", styling::muted_text_style(theme)),
            Span::styled(eligible, styling::normal_text_style(theme)),
            Span::styled(" | Purpose: ", styling::muted_text_style(theme)),
            Span::styled(purpose, styling::normal_text_style(theme)),
        ])),
        rows[1],
    );

    let listing = state.store().selected_applications();
    if listing.is_empty() {
        let message = if state.listing().is_loading() {
            "Loading applications..."
        } else {
            "No applications found."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, styling::muted_text_style(theme))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme)),
            ),
            rows[2],
        );
    } else {
        let table_rows: Vec<Row> = listing
            .iter()
            .map(|application| {
                Row::new(vec![
                    application.id.clone(),
                    application.status.clone(),
                    application.purpose.clone(),
                ])
                .style(styling::normal_text_style(theme))
            })
            .collect();
        let table = Table::new(
            table_rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ],
        )
        .header(Row::new(vec!["ID", "Status", "Purpose"]).style(styling::highlight_style(theme)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
        frame.render_widget(table, rows[2]);
    }

    let pagination = state.store().pagination();
    let status = if state.listing().is_loading() {
        Span::styled(
            format!("{} Fetching applications...", spinner::frame(*state.get_spinner_index())),
            styling::normal_text_style(theme),
        )
    } else if let Some(error) = state.listing().error() {
        Span::styled(error, styling::error_text_style(theme))
    } else {
        Span::styled(
            format!("Page {} of {}", pagination.page, pagination.total_pages.max(1)),
            styling::muted_text_style(theme),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(status)), rows[3]);
}
