use super::Frame;
use crate::eligibility::StatusRecord;
use crate::state::{State, Step};
use crate::ui::widgets::{format, spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the status lookup form and the last fetched record.
///
pub fn status(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(Step::Plan.title(), styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let lookup = state.status_lookup();
    let input = if lookup.input.is_empty() {
        Span::styled("Enter Application ID", styling::muted_text_style(theme))
    } else {
        Span::styled(lookup.input.as_str(), styling::normal_text_style(theme))
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![input, Span::raw("▏")])).block(
            Block::default()
                .title("Application ID")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        ),
        rows[0],
    );

    let progress = if lookup.call.is_loading() {
        Line::from(Span::styled(
            format!("{} Checking...", spinner::frame(*state.get_spinner_index())),
            styling::normal_text_style(theme),
        ))
    } else if let Some(error) = lookup.call.error() {
        Line::from(Span::styled(error, styling::error_text_style(theme)))
    } else {
        Line::from(Span::styled(
            "Press Enter to check status.",
            styling::muted_text_style(theme),
        ))
    };
    frame.render_widget(Paragraph::new(progress).wrap(Wrap { trim: true }), rows[1]);

    if let Some(record) = state.store().loan_status() {
        let details = record_lines(state.store().application_id(), record, theme);
        frame.render_widget(
            Paragraph::new(details).wrap(Wrap { trim: true }).block(
                Block::default()
                    .title("Loan Status")
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme)),
            ),
            rows[2],
        );
    }
}

pub(super) fn record_lines<'a>(application_id: &'a str, record: &'a StatusRecord, theme: &Theme) -> Vec<Line<'a>> {
    let field = |label: &'a str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), styling::muted_text_style(theme)),
            Span::styled(value, styling::normal_text_style(theme)),
        ])
    };
    vec![
        Line::from(vec![
            Span::styled(format!("{:<16}", "Decision"), styling::muted_text_style(theme)),
            Span::styled(format::outcome(record.eligible), styling::outcome_style(theme, record.eligible)),
        ]),
        field("Reason", record.reason.clone()),
        field(
            "Application ID",
            record.application_id.clone().unwrap_or_else(|| application_id.to_string()),
        ),
        field("Full Name", record.full_name.clone()),
        field("Email", record.email.clone()),
        field("Phone", record.phone_number.clone()),
        field("Age", record.age.to_string()),
        field("Monthly Income", format::amount(record.monthly_income)),
        field("Loan Amount", format::amount(record.loan_amount)),
        field("Loan Purpose", record.loan_purpose.clone()),
        field("Decided", format::decided_at(record)),
    ]
}
