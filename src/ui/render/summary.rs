use super::status::record_lines;
use super::Frame;
use crate::state::{State, Step};
use crate::ui::widgets::{format, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the review screen, or the thank-you screen once confirmed.
///
pub fn summary(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(Step::Summary.title(), styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    if state.store().is_submitted() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Thank you!", styling::banner_style(theme))),
            Line::from(""),
            Line::from(Span::styled(
                "Thanks for confirming your application. If you ever need support, please feel free to email us.",
                styling::normal_text_style(theme),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            size,
        );
        return;
    }

    let inner = block.inner(size);
    frame.render_widget(block, size);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    applicant(frame, columns[0], state, theme);

    let record = state.store().loan_status();
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if record.is_some() { 13 } else { 3 }),
            Constraint::Min(4),
        ])
        .split(columns[1]);

    let status_block = Block::default()
        .title("Loan Status")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let status_lines = match record {
        Some(record) => record_lines(state.store().application_id(), record, theme),
        None => vec![Line::from(Span::styled(
            "No loan status checked yet.",
            styling::muted_text_style(theme),
        ))],
    };
    frame.render_widget(
        Paragraph::new(status_lines).wrap(Wrap { trim: true }).block(status_block),
        right[0],
    );

    applications(frame, right[1], state, theme);
}

/// Applicant details, the submission receipt and the confirm prompt.
///
fn applicant(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let info = state.store().personal_info();
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let number = |value: Option<f64>| value.map(format::amount).unwrap_or_else(|| "-".to_string());
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), styling::muted_text_style(theme)),
            Span::styled(value, styling::normal_text_style(theme)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(Step::Summary.description(), styling::muted_text_style(theme))),
        Line::from(""),
        row("Name", text(&info.name)),
        row("Email", text(&info.email)),
        row("Phone", text(&info.phone)),
        row("Age", info.age.map(|age| age.to_string()).unwrap_or_else(|| "-".to_string())),
        row(
            "Loan Purpose",
            info.loan_purpose
                .map(|purpose| purpose.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        row("Monthly Income", number(info.monthly_income)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<16}", "Loan Amount"), styling::active_list_item_style(theme)),
            Span::styled(number(info.loan_amount), styling::active_list_item_style(theme)),
        ]),
    ];

    if let Some(receipt) = state.receipt() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", "Pre-qualification"), styling::muted_text_style(theme)),
            Span::styled(format::outcome(receipt.eligible), styling::outcome_style(theme, receipt.eligible)),
        ]));
        lines.push(row("Application ID", receipt.application_id.clone()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to confirm.",
        styling::normal_text_style(theme),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), size);
}

/// Applications loaded on the result step, with their count.
///
fn applications(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let listing = state.store().selected_applications();
    let mut lines: Vec<Line> = if listing.is_empty() {
        vec![Line::from(Span::styled(
            "No loan applications loaded.",
            styling::muted_text_style(theme),
        ))]
    } else {
        listing
            .iter()
            .map(|application| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", application.id), styling::normal_text_style(theme)),
                    Span::styled(format!("{:<12}", application.status), styling::muted_text_style(theme)),
                    Span::styled(application.purpose.as_str(), styling::normal_text_style(theme)),
                ])
            })
            .collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total Applications: ", styling::muted_text_style(theme)),
        Span::styled(listing.len().to_string(), styling::active_list_item_style(theme)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Loan Applications")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        ),
        size,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{ApplicationPage, ApplicationSummary, LoanPurpose, StatusRecord};
    use fake::{Fake, Faker};
    use crate::state::PersonalInfoDraft;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                summary(frame, area, state, &Theme::default())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn reviews_collected_details() {
        let mut state = State::default();
        state.store_mut().set_personal_info(PersonalInfoDraft {
            name: Some("Ada Lovelace".to_string()),
            loan_amount: Some(250_000.0),
            loan_purpose: Some(LoanPurpose::Business),
            ..PersonalInfoDraft::default()
        });
        let text = rendered(&state);
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("250,000"));
        assert!(text.contains("Business"));
        assert!(text.contains("Press Enter to confirm."));
    }

    #[test]
    fn reviews_listing_and_checked_status() {
        let mut state = State::default();
        state.resolve_applications(
            1,
            Ok(ApplicationPage {
                applications: vec![ApplicationSummary {
                    id: "LOAN-777".to_string(),
                    status: "approved".to_string(),
                    purpose: "medical".to_string(),
                }],
                total_pages: 1,
            }),
        );
        state.resolve_status(
            "S-1".to_string(),
            Ok(StatusRecord {
                full_name: "Zelda Fitzgerald".to_string(),
                reason: "Income covers repayments".to_string(),
                ..Faker.fake()
            }),
        );
        state.store_mut().increase_step(3);

        let text = rendered(&state);
        assert!(text.contains("Zelda Fitzgerald"));
        assert!(text.contains("Income covers repayments"));
        assert!(text.contains("LOAN-777"));
        assert!(text.contains("approved"));
        assert!(text.contains("Total Applications: 1"));
    }

    #[test]
    fn notes_missing_status_and_listing() {
        let text = rendered(&State::default());
        assert!(text.contains("No loan status checked yet."));
        assert!(text.contains("No loan applications loaded."));
        assert!(text.contains("Total Applications: 0"));
    }

    #[test]
    fn thanks_after_confirmation() {
        let mut state = State::default();
        state.store_mut().on_submit(false);
        let text = rendered(&state);
        assert!(text.contains("Thank you!"));
        assert!(!text.contains("Press Enter to confirm."));
    }
}
