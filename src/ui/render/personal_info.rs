use super::Frame;
use crate::eligibility::LoanPurpose;
use crate::state::{FormField, State, Step};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the personal-info form.
///
pub fn personal_info(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let step = Step::PersonalInfo;
    let block = Block::default()
        .title(Span::styled(step.title(), styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(FormField::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            step.description(),
            styling::muted_text_style(theme),
        ))),
        rows[0],
    );

    let form = state.personal_info_form();
    for (i, field) in FormField::ALL.iter().enumerate() {
        let focused = form.focus() == *field;
        let mut title = vec![Span::styled(
            field.field().label(),
            if focused {
                styling::active_list_item_style(theme)
            } else {
                styling::normal_text_style(theme)
            },
        )];
        if let Some(message) = form.errors().get(field.field()) {
            title.push(Span::styled(format!("  {}", message), styling::error_text_style(theme)));
        }

        let value = form.value(*field);
        let content = if value.is_empty() {
            Span::styled(field.placeholder(), styling::muted_text_style(theme))
        } else if *field == FormField::LoanPurpose {
            let label = match value.parse::<LoanPurpose>() {
                Ok(purpose) => purpose.label(),
                Err(_) => value,
            };
            Span::styled(format!("‹ {} ›", label), styling::normal_text_style(theme))
        } else {
            Span::styled(value, styling::normal_text_style(theme))
        };
        let cursor = if focused && *field != FormField::LoanPurpose { "▏" } else { "" };

        let input = Paragraph::new(Line::from(vec![content, Span::raw(cursor)])).block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(if focused {
                    styling::active_block_border_style(theme)
                } else {
                    styling::normal_block_border_style(theme)
                }),
        );
        frame.render_widget(input, rows[i + 1]);
    }

    let status = if state.is_submitting() {
        Line::from(Span::styled(
            format!("{} Checking your eligibility...", spinner::frame(*state.get_spinner_index())),
            styling::normal_text_style(theme),
        ))
    } else if let Some(error) = state.submission_error() {
        Line::from(Span::styled(error, styling::error_text_style(theme)))
    } else if !form.errors().is_empty() {
        Line::from(Span::styled(
            format!("Please correct {} field(s) above.", form.errors().len()),
            styling::error_text_style(theme),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(
        Paragraph::new(status).wrap(Wrap { trim: true }),
        rows[rows.len() - 1],
    );
}
