use super::Frame;
use crate::state::{State, Step};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the list of wizard steps, marking the active one.
///
pub fn stepper(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let current = state.store().step();
    let submitted = state.store().is_submitted();

    let mut lines = vec![
        Line::from(Span::styled(" ArisePreQ", styling::banner_style(theme))),
        Line::from(""),
    ];
    for step in Step::ALL {
        let done = step.index() < current.index() || submitted;
        let marker_style = if step == current {
            styling::active_list_item_style(theme)
        } else if done {
            Style::default().fg(theme.secondary.to_color())
        } else {
            styling::muted_text_style(theme)
        };
        let marker = if done { "✓" } else { "•" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), marker_style),
            Span::styled(format!("STEP {}", step.index() + 1), styling::muted_text_style(theme)),
        ]));
        let label_style = if step == current {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        lines.push(Line::from(Span::styled(format!("   {}", step.label()), label_style)));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(Paragraph::new(lines).block(block), size);
}
