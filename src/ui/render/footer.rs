use super::Frame;
use crate::state::{State, Step};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the active step.
///
fn controls(state: &State) -> &'static str {
    if state.store().is_submitted() {
        return " Ctrl+C: quit, Ctrl+L: log";
    }
    match state.store().step() {
        Step::PersonalInfo => {
            " Tab/↓ ↑: field, ←/→: purpose, Enter: next step, Ctrl+L: log, Ctrl+C: quit"
        }
        Step::Addons => {
            " ←/→: page, e: eligibility, p: purpose, r: refresh, Enter: next step, Esc: back, Ctrl+C: quit"
        }
        Step::Plan => " Enter: check status, PgDn: next step, Esc: back, Ctrl+L: log, Ctrl+C: quit",
        Step::Summary => " Enter: confirm, Esc: back, Ctrl+L: log, Ctrl+C: quit",
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(size);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            controls(state),
            styling::muted_text_style(theme),
        ))),
        columns[0],
    );

    let activity = if state.is_loading() {
        format!("{} working ", spinner::frame(*state.get_spinner_index()))
    } else {
        format!("step {}/{} ", state.store().current_step() + 1, Step::ALL.len())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(activity, styling::normal_text_style(theme)))
            .alignment(Alignment::Right),
        columns[1],
    );
}
