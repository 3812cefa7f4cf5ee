use super::Frame;
use super::{applications, footer, log, personal_info, status, stepper, summary};
use crate::state::{State, Step};
use crate::ui::Theme;
use ratatui::layout::{Constraint, Direction, Layout};

const STEPPER_WIDTH: u16 = 24;
const LOG_HEIGHT: u16 = 8;

/// Render the whole interface according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let theme = Theme::default();

    let mut constraints = vec![Constraint::Min(10)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(STEPPER_WIDTH), Constraint::Min(30)])
        .split(rows[0]);

    stepper(frame, columns[0], state, &theme);
    match state.store().step() {
        Step::PersonalInfo => personal_info(frame, columns[1], state, &theme),
        Step::Addons => applications(frame, columns[1], state, &theme),
        Step::Plan => status(frame, columns[1], state, &theme),
        Step::Summary => summary(frame, columns[1], state, &theme),
    }

    if state.is_log_visible() {
        log(frame, rows[1], state, &theme);
    }
    footer(frame, rows[rows.len() - 1], state, &theme);
}
