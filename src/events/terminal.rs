use crate::state::{FormField, State, Step};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub(crate) fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    match event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.toggle_log();
        }
        KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::PageDown,
            ..
        } => next_step(state),
        KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::PageUp,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => previous_step(state),
        _ => match state.store().step() {
            Step::PersonalInfo => personal_info_key(event, state),
            Step::Addons => addons_key(event, state),
            Step::Plan => plan_key(event, state),
            Step::Summary => summary_key(event, state),
        },
    }
    true
}

fn next_step(state: &mut State) {
    match state.next_step() {
        Ok(transition) => debug!("Next step request accepted: {}", transition),
        Err(e) => debug!("Next step request refused: {}", e),
    }
}

fn previous_step(state: &mut State) {
    match state.previous_step() {
        Ok(transition) => debug!("Previous step request accepted: {}", transition),
        Err(e) => debug!("Previous step request refused: {}", e),
    }
}

/// Return the typed character, if the key is plain text input.
///
fn text_input(event: &KeyEvent) -> Option<char> {
    match event {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers,
            ..
        } if *modifiers == KeyModifiers::NONE || *modifiers == KeyModifiers::SHIFT => Some(*c),
        _ => None,
    }
}

fn personal_info_key(event: KeyEvent, state: &mut State) {
    if let Some(c) = text_input(&event) {
        state.personal_info_form_mut().push_char(c);
        return;
    }
    if event.code == KeyCode::Enter {
        next_step(state);
        return;
    }
    let form = state.personal_info_form_mut();
    match event.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_previous();
        }
        KeyCode::Left if form.focus() == FormField::LoanPurpose => {
            form.cycle_purpose(false);
        }
        KeyCode::Right if form.focus() == FormField::LoanPurpose => {
            form.cycle_purpose(true);
        }
        KeyCode::Backspace => {
            form.pop_char();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}

fn addons_key(event: KeyEvent, state: &mut State) {
    match event.code {
        KeyCode::Enter => next_step(state),
        KeyCode::Left | KeyCode::Char('h') => {
            state.previous_applications_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_applications_page();
        }
        KeyCode::Char('e') => {
            state.cycle_eligible_filter();
        }
        KeyCode::Char('p') => {
            state.cycle_purpose_filter();
        }
        KeyCode::Char('r') => {
            state.refresh_applications();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}

fn plan_key(event: KeyEvent, state: &mut State) {
    if let Some(c) = text_input(&event) {
        state.push_lookup_char(c);
        return;
    }
    match event.code {
        KeyCode::Enter => {
            if let Err(e) = state.check_status() {
                debug!("Status check refused: {}", e);
            }
        }
        KeyCode::Backspace => {
            state.pop_lookup_char();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}

fn summary_key(event: KeyEvent, state: &mut State) {
    match event.code {
        KeyCode::Enter => next_step(state),
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}
