//! TUI (Terminal User Interface) module for Wordle Assistant
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiForm`: field contents, focus and the candidate grid; no terminal access
//! - `TuiInterface`: owns the terminal, renders a `TuiForm` and feeds it key events
//!
//! Every edit to a field becomes a `UserAction`. Once the session has applied
//! it, the form is re-synced from the normalised `ConstraintSet`, so a letter
//! dropped from one field by an edit in another disappears on screen too.

use crate::cli::format_grid;
use crate::constraints::{ConstraintSet, WORD_LENGTH};
use crate::session::{AssistantInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const SCROLL_PAGE_ROWS: usize = 10;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const FOCUS_STYLE: Style = Style::new().fg(Color::Yellow);
const SLOT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const SLOT_FOCUS_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Slot(usize),
    Excluded,
    Present,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Slot(i) if i + 1 < WORD_LENGTH => Self::Slot(i + 1),
            Self::Slot(_) => Self::Excluded,
            Self::Excluded => Self::Present,
            Self::Present => Self::Slot(0),
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Slot(0) => Self::Present,
            Self::Slot(i) => Self::Slot(i - 1),
            Self::Excluded => Self::Slot(WORD_LENGTH - 1),
            Self::Present => Self::Excluded,
        }
    }
}

/// Screen state independent of the terminal.
#[derive(Debug)]
pub struct TuiForm {
    slots: [Option<char>; WORD_LENGTH],
    excluded: String,
    present: String,
    focus: Focus,
    candidates: Vec<String>,
    scroll: usize,
    status: String,
    error_message: String,
}

impl Default for TuiForm {
    fn default() -> Self {
        Self {
            slots: [None; WORD_LENGTH],
            excluded: String::new(),
            present: String::new(),
            focus: Focus::Slot(0),
            candidates: Vec::new(),
            scroll: 0,
            status: "Ready - enter what you know".to_string(),
            error_message: String::new(),
        }
    }
}

impl TuiForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.slots
    }

    #[must_use]
    pub fn excluded(&self) -> &str {
        &self.excluded
    }

    #[must_use]
    pub fn present(&self) -> &str {
        &self.present
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Mirror the normalised constraints back into the fields.
    pub fn sync(&mut self, constraints: &ConstraintSet) {
        self.slots = *constraints.known();
        self.excluded = constraints.excluded().iter().collect();
        self.present = constraints.present().iter().collect();
    }

    pub fn set_candidates(&mut self, candidates: &[String]) {
        self.candidates = candidates.to_vec();
        self.scroll = 0;
        self.status = if candidates.is_empty() {
            "No candidates match. Check your inputs.".to_string()
        } else {
            format!("{} candidates", candidates.len())
        };
    }

    pub fn set_no_input(&mut self) {
        self.candidates.clear();
        self.scroll = 0;
        self.status = "Enter some letters to search".to_string();
    }

    /// A rejected edit leaves no valid result, so the grid is emptied.
    pub fn set_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.candidates.clear();
        self.scroll = 0;
        self.status = format!("Fix the inputs: {message}");
    }

    pub fn reset(&mut self) {
        *self = Self {
            status: "All inputs cleared".to_string(),
            ..Self::default()
        };
    }

    fn grid_rows(&self) -> usize {
        self.candidates.len().div_ceil(WORD_LENGTH)
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Apply one key press. Returns the action to hand to the session, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_key() - code={:?}, modifiers={:?}, focus={:?}",
            key.code,
            key.modifiers,
            self.focus
        );

        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char('l' | 'L') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(UserAction::Clear);
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Right => {
                if let Focus::Slot(i) = self.focus
                    && i + 1 < WORD_LENGTH
                {
                    self.focus = Focus::Slot(i + 1);
                }
            }
            KeyCode::Left => {
                if let Focus::Slot(i) = self.focus
                    && i > 0
                {
                    self.focus = Focus::Slot(i - 1);
                }
            }
            KeyCode::PageDown => {
                let max_scroll = self.grid_rows().saturating_sub(1);
                self.scroll = (self.scroll + SCROLL_PAGE_ROWS).min(max_scroll);
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(SCROLL_PAGE_ROWS),
            KeyCode::Backspace => return self.handle_backspace(),
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_key() - Ignoring character with modifier");
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                return self.handle_letter(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {}
        }
        None
    }

    fn handle_letter(&mut self, c: char) -> Option<UserAction> {
        match self.focus {
            Focus::Slot(i) => {
                if self.slots[i].is_some() {
                    self.error_message = "One letter per box - BACKSPACE to change it".to_string();
                    return None;
                }
                self.slots[i] = Some(c);
                if i + 1 < WORD_LENGTH {
                    self.focus = Focus::Slot(i + 1);
                }
                Some(UserAction::SetSlot(i, Some(c)))
            }
            Focus::Excluded => {
                if self.excluded.contains(c) {
                    return None;
                }
                self.excluded.push(c);
                Some(UserAction::SetExcluded(self.excluded.clone()))
            }
            Focus::Present => {
                if self.present.contains(c) {
                    return None;
                }
                self.present.push(c);
                Some(UserAction::SetPresent(self.present.clone()))
            }
        }
    }

    fn handle_backspace(&mut self) -> Option<UserAction> {
        match self.focus {
            Focus::Slot(i) => {
                let index = if self.slots[i].is_none() && i > 0 {
                    self.focus = Focus::Slot(i - 1);
                    i - 1
                } else {
                    i
                };
                self.slots[index].take()?;
                Some(UserAction::SetSlot(index, None))
            }
            Focus::Excluded => {
                self.excluded.pop()?;
                Some(UserAction::SetExcluded(self.excluded.clone()))
            }
            Focus::Present => {
                self.present.pop()?;
                Some(UserAction::SetPresent(self.present.clone()))
            }
        }
    }
}

/// Render the complete UI layout for `form`.
pub fn render(f: &mut Frame, form: &TuiForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Known letters
            Constraint::Length(3), // Not in word
            Constraint::Length(3), // Position unknown
            Constraint::Min(5),    // Candidates
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_slots(f, chunks[1], form);
    render_text_field(
        f,
        chunks[2],
        "Not in Word",
        &form.excluded,
        form.focus == Focus::Excluded,
    );
    render_text_field(
        f,
        chunks[3],
        "Position Unknown",
        &form.present,
        form.focus == Focus::Present,
    );
    render_candidates(f, chunks[4], form);
    render_status(f, chunks[5], &form.status, &form.error_message);
    render_instructions(f, chunks[6]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORDLE ASSISTANT")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn focus_border(focused: bool) -> Style {
    if focused { FOCUS_STYLE } else { Style::default() }
}

fn render_slots(f: &mut Frame, area: Rect, form: &TuiForm) {
    let focused_slot = match form.focus {
        Focus::Slot(i) => Some(i),
        _ => None,
    };

    let mut spans = vec![Span::raw("  ")];
    for (i, slot) in form.slots.iter().enumerate() {
        let letter = slot.unwrap_or(' ');
        let style = if focused_slot == Some(i) {
            SLOT_FOCUS_STYLE
        } else {
            SLOT_STYLE
        };
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Known Letters")
            .borders(Borders::ALL)
            .border_style(focus_border(focused_slot.is_some())),
    );
    f.render_widget(paragraph, area);
}

fn render_text_field(f: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let content = if focused {
        format!("{text}_")
    } else {
        text.to_string()
    };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(focused)),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, area: Rect, form: &TuiForm) {
    let lines: Vec<Line> = format_grid(&form.candidates)
        .into_iter()
        .skip(form.scroll)
        .map(|row| Line::from(format!("  {row}")))
        .collect();

    let title = Span::styled(format!("Candidates ({})", form.candidates.len()), INFO_STYLE);
    let paragraph =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str, error_message: &str) {
    let (text, style) = if error_message.is_empty() {
        (status, HEADER_STYLE)
    } else {
        (error_message, ERROR_STYLE)
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(
        "TAB/arrows: Move | BACKSPACE: Delete | PGUP/PGDN: Scroll | CTRL-L: Clear | ESC: Quit",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Main TUI interface component.
///
/// Manages terminal setup and teardown, drawing, and key input.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    form: TuiForm,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            form: TuiForm::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let form = &self.form;
        self.terminal.draw(|f| render(f, form))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl AssistantInterface for TuiInterface {
    fn display_welcome(&mut self, word_count: usize) {
        self.form.status = format!("{word_count} words loaded - enter what you know");
        self.draw_or_log();
    }

    fn read_action(&mut self, _constraints: &ConstraintSet) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.form.handle_key(key) {
                        info_log!("read_action() - Action: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_constraints(&mut self, constraints: &ConstraintSet) {
        self.form.sync(constraints);
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.form.set_candidates(candidates);
        self.draw_or_log();
    }

    fn display_no_input(&mut self) {
        self.form.set_no_input();
        self.draw_or_log();
    }

    fn display_error(&mut self, message: &str) {
        self.form.set_error(message);
        self.draw_or_log();
    }

    fn display_cleared(&mut self) {
        self.form.reset();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.form.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
