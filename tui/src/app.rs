//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin surface over the
//! ledger:
//! 1. Converts key presses to [`LedgerEvent`]s
//! 2. Applies them to the owned [`Ledger`]
//! 3. Renders the resulting snapshot
//!
//! The App itself only holds input buffers and the roster cursor. Which
//! panel receives keys is derived from ledger state, so the add-friend /
//! selection exclusion lives in exactly one place.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use tally_core::{Ledger, LedgerEvent, Payer, Standing};

use crate::forms::{AddFriendField, AddFriendForm, SplitBillForm, SplitField};
use crate::theme;
use crate::widgets::field::{Field, LABEL_WIDTH};

/// Sidebar width (columns) for the friend roster
const SIDEBAR_WIDTH: u16 = 34;

/// Height of the add-friend panel, borders included
const ADD_FORM_HEIGHT: u16 = 4;

/// Which panel receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Roster,
    AddFriend,
    SplitBill,
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The owned ledger every event is applied to
    ledger: Ledger,
    /// Roster cursor (index into the friend list)
    cursor: usize,
    /// Add-friend input buffers
    add_form: AddFriendForm,
    /// Split-bill input buffers
    split_form: SplitBillForm,
}

impl App {
    /// Create an App over a ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            running: true,
            ledger,
            cursor: 0,
            add_form: AddFriendForm::default(),
            split_form: SplitBillForm::default(),
        }
    }

    /// The ledger behind the surface
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Split-bill input state
    pub fn split_form(&self) -> &SplitBillForm {
        &self.split_form
    }

    /// Whether the app wants another event
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();

        // Render the first frame before any input arrives
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };
            match event? {
                // Only handle Press events (not Release or Repeat)
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                _ => {}
            }
            terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    /// Which panel keys go to, derived from ledger state
    fn focus(&self) -> Focus {
        if self.ledger.is_add_friend_open() {
            Focus::AddFriend
        } else if self.ledger.selected_friend().is_some() {
            Focus::SplitBill
        } else {
            Focus::Roster
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        match self.focus() {
            Focus::Roster => self.handle_roster_key(key),
            Focus::AddFriend => self.handle_add_friend_key(key),
            Focus::SplitBill => self.handle_split_key(key),
        }
    }

    fn handle_roster_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.ledger.friends().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(friend) = self.ledger.friends().get(self.cursor) {
                    let id = friend.id.clone();
                    self.ledger.apply(LedgerEvent::SelectFriend { id });
                    self.split_form = SplitBillForm::default();
                }
            }
            KeyCode::Char('a') => {
                self.ledger.apply(LedgerEvent::ToggleAddFriend);
                self.add_form = AddFriendForm::default();
            }
            _ => {}
        }
    }

    fn handle_add_friend_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.ledger.apply(LedgerEvent::ToggleAddFriend),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.add_form.next_field();
            }
            KeyCode::Enter => {
                if let Some(event) = self.add_form.submit() {
                    self.ledger.apply(event);
                    self.add_form = AddFriendForm::default();
                    // Land the cursor on the friend that was just added
                    self.cursor = self.ledger.friends().len().saturating_sub(1);
                }
            }
            KeyCode::Backspace => self.add_form.pop(),
            KeyCode::Char(c) => self.add_form.push(c),
            _ => {}
        }
    }

    fn handle_split_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if let Some(id) = self.ledger.selected_id().cloned() {
                    self.ledger.apply(LedgerEvent::SelectFriend { id });
                }
                self.split_form = SplitBillForm::default();
            }
            KeyCode::Tab | KeyCode::Down => self.split_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.split_form.prev_field(),
            KeyCode::Left | KeyCode::Right => {
                if self.split_form.focus == SplitField::Payer {
                    self.split_form.toggle_payer();
                }
            }
            KeyCode::Char(' ') if self.split_form.focus == SplitField::Payer => {
                self.split_form.toggle_payer();
            }
            KeyCode::Enter => {
                if let Some(event) = self.split_form.submit() {
                    self.ledger.apply(event);
                    self.split_form = SplitBillForm::default();
                }
            }
            KeyCode::Backspace => self.split_form.pop(),
            KeyCode::Char(c) => self.split_form.push(c),
            _ => {}
        }
    }

    /// Draw one frame from the current ledger snapshot
    pub fn draw(&self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        let [sidebar, detail] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]).areas(main);

        if self.ledger.is_add_friend_open() {
            let [roster, form] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(ADD_FORM_HEIGHT)])
                    .areas(sidebar);
            self.draw_roster(frame, roster);
            self.draw_add_friend(frame, form);
        } else {
            self.draw_roster(frame, sidebar);
        }

        self.draw_detail(frame, detail);
        self.draw_status(frame, status);
    }

    /// Render the friend roster
    fn draw_roster(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Friends ")
            .title_style(Style::default().fg(theme::ACCENT_AMBER));

        let friends = self.ledger.friends();
        if friends.is_empty() {
            let hint = Paragraph::new("No friends yet - press a to add one")
                .style(Style::default().fg(theme::DIM_GRAY))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = friends
            .iter()
            .map(|friend| {
                let selected = self.ledger.selected_id() == Some(&friend.id);
                let marker = if selected { "▸ " } else { "  " };
                let name_style = if selected {
                    Style::default()
                        .fg(theme::ACCENT_AMBER)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::INPUT_WHITE)
                };
                let standing = friend.standing();
                ListItem::new(vec![
                    Line::from(Span::styled(format!("{marker}{}", friend.name), name_style)),
                    Line::from(Span::styled(
                        format!("  {}", standing.summary(&friend.name)),
                        standing_style(standing),
                    )),
                ])
            })
            .collect();

        let mut list = List::new(items).block(block);
        if self.focus() == Focus::Roster {
            list = list.highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        }

        let mut state = ListState::default();
        state.select(Some(self.cursor.min(friends.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// Render the add-friend panel below the roster
    fn draw_add_friend(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add a friend ")
            .title_style(Style::default().fg(theme::ACCENT_AMBER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name_row, avatar_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(
            Field::new("Name", &self.add_form.name)
                .focused(self.add_form.focus == AddFriendField::Name),
            name_row,
        );
        frame.render_widget(
            Field::new("Avatar URL", &self.add_form.avatar_url)
                .focused(self.add_form.focus == AddFriendField::Avatar),
            avatar_row,
        );
    }

    /// Render the detail panel: the split-bill form, or a hint
    fn draw_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(friend) = self.ledger.selected_friend() else {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Split a bill ")
                .title_style(Style::default().fg(theme::DIM_GRAY));
            let hint = Paragraph::new("Select a friend to split a bill")
                .style(Style::default().fg(theme::DIM_GRAY))
                .block(block);
            frame.render_widget(hint, area);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Split a bill with {} ", friend.name))
            .title_style(Style::default().fg(theme::ACCENT_AMBER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // avatar subtitle
            Constraint::Length(1),
            Constraint::Length(1), // bill
            Constraint::Length(1), // your share
            Constraint::Length(1), // derived share
            Constraint::Length(1),
            Constraint::Length(1), // payer
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(friend.avatar_url.as_str()).style(Style::default().fg(theme::DIM_GRAY)),
            rows[0],
        );

        frame.render_widget(
            Field::new("Bill", &self.split_form.bill)
                .focused(self.split_form.focus == SplitField::Bill),
            rows[2],
        );
        frame.render_widget(
            Field::new("Your share", &self.split_form.user_share)
                .focused(self.split_form.focus == SplitField::UserShare),
            rows[3],
        );

        let share_label = format!("{}'s share", friend.name);
        let share_value = format!("${}", self.split_form.friend_share());
        frame.render_widget(
            Field::new(&share_label, &share_value)
                .value_style(Style::default().fg(theme::DERIVED_BLUE)),
            rows[4],
        );

        let payer_focused = self.split_form.focus == SplitField::Payer;
        let mut active = Style::default()
            .fg(theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD);
        if payer_focused {
            active = active.add_modifier(Modifier::REVERSED);
        }
        let inactive = Style::default().fg(theme::DIM_GRAY);
        let (you_style, friend_style) = match self.split_form.payer {
            Payer::User => (active, inactive),
            Payer::Friend => (inactive, active),
        };
        let payer_line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Who pays", width = LABEL_WIDTH as usize),
                Style::default().fg(theme::DIM_GRAY),
            ),
            Span::styled("You", you_style),
            Span::raw("   "),
            Span::styled(friend.name.clone(), friend_style),
        ]);
        frame.render_widget(Paragraph::new(payer_line), rows[6]);
    }

    /// Render the one-line status bar of contextual key hints
    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus() {
            Focus::Roster => " ↑/↓ move | Enter select | a add friend | q quit",
            Focus::AddFriend => " Tab switch field | Enter add | Esc close",
            Focus::SplitBill => " Tab fields | ←/→ payer | Enter split | Esc deselect",
        };
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme::DIM_GRAY)),
            area,
        );
    }
}

/// Color for a standing's summary line
fn standing_style(standing: Standing) -> Style {
    match standing {
        Standing::Even => Style::default().fg(theme::EVEN_GRAY),
        Standing::OwesYou(_) => Style::default().fg(theme::OWES_YOU_GREEN),
        Standing::YouOwe(_) => Style::default().fg(theme::YOU_OWE_RED),
    }
}
