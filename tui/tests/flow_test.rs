//! End-to-End Key Flow Tests
//!
//! Drive the App with key events the way a user would and check the
//! resulting ledger state.
//!
//! # Test Coverage
//!
//! 1. **Add-friend flow**: open the form, type a name, submit
//! 2. **Split flow**: select a friend, fill the form, submit, both payers
//! 3. **Guards**: blank names, letter keys in amount fields, the share cap
//! 4. **Quit keys**: Esc from the roster, Ctrl-C from anywhere

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use tally_core::{Ledger, Standing};
use tally_tui::App;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn add_a_friend_with_the_keyboard() {
    let mut app = App::new(Ledger::new());

    app.handle_key(key(KeyCode::Char('a')));
    assert!(app.ledger().is_add_friend_open());

    type_text(&mut app, "Maya");
    app.handle_key(key(KeyCode::Enter)); // avatar field is pre-filled

    let friends = app.ledger().friends();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].name, "Maya");
    assert_eq!(friends[0].balance, 0);
    assert!(!app.ledger().is_add_friend_open(), "a successful add closes the form");
}

#[test]
fn blank_name_blocks_submission() {
    let mut app = App::new(Ledger::new());

    app.handle_key(key(KeyCode::Char('a')));
    app.handle_key(key(KeyCode::Enter));

    assert!(app.ledger().friends().is_empty());
    assert!(app.ledger().is_add_friend_open(), "the form stays open");
}

#[test]
fn split_a_bill_when_you_pay() {
    let mut app = App::new(Ledger::demo());

    // Cursor starts on Clark (balance -7)
    app.handle_key(key(KeyCode::Enter));
    assert!(app.ledger().selected_friend().is_some());

    type_text(&mut app, "100");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "40");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.ledger().friends()[0].balance, -7 + 60);
    assert_eq!(
        app.ledger().selected_id(),
        None,
        "a split clears the selection"
    );
}

#[test]
fn split_a_bill_when_the_friend_pays() {
    let mut app = App::new(Ledger::demo());

    app.handle_key(key(KeyCode::Down)); // cursor to Sarah (balance 20)
    app.handle_key(key(KeyCode::Enter));

    type_text(&mut app, "100");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "40");
    app.handle_key(key(KeyCode::Tab)); // payer row
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Enter));

    let sarah = &app.ledger().friends()[1];
    assert_eq!(sarah.balance, 20 - 40);
    assert_eq!(sarah.standing(), Standing::YouOwe(20));
}

#[test]
fn user_share_is_capped_at_the_bill() {
    let mut app = App::new(Ledger::demo());
    app.handle_key(key(KeyCode::Enter));

    type_text(&mut app, "100");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "999");

    // The third digit would push the share past the bill, so it is refused
    assert_eq!(app.split_form().user_share, "99");
}

#[test]
fn letter_keys_never_reach_amount_fields() {
    let mut app = App::new(Ledger::demo());
    app.handle_key(key(KeyCode::Enter));

    type_text(&mut app, "1x2y5");
    assert_eq!(app.split_form().bill, "125");
}

#[test]
fn submitting_an_unfilled_split_changes_nothing() {
    let mut app = App::new(Ledger::demo());
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(key(KeyCode::Enter)); // both amounts still empty

    assert!(
        app.ledger().selected_friend().is_some(),
        "the form stays open on the selected friend"
    );
    assert_eq!(app.ledger().friends()[0].balance, -7);
}

#[test]
fn escape_deselects_then_quits() {
    let mut app = App::new(Ledger::demo());

    app.handle_key(key(KeyCode::Enter));
    assert!(app.ledger().selected_friend().is_some());

    app.handle_key(key(KeyCode::Esc));
    assert!(app.ledger().selected_friend().is_none());
    assert!(app.is_running());

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.is_running());
}

#[test]
fn ctrl_c_quits_from_inside_a_form() {
    let mut app = App::new(Ledger::demo());
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.is_running());
}

#[test]
fn roster_cursor_stays_in_bounds() {
    let mut app = App::new(Ledger::demo());

    for _ in 0..10 {
        app.handle_key(key(KeyCode::Char('j')));
    }
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        app.ledger().selected_friend().map(|f| f.name.as_str()),
        Some("Anthony")
    );
}
