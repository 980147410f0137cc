//! Tally TUI - Terminal interface for shared-expense balances
//!
//! This crate provides a full-screen terminal UI over the headless
//! [`tally_core`] ledger: a friend roster with colored standings, an
//! add-friend form, and a split-bill form for the selected friend.
//!
//! # Architecture
//!
//! - **App**: event loop, key handling, and drawing
//! - **Forms**: input state for the add-friend and split-bill panels
//! - **Widgets**: small single-line field widgets
//! - **Theme**: the palette

pub mod app;
pub mod forms;
pub mod theme;
pub mod widgets;

pub use app::App;
