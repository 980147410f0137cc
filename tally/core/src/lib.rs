//! Tally Core - Headless Shared-Expense Ledger
//!
//! This crate provides the domain logic for tally, completely independent
//! of any UI framework. It can drive a TUI, a web UI, a native GUI, or run
//! headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │            UI Surfaces           │
//! │     TUI (ratatui) / headless     │
//! └────────────────┬─────────────────┘
//!                  │
//!             LedgerEvent
//!                  │
//! ┌────────────────┴─────────────────┐
//! │              Ledger              │
//! │  friends · selection · form flag │
//! └──────────────────────────────────┘
//! ```
//!
//! Surfaces report what the user did as a [`LedgerEvent`]; the [`Ledger`]
//! decides what it means. Every event is handled synchronously and to
//! completion, so there is exactly one place where state changes.
//!
//! # Key Types
//!
//! - [`Ledger`]: the single owned state container
//! - [`LedgerEvent`]: events sent from UI surfaces to the ledger
//! - [`Friend`] / [`Standing`]: roster entries and their display classification
//! - [`BillSplit`] / [`Payer`]: one submitted split and its arithmetic
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure domain logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod events;
pub mod friend;
pub mod ledger;
pub mod split;

// Re-exports for convenience
pub use events::LedgerEvent;
pub use friend::{Friend, FriendId, Standing, AVATAR_BASE_URL};
pub use ledger::Ledger;
pub use split::{clamp_user_share, BillSplit, Payer};
