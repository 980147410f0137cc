//! Theme and Colors
//!
//! The tally palette - calm foregrounds, with signal colors reserved for
//! balance standings so debts read at a glance.

use ratatui::style::Color;

// ============================================================================
// Balance Standings
// ============================================================================

/// A friend owes the user - green
pub const OWES_YOU_GREEN: Color = Color::Rgb(130, 220, 130);

/// The user owes a friend - red
pub const YOU_OWE_RED: Color = Color::Rgb(255, 100, 100);

/// Settled up - muted gray
pub const EVEN_GRAY: Color = Color::Rgb(160, 160, 160);

// ============================================================================
// UI Colors
// ============================================================================

/// Accent for titles and the selected friend
pub const ACCENT_AMBER: Color = Color::Rgb(255, 184, 108);

/// Labels, hints, and other dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Text the user is currently typing
pub const INPUT_WHITE: Color = Color::Rgb(235, 235, 235);

/// Read-only derived fields
pub const DERIVED_BLUE: Color = Color::Rgb(150, 180, 255);
