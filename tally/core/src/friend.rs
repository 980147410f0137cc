//! Friends and Balances
//!
//! A [`Friend`] is one row in the ledger: an opaque id, a display name, an
//! avatar URL, and a signed running balance. Balance > 0 means the friend
//! owes the user; balance < 0 means the user owes the friend; 0 is settled.
//!
//! Friends are created by the add-friend action and never removed or
//! edited; balances move only when a bill split is applied to the selected
//! friend.

use serde::{Deserialize, Serialize};

/// Base URL of the portrait service used for default avatars
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// Friend identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FriendId(pub String);

impl FriendId {
    /// Generate a new unique friend ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FriendId {
    fn default() -> Self {
        Self::new()
    }
}

/// A friend tracked by the ledger
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Friend {
    /// Unique friend id
    pub id: FriendId,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Signed running balance; positive means the friend owes the user
    pub balance: i64,
}

impl Friend {
    /// Create a friend with a fresh id and a settled balance
    pub fn new(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: FriendId::new(),
            name: name.into(),
            avatar_url: avatar_url.into(),
            balance: 0,
        }
    }

    /// Portrait-service URL keyed to a friend id
    pub fn keyed_avatar_url(id: &FriendId) -> String {
        format!("{AVATAR_BASE_URL}?u={}", id.as_str())
    }

    /// Classify the balance for display
    pub fn standing(&self) -> Standing {
        Standing::of(self.balance)
    }
}

/// Display classification of a balance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    /// Settled up
    Even,
    /// The friend owes the user this amount
    OwesYou(i64),
    /// The user owes the friend this amount (absolute value)
    YouOwe(i64),
}

impl Standing {
    /// Classify a signed balance
    pub fn of(balance: i64) -> Self {
        match balance {
            0 => Standing::Even,
            b if b > 0 => Standing::OwesYou(b),
            b => Standing::YouOwe(b.abs()),
        }
    }

    /// The one-line summary shown under a friend's name
    pub fn summary(&self, name: &str) -> String {
        match self {
            Standing::Even => format!("You and {name} are even"),
            Standing::OwesYou(amount) => format!("{name} owes you ${amount}"),
            Standing::YouOwe(amount) => format!("You owe {name} ${amount}"),
        }
    }
}
