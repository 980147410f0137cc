//! Bill Splitting
//!
//! A [`BillSplit`] captures one submitted split: the bill total, the user's
//! own share, and who paid upfront. The friend's share is always derived as
//! `total - user_share`, never entered directly.

use serde::{Deserialize, Serialize};

/// Who pays the bill upfront
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payer {
    /// The user pays; the friend ends up owing their share
    #[default]
    User,
    /// The friend pays; the user ends up owing their own share
    Friend,
}

impl Payer {
    /// The other party
    pub fn toggled(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// One submitted bill split
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    /// Total bill amount
    pub total: i64,
    /// The user's own share of the bill
    pub user_share: i64,
    /// Who paid upfront
    pub payer: Payer,
}

impl BillSplit {
    /// The friend's derived share of the bill
    pub fn friend_share(&self) -> i64 {
        self.total - self.user_share
    }

    /// Whether this split can be applied.
    ///
    /// Zero amounts are treated as unfilled inputs and rejected, the same
    /// guard the form applies on submission. Negative amounts and a user
    /// share above the total never describe a real split.
    pub fn is_actionable(&self) -> bool {
        self.total > 0 && self.user_share > 0 && self.user_share <= self.total
    }

    /// Signed change to the friend's balance when this split is applied.
    ///
    /// When the user pays, the friend owes their share; when the friend
    /// pays, the user owes their own share.
    pub fn delta(&self) -> i64 {
        match self.payer {
            Payer::User => self.friend_share(),
            Payer::Friend => -self.user_share,
        }
    }
}

/// Clamp a proposed user share into the valid range for a bill total
pub fn clamp_user_share(total: i64, proposed: i64) -> i64 {
    proposed.clamp(0, total.max(0))
}
