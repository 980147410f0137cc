//! Form Input State
//!
//! Input state for the two panels: the add-friend form and the split-bill
//! form. Forms only hold buffers and focus; a submission becomes a
//! [`LedgerEvent`] and the ledger decides whether it applies.
//!
//! Amount fields admit digits only, so negative amounts are unrepresentable
//! here. The user-share field additionally refuses any edit that would push
//! it above the bill total, and shrinking the bill clamps the user share
//! back down.

use tally_core::{clamp_user_share, BillSplit, LedgerEvent, Payer, AVATAR_BASE_URL};

/// Which add-friend field has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AddFriendField {
    /// Friend name input
    #[default]
    Name,
    /// Avatar URL input
    Avatar,
}

/// Input state for the add-friend form
#[derive(Clone, Debug)]
pub struct AddFriendForm {
    /// Friend name buffer
    pub name: String,
    /// Avatar URL buffer
    pub avatar_url: String,
    /// Focused field
    pub focus: AddFriendField,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            // Pre-filled with the portrait service, like the form placeholder
            avatar_url: AVATAR_BASE_URL.to_string(),
            focus: AddFriendField::Name,
        }
    }
}

impl AddFriendForm {
    /// Move focus to the other field
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            AddFriendField::Name => AddFriendField::Avatar,
            AddFriendField::Avatar => AddFriendField::Name,
        };
    }

    /// Type a character into the focused field
    pub fn push(&mut self, c: char) {
        match self.focus {
            AddFriendField::Name => self.name.push(c),
            AddFriendField::Avatar => self.avatar_url.push(c),
        }
    }

    /// Delete the last character of the focused field
    pub fn pop(&mut self) {
        match self.focus {
            AddFriendField::Name => {
                self.name.pop();
            }
            AddFriendField::Avatar => {
                self.avatar_url.pop();
            }
        }
    }

    /// The submission event, or `None` while either field is blank
    pub fn submit(&self) -> Option<LedgerEvent> {
        if self.name.trim().is_empty() || self.avatar_url.trim().is_empty() {
            return None;
        }
        Some(LedgerEvent::AddFriend {
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        })
    }
}

/// Which split-bill field has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SplitField {
    /// Total bill amount
    #[default]
    Bill,
    /// The user's own share
    UserShare,
    /// Who-pays selector
    Payer,
}

/// Input state for the split-bill form
#[derive(Clone, Debug, Default)]
pub struct SplitBillForm {
    /// Bill total buffer (digits only)
    pub bill: String,
    /// User share buffer (digits only)
    pub user_share: String,
    /// Who pays the bill
    pub payer: Payer,
    /// Focused field
    pub focus: SplitField,
}

impl SplitBillForm {
    /// Parsed bill total (0 while empty)
    pub fn bill_amount(&self) -> i64 {
        self.bill.parse().unwrap_or(0)
    }

    /// Parsed user share (0 while empty)
    pub fn user_share_amount(&self) -> i64 {
        self.user_share.parse().unwrap_or(0)
    }

    /// The friend's derived share
    pub fn friend_share(&self) -> i64 {
        self.bill_amount() - self.user_share_amount()
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SplitField::Bill => SplitField::UserShare,
            SplitField::UserShare => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        };
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            SplitField::Bill => SplitField::Payer,
            SplitField::UserShare => SplitField::Bill,
            SplitField::Payer => SplitField::UserShare,
        };
    }

    /// Toggle the payer selector
    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggled();
    }

    /// Type a character into the focused amount field.
    ///
    /// Non-digits are ignored. A digit that would push the user share above
    /// the bill total, or overflow the amount, is refused and the buffer
    /// keeps its previous value.
    pub fn push(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        match self.focus {
            SplitField::Bill => {
                let mut next = self.bill.clone();
                next.push(c);
                if next.parse::<i64>().is_ok() {
                    self.bill = next;
                    self.reclamp_user_share();
                }
            }
            SplitField::UserShare => {
                let mut next = self.user_share.clone();
                next.push(c);
                match next.parse::<i64>() {
                    Ok(value) if value <= self.bill_amount() => self.user_share = next,
                    _ => {}
                }
            }
            SplitField::Payer => {}
        }
    }

    /// Delete the last character of the focused amount field
    pub fn pop(&mut self) {
        match self.focus {
            SplitField::Bill => {
                self.bill.pop();
                self.reclamp_user_share();
            }
            SplitField::UserShare => {
                self.user_share.pop();
            }
            SplitField::Payer => {}
        }
    }

    /// Clamp the user share down when the bill shrinks below it
    fn reclamp_user_share(&mut self) {
        let clamped = clamp_user_share(self.bill_amount(), self.user_share_amount());
        if clamped != self.user_share_amount() {
            self.user_share = if clamped == 0 {
                String::new()
            } else {
                clamped.to_string()
            };
        }
    }

    /// The submission event, or `None` while the amounts are unfilled
    pub fn submit(&self) -> Option<LedgerEvent> {
        let split = BillSplit {
            total: self.bill_amount(),
            user_share: self.user_share_amount(),
            payer: self.payer,
        };
        split
            .is_actionable()
            .then_some(LedgerEvent::SplitBill { split })
    }
}
