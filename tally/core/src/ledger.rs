//! The Ledger
//!
//! The single owned state container behind every surface: the friend list,
//! the current selection, and the add-friend form flag.
//!
//! # Design Philosophy
//!
//! [`Ledger::apply`] is the only way state changes. Each event is handled
//! synchronously and to completion, so the invariants hold between any two
//! events:
//!
//! - at most one friend is selected;
//! - the add-friend form and a selection are mutually exclusive;
//! - friend ids are unique and the list preserves insertion order;
//! - balances move only when a split is applied to the selected friend.
//!
//! Invalid submissions (blank fields, unfilled or out-of-range amounts) are
//! dropped, logged at debug level. `apply` never fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::LedgerEvent;
use crate::friend::{Friend, FriendId};
use crate::split::BillSplit;

/// The shared-expense ledger
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Roster, in insertion order
    friends: Vec<Friend>,
    /// Currently selected friend, if any
    selected: Option<FriendId>,
    /// Whether the add-friend form is open
    add_friend_open: bool,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger seeded with the sample roster used for demos
    pub fn demo() -> Self {
        Self {
            friends: vec![
                seeded_friend("Clark", -7),
                seeded_friend("Sarah", 20),
                seeded_friend("Anthony", 0),
            ],
            selected: None,
            add_friend_open: false,
        }
    }

    /// The roster, in insertion order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// The selected friend's id, if any
    pub fn selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    /// The selected friend, if any
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.friend(id))
    }

    /// Whether the add-friend form is open
    pub fn is_add_friend_open(&self) -> bool {
        self.add_friend_open
    }

    /// Look up a friend by id
    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    /// Apply one surface event.
    ///
    /// Never fails: invalid submissions are dropped and logged.
    pub fn apply(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::ToggleAddFriend => self.toggle_add_friend(),
            LedgerEvent::AddFriend { name, avatar_url } => self.add_friend(&name, &avatar_url),
            LedgerEvent::SelectFriend { id } => self.select_friend(id),
            LedgerEvent::SplitBill { split } => self.split_bill(split),
        }
    }

    /// Toggle the add-friend form; opening or closing it always clears the
    /// selection
    fn toggle_add_friend(&mut self) {
        self.add_friend_open = !self.add_friend_open;
        self.selected = None;
    }

    /// Append a new friend with a settled balance and close the form
    fn add_friend(&mut self, name: &str, avatar_url: &str) {
        let name = name.trim();
        let avatar_url = avatar_url.trim();
        if name.is_empty() || avatar_url.is_empty() {
            debug!("add-friend dropped: blank field");
            return;
        }

        let friend = Friend::new(name, avatar_url);
        debug!(id = friend.id.as_str(), name, "friend added");
        self.friends.push(friend);
        self.add_friend_open = false;
    }

    /// Select a friend, or deselect when they are already selected; either
    /// way the add-friend form closes
    fn select_friend(&mut self, id: FriendId) {
        if self.friend(&id).is_none() {
            debug!(id = id.as_str(), "select dropped: unknown friend");
            return;
        }

        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        self.add_friend_open = false;
    }

    /// Apply a split to the selected friend's balance and clear the
    /// selection; a rejected split leaves the selection in place
    fn split_bill(&mut self, split: BillSplit) {
        let Some(id) = self.selected.take() else {
            debug!("split dropped: no friend selected");
            return;
        };

        if !split.is_actionable() {
            debug!(?split, "split dropped: unfilled or out-of-range amounts");
            self.selected = Some(id);
            return;
        }

        let delta = split.delta();
        if let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) {
            friend.balance += delta;
            debug!(
                id = id.as_str(),
                delta,
                balance = friend.balance,
                "split applied"
            );
        }
    }
}

/// A demo-roster friend with an id-keyed portrait and a preset balance
fn seeded_friend(name: &str, balance: i64) -> Friend {
    let id = FriendId::new();
    Friend {
        avatar_url: Friend::keyed_avatar_url(&id),
        id,
        name: name.to_string(),
        balance,
    }
}
