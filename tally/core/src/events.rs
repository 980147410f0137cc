//! Ledger Events
//!
//! Events sent from UI surfaces to the ledger. These represent all the ways
//! a surface can report user actions.
//!
//! # Design Philosophy
//!
//! Surfaces are "dumb" renderers that forward user actions to the ledger.
//! They don't interpret what actions mean - they just report what happened.
//! The ledger decides how state changes, including whether a submission is
//! valid at all.

use serde::{Deserialize, Serialize};

use crate::friend::FriendId;
use crate::split::BillSplit;

/// Events from a UI surface to the ledger
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// User toggled the add-friend form open or closed
    ToggleAddFriend,

    /// User submitted the add-friend form
    AddFriend {
        /// Display name (submission is dropped when blank)
        name: String,
        /// Avatar image URL (submission is dropped when blank)
        avatar_url: String,
    },

    /// User activated a friend's select/close control
    SelectFriend {
        /// Which friend was activated
        id: FriendId,
    },

    /// User submitted the split-bill form for the selected friend
    SplitBill {
        /// The submitted split
        split: BillSplit,
    },
}
