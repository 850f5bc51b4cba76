//! Item custody ledger.
//!
//! Single source of truth for where an item sits in the exchange state
//! machine. Every listing and auction transition funnels through
//! [`transition`], which is the one enforcement point preventing two state
//! machines from acting on the same item at once (e.g. listing an item
//! that is already on auction).

use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage;
use crate::types::ItemStatus;

/// Current status of an item. Items the exchange has never touched are
/// `Unlisted`.
pub fn status_of(e: &Env, item_id: u64) -> ItemStatus {
    storage::get_status(e, item_id).unwrap_or(ItemStatus::Unlisted)
}

/// Move an item from `expected` to `new`, failing with `InvalidState` if
/// the item is not currently in `expected`.
///
/// `Unlisted` is represented by the absence of a stored entry, so the key
/// is removed rather than written on terminal transitions.
pub fn transition(
    e: &Env,
    item_id: u64,
    expected: ItemStatus,
    new: ItemStatus,
) -> Result<(), Error> {
    if status_of(e, item_id) != expected {
        return Err(Error::InvalidState);
    }

    if new == ItemStatus::Unlisted {
        storage::remove_status(e, item_id);
    } else {
        storage::set_status(e, item_id, new);
    }

    Ok(())
}
