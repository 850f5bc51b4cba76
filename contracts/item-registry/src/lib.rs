#![no_std]

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use errors::Error;
use types::Item;

/// Item registry contract.
///
/// Single source of truth for item identity: mints sequentially numbered
/// items, records their descriptive URI, and tracks which address currently
/// holds custody. The exchange contract consumes this as a capability and
/// never duplicates any of its state.
#[contract]
pub struct ItemRegistry;

#[contractimpl]
impl ItemRegistry {
    // ========== INITIALIZATION ==========

    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    // ========== MINTING ==========

    /// Mint a new item to `to` and return its id. Ids are assigned
    /// sequentially starting at 1.
    pub fn mint(env: Env, uri: String, to: Address) -> Result<u64, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }

        let item_id = storage::increment_item_counter(&env);

        let item = Item {
            id: item_id,
            uri,
            custodian: to.clone(),
            minted_at: env.ledger().timestamp(),
        };

        storage::set_item(&env, &item);
        storage::add_custodian_item(&env, &to, item_id);

        events::ItemMintedEventData {
            custodian: to,
            item_id,
        }
        .publish(&env);

        Ok(item_id)
    }

    // ========== CUSTODY ==========

    /// Move custody of `item_id` from `from` to `to`.
    ///
    /// Fails with `NotCustodian` if `from` does not currently hold the item.
    pub fn transfer(env: Env, from: Address, to: Address, item_id: u64) -> Result<(), Error> {
        from.require_auth();

        let mut item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;

        if item.custodian != from {
            return Err(Error::NotCustodian);
        }

        storage::remove_custodian_item(&env, &from, item_id);
        storage::add_custodian_item(&env, &to, item_id);

        item.custodian = to.clone();
        storage::set_item(&env, &item);

        events::CustodyTransferredEventData { from, to, item_id }.publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    pub fn custodian_of(env: Env, item_id: u64) -> Result<Address, Error> {
        let item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;
        Ok(item.custodian)
    }

    pub fn uri_of(env: Env, item_id: u64) -> Result<String, Error> {
        let item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;
        Ok(item.uri)
    }

    pub fn get_item(env: Env, item_id: u64) -> Result<Item, Error> {
        storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)
    }

    /// Id of the most recently minted item (0 before any mint).
    pub fn last_item_id(env: Env) -> u64 {
        storage::get_item_counter(&env)
    }

    pub fn items_of(env: Env, custodian: Address) -> Vec<u64> {
        storage::get_custodian_items(&env, &custodian)
    }
}
