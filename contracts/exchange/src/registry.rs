//! Consumed capability: the external item registry.
//!
//! The exchange never stores item identity or metadata itself; it calls
//! out to whichever registry contract the configuration names.

use soroban_sdk::{contractclient, Address, Env, String};

#[contractclient(name = "ItemRegistryClient")]
pub trait ItemRegistryInterface {
    /// Mint a new item to `to` and return its id.
    fn mint(env: Env, uri: String, to: Address) -> u64;

    /// Move custody of `item_id` from `from` to `to`. Fails if `from`
    /// does not currently hold it.
    fn transfer(env: Env, from: Address, to: Address, item_id: u64);

    /// Current custodian of `item_id`.
    fn custodian_of(env: Env, item_id: u64) -> Address;

    /// Descriptive locator recorded at mint time.
    fn uri_of(env: Env, item_id: u64) -> String;
}
