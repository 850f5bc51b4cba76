use soroban_sdk::Env;

use crate::types::{Auction, DataKey, Escrow, ExchangeConfig, ItemStatus, Listing};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn get_config(e: &Env) -> Option<ExchangeConfig> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &ExchangeConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

// ============================================================================
// ITEM STATUS STORAGE
// ============================================================================

/// Absence of a status entry means `Unlisted`.
pub fn get_status(e: &Env, item_id: u64) -> Option<ItemStatus> {
    let key = DataKey::Status(item_id);
    let status = e.storage().persistent().get::<_, ItemStatus>(&key);
    if status.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    status
}

pub fn set_status(e: &Env, item_id: u64, status: ItemStatus) {
    let key = DataKey::Status(item_id);
    e.storage().persistent().set(&key, &status);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_status(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&DataKey::Status(item_id));
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

pub fn get_listing(e: &Env, item_id: u64) -> Option<Listing> {
    let key = DataKey::Listing(item_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

pub fn set_listing(e: &Env, item_id: u64, listing: &Listing) {
    let key = DataKey::Listing(item_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_listing(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&DataKey::Listing(item_id));
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(e: &Env, item_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(item_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn set_auction(e: &Env, item_id: u64, auction: &Auction) {
    let key = DataKey::Auction(item_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_auction(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&DataKey::Auction(item_id));
}

// ============================================================================
// ESCROW STORAGE
// ============================================================================

pub fn get_escrow(e: &Env, item_id: u64) -> Option<Escrow> {
    let key = DataKey::Escrow(item_id);
    let escrow = e.storage().persistent().get::<_, Escrow>(&key);
    if escrow.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    escrow
}

pub fn set_escrow(e: &Env, item_id: u64, escrow: &Escrow) {
    let key = DataKey::Escrow(item_id);
    e.storage().persistent().set(&key, escrow);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_escrow(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&DataKey::Escrow(item_id));
}
