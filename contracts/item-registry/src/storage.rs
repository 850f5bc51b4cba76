use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Item};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Admin ==========

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ========== Item counter ==========

pub fn get_item_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ItemCounter)
        .unwrap_or(0)
}

pub fn increment_item_counter(env: &Env) -> u64 {
    let counter = get_item_counter(env) + 1;
    env.storage().instance().set(&DataKey::ItemCounter, &counter);
    counter
}

// ========== Items ==========

pub fn get_item(env: &Env, item_id: u64) -> Option<Item> {
    let key = DataKey::Item(item_id);
    let item = env.storage().persistent().get::<_, Item>(&key);
    if item.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

pub fn set_item(env: &Env, item: &Item) {
    let key = DataKey::Item(item.id);
    env.storage().persistent().set(&key, item);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Custodian index ==========

pub fn get_custodian_items(env: &Env, custodian: &Address) -> Vec<u64> {
    let key = DataKey::CustodianItems(custodian.clone());
    env.storage()
        .persistent()
        .get::<_, Vec<u64>>(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_custodian_item(env: &Env, custodian: &Address, item_id: u64) {
    let key = DataKey::CustodianItems(custodian.clone());
    let mut items = get_custodian_items(env, custodian);
    items.push_back(item_id);
    env.storage().persistent().set(&key, &items);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_custodian_item(env: &Env, custodian: &Address, item_id: u64) {
    let key = DataKey::CustodianItems(custodian.clone());
    let items = get_custodian_items(env, custodian);
    let mut remaining: Vec<u64> = Vec::new(env);
    for id in items.iter() {
        if id != item_id {
            remaining.push_back(id);
        }
    }
    env.storage().persistent().set(&key, &remaining);
}
