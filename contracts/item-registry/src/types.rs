use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the item registry contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Last assigned item id
    ItemCounter,
    /// Item record by id
    Item(u64),
    /// Item ids held by an address
    CustodianItems(Address),
}

/// A minted item.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub id: u64,
    pub uri: String,
    pub custodian: Address,
    pub minted_at: u64,
}
