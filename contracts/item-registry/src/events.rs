use soroban_sdk::{contractevent, Address};

/// Event emitted when a new item is minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemMintedEventData {
    #[topic]
    pub custodian: Address,
    pub item_id: u64,
}

/// Event emitted when custody of an item moves
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyTransferredEventData {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub item_id: u64,
}
