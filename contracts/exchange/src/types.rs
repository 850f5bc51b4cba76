use soroban_sdk::{contracttype, Address};

/// Storage keys for the exchange contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Exchange configuration
    Config,
    /// Item status by item id (absent = Unlisted)
    Status(u64),
    /// Fixed-price listing by item id
    Listing(u64),
    /// Auction record by item id
    Auction(u64),
    /// Escrowed bid by item id
    Escrow(u64),
}

/// Where an item sits in the exchange state machine.
///
/// `Listed` and `OnAuction` imply the exchange contract holds registry
/// custody of the item; `Unlisted` implies the owner does.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemStatus {
    Unlisted = 0,
    Listed = 1,
    OnAuction = 2,
}

/// Exchange configuration, written at initialization and mutated only
/// through admin-gated setters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    pub admin: Address,
    pub item_registry: Address,
    pub payment_token: Address,
    /// Minimum auction duration in seconds
    pub auction_period: u64,
    /// Bids required before an auction may settle to its leader
    pub min_bidders: u32,
    pub updated_at: u64,
}

/// A fixed-price listing. Exists only while the item status is `Listed`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
}

/// A running auction. Exists only while the item status is `OnAuction`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub min_price: i128,
    pub highest_bid: Option<i128>,
    pub highest_bidder: Option<Address>,
    pub bid_count: u32,
    pub start_time: u64,
}

/// Currency held by the contract pending refund or payout.
///
/// At most one entry exists per item; its amount always equals the
/// auction's current highest bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Escrow {
    pub beneficiary: Address,
    pub amount: i128,
}
