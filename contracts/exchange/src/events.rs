use soroban_sdk::{contractevent, Address};

/// Event emitted when the exchange is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub auction_period: u64,
    pub min_bidders: u32,
}

/// Event emitted when an item is minted through the exchange
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreatedEventData {
    #[topic]
    pub recipient: Address,
    pub item_id: u64,
}

/// Event emitted when an item is listed at a fixed price
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListedEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub price: i128,
}

/// Event emitted when a listing is cancelled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelledEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
}

/// Event emitted when a listed item is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub price: i128,
}

/// Event emitted when an item is put up for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionOpenedEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub min_price: i128,
    pub start_time: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub item_id: u64,
    pub amount: i128,
    pub bid_count: u32,
}

/// Event emitted when a superseded leader's escrow is returned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub bidder: Address,
    pub item_id: u64,
    pub amount: i128,
}

/// Event emitted when an auction is resolved
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when the auction period is changed
// Default topic (snake-cased struct name) would exceed the 32-char symbol limit.
#[contractevent(topics = ["auction_period_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionPeriodUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub auction_period: u64,
}

/// Event emitted when the bidder quorum is changed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinBiddersUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub min_bidders: u32,
}

/// Event emitted when the admin role is handed over
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEventData {
    #[topic]
    pub previous_admin: Address,
    pub new_admin: Address,
}
