use soroban_sdk::contracterror;

/// Error codes for the exchange contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the configured admin
    Unauthorized = 3,
    /// Caller is not the item's custodian / seller
    NotOwner = 4,
    /// Item is not in the state the operation expects
    InvalidState = 5,
    /// No fixed-price listing exists for the item
    NotListed = 6,
    /// No auction exists for the item
    NotOnAuction = 7,
    /// Listing price must be strictly positive
    ZeroPrice = 8,
    /// Bid does not strictly exceed the floor and the current leader
    BidTooLow = 9,
    /// Caller has not pre-authorized the payment amount
    PaymentNotAuthorized = 10,
    /// Caller's payment balance is below the required amount
    InsufficientBalance = 11,
    /// The delegated payment transfer was rejected
    PaymentTransferFailed = 12,
    /// Auction period has not elapsed and the bidder quorum is unmet
    AuctionStillOpen = 13,
}
