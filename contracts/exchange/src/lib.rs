#![no_std]

mod custody;
mod errors;
mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use crate::errors::Error;
use crate::events::*;
use crate::registry::ItemRegistryClient;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// Custody-and-exchange contract for uniquely identified items.
///
/// The current holder of an item can list it at a fixed price or open it to
/// a timed multi-party auction. While an item is listed or on auction the
/// contract holds registry custody of it, and while an auction has a leader
/// the contract holds exactly the leading bid in payment-token escrow.
/// Item identity lives in an external registry and payment moves through
/// the configured token; this contract only decides whether and how those
/// delegated transfers fire.
#[contract]
pub struct ExchangeContract;

#[contractimpl]
impl ExchangeContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the exchange.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change auction parameters
    /// * `item_registry` - Item registry contract the exchange delegates to
    /// * `payment_token` - Token contract used for payment and escrow
    /// * `auction_period` - Minimum auction duration in seconds
    /// * `min_bidders` - Bids required before an auction may settle early
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: &Env,
        admin: Address,
        item_registry: Address,
        payment_token: Address,
        auction_period: u64,
        min_bidders: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if has_config(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = ExchangeConfig {
            admin: admin.clone(),
            item_registry,
            payment_token,
            auction_period,
            min_bidders,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            auction_period,
            min_bidders,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Get exchange configuration
    pub fn get_config(e: &Env) -> Result<ExchangeConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    /// Minimum auction duration in seconds
    pub fn auction_period(e: &Env) -> Result<u64, Error> {
        Ok(Self::get_config(e)?.auction_period)
    }

    /// Bids required before an auction may settle to its leader early
    pub fn min_bidders(e: &Env) -> Result<u32, Error> {
        Ok(Self::get_config(e)?.min_bidders)
    }

    /// Update the auction period (admin only)
    pub fn set_auction_period(e: &Env, admin: Address, auction_period: u64) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        config.auction_period = auction_period;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AuctionPeriodUpdatedEventData {
            admin,
            auction_period,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Update the bidder quorum (admin only)
    pub fn set_min_bidders(e: &Env, admin: Address, min_bidders: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        config.min_bidders = min_bidders;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        MinBiddersUpdatedEventData { admin, min_bidders }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Hand the admin role to a new address (admin only)
    pub fn set_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        config.admin = new_admin.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AdminChangedEventData {
            previous_admin: admin,
            new_admin,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // ITEM CREATION
    // ========================================================================

    /// Mint a new item through the configured registry.
    ///
    /// The item starts `Unlisted` with `recipient` as its custodian; this
    /// call only establishes the id the other operations key on.
    pub fn create_item(e: &Env, uri: String, recipient: Address) -> Result<u64, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        let item_id = registry.mint(&uri, &recipient);

        ItemCreatedEventData { recipient, item_id }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(item_id)
    }

    // ========================================================================
    // FIXED-PRICE LISTING
    // ========================================================================

    /// List an item at a fixed price.
    ///
    /// The caller must currently hold the item; custody moves to the
    /// exchange until the listing is bought or cancelled.
    ///
    /// # Errors
    /// * `Error::ZeroPrice` - If `price` is not strictly positive
    /// * `Error::NotOwner` - If `seller` is not the item's custodian
    /// * `Error::InvalidState` - If the item is already listed or on auction
    pub fn list_item(e: &Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if price <= 0 {
            return Err(Error::ZeroPrice);
        }

        custody::transition(e, item_id, ItemStatus::Unlisted, ItemStatus::Listed)?;

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        if registry.custodian_of(&item_id) != seller {
            return Err(Error::NotOwner);
        }
        registry.transfer(&seller, &e.current_contract_address(), &item_id);

        set_listing(
            e,
            item_id,
            &Listing {
                seller: seller.clone(),
                price,
            },
        );

        ItemListedEventData {
            seller,
            item_id,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Cancel a fixed-price listing and return the item to its seller.
    ///
    /// # Errors
    /// * `Error::NotListed` - If no listing exists for the item
    /// * `Error::NotOwner` - If `seller` did not create the listing
    pub fn cancel(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let listing = get_listing(e, item_id).ok_or(Error::NotListed)?;

        if listing.seller != seller {
            return Err(Error::NotOwner);
        }

        custody::transition(e, item_id, ItemStatus::Listed, ItemStatus::Unlisted)?;

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        registry.transfer(&e.current_contract_address(), &seller, &item_id);

        remove_listing(e, item_id);

        ListingCancelledEventData { seller, item_id }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Buy a listed item at its asking price.
    ///
    /// The exact price moves from buyer to seller and custody moves from
    /// the exchange to the buyer in one atomic step; a failure at any point
    /// unwinds the whole call.
    ///
    /// # Errors
    /// * `Error::NotListed` - If no listing exists for the item
    /// * `Error::PaymentNotAuthorized` - If the buyer's token allowance is below the price
    /// * `Error::InsufficientBalance` - If the buyer's balance is below the price
    /// * `Error::PaymentTransferFailed` - If the delegated transfer is rejected
    pub fn buy_item(e: &Env, buyer: Address, item_id: u64) -> Result<(), Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let listing = get_listing(e, item_id).ok_or(Error::NotListed)?;

        collect_payment(
            e,
            &config.payment_token,
            &buyer,
            &listing.seller,
            listing.price,
        )?;

        custody::transition(e, item_id, ItemStatus::Listed, ItemStatus::Unlisted)?;

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        registry.transfer(&e.current_contract_address(), &buyer, &item_id);

        remove_listing(e, item_id);

        ItemSoldEventData {
            buyer,
            seller: listing.seller,
            item_id,
            price: listing.price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Open a timed auction for an item.
    ///
    /// Unlike fixed-price listing, a zero floor is legal.
    ///
    /// # Errors
    /// * `Error::NotOwner` - If `seller` is not the item's custodian
    /// * `Error::InvalidState` - If the item is already listed or on auction
    pub fn list_item_on_auction(
        e: &Env,
        seller: Address,
        item_id: u64,
        min_price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if min_price < 0 {
            return Err(Error::ZeroPrice);
        }

        custody::transition(e, item_id, ItemStatus::Unlisted, ItemStatus::OnAuction)?;

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        if registry.custodian_of(&item_id) != seller {
            return Err(Error::NotOwner);
        }
        registry.transfer(&seller, &e.current_contract_address(), &item_id);

        let start_time = e.ledger().timestamp();

        set_auction(
            e,
            item_id,
            &Auction {
                seller: seller.clone(),
                min_price,
                highest_bid: None,
                highest_bidder: None,
                bid_count: 0,
                start_time,
            },
        );

        AuctionOpenedEventData {
            seller,
            item_id,
            min_price,
            start_time,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Place a bid on a running auction.
    ///
    /// The bid must strictly exceed both the floor and the current leader.
    /// The amount is pulled into contract escrow and the superseded
    /// leader's escrow, if any, is returned in full within the same call,
    /// so the contract never holds more than one outstanding bid per item.
    ///
    /// # Errors
    /// * `Error::NotOnAuction` - If no auction exists for the item
    /// * `Error::BidTooLow` - If `amount <= max(min_price, highest_bid)`
    /// * `Error::PaymentNotAuthorized` - If the bidder's token allowance is below `amount`
    /// * `Error::InsufficientBalance` - If the bidder's balance is below `amount`
    /// * `Error::PaymentTransferFailed` - If a delegated transfer is rejected
    pub fn make_bid(e: &Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut auction = get_auction(e, item_id).ok_or(Error::NotOnAuction)?;

        let floor = match auction.highest_bid {
            Some(bid) => bid.max(auction.min_price),
            None => auction.min_price,
        };
        if amount <= floor {
            return Err(Error::BidTooLow);
        }

        collect_payment(
            e,
            &config.payment_token,
            &bidder,
            &e.current_contract_address(),
            amount,
        )?;

        if let Some(previous) = get_escrow(e, item_id) {
            release_escrow(e, &config.payment_token, &previous.beneficiary, previous.amount)?;

            BidRefundedEventData {
                bidder: previous.beneficiary,
                item_id,
                amount: previous.amount,
            }
            .publish(e);
        }

        set_escrow(
            e,
            item_id,
            &Escrow {
                beneficiary: bidder.clone(),
                amount,
            },
        );

        auction.highest_bid = Some(amount);
        auction.highest_bidder = Some(bidder.clone());
        auction.bid_count += 1;
        let bid_count = auction.bid_count;
        set_auction(e, item_id, &auction);

        BidPlacedEventData {
            bidder,
            item_id,
            amount,
            bid_count,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Close an auction and settle it.
    ///
    /// The auction may close once the configured period has elapsed or the
    /// bidder quorum has been met, whichever comes first. With quorum, the
    /// escrowed leading bid goes to the seller and the item to the leader;
    /// otherwise the item returns to the seller and any escrowed bid is
    /// refunded to its bidder. No currency stays escrowed for the item
    /// afterwards.
    ///
    /// # Errors
    /// * `Error::NotOnAuction` - If no auction exists for the item
    /// * `Error::NotOwner` - If `seller` did not open the auction
    /// * `Error::AuctionStillOpen` - If neither the period has elapsed nor quorum is met
    pub fn finish_auction(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let auction = get_auction(e, item_id).ok_or(Error::NotOnAuction)?;

        if auction.seller != seller {
            return Err(Error::NotOwner);
        }

        let now = e.ledger().timestamp();
        let period_elapsed = now >= auction.start_time + config.auction_period;
        let quorum_met = auction.bid_count >= config.min_bidders;

        if !period_elapsed && !quorum_met {
            return Err(Error::AuctionStillOpen);
        }

        let registry = ItemRegistryClient::new(e, &config.item_registry);
        let escrow = get_escrow(e, item_id);

        // min_bidders of zero meets quorum with no bids at all, so a
        // winner requires an actual leader as well.
        let winner = if quorum_met {
            auction.highest_bidder.clone()
        } else {
            None
        };

        let mut settled_amount: i128 = 0;

        match (&winner, &escrow) {
            (Some(leader), Some(escrowed)) => {
                release_escrow(e, &config.payment_token, &auction.seller, escrowed.amount)?;
                registry.transfer(&e.current_contract_address(), leader, &item_id);
                settled_amount = escrowed.amount;
            }
            _ => {
                if let Some(escrowed) = &escrow {
                    release_escrow(
                        e,
                        &config.payment_token,
                        &escrowed.beneficiary,
                        escrowed.amount,
                    )?;

                    BidRefundedEventData {
                        bidder: escrowed.beneficiary.clone(),
                        item_id,
                        amount: escrowed.amount,
                    }
                    .publish(e);
                }
                registry.transfer(&e.current_contract_address(), &auction.seller, &item_id);
            }
        }

        remove_escrow(e, item_id);
        remove_auction(e, item_id);
        custody::transition(e, item_id, ItemStatus::OnAuction, ItemStatus::Unlisted)?;

        AuctionSettledEventData {
            seller: auction.seller,
            item_id,
            winner,
            amount: settled_amount,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Current exchange status of an item. Items the exchange has never
    /// touched report `Unlisted`.
    pub fn status_of(e: &Env, item_id: u64) -> ItemStatus {
        custody::status_of(e, item_id)
    }

    /// Terms of the item's fixed-price listing
    pub fn get_listing(e: &Env, item_id: u64) -> Result<Listing, Error> {
        get_listing(e, item_id).ok_or(Error::NotListed)
    }

    /// State of the item's running auction
    pub fn get_auction(e: &Env, item_id: u64) -> Result<Auction, Error> {
        get_auction(e, item_id).ok_or(Error::NotOnAuction)
    }

    /// Currency currently escrowed for an item (0 when no bid is held)
    pub fn escrowed_amount(e: &Env, item_id: u64) -> i128 {
        get_escrow(e, item_id).map_or(0, |escrow| escrow.amount)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn require_admin(e: &Env, admin: &Address) -> Result<ExchangeConfig, Error> {
        admin.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }

        Ok(config)
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

// ============================================================================
// Settlement helpers
// ============================================================================

/// Pull `amount` from `payer` to `payee` through the payment token.
///
/// The payer must have pre-authorized the exchange for at least `amount`;
/// authorization and balance are checked up front so each failure surfaces
/// its specific reason instead of a trapped transfer.
fn collect_payment(
    e: &Env,
    payment_token: &Address,
    payer: &Address,
    payee: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::TokenClient::new(e, payment_token);
    let spender = e.current_contract_address();

    if client.allowance(payer, &spender) < amount {
        return Err(Error::PaymentNotAuthorized);
    }

    if client.balance(payer) < amount {
        return Err(Error::InsufficientBalance);
    }

    if client
        .try_transfer_from(&spender, payer, payee, &amount)
        .is_err()
    {
        return Err(Error::PaymentTransferFailed);
    }

    Ok(())
}

/// Release `amount` of contract-held currency to `to`. Used for both
/// refunds on supersession and seller payouts at settlement.
fn release_escrow(e: &Env, payment_token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::TokenClient::new(e, payment_token);

    if client
        .try_transfer(&e.current_contract_address(), to, &amount)
        .is_err()
    {
        return Err(Error::PaymentTransferFailed);
    }

    Ok(())
}
