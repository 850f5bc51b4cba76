use crate::errors::Error;
use crate::test::{advance_time, approve_payment, create_item, setup_test, AUCTION_PERIOD};
use crate::types::ItemStatus;

#[test]
fn test_finish_without_auction_fails() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    assert_eq!(
        ctx.client.try_finish_auction(&ctx.seller, &item_id),
        Err(Ok(Error::NotOnAuction))
    );
}

#[test]
fn test_finish_requires_seller() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    assert_eq!(
        ctx.client.try_finish_auction(&ctx.buyer, &item_id),
        Err(Ok(Error::NotOwner))
    );
}

#[test]
fn test_finish_before_period_below_quorum_fails() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    approve_payment(&ctx, &ctx.bidder, 101);
    ctx.client.make_bid(&ctx.bidder, &item_id, &101);

    advance_time(&ctx.env, AUCTION_PERIOD - 10);

    assert_eq!(
        ctx.client.try_finish_auction(&ctx.seller, &item_id),
        Err(Ok(Error::AuctionStillOpen))
    );
}

#[test]
fn test_finish_after_period_no_bids_returns_item() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    advance_time(&ctx.env, AUCTION_PERIOD);
    ctx.client.finish_auction(&ctx.seller, &item_id);

    assert_eq!(ctx.registry.custodian_of(&item_id), ctx.seller);
    assert_eq!(ctx.client.status_of(&item_id), ItemStatus::Unlisted);
    assert_eq!(
        ctx.client.try_get_auction(&item_id),
        Err(Ok(Error::NotOnAuction))
    );
}

#[test]
fn test_finish_below_quorum_refunds_bidder() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    let bidder_balance = ctx.token.balance(&ctx.bidder);

    approve_payment(&ctx, &ctx.bidder, 101);
    ctx.client.make_bid(&ctx.bidder, &item_id, &101);

    advance_time(&ctx.env, AUCTION_PERIOD);
    ctx.client.finish_auction(&ctx.seller, &item_id);

    // quorum never met: item back to seller, sole bid refunded in full
    assert_eq!(ctx.registry.custodian_of(&item_id), ctx.seller);
    assert_eq!(ctx.token.balance(&ctx.bidder), bidder_balance);
    assert_eq!(ctx.token.balance(&ctx.client.address), 0);
    assert_eq!(ctx.client.escrowed_amount(&item_id), 0);
}

#[test]
fn test_finish_with_quorum_settles_to_leader() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    let first_balance = ctx.token.balance(&ctx.bidder);
    let winner_balance = ctx.token.balance(&ctx.buyer);
    let seller_balance = ctx.token.balance(&ctx.seller);

    approve_payment(&ctx, &ctx.bidder, 101);
    ctx.client.make_bid(&ctx.bidder, &item_id, &101);

    approve_payment(&ctx, &ctx.buyer, 102);
    ctx.client.make_bid(&ctx.buyer, &item_id, &102);

    advance_time(&ctx.env, AUCTION_PERIOD);
    ctx.client.finish_auction(&ctx.seller, &item_id);

    assert_eq!(ctx.registry.custodian_of(&item_id), ctx.buyer);
    assert_eq!(ctx.token.balance(&ctx.seller), seller_balance + 102);
    assert_eq!(ctx.token.balance(&ctx.buyer), winner_balance - 102);
    assert_eq!(ctx.token.balance(&ctx.bidder), first_balance);
    assert_eq!(ctx.token.balance(&ctx.client.address), 0);
    assert_eq!(ctx.client.status_of(&item_id), ItemStatus::Unlisted);
}

#[test]
fn test_early_close_once_quorum_met() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    approve_payment(&ctx, &ctx.bidder, 101);
    ctx.client.make_bid(&ctx.bidder, &item_id, &101);

    approve_payment(&ctx, &ctx.buyer, 102);
    ctx.client.make_bid(&ctx.buyer, &item_id, &102);

    // no time has passed, but the quorum of two bidders is satisfied
    ctx.client.finish_auction(&ctx.seller, &item_id);

    assert_eq!(ctx.registry.custodian_of(&item_id), ctx.buyer);
    assert_eq!(ctx.token.balance(&ctx.client.address), 0);
}

#[test]
fn test_finish_twice_fails() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &100);

    advance_time(&ctx.env, AUCTION_PERIOD);
    ctx.client.finish_auction(&ctx.seller, &item_id);

    assert_eq!(
        ctx.client.try_finish_auction(&ctx.seller, &item_id),
        Err(Ok(Error::NotOnAuction))
    );
}

#[test]
fn test_item_can_be_relisted_after_settlement() {
    let ctx = setup_test();
    let item_id = create_item(&ctx, &ctx.seller);

    ctx.client.list_item_on_auction(&ctx.seller, &item_id, &0);

    approve_payment(&ctx, &ctx.bidder, 10);
    ctx.client.make_bid(&ctx.bidder, &item_id, &10);

    approve_payment(&ctx, &ctx.buyer, 20);
    ctx.client.make_bid(&ctx.buyer, &item_id, &20);

    advance_time(&ctx.env, AUCTION_PERIOD);
    ctx.client.finish_auction(&ctx.seller, &item_id);

    // the winner now holds the item and can put it straight back up
    ctx.client.list_item(&ctx.buyer, &item_id, &500);
    assert_eq!(ctx.client.status_of(&item_id), ItemStatus::Listed);
    assert_eq!(ctx.client.get_listing(&item_id).seller, ctx.buyer);
}
