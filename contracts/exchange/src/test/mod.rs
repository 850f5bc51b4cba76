pub mod settlement_test;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use item_registry::{ItemRegistry, ItemRegistryClient};

use crate::{ExchangeContract, ExchangeContractClient};

pub const AUCTION_PERIOD: u64 = 3 * 24 * 60 * 60;
pub const MIN_BIDDERS: u32 = 2;

pub struct TestContext {
    pub env: Env,
    pub client: ExchangeContractClient<'static>,
    pub registry: ItemRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub buyer: Address,
    pub bidder: Address,
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);
    let bidder = Address::generate(&env);

    let registry_id = env.register(ItemRegistry, ());
    let registry = ItemRegistryClient::new(&env, &registry_id);
    registry.initialize(&admin);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    token_admin.mint(&buyer, &10_000_000);
    token_admin.mint(&bidder, &10_000_000);

    let contract_id = env.register(ExchangeContract, ());
    let client = ExchangeContractClient::new(&env, &contract_id);
    client.initialize(
        &admin,
        &registry_id,
        &token_address,
        &AUCTION_PERIOD,
        &MIN_BIDDERS,
    );

    TestContext {
        env,
        client,
        registry,
        token,
        token_admin,
        admin,
        seller,
        buyer,
        bidder,
    }
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn create_item(ctx: &TestContext, owner: &Address) -> u64 {
    let uri = String::from_str(&ctx.env, "some item uri");
    ctx.client.create_item(&uri, owner)
}

pub fn approve_payment(ctx: &TestContext, from: &Address, amount: i128) {
    ctx.token.approve(from, &ctx.client.address, &amount, &1000);
}
