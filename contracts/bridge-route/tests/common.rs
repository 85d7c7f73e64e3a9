#![allow(dead_code)]

use narwhal_bridge_route::{BridgeRoute, BridgeRouteClient};
use narwhal_exchange::{NarwhalExchange, NarwhalExchangeClient};
use narwhal_route::Asset;
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    vec,
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals
pub const DEPTH: i128 = 100_000 * UNIT;

pub struct Setup<'a> {
    pub route: BridgeRouteClient<'a>,
    /// Trades token_a <-> native
    pub first: NarwhalExchangeClient<'a>,
    /// Trades native <-> token_b, 0.05% fee
    pub second: NarwhalExchangeClient<'a>,
    pub owner: Address,
    pub trader: Address,
    pub native: Address,
    pub token_a: Address,
    pub token_b: Address,
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn approve(env: &Env, token: &Address, owner: &Address, spender: &Address, amount: i128) {
    token::Client::new(env, token).approve(owner, spender, &amount, &(env.ledger().sequence() + 100));
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

pub fn create_exchange(env: &Env, fee_bps: u32) -> NarwhalExchangeClient<'_> {
    let admin = Address::generate(env);
    let client = NarwhalExchangeClient::new(env, &env.register(NarwhalExchange, ()));
    client.initialize(&admin, &fee_bps);
    client
}

pub fn seed_pair(env: &Env, exchange: &NarwhalExchangeClient, a: &Address, b: &Address, amount_a: i128, amount_b: i128) {
    let provider = Address::generate(env);
    mint_tokens(env, a, &provider, amount_a);
    mint_tokens(env, b, &provider, amount_b);
    exchange.add_liquidity(&provider, a, b, &amount_a, &amount_b);
}

/// token_a -> native -> token_b across two exchanges
pub fn setup(env: &Env) -> Setup<'_> {
    env.cost_estimate().budget().reset_unlimited();
    env.cost_estimate().disable_resource_limits();

    let native = create_token(env);
    let token_a = create_token(env);
    let token_b = create_token(env);

    let first = create_exchange(env, 30);
    let second = create_exchange(env, 5);
    seed_pair(env, &first, &token_a, &native, DEPTH, 2 * DEPTH);
    seed_pair(env, &second, &native, &token_b, DEPTH, DEPTH);

    let owner = Address::generate(env);
    let route = BridgeRouteClient::new(env, &env.register(BridgeRoute, ()));
    route.initialize(
        &owner,
        &vec![env, first.address.clone(), second.address.clone()],
        &vec![env, Asset::Native],
        &native,
        &u64::MAX,
    );

    let trader = Address::generate(env);
    route.add_whitelisted(&trader);

    Setup { route, first, second, owner, trader, native, token_a, token_b }
}

/// True when `contract` emitted `name` with `data` in the last invocation
pub fn has_event<T: IntoVal<Env, Val>>(env: &Env, contract: &Address, name: &str, data: T) -> bool {
    let topic = ScVal::try_from_val(env, &Symbol::new(env, name).to_val()).unwrap();
    let data = ScVal::try_from_val(env, &data.into_val(env)).unwrap();
    env.events()
        .all()
        .filter_by_contract(contract)
        .events()
        .iter()
        .any(|event| match &event.body {
            ContractEventBody::V0(body) => body.topics.first() == Some(&topic) && body.data == data,
        })
}
