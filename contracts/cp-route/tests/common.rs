#![allow(dead_code)]

use narwhal_cp_route::{CpRoute, CpRouteClient};
use narwhal_exchange::{NarwhalExchange, NarwhalExchangeClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals
pub const FEE_BPS: u32 = 30;
pub const DEPTH: i128 = 100_000 * UNIT;

pub struct Setup<'a> {
    pub route: CpRouteClient<'a>,
    pub exchange: NarwhalExchangeClient<'a>,
    pub owner: Address,
    pub trader: Address,
    pub native: Address,
    pub token_a: Address,
    pub token_b: Address,
}

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn approve(env: &Env, token: &Address, owner: &Address, spender: &Address, amount: i128) {
    token::Client::new(env, token).approve(owner, spender, &amount, &(env.ledger().sequence() + 100));
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

/// Exchange with pairs a/b and native/a, route over it, trader whitelisted
pub fn setup(env: &Env) -> Setup<'_> {
    env.cost_estimate().budget().reset_unlimited();
    env.cost_estimate().disable_resource_limits();

    let admin = Address::generate(env);
    let exchange_id = env.register(NarwhalExchange, ());
    let exchange = NarwhalExchangeClient::new(env, &exchange_id);
    exchange.initialize(&admin, &FEE_BPS);

    let native = create_token(env);
    let token_a = create_token(env);
    let token_b = create_token(env);

    let provider = Address::generate(env);
    for token in [&native, &token_a, &token_a, &token_b] {
        mint_tokens(env, token, &provider, DEPTH);
    }
    exchange.add_liquidity(&provider, &token_a, &token_b, &DEPTH, &DEPTH);
    exchange.add_liquidity(&provider, &native, &token_a, &DEPTH, &DEPTH);

    let owner = Address::generate(env);
    let route_id = env.register(CpRoute, ());
    let route = CpRouteClient::new(env, &route_id);
    route.initialize(&owner, &exchange_id, &native, &u64::MAX);

    let trader = Address::generate(env);
    route.add_whitelisted(&trader);

    Setup { route, exchange, owner, trader, native, token_a, token_b }
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
