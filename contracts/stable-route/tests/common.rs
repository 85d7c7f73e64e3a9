#![allow(dead_code)]

use narwhal_stable_pool::{NarwhalStablePool, NarwhalStablePoolClient};
use narwhal_stable_route::{StableRoute, StableRouteClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    vec,
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals
pub const DEPTH: i128 = 1_000_000 * UNIT;
pub const AMP: u32 = 200;
pub const FEE: u32 = 4_000_000;

pub struct Setup<'a> {
    pub route: StableRouteClient<'a>,
    pub pool: NarwhalStablePoolClient<'a>,
    pub owner: Address,
    pub trader: Address,
    pub native: Address,
    pub usd_a: Address,
    pub usd_b: Address,
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

/// Pool over [native, usd_a, usd_b] with `DEPTH` each, route over it
pub fn setup(env: &Env) -> Setup<'_> {
    env.cost_estimate().budget().reset_unlimited();
    env.cost_estimate().disable_resource_limits();

    let native = create_token(env);
    let usd_a = create_token(env);
    let usd_b = create_token(env);
    let coins = vec![env, native.clone(), usd_a.clone(), usd_b.clone()];

    let admin = Address::generate(env);
    let pool = NarwhalStablePoolClient::new(env, &env.register(NarwhalStablePool, ()));
    pool.initialize(&admin, &coins, &AMP, &FEE);

    let provider = Address::generate(env);
    for coin in coins.iter() {
        mint_tokens(env, &coin, &provider, DEPTH);
    }
    pool.add_liquidity(&provider, &vec![env, DEPTH, DEPTH, DEPTH]);

    let owner = Address::generate(env);
    let route = StableRouteClient::new(env, &env.register(StableRoute, ()));
    route.initialize(&owner, &pool.address, &native);

    let trader = Address::generate(env);
    route.add_whitelisted(&trader);

    Setup { route, pool, owner, trader, native, usd_a, usd_b }
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
