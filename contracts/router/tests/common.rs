#![allow(dead_code)]

use narwhal_bridge_route::{BridgeRoute, BridgeRouteClient};
use narwhal_cp_route::{CpRoute, CpRouteClient};
use narwhal_exchange::{NarwhalExchange, NarwhalExchangeClient};
use narwhal_math::DEFAULT_EXCHANGE_FEE_BPS;
use narwhal_route::Asset;
use narwhal_router::{NarwhalRouter, NarwhalRouterClient};
use narwhal_stable_pool::{NarwhalStablePool, NarwhalStablePoolClient};
use narwhal_stable_route::{StableRoute, StableRouteClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    vec,
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals

// Route indices in registration order
pub const CP_X: u32 = 0;
pub const CP_Y: u32 = 1;
pub const BRIDGE: u32 = 2;
pub const STABLE: u32 = 3;

// Exchange X: 0.3%, a / native only
pub const X_FEE_BPS: u32 = DEFAULT_EXCHANGE_FEE_BPS;
pub const X_DEPTH_A: i128 = 3_500_000 * UNIT;
pub const X_DEPTH_NATIVE: i128 = 1_000 * UNIT;

// Exchange Y: 0.05%, a / native and native / b
pub const Y_FEE_BPS: u32 = 5;
pub const Y_DEPTH_A: i128 = 1_000_000 * UNIT;
pub const Y_DEPTH_NATIVE: i128 = 300 * UNIT;
pub const Y_DEPTH_B: i128 = 1_000_000 * UNIT;

// Stable pool over usd_a / usd_b
pub const STABLE_DEPTH: i128 = 1_000_000 * UNIT;
pub const AMP: u32 = 100;
pub const STABLE_FEE: u32 = 4_000_000;

pub struct Setup<'a> {
    pub router: NarwhalRouterClient<'a>,
    pub owner: Address,
    pub payout: Address,
    pub trader: Address,
    pub native: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub usd_a: Address,
    pub usd_b: Address,
    pub loyalty: Address,
    pub cp_x: CpRouteClient<'a>,
    pub cp_y: CpRouteClient<'a>,
    pub bridge: BridgeRouteClient<'a>,
    pub stable: StableRouteClient<'a>,
}

impl Setup<'_> {
    pub fn a(&self) -> Asset {
        Asset::Token(self.token_a.clone())
    }

    pub fn b(&self) -> Asset {
        Asset::Token(self.token_b.clone())
    }

    /// Mint `amount` of `token` to the trader
    pub fn fund_trader(&self, env: &Env, token: &Address, amount: i128) {
        mint_tokens(env, token, &self.trader, amount);
    }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

pub fn label(env: &Env, text: &str) -> String {
    String::from_str(env, text)
}

fn create_exchange<'a>(env: &'a Env, fee_bps: u32) -> NarwhalExchangeClient<'a> {
    let exchange = NarwhalExchangeClient::new(env, &env.register(NarwhalExchange, ()));
    exchange.initialize(&Address::generate(env), &fee_bps);
    exchange
}

fn seed_pair(env: &Env, exchange: &NarwhalExchangeClient, token_a: &Address, token_b: &Address, amount_a: i128, amount_b: i128) {
    let provider = Address::generate(env);
    mint_tokens(env, token_a, &provider, amount_a);
    mint_tokens(env, token_b, &provider, amount_b);
    exchange.add_liquidity(&provider, token_a, token_b, &amount_a, &amount_b);
}

/// Router with four routes, every route whitelisting the router
///
/// 0: constant product on X, 1: constant product on Y,
/// 2: a -> native -> b over X then Y, 3: stable pool usd_a / usd_b.
pub fn setup(env: &Env) -> Setup<'_> {
    env.cost_estimate().budget().reset_unlimited();
    env.cost_estimate().disable_resource_limits();

    let native = create_token(env);
    let token_a = create_token(env);
    let token_b = create_token(env);
    let usd_a = create_token(env);
    let usd_b = create_token(env);
    let loyalty = create_token(env);

    // Venues
    let exchange_x = create_exchange(env, X_FEE_BPS);
    seed_pair(env, &exchange_x, &token_a, &native, X_DEPTH_A, X_DEPTH_NATIVE);

    let exchange_y = create_exchange(env, Y_FEE_BPS);
    seed_pair(env, &exchange_y, &token_a, &native, Y_DEPTH_A, Y_DEPTH_NATIVE);
    seed_pair(env, &exchange_y, &native, &token_b, Y_DEPTH_NATIVE, Y_DEPTH_B);

    let pool = NarwhalStablePoolClient::new(env, &env.register(NarwhalStablePool, ()));
    pool.initialize(&Address::generate(env), &vec![env, usd_a.clone(), usd_b.clone()], &AMP, &STABLE_FEE);
    let provider = Address::generate(env);
    mint_tokens(env, &usd_a, &provider, STABLE_DEPTH);
    mint_tokens(env, &usd_b, &provider, STABLE_DEPTH);
    pool.add_liquidity(&provider, &vec![env, STABLE_DEPTH, STABLE_DEPTH]);

    // Router
    let owner = Address::generate(env);
    let payout = Address::generate(env);
    let router = NarwhalRouterClient::new(env, &env.register(NarwhalRouter, ()));
    router.initialize(&owner, &native, &payout);

    // Routes
    let route_owner = Address::generate(env);

    let cp_x = CpRouteClient::new(env, &env.register(CpRoute, ()));
    cp_x.initialize(&route_owner, &exchange_x.address, &native, &u64::MAX);

    let cp_y = CpRouteClient::new(env, &env.register(CpRoute, ()));
    cp_y.initialize(&route_owner, &exchange_y.address, &native, &u64::MAX);

    let bridge = BridgeRouteClient::new(env, &env.register(BridgeRoute, ()));
    bridge.initialize(
        &route_owner,
        &vec![env, exchange_x.address.clone(), exchange_y.address.clone()],
        &vec![env, Asset::Native],
        &native,
        &u64::MAX,
    );

    let stable = StableRouteClient::new(env, &env.register(StableRoute, ()));
    stable.initialize(&route_owner, &pool.address, &native);

    cp_x.add_whitelisted(&router.address);
    cp_y.add_whitelisted(&router.address);
    bridge.add_whitelisted(&router.address);
    stable.add_whitelisted(&router.address);

    router.add_route(&label(env, "CP X"), &cp_x.address);
    router.add_route(&label(env, "CP Y"), &cp_y.address);
    router.add_route(&label(env, "BRIDGE"), &bridge.address);
    router.add_route(&label(env, "STABLE"), &stable.address);

    let trader = Address::generate(env);

    Setup {
        router,
        owner,
        payout,
        trader,
        native,
        token_a,
        token_b,
        usd_a,
        usd_b,
        loyalty,
        cp_x,
        cp_y,
        bridge,
        stable,
    }
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

/// True when `contract` emitted any event named `name` in the last invocation
pub fn has_topic(env: &Env, contract: &Address, name: &str) -> bool {
    let topic = ScVal::try_from_val(env, &Symbol::new(env, name).to_val()).unwrap();
    env.events()
        .all()
        .filter_by_contract(contract)
        .events()
        .iter()
        .any(|event| match &event.body {
            ContractEventBody::V0(body) => body.topics.first() == Some(&topic),
        })
}
