#![allow(dead_code)]

use narwhal_stable_pool::{NarwhalStablePool, NarwhalStablePoolClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::StellarAssetClient,
    vec,
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals
pub const AMP: u32 = 100;
pub const FEE: u32 = 4_000_000; // 0.04%
pub const DEPTH: i128 = 1_000_000 * UNIT;

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

/// Register a pool over `n` fresh coins without liquidity
pub fn setup_empty_pool(env: &Env, n: u32) -> (NarwhalStablePoolClient<'_>, Address, Vec<Address>) {
    env.cost_estimate().budget().reset_unlimited();
    let admin = Address::generate(env);
    let mut coins = Vec::new(env);
    for _ in 0..n {
        coins.push_back(create_token(env));
    }

    let pool_id = env.register(NarwhalStablePool, ());
    let client = NarwhalStablePoolClient::new(env, &pool_id);
    client.initialize(&admin, &coins, &AMP, &FEE);
    (client, admin, coins)
}

/// Two-coin pool with `DEPTH` of each coin
pub fn setup_pool(env: &Env) -> (NarwhalStablePoolClient<'_>, Address, Vec<Address>) {
    let (client, admin, coins) = setup_empty_pool(env, 2);

    let provider = Address::generate(env);
    for coin in coins.iter() {
        mint_tokens(env, &coin, &provider, DEPTH);
    }
    client.add_liquidity(&provider, &vec![env, DEPTH, DEPTH]);

    (client, admin, coins)
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
