#![allow(dead_code)]

use narwhal_exchange::{NarwhalExchange, NarwhalExchangeClient};
use narwhal_math::DEFAULT_EXCHANGE_FEE_BPS;
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

pub const FEE_BPS: u32 = DEFAULT_EXCHANGE_FEE_BPS; // 0.30%

/// Setup exchange with the default fee
pub fn setup_exchange(env: &Env) -> (NarwhalExchangeClient<'_>, Address) {
    let admin = Address::generate(env);
    let exchange_id = env.register(NarwhalExchange, ());
    let client = NarwhalExchangeClient::new(env, &exchange_id);
    client.initialize(&admin, &FEE_BPS);
    (client, admin)
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

/// Deposit a fresh pair from a funded provider
pub fn seed_pair(
    env: &Env,
    client: &NarwhalExchangeClient,
    token_a: &Address,
    token_b: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Address {
    let provider = Address::generate(env);
    mint_tokens(env, token_a, &provider, amount_a);
    mint_tokens(env, token_b, &provider, amount_b);
    client.add_liquidity(&provider, token_a, token_b, &amount_a, &amount_b);
    provider
}
