// Exchange storage module for Narwhal

use soroban_sdk::{contracttype, Address, Env};

use crate::error::ExchangeError;
use crate::types::{ExchangeConfig, Pair};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Pair(Address, Address),
    PairByIndex(u32),
    PairCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &ExchangeConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<ExchangeConfig, ExchangeError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ExchangeError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// PAIR REGISTRY
// ============================================================

pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn read_pair(env: &Env, token_a: &Address, token_b: &Address) -> Option<Pair> {
    let (t0, t1) = sort_tokens(token_a, token_b);
    let key = DataKey::Pair(t0, t1);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        extend_ttl(env, &key);
    }
    pair
}

pub fn write_pair(env: &Env, pair: &Pair) {
    let key = DataKey::Pair(pair.token0.clone(), pair.token1.clone());
    env.storage().persistent().set(&key, pair);
    extend_ttl(env, &key);
}

pub fn read_pair_count(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::PairCount).unwrap_or(0)
}

/// Record a newly created pair, returns its index
pub fn register_pair(env: &Env, token0: &Address, token1: &Address) -> u32 {
    let index = read_pair_count(env);

    let index_key = DataKey::PairByIndex(index);
    env.storage().persistent().set(&index_key, &(token0.clone(), token1.clone()));
    extend_ttl(env, &index_key);

    env.storage().persistent().set(&DataKey::PairCount, &(index + 1));
    extend_ttl(env, &DataKey::PairCount);
    index
}

pub fn read_pair_tokens(env: &Env, index: u32) -> Option<(Address, Address)> {
    env.storage().persistent().get(&DataKey::PairByIndex(index))
}
