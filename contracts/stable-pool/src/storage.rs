//! Stable pool storage operations

use soroban_sdk::{contracttype, Env, Vec};

use crate::error::StablePoolError;
use crate::types::PoolConfig;

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Balances,
}

// ============================================================
// TTL CONFIG
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

pub fn write_config(env: &Env, config: &PoolConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<PoolConfig, StablePoolError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(StablePoolError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// BALANCES
// ============================================================

pub fn write_balances(env: &Env, balances: &Vec<i128>) {
    env.storage().persistent().set(&DataKey::Balances, balances);
    extend_ttl(env, &DataKey::Balances);
}

pub fn read_balances(env: &Env) -> Result<Vec<i128>, StablePoolError> {
    let key = DataKey::Balances;
    let balances = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(StablePoolError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(balances)
}
