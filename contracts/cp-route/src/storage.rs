//! Constant-product route storage

use soroban_sdk::{contracttype, Env};

use narwhal_route::RouteError;

use crate::types::CpRouteConfig;

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
}

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

pub fn write_config(env: &Env, config: &CpRouteConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<CpRouteConfig, RouteError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RouteError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}
