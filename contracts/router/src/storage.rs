//! Router storage operations

use soroban_sdk::Env;

use crate::error::RouterError;
use crate::types::{DataKey, LoyaltyConfig, Partner, RouteEntry, RouterConfig};

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

pub fn write_config(env: &Env, config: &RouterConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<RouterConfig, RouterError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RouterError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// ROUTES
// ============================================================

pub fn read_route_count(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::RouteCount).unwrap_or(0)
}

pub fn write_route_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::RouteCount, &count);
    extend_ttl(env, &DataKey::RouteCount);
}

pub fn read_route(env: &Env, index: u32) -> Option<RouteEntry> {
    let key = DataKey::Route(index);
    let entry = env.storage().persistent().get(&key);
    if entry.is_some() {
        extend_ttl(env, &key);
    }
    entry
}

pub fn write_route(env: &Env, index: u32, entry: &RouteEntry) {
    let key = DataKey::Route(index);
    env.storage().persistent().set(&key, entry);
    extend_ttl(env, &key);
}

// ============================================================
// PARTNERS
// ============================================================

pub fn read_partner(env: &Env, index: u32) -> Option<Partner> {
    let key = DataKey::Partner(index);
    let partner = env.storage().persistent().get(&key);
    if partner.is_some() {
        extend_ttl(env, &key);
    }
    partner
}

pub fn write_partner(env: &Env, index: u32, partner: &Partner) {
    let key = DataKey::Partner(index);
    env.storage().persistent().set(&key, partner);
    extend_ttl(env, &key);
}

// ============================================================
// LOYALTY
// ============================================================

pub fn read_loyalty(env: &Env) -> Option<LoyaltyConfig> {
    env.storage().persistent().get(&DataKey::Loyalty)
}

pub fn write_loyalty(env: &Env, loyalty: &LoyaltyConfig) {
    env.storage().persistent().set(&DataKey::Loyalty, loyalty);
    extend_ttl(env, &DataKey::Loyalty);
}
