//! Whitelisted role storage
//!
//! Kept under its own key type so it never collides with a route's
//! own `DataKey`.

use soroban_sdk::{contracttype, Address, Env};

use crate::RouteError;

#[contracttype]
pub enum WhitelistKey {
    Member(Address),
}

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &WhitelistKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    let key = WhitelistKey::Member(account.clone());
    let member = env.storage().persistent().has(&key);
    if member {
        extend_ttl(env, &key);
    }
    member
}

pub fn add_whitelisted(env: &Env, account: &Address) {
    let key = WhitelistKey::Member(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

pub fn remove_whitelisted(env: &Env, account: &Address) {
    env.storage().persistent().remove(&WhitelistKey::Member(account.clone()));
}

/// Fails with `NotWhitelisted` unless `account` holds the role
pub fn require_whitelisted(env: &Env, account: &Address) -> Result<(), RouteError> {
    if !is_whitelisted(env, account) {
        return Err(RouteError::NotWhitelisted);
    }
    Ok(())
}
