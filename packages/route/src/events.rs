//! Events shared by every route contract

use soroban_sdk::{Address, Env, Symbol};

use crate::Asset;

/// Emitted when a route is initialized
pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouteInit"),),
        (owner.clone(),),
    );
}

/// Emitted after every executed trade
pub fn emit_trade(env: &Env, src: &Asset, amount_in: i128, dst: &Asset, amount_out: i128) {
    env.events().publish(
        (Symbol::new(env, "Trade"),),
        (src.clone(), amount_in, dst.clone(), amount_out),
    );
}

/// Emitted when an account is granted the whitelisted role
pub fn emit_whitelist_added(env: &Env, account: &Address) {
    env.events().publish(
        (Symbol::new(env, "WhitelistAdded"),),
        (account.clone(),),
    );
}

/// Emitted when an account loses the whitelisted role
pub fn emit_whitelist_removed(env: &Env, account: &Address) {
    env.events().publish(
        (Symbol::new(env, "WhitelistRemoved"),),
        (account.clone(),),
    );
}
