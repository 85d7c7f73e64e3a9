//! Stable pool events

use soroban_sdk::{Address, Env, Symbol, Vec};

/// Emitted when the pool is initialized
pub fn emit_initialized(env: &Env, coins: &Vec<Address>, amp: u32, fee: u32) {
    env.events().publish(
        (Symbol::new(env, "StablePoolInit"),),
        (coins.clone(), amp, fee),
    );
}

/// Emitted on every deposit
pub fn emit_liquidity_added(env: &Env, provider: &Address, amounts: &Vec<i128>) {
    env.events().publish(
        (Symbol::new(env, "LiquidityAdded"),),
        (provider.clone(), amounts.clone()),
    );
}

/// Emitted after every exchange
pub fn emit_token_exchange(env: &Env, sender: &Address, i: u32, dx: i128, j: u32, dy: i128) {
    env.events().publish(
        (Symbol::new(env, "TokenExchange"),),
        (sender.clone(), i, dx, j, dy),
    );
}

/// Emitted when amp or fee is retuned
pub fn emit_params_updated(env: &Env, amp: u32, fee: u32) {
    env.events().publish(
        (Symbol::new(env, "ParamsUpdated"),),
        (amp, fee),
    );
}

/// Emitted when admin is updated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
