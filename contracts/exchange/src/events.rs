//! Exchange events

use soroban_sdk::{Address, Env, Symbol, Vec};

/// Emitted when the exchange is initialized
pub fn emit_initialized(env: &Env, admin: &Address, fee_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "ExchangeInit"),),
        (admin.clone(), fee_bps),
    );
}

/// Emitted when the first deposit creates a pair
pub fn emit_pair_created(env: &Env, token0: &Address, token1: &Address, index: u32) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (token0.clone(), token1.clone(), index),
    );
}

/// Emitted on every deposit
pub fn emit_liquidity_added(
    env: &Env,
    provider: &Address,
    token0: &Address,
    token1: &Address,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "LiquidityAdded"),),
        (provider.clone(), token0.clone(), token1.clone(), amount0, amount1),
    );
}

/// Emitted after a swap along `path`
pub fn emit_swap(env: &Env, sender: &Address, to: &Address, path: &Vec<Address>, amounts: &Vec<i128>) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (sender.clone(), to.clone(), path.clone(), amounts.clone()),
    );
}

/// Emitted when the swap fee changes
pub fn emit_fee_updated(env: &Env, fee_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "FeeUpdated"),),
        (fee_bps,),
    );
}

/// Emitted when admin is updated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
