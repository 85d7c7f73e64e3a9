//! Router events

use soroban_sdk::{Address, Env, String, Symbol};

use narwhal_route::Asset;

/// Emitted when router is initialized
pub fn emit_initialized(env: &Env, owner: &Address, native: &Address, payout: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (owner.clone(), native.clone(), payout.clone()),
    );
}

/// Emitted when ownership moves to a new account
pub fn emit_owner_updated(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerUpdated"),),
        (old_owner.clone(), new_owner.clone()),
    );
}

// ============================================================
// REGISTRY
// ============================================================

pub fn emit_route_added(env: &Env, owner: &Address, name: &String, route: &Address, index: u32) {
    env.events().publish(
        (Symbol::new(env, "RouteAdded"),),
        (owner.clone(), name.clone(), route.clone(), index),
    );
}

pub fn emit_route_enabled(env: &Env, owner: &Address, name: &String, route: &Address, index: u32) {
    env.events().publish(
        (Symbol::new(env, "RouteEnabled"),),
        (owner.clone(), name.clone(), route.clone(), index),
    );
}

pub fn emit_route_disabled(env: &Env, owner: &Address, name: &String, route: &Address, index: u32) {
    env.events().publish(
        (Symbol::new(env, "RouteDisabled"),),
        (owner.clone(), name.clone(), route.clone(), index),
    );
}

// ============================================================
// FEE SCHEDULE
// ============================================================

pub fn emit_partner_updated(env: &Env, index: u32, payout: &Address, fee_bps: u32, label: &String) {
    env.events().publish(
        (Symbol::new(env, "PartnerUpdated"),),
        (index, payout.clone(), fee_bps, label.clone()),
    );
}

pub fn emit_loyalty_token_updated(env: &Env, token: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "LoyaltyTokenUpdated"),),
        (token.clone(),),
    );
}

pub fn emit_eligible_balance_updated(env: &Env, eligible_balance: i128) {
    env.events().publish(
        (Symbol::new(env, "EligibleBalanceUpdated"),),
        (eligible_balance,),
    );
}

// ============================================================
// TRADES
// ============================================================

/// Emitted only when a non-zero fee was paid out
pub fn emit_collect_fee(env: &Env, partner_index: u32, dst: &Asset, payout: &Address, fee: i128) {
    env.events().publish(
        (Symbol::new(env, "CollectFee"),),
        (partner_index, dst.clone(), payout.clone(), fee),
    );
}

/// Emitted after every trade, `amount_out` is what the trader received
pub fn emit_trade(
    env: &Env,
    src: &Asset,
    amount_in: i128,
    dst: &Asset,
    amount_out: i128,
    trader: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "Trade"),),
        (src.clone(), amount_in, dst.clone(), amount_out, trader.clone()),
    );
}
