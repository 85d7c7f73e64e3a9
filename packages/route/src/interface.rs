//! Cross-contract interfaces
//!
//! Only the client side is generated here. Route contracts expose
//! `quote` and `trade` with exactly these signatures, and the venue
//! contracts in this workspace expose the venue methods.

use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::{Asset, RouteError};

// ============================================================
// TRADING ROUTE
// ============================================================

/// Pricing and execution adapter registered in the router
#[contractclient(name = "TradingRouteClient")]
pub trait TradingRouteInterface {
    /// Output for `amount_in` of `src`, read-only
    fn quote(env: Env, src: Asset, dst: Asset, amount_in: i128) -> Result<i128, RouteError>;

    /// Pull `amount_in` of `src` from `caller`, pay the output in `dst` back to `caller`
    fn trade(
        env: Env,
        caller: Address,
        src: Asset,
        dst: Asset,
        amount_in: i128,
    ) -> Result<i128, RouteError>;
}

// ============================================================
// VENUES
// ============================================================

/// Constant-product exchange
#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    fn fee_bps(env: Env) -> u32;

    /// Reserves ordered as the arguments; (0, 0) when the pair does not exist
    fn get_reserves(env: Env, token_a: Address, token_b: Address) -> (i128, i128);

    fn swap_exact_tokens_for_tokens(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;
}

/// Stable-swap pool
#[contractclient(name = "StablePoolClient")]
pub trait StablePoolInterface {
    fn coins(env: Env) -> Vec<Address>;

    fn get_dy(env: Env, i: u32, j: u32, dx: i128) -> i128;

    fn exchange(
        env: Env,
        sender: Address,
        i: u32,
        j: u32,
        dx: i128,
        min_dy: i128,
        to: Address,
    ) -> i128;
}
