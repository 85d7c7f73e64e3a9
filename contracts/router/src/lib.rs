#![no_std]

//! # Narwhal Router
//!
//! Trade aggregation across registered trading routes.
//!
//! ## Features:
//! 1. Route registry with enable / disable
//! 2. Partner fee schedule with a loyalty waiver
//! 3. Quotes and trades over one route or pre-split legs
//! 4. Best single route and best two-way split search
//!
//! The router holds no funds between invocations. Every trade pulls
//! the source from the trader, lets routes convert it, and pays out
//! the measured destination balance minus the platform fee.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use narwhal_math::DEFAULT_PLATFORM_FEE_BPS;
use narwhal_route::Asset;

mod best_rate;
mod error;
mod events;
mod execute;
mod fees;
mod quote;
mod registry;
mod storage;
mod types;

pub use best_rate::MAX_SPLIT_POINTS;
pub use error::{RouterError, RouterErrorMsg};
pub use fees::{DEFAULT_ELIGIBLE_BALANCE, DEFAULT_PARTNER};
pub use types::*;

use events::{emit_initialized, emit_owner_updated};
use storage::*;

/// Label of the platform's own partner slot
const PLATFORM_LABEL: &str = "NARWHAL";

#[contract]
pub struct NarwhalRouter;

#[contractimpl]
impl NarwhalRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Set the owner and native token, seed partner 0 with `payout`
    pub fn initialize(
        env: Env,
        owner: Address,
        native: Address,
        payout: Address,
    ) -> Result<(), RouterError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(RouterError::AlreadyInitialized);
        }

        let config = RouterConfig {
            owner: owner.clone(),
            native: native.clone(),
        };
        write_config(&env, &config);
        set_initialized(&env);

        fees::write_checked_partner(
            &env,
            DEFAULT_PARTNER,
            Partner {
                payout: payout.clone(),
                fee_bps: DEFAULT_PLATFORM_FEE_BPS,
                label: String::from_str(&env, PLATFORM_LABEL),
            },
        )?;
        write_loyalty(&env, &fees::loyalty(&env));

        emit_initialized(&env, &owner, &native, &payout);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RouterConfig, RouterError> {
        read_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Hand the router to `new_owner`; both parties sign
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), RouterError> {
        let mut config = read_config(&env)?;
        config.owner.require_auth();
        new_owner.require_auth();

        emit_owner_updated(&env, &config.owner, &new_owner);

        config.owner = new_owner;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // ROUTE REGISTRY
    // ========================================================

    /// Register a route, enabled, returns its index
    pub fn add_route(env: Env, name: String, route: Address) -> Result<u32, RouterError> {
        registry::add_route(&env, name, route)
    }

    pub fn enable_route(env: Env, index: u32) -> Result<(), RouterError> {
        registry::set_enabled(&env, index, true)
    }

    pub fn disable_route(env: Env, index: u32) -> Result<(), RouterError> {
        registry::set_enabled(&env, index, false)
    }

    pub fn is_route_enabled(env: Env, index: u32) -> Result<bool, RouterError> {
        Ok(registry::load(&env, index)?.enabled)
    }

    pub fn get_route(env: Env, index: u32) -> Result<RouteEntry, RouterError> {
        registry::load(&env, index)
    }

    pub fn route_count(env: Env) -> u32 {
        read_route_count(&env)
    }

    // ========================================================
    // FEE SCHEDULE
    // ========================================================

    /// Create or replace a partner slot, fee capped at 100 bps
    pub fn set_partner(
        env: Env,
        index: u32,
        payout: Address,
        fee_bps: u32,
        label: String,
    ) -> Result<(), RouterError> {
        fees::set_partner(&env, index, payout, fee_bps, label)
    }

    /// Partner at `index`, falling back to partner 0
    pub fn get_partner(env: Env, index: u32) -> Result<Partner, RouterError> {
        fees::partner(&env, index)
    }

    pub fn set_loyalty_token(env: Env, token: Option<Address>) -> Result<(), RouterError> {
        fees::set_loyalty_token(&env, token)
    }

    pub fn set_eligible_balance(env: Env, eligible_balance: i128) -> Result<(), RouterError> {
        fees::set_eligible_balance(&env, eligible_balance)
    }

    pub fn get_loyalty(env: Env) -> LoyaltyConfig {
        fees::loyalty(&env)
    }

    /// Whether `trader` currently trades without the platform fee
    pub fn is_eligible(env: Env, trader: Address) -> bool {
        fees::is_eligible(&env, &trader)
    }

    // ========================================================
    // QUOTES (Read)
    // ========================================================

    /// Net output of one route for `trader` under `partner_index`
    pub fn quote_single(
        env: Env,
        index: u32,
        src: Asset,
        dst: Asset,
        amount_in: i128,
        partner_index: u32,
        trader: Address,
    ) -> Result<i128, RouterError> {
        let quote = quote::quote_single(&env, index, &src, &dst, amount_in, partner_index, &trader)?;
        Ok(quote.net)
    }

    /// Same inputs as `quote_single`, with the gross and fee broken out
    pub fn get_quote(
        env: Env,
        index: u32,
        src: Asset,
        dst: Asset,
        amount_in: i128,
        partner_index: u32,
        trader: Address,
    ) -> Result<Quote, RouterError> {
        quote::quote_single(&env, index, &src, &dst, amount_in, partner_index, &trader)
    }

    /// Quote pre-split legs, one fee on the summed gross
    pub fn quote_split(
        env: Env,
        indices: Vec<u32>,
        src: Asset,
        amounts_in: Vec<i128>,
        dst: Asset,
        partner_index: u32,
        trader: Address,
    ) -> Result<i128, RouterError> {
        let quote = quote::quote_split(&env, &indices, &src, &amounts_in, &dst, partner_index, &trader)?;
        Ok(quote.net)
    }

    // ========================================================
    // TRADES (Write)
    // ========================================================

    /// Trade `amount_in` of `src` through one route, returns the net paid
    pub fn trade(
        env: Env,
        trader: Address,
        index: u32,
        src: Asset,
        amount_in: i128,
        dst: Asset,
        min_amount_out: i128,
        partner_index: u32,
    ) -> Result<i128, RouterError> {
        execute::trade(&env, &trader, index, &src, amount_in, &dst, min_amount_out, partner_index)
    }

    /// Trade pre-split legs summing to `total_amount_in`
    pub fn split_trades(
        env: Env,
        trader: Address,
        indices: Vec<u32>,
        src: Asset,
        total_amount_in: i128,
        amounts_in: Vec<i128>,
        dst: Asset,
        min_amount_out: i128,
        partner_index: u32,
    ) -> Result<i128, RouterError> {
        execute::split_trades(
            &env,
            &trader,
            &indices,
            &src,
            total_amount_in,
            &amounts_in,
            &dst,
            min_amount_out,
            partner_index,
        )
    }

    // ========================================================
    // BEST RATE (Read)
    // ========================================================

    /// Best single route among `candidates`
    pub fn one_route(
        env: Env,
        src: Asset,
        dst: Asset,
        amount_in: i128,
        candidates: Vec<u32>,
    ) -> Result<BestRoute, RouterError> {
        best_rate::one_route(&env, &src, &dst, amount_in, &candidates)
    }

    /// Best two-way split among `candidates` at `100 / num_buckets` granularity
    pub fn split_two_routes(
        env: Env,
        src: Asset,
        dst: Asset,
        amount_in: i128,
        candidates: Vec<u32>,
        num_buckets: u32,
    ) -> Result<SplitPlan, RouterError> {
        best_rate::split_two_routes(&env, &src, &dst, amount_in, &candidates, num_buckets)
    }
}
