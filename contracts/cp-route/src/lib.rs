#![no_std]

//! # Narwhal Constant-Product Route
//!
//! Trading route over a single constant-product exchange. Quotes read
//! the pair's reserves and the exchange fee and price with the same
//! function the exchange executes with.

use soroban_sdk::{contract, contractimpl, vec, Address, Env};

use narwhal_math::get_amount_out;
use narwhal_route::{
    events::{emit_initialized, emit_trade, emit_whitelist_added, emit_whitelist_removed},
    funds::{approve_for, pull_from},
    resolve_pair, whitelist, Asset, ExchangeClient, RouteError,
};

mod storage;
mod types;

use storage::*;
pub use types::CpRouteConfig;

#[contract]
pub struct CpRoute;

#[contractimpl]
impl CpRoute {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        owner: Address,
        exchange: Address,
        native: Address,
        deadline: u64,
    ) -> Result<(), RouteError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(RouteError::AlreadyInitialized);
        }

        write_config(&env, &CpRouteConfig { owner: owner.clone(), exchange, native, deadline });
        set_initialized(&env);

        emit_initialized(&env, &owner);
        Ok(())
    }

    // ========================================================
    // TRADING
    // ========================================================

    /// Output for `amount_in` of `src`, bit-exact with `trade`
    pub fn quote(env: Env, src: Asset, dst: Asset, amount_in: i128) -> Result<i128, RouteError> {
        let config = read_config(&env)?;
        let (token_in, token_out) = resolve_pair(&config.native, &src, &dst)?;
        if amount_in <= 0 {
            return Err(RouteError::InvalidAmount);
        }

        let exchange = ExchangeClient::new(&env, &config.exchange);
        let (reserve_in, reserve_out) = exchange.get_reserves(&token_in, &token_out);
        if reserve_in == 0 || reserve_out == 0 {
            return Err(RouteError::PairNotFound);
        }

        get_amount_out(&env, amount_in, reserve_in, reserve_out, exchange.fee_bps())
            .ok_or(RouteError::InsufficientLiquidity)
    }

    /// Swap `amount_in` of `src` pulled from `caller`, output goes to `caller`
    pub fn trade(
        env: Env,
        caller: Address,
        src: Asset,
        dst: Asset,
        amount_in: i128,
    ) -> Result<i128, RouteError> {
        caller.require_auth();

        let config = read_config(&env)?;
        let (token_in, token_out) = resolve_pair(&config.native, &src, &dst)?;
        if amount_in <= 0 {
            return Err(RouteError::InvalidAmount);
        }
        whitelist::require_whitelisted(&env, &caller)?;

        pull_from(&env, &token_in, &caller, amount_in)?;
        approve_for(&env, &token_in, &config.exchange, amount_in);

        let path = vec![&env, token_in, token_out];
        let amounts = match ExchangeClient::new(&env, &config.exchange).try_swap_exact_tokens_for_tokens(
            &env.current_contract_address(),
            &amount_in,
            &1,
            &path,
            &caller,
            &config.deadline,
        ) {
            Ok(Ok(amounts)) => amounts,
            _ => return Err(RouteError::VenueRejected),
        };
        let amount_out = amounts.last().ok_or(RouteError::VenueRejected)?;

        emit_trade(&env, &src, amount_in, &dst, amount_out);
        Ok(amount_out)
    }

    // ========================================================
    // WHITELIST
    // ========================================================

    pub fn add_whitelisted(env: Env, account: Address) -> Result<(), RouteError> {
        let config = read_config(&env)?;
        config.owner.require_auth();

        whitelist::add_whitelisted(&env, &account);
        emit_whitelist_added(&env, &account);
        Ok(())
    }

    pub fn remove_whitelisted(env: Env, account: Address) -> Result<(), RouteError> {
        let config = read_config(&env)?;
        config.owner.require_auth();

        whitelist::remove_whitelisted(&env, &account);
        emit_whitelist_removed(&env, &account);
        Ok(())
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        whitelist::is_whitelisted(&env, &account)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn owner(env: Env) -> Result<Address, RouteError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn get_config(env: Env) -> Result<CpRouteConfig, RouteError> {
        read_config(&env)
    }
}
