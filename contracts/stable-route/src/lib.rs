#![no_std]

//! # Narwhal Stable Route
//!
//! Trading route over one stable-swap pool. Only the coins the pool
//! listed at initialization are tradable.

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use narwhal_route::{
    events::{emit_initialized, emit_trade, emit_whitelist_added, emit_whitelist_removed},
    funds::{approve_for, pull_from},
    resolve_pair, whitelist, Asset, RouteError, StablePoolClient,
};

mod storage;
mod types;

use storage::*;
pub use types::StableRouteConfig;

#[contract]
pub struct StableRoute;

#[contractimpl]
impl StableRoute {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize route, snapshotting the pool's coin list
    pub fn initialize(env: Env, owner: Address, pool: Address, native: Address) -> Result<(), RouteError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(RouteError::AlreadyInitialized);
        }

        let coins = StablePoolClient::new(&env, &pool).coins();
        if coins.len() < 2 {
            return Err(RouteError::InvalidConfig);
        }

        write_config(&env, &StableRouteConfig { owner: owner.clone(), pool, coins, native });
        set_initialized(&env);

        emit_initialized(&env, &owner);
        Ok(())
    }

    // ========================================================
    // TRADING
    // ========================================================

    /// Pool `get_dy` for the pair
    pub fn quote(env: Env, src: Asset, dst: Asset, amount_in: i128) -> Result<i128, RouteError> {
        let config = read_config(&env)?;
        let (i, j) = Self::coin_indices(&config, &src, &dst, amount_in)?;

        match StablePoolClient::new(&env, &config.pool).try_get_dy(&i, &j, &amount_in) {
            Ok(Ok(dy)) => Ok(dy),
            _ => Err(RouteError::InsufficientLiquidity),
        }
    }

    /// Exchange on the pool, output goes to `caller`
    pub fn trade(
        env: Env,
        caller: Address,
        src: Asset,
        dst: Asset,
        amount_in: i128,
    ) -> Result<i128, RouteError> {
        caller.require_auth();

        let config = read_config(&env)?;
        let (i, j) = Self::coin_indices(&config, &src, &dst, amount_in)?;
        whitelist::require_whitelisted(&env, &caller)?;

        let token_in = src.resolve(&config.native);
        pull_from(&env, &token_in, &caller, amount_in)?;
        approve_for(&env, &token_in, &config.pool, amount_in);

        let amount_out = match StablePoolClient::new(&env, &config.pool).try_exchange(
            &env.current_contract_address(),
            &i,
            &j,
            &amount_in,
            &1,
            &caller,
        ) {
            Ok(Ok(dy)) => dy,
            _ => return Err(RouteError::VenueRejected),
        };

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

    pub fn get_config(env: Env) -> Result<StableRouteConfig, RouteError> {
        read_config(&env)
    }

    /// Coins this route accepts
    pub fn coins(env: Env) -> Result<Vec<Address>, RouteError> {
        Ok(read_config(&env)?.coins)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Pool indices of the pair, after the same-asset and amount checks
    fn coin_indices(
        config: &StableRouteConfig,
        src: &Asset,
        dst: &Asset,
        amount_in: i128,
    ) -> Result<(u32, u32), RouteError> {
        let (token_in, token_out) = resolve_pair(&config.native, src, dst)?;
        if amount_in <= 0 {
            return Err(RouteError::InvalidAmount);
        }

        match (config.coins.first_index_of(&token_in), config.coins.first_index_of(&token_out)) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(RouteError::UnsupportedToken),
        }
    }
}
