#![no_std]

//! # Narwhal Bridge Route
//!
//! Trading route that reaches the destination through one or more
//! bridge assets, `src -> bridges[0] -> ... -> dst`. Hop `i` trades on
//! `exchanges[i]` and its exact output is the input of hop `i + 1`.

use soroban_sdk::{contract, contractimpl, vec, Address, Env, Vec};

use narwhal_math::get_amount_out;
use narwhal_route::{
    events::{emit_initialized, emit_trade, emit_whitelist_added, emit_whitelist_removed},
    funds::{approve_for, pull_from},
    resolve_pair, whitelist, Asset, ExchangeClient, RouteError,
};

mod storage;
mod types;

use storage::*;
pub use types::BridgeRouteConfig;

#[contract]
pub struct BridgeRoute;

#[contractimpl]
impl BridgeRoute {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize route
    ///
    /// # Arguments
    /// * `exchanges` - Exchange per hop, must be `bridges.len() + 1` long
    /// * `bridges` - Intermediate assets, `Asset::Native` allowed
    /// * `deadline` - Ledger timestamp forwarded to every swap
    pub fn initialize(
        env: Env,
        owner: Address,
        exchanges: Vec<Address>,
        bridges: Vec<Asset>,
        native: Address,
        deadline: u64,
    ) -> Result<(), RouteError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(RouteError::AlreadyInitialized);
        }
        if exchanges.len() != bridges.len() + 1 {
            return Err(RouteError::InvalidConfig);
        }

        let config = BridgeRouteConfig {
            owner: owner.clone(),
            exchanges,
            bridges,
            native,
            deadline,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &owner);
        Ok(())
    }

    // ========================================================
    // TRADING
    // ========================================================

    /// Output of the whole path, 0 when a hop would trade a token for itself
    pub fn quote(env: Env, src: Asset, dst: Asset, amount_in: i128) -> Result<i128, RouteError> {
        let config = read_config(&env)?;
        let path = Self::token_path(&env, &config, &src, &dst)?;
        if amount_in <= 0 {
            return Err(RouteError::InvalidAmount);
        }
        if Self::has_identical_hop(&path) {
            return Ok(0);
        }

        let mut amount = amount_in;
        for i in 0..config.exchanges.len() {
            let exchange = ExchangeClient::new(&env, &Self::exchange_at(&config, i)?);
            let hop_in = path.get(i).ok_or(RouteError::InvalidConfig)?;
            let hop_out = path.get(i + 1).ok_or(RouteError::InvalidConfig)?;

            let (reserve_in, reserve_out) = exchange.get_reserves(&hop_in, &hop_out);
            if reserve_in == 0 || reserve_out == 0 {
                return Err(RouteError::PairNotFound);
            }
            amount = get_amount_out(&env, amount, reserve_in, reserve_out, exchange.fee_bps())
                .ok_or(RouteError::InsufficientLiquidity)?;
        }

        Ok(amount)
    }

    /// Trade hop by hop, intermediate outputs stay here, the last one goes to `caller`
    pub fn trade(
        env: Env,
        caller: Address,
        src: Asset,
        dst: Asset,
        amount_in: i128,
    ) -> Result<i128, RouteError> {
        caller.require_auth();

        let config = read_config(&env)?;
        let path = Self::token_path(&env, &config, &src, &dst)?;
        if amount_in <= 0 {
            return Err(RouteError::InvalidAmount);
        }
        whitelist::require_whitelisted(&env, &caller)?;
        if Self::has_identical_hop(&path) {
            return Err(RouteError::IdenticalHop);
        }

        let token_in = path.get(0).ok_or(RouteError::InvalidConfig)?;
        pull_from(&env, &token_in, &caller, amount_in)?;

        let this = env.current_contract_address();
        let hops = config.exchanges.len();
        let mut amount = amount_in;
        for i in 0..hops {
            let exchange = Self::exchange_at(&config, i)?;
            let hop_in = path.get(i).ok_or(RouteError::InvalidConfig)?;
            let hop_out = path.get(i + 1).ok_or(RouteError::InvalidConfig)?;
            let to = if i + 1 == hops { caller.clone() } else { this.clone() };

            approve_for(&env, &hop_in, &exchange, amount);
            let amounts = match ExchangeClient::new(&env, &exchange).try_swap_exact_tokens_for_tokens(
                &this,
                &amount,
                &1,
                &vec![&env, hop_in, hop_out],
                &to,
                &config.deadline,
            ) {
                Ok(Ok(amounts)) => amounts,
                _ => return Err(RouteError::VenueRejected),
            };
            amount = amounts.last().ok_or(RouteError::VenueRejected)?;
        }

        emit_trade(&env, &src, amount_in, &dst, amount);
        Ok(amount)
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

    pub fn get_config(env: Env) -> Result<BridgeRouteConfig, RouteError> {
        read_config(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Resolved tokens `[src, bridges.., dst]`
    fn token_path(
        env: &Env,
        config: &BridgeRouteConfig,
        src: &Asset,
        dst: &Asset,
    ) -> Result<Vec<Address>, RouteError> {
        let (token_in, token_out) = resolve_pair(&config.native, src, dst)?;

        let mut path = Vec::new(env);
        path.push_back(token_in);
        for bridge in config.bridges.iter() {
            path.push_back(bridge.resolve(&config.native));
        }
        path.push_back(token_out);
        Ok(path)
    }

    fn has_identical_hop(path: &Vec<Address>) -> bool {
        (1..path.len()).any(|i| path.get(i - 1) == path.get(i))
    }

    fn exchange_at(config: &BridgeRouteConfig, hop: u32) -> Result<Address, RouteError> {
        config.exchanges.get(hop).ok_or(RouteError::InvalidConfig)
    }
}
