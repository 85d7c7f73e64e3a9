#![no_std]

//! # Narwhal Stable Pool
//!
//! Reference stable-swap pool (Curve invariant) for pegged coins.
//!
//! ## Functions:
//! - Write: initialize, add_liquidity, exchange, set_params, set_admin
//! - Read: coins, balances, get_dy, get_config

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use narwhal_math::{get_dy, rate_multiplier, MAX_AMP, MAX_STABLE_COINS, MAX_STABLE_FEE};

mod error;
mod events;
mod storage;
pub mod types;

pub use error::{StablePoolError, StablePoolErrorMsg};
use events::*;
use storage::*;
pub use types::PoolConfig;

#[contract]
pub struct NarwhalStablePool;

#[contractimpl]
impl NarwhalStablePool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `admin` - May retune amp and fee later
    /// * `coins` - 2 to 8 distinct token contracts, at most 18 decimals each
    /// * `amp` - Amplification coefficient
    /// * `fee` - Swap fee in 1e10 units
    pub fn initialize(
        env: Env,
        admin: Address,
        coins: Vec<Address>,
        amp: u32,
        fee: u32,
    ) -> Result<(), StablePoolError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(StablePoolError::AlreadyInitialized);
        }

        let n = coins.len();
        if n < 2 || n > MAX_STABLE_COINS {
            return Err(StablePoolError::InvalidCoinCount);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if coins.get(i) == coins.get(j) {
                    return Err(StablePoolError::DuplicateCoin);
                }
            }
        }
        Self::validate_params(amp, fee)?;

        let mut multipliers = Vec::new(&env);
        let mut balances = Vec::new(&env);
        for coin in coins.iter() {
            let decimals = token::Client::new(&env, &coin).decimals();
            let multiplier = rate_multiplier(decimals).ok_or(StablePoolError::UnsupportedDecimals)?;
            multipliers.push_back(multiplier);
            balances.push_back(0i128);
        }

        let config = PoolConfig {
            admin,
            coins: coins.clone(),
            multipliers,
            amp,
            fee,
        };
        write_config(&env, &config);
        write_balances(&env, &balances);
        set_initialized(&env);

        emit_initialized(&env, &coins, amp, fee);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Deposit coins in pool order, zero entries are skipped
    ///
    /// Returns the new pool balances.
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amounts: Vec<i128>,
    ) -> Result<Vec<i128>, StablePoolError> {
        provider.require_auth();

        let config = read_config(&env)?;
        let mut balances = read_balances(&env)?;

        if amounts.len() != config.coins.len() {
            return Err(StablePoolError::InvalidCoinCount);
        }

        let this = env.current_contract_address();
        for (i, amount) in amounts.iter().enumerate() {
            let i = i as u32;
            if amount < 0 {
                return Err(StablePoolError::InvalidAmount);
            }
            if amount == 0 {
                continue;
            }
            let coin = config.coins.get(i).ok_or(StablePoolError::InvalidIndex)?;
            token::Client::new(&env, &coin).transfer(&provider, &this, &amount);

            let balance = balances.get(i).ok_or(StablePoolError::InvalidIndex)?;
            balances.set(i, balance + amount);
        }
        write_balances(&env, &balances);

        emit_liquidity_added(&env, &provider, &amounts);
        Ok(balances)
    }

    // ========================================================
    // EXCHANGE
    // ========================================================

    /// Swap `dx` of coin `i` for coin `j`, paying `to`
    ///
    /// The sender must have approved this pool for `dx` of coin `i`.
    pub fn exchange(
        env: Env,
        sender: Address,
        i: u32,
        j: u32,
        dx: i128,
        min_dy: i128,
        to: Address,
    ) -> Result<i128, StablePoolError> {
        sender.require_auth();

        let config = read_config(&env)?;
        let mut balances = read_balances(&env)?;
        let dy = Self::quote(&env, &config, &balances, i, j, dx)?;

        if dy < min_dy {
            return Err(StablePoolError::SlippageExceeded);
        }

        let this = env.current_contract_address();
        let coin_in = config.coins.get(i).ok_or(StablePoolError::InvalidIndex)?;
        let coin_out = config.coins.get(j).ok_or(StablePoolError::InvalidIndex)?;

        token::Client::new(&env, &coin_in).transfer_from(&this, &sender, &this, &dx);

        // Fee stays in the pool as part of balance j
        let balance_i = balances.get(i).ok_or(StablePoolError::InvalidIndex)?;
        let balance_j = balances.get(j).ok_or(StablePoolError::InvalidIndex)?;
        balances.set(i, balance_i + dx);
        balances.set(j, balance_j - dy);
        write_balances(&env, &balances);

        token::Client::new(&env, &coin_out).transfer(&this, &to, &dy);

        emit_token_exchange(&env, &sender, i, dx, j, dy);
        Ok(dy)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Output of coin `j` for `dx` of coin `i`, net of fee
    pub fn get_dy(env: Env, i: u32, j: u32, dx: i128) -> Result<i128, StablePoolError> {
        let config = read_config(&env)?;
        let balances = read_balances(&env)?;
        Self::quote(&env, &config, &balances, i, j, dx)
    }

    pub fn coins(env: Env) -> Result<Vec<Address>, StablePoolError> {
        Ok(read_config(&env)?.coins)
    }

    pub fn balances(env: Env) -> Result<Vec<i128>, StablePoolError> {
        read_balances(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, StablePoolError> {
        read_config(&env)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Retune amplification and fee
    pub fn set_params(env: Env, amp: u32, fee: u32) -> Result<(), StablePoolError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        Self::validate_params(amp, fee)?;

        config.amp = amp;
        config.fee = fee;
        write_config(&env, &config);

        emit_params_updated(&env, amp, fee);
        Ok(())
    }

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), StablePoolError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();
        new_admin.require_auth();

        emit_admin_updated(&env, &config.admin, &new_admin);

        config.admin = new_admin;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn validate_params(amp: u32, fee: u32) -> Result<(), StablePoolError> {
        if amp == 0 || amp > MAX_AMP {
            return Err(StablePoolError::InvalidAmp);
        }
        if fee > MAX_STABLE_FEE {
            return Err(StablePoolError::InvalidFee);
        }
        Ok(())
    }

    fn quote(
        env: &Env,
        config: &PoolConfig,
        balances: &Vec<i128>,
        i: u32,
        j: u32,
        dx: i128,
    ) -> Result<i128, StablePoolError> {
        let n = config.coins.len();
        if i >= n || j >= n {
            return Err(StablePoolError::InvalidIndex);
        }
        if i == j {
            return Err(StablePoolError::SameCoin);
        }
        if dx <= 0 {
            return Err(StablePoolError::InvalidAmount);
        }

        get_dy(env, i, j, dx, balances, &config.multipliers, config.amp, config.fee)
            .filter(|dy| *dy > 0)
            .ok_or(StablePoolError::InsufficientLiquidity)
    }
}
