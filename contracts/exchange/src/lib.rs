#![no_std]

//! # Narwhal Exchange
//!
//! Reference constant-product exchange the routes trade against.
//!
//! ## Responsibilities:
//! 1. Pair registry keyed by sorted token addresses
//! 2. Deposits into a pair (the first deposit creates it)
//! 3. Exact-input swaps along a token path
//!
//! Pricing is `narwhal_math::get_amount_out`, so a route quoting off
//! `get_reserves` and `fee_bps` gets exactly what a swap pays.

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use narwhal_math::{get_amount_out, BPS_DENOMINATOR};

mod error;
mod events;
mod storage;
mod types;

pub use error::{ExchangeError, ExchangeErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct NarwhalExchange;

#[contractimpl]
impl NarwhalExchange {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize exchange with its swap fee
    pub fn initialize(env: Env, admin: Address, fee_bps: u32) -> Result<(), ExchangeError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(ExchangeError::AlreadyInitialized);
        }
        if fee_bps >= BPS_DENOMINATOR {
            return Err(ExchangeError::InvalidFee);
        }

        write_config(&env, &ExchangeConfig { admin: admin.clone(), fee_bps });
        set_initialized(&env);

        emit_initialized(&env, &admin, fee_bps);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Deposit both tokens of a pair, creating it on first use
    ///
    /// Returns the new reserves ordered as the arguments.
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<(i128, i128), ExchangeError> {
        provider.require_auth();

        if !is_initialized(&env) {
            return Err(ExchangeError::NotInitialized);
        }
        if token_a == token_b {
            return Err(ExchangeError::IdenticalAddresses);
        }
        if amount_a <= 0 || amount_b <= 0 {
            return Err(ExchangeError::InsufficientInputAmount);
        }

        let this = env.current_contract_address();
        token::Client::new(&env, &token_a).transfer(&provider, &this, &amount_a);
        token::Client::new(&env, &token_b).transfer(&provider, &this, &amount_b);

        let mut pair = match read_pair(&env, &token_a, &token_b) {
            Some(pair) => pair,
            None => {
                let (token0, token1) = sort_tokens(&token_a, &token_b);
                let index = register_pair(&env, &token0, &token1);
                emit_pair_created(&env, &token0, &token1, index);
                Pair { token0, token1, reserve0: 0, reserve1: 0 }
            }
        };

        let (amount0, amount1) = if token_a == pair.token0 {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        pair.reserve0 += amount0;
        pair.reserve1 += amount1;
        write_pair(&env, &pair);

        emit_liquidity_added(&env, &provider, &pair.token0, &pair.token1, amount0, amount1);

        Ok(pair.reserves_for(&token_a))
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap an exact input along `path`, paying the final output to `to`
    ///
    /// The sender must have approved this exchange for `amount_in` of `path[0]`.
    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, ExchangeError> {
        sender.require_auth();

        if env.ledger().timestamp() > deadline {
            return Err(ExchangeError::Expired);
        }

        let config = read_config(&env)?;
        let amounts = Self::amounts_out(&env, config.fee_bps, amount_in, &path)?;

        let amount_out = amounts.last().unwrap_or(0);
        if amount_out < amount_out_min {
            return Err(ExchangeError::InsufficientOutputAmount);
        }

        let this = env.current_contract_address();
        let token_in = path.get(0).ok_or(ExchangeError::InvalidPath)?;
        token::Client::new(&env, &token_in).transfer_from(&this, &sender, &this, &amount_in);

        for i in 0..path.len() - 1 {
            let hop_in = path.get(i).ok_or(ExchangeError::InvalidPath)?;
            let hop_out = path.get(i + 1).ok_or(ExchangeError::InvalidPath)?;
            let mut pair = read_pair(&env, &hop_in, &hop_out).ok_or(ExchangeError::PairNotFound)?;
            pair.apply_swap(
                &hop_in,
                amounts.get(i).unwrap_or(0),
                amounts.get(i + 1).unwrap_or(0),
            );
            write_pair(&env, &pair);
        }

        let token_out = path.get(path.len() - 1).ok_or(ExchangeError::InvalidPath)?;
        token::Client::new(&env, &token_out).transfer(&this, &to, &amount_out);

        emit_swap(&env, &sender, &to, &path, &amounts);

        Ok(amounts)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn fee_bps(env: Env) -> Result<u32, ExchangeError> {
        Ok(read_config(&env)?.fee_bps)
    }

    /// Reserves ordered as the arguments, (0, 0) for an unknown pair
    pub fn get_reserves(env: Env, token_a: Address, token_b: Address) -> (i128, i128) {
        match read_pair(&env, &token_a, &token_b) {
            Some(pair) if token_a != token_b => pair.reserves_for(&token_a),
            _ => (0, 0),
        }
    }

    /// Amount at every step of `path` for an exact input
    pub fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Result<Vec<i128>, ExchangeError> {
        let config = read_config(&env)?;
        Self::amounts_out(&env, config.fee_bps, amount_in, &path)
    }

    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Pair> {
        read_pair(&env, &token_a, &token_b)
    }

    pub fn pair_count(env: Env) -> u32 {
        read_pair_count(&env)
    }

    /// Sorted tokens of the pair created at `index`
    pub fn pair_by_index(env: Env, index: u32) -> Option<(Address, Address)> {
        read_pair_tokens(&env, index)
    }

    pub fn get_config(env: Env) -> Result<ExchangeConfig, ExchangeError> {
        read_config(&env)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_fee_bps(env: Env, fee_bps: u32) -> Result<(), ExchangeError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        if fee_bps >= BPS_DENOMINATOR {
            return Err(ExchangeError::InvalidFee);
        }

        config.fee_bps = fee_bps;
        write_config(&env, &config);

        emit_fee_updated(&env, fee_bps);
        Ok(())
    }

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ExchangeError> {
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

    fn amounts_out(
        env: &Env,
        fee_bps: u32,
        amount_in: i128,
        path: &Vec<Address>,
    ) -> Result<Vec<i128>, ExchangeError> {
        if path.len() < 2 {
            return Err(ExchangeError::InvalidPath);
        }
        if amount_in <= 0 {
            return Err(ExchangeError::InsufficientInputAmount);
        }

        let mut amounts = Vec::new(env);
        amounts.push_back(amount_in);

        // Hops are priced on reserves read up front, so a pair may appear once
        let mut visited: Vec<(Address, Address)> = Vec::new(env);

        let mut current = amount_in;
        for i in 0..path.len() - 1 {
            let hop_in = path.get(i).ok_or(ExchangeError::InvalidPath)?;
            let hop_out = path.get(i + 1).ok_or(ExchangeError::InvalidPath)?;
            if hop_in == hop_out {
                return Err(ExchangeError::IdenticalAddresses);
            }

            let key = sort_tokens(&hop_in, &hop_out);
            if visited.contains(&key) {
                return Err(ExchangeError::InvalidPath);
            }
            visited.push_back(key);

            let pair = read_pair(env, &hop_in, &hop_out).ok_or(ExchangeError::PairNotFound)?;
            let (reserve_in, reserve_out) = pair.reserves_for(&hop_in);

            current = get_amount_out(env, current, reserve_in, reserve_out, fee_bps)
                .filter(|out| *out > 0)
                .ok_or(ExchangeError::InsufficientLiquidity)?;
            amounts.push_back(current);
        }

        Ok(amounts)
    }
}
