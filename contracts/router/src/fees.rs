//! Fee schedule
//!
//! Partner-indexed platform fees with a loyalty bypass. Partner 0 is
//! the platform itself and doubles as the fallback for unknown indices.

use soroban_sdk::{token, Address, Env, String};

use narwhal_math::{is_valid_partner_fee, split_fee};

use crate::error::RouterError;
use crate::events::{emit_eligible_balance_updated, emit_loyalty_token_updated, emit_partner_updated};
use crate::storage::{read_config, read_loyalty, read_partner, write_loyalty, write_partner};
use crate::types::{LoyaltyConfig, Partner, Quote};

/// Partner slot that always exists after initialization
pub const DEFAULT_PARTNER: u32 = 0;

/// Ten whole units of a 7-decimal token
pub const DEFAULT_ELIGIBLE_BALANCE: i128 = 100_000_000;

pub fn set_partner(
    env: &Env,
    index: u32,
    payout: Address,
    fee_bps: u32,
    label: String,
) -> Result<(), RouterError> {
    let config = read_config(env)?;
    config.owner.require_auth();

    write_checked_partner(env, index, Partner { payout, fee_bps, label })
}

/// Store a partner after the fee cap check
pub fn write_checked_partner(env: &Env, index: u32, partner: Partner) -> Result<(), RouterError> {
    if !is_valid_partner_fee(partner.fee_bps) {
        return Err(RouterError::FeeTooHigh);
    }
    write_partner(env, index, &partner);
    emit_partner_updated(env, index, &partner.payout, partner.fee_bps, &partner.label);
    Ok(())
}

/// The partner at `index`, or partner 0 when the slot was never set
pub fn partner(env: &Env, index: u32) -> Result<Partner, RouterError> {
    match read_partner(env, index) {
        Some(partner) => Ok(partner),
        None => read_partner(env, DEFAULT_PARTNER).ok_or(RouterError::NotInitialized),
    }
}

// ============================================================
// LOYALTY
// ============================================================

pub fn loyalty(env: &Env) -> LoyaltyConfig {
    read_loyalty(env).unwrap_or(LoyaltyConfig {
        token: None,
        eligible_balance: DEFAULT_ELIGIBLE_BALANCE,
    })
}

pub fn set_loyalty_token(env: &Env, token: Option<Address>) -> Result<(), RouterError> {
    let config = read_config(env)?;
    config.owner.require_auth();

    let mut loyalty = loyalty(env);
    loyalty.token = token;
    write_loyalty(env, &loyalty);

    emit_loyalty_token_updated(env, &loyalty.token);
    Ok(())
}

pub fn set_eligible_balance(env: &Env, eligible_balance: i128) -> Result<(), RouterError> {
    let config = read_config(env)?;
    config.owner.require_auth();

    if eligible_balance < 0 {
        return Err(RouterError::InvalidAmount);
    }

    let mut loyalty = loyalty(env);
    loyalty.eligible_balance = eligible_balance;
    write_loyalty(env, &loyalty);

    emit_eligible_balance_updated(env, eligible_balance);
    Ok(())
}

/// Holds at least the eligible balance of the configured loyalty token
pub fn is_eligible(env: &Env, trader: &Address) -> bool {
    let loyalty = loyalty(env);
    match loyalty.token {
        Some(token) => token::Client::new(env, &token).balance(trader) >= loyalty.eligible_balance,
        None => false,
    }
}

// ============================================================
// FEE APPLICATION
// ============================================================

/// Split `gross` for `partner`, waiving the fee for an eligible trader
///
/// `trader` is `None` when no loyalty check should happen.
pub fn apply_fee(env: &Env, gross: i128, partner: &Partner, trader: Option<&Address>) -> Quote {
    let waived = trader.map(|t| is_eligible(env, t)).unwrap_or(false);
    if waived {
        return Quote { gross, fee: 0, net: gross };
    }

    let (fee, net) = split_fee(gross, partner.fee_bps);
    Quote { gross, fee, net }
}
