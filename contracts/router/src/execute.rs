//! Trade executor
//!
//! Pull funds, dispatch to routes, measure what came back, take the
//! fee, pay the trader. Any error rolls the whole invocation back.

use soroban_sdk::{token, Address, Env, Vec};

use narwhal_route::{
    funds::{approve_for, own_balance},
    Asset, TradingRouteClient,
};

use crate::error::RouterError;
use crate::events::{emit_collect_fee, emit_trade};
use crate::fees;
use crate::quote::{route_error, validate_legs};
use crate::registry;
use crate::storage::read_config;
use crate::types::Quote;

/// Single-route trade, returns the amount paid to the trader
#[allow(clippy::too_many_arguments)]
pub fn trade(
    env: &Env,
    trader: &Address,
    index: u32,
    src: &Asset,
    amount_in: i128,
    dst: &Asset,
    min_amount_out: i128,
    partner_index: u32,
) -> Result<i128, RouterError> {
    let mut indices = Vec::new(env);
    indices.push_back(index);
    let mut amounts_in = Vec::new(env);
    amounts_in.push_back(amount_in);

    split_trades(
        env,
        trader,
        &indices,
        src,
        amount_in,
        &amounts_in,
        dst,
        min_amount_out,
        partner_index,
    )
}

/// Trade pre-split legs, one fee on the summed output
///
/// Zero legs are allowed and never reach their route, as in `quote_split`.
#[allow(clippy::too_many_arguments)]
pub fn split_trades(
    env: &Env,
    trader: &Address,
    indices: &Vec<u32>,
    src: &Asset,
    total_amount_in: i128,
    amounts_in: &Vec<i128>,
    dst: &Asset,
    min_amount_out: i128,
    partner_index: u32,
) -> Result<i128, RouterError> {
    trader.require_auth();

    let config = read_config(env)?;
    validate_legs(indices, amounts_in)?;
    if total_amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let mut sum: i128 = 0;
    for amount_in in amounts_in.iter() {
        if amount_in < 0 {
            return Err(RouterError::InvalidAmount);
        }
        sum = sum.checked_add(amount_in).ok_or(RouterError::InvalidAmount)?;
    }
    if sum != total_amount_in {
        return Err(RouterError::AmountInMismatch);
    }

    let token_in = src.resolve(&config.native);
    let token_out = dst.resolve(&config.native);
    if token_in == token_out {
        return Err(RouterError::SameAsset);
    }

    // Resolve every route carrying volume before any funds move, zero legs are skipped
    let mut legs: Vec<(Address, i128)> = Vec::new(env);
    for (index, amount_in) in indices.iter().zip(amounts_in.iter()) {
        if amount_in == 0 {
            continue;
        }
        legs.push_back((registry::enabled_route(env, index)?, amount_in));
    }

    let this = env.current_contract_address();
    token::Client::new(env, &token_in).transfer(trader, &this, &total_amount_in);

    let before = own_balance(env, &token_out);
    for (route, amount_in) in legs.iter() {
        dispatch(env, &route, &token_in, src, dst, amount_in)?;
    }
    let gross = own_balance(env, &token_out) - before;
    if gross <= 0 {
        return Err(RouterError::RouteFailed);
    }

    let partner = fees::partner(env, partner_index)?;
    let quote = fees::apply_fee(env, gross, &partner, Some(trader));
    if quote.net < min_amount_out {
        return Err(RouterError::InsufficientOutput);
    }

    settle(env, trader, &token_out, &partner.payout, &quote);

    if quote.fee > 0 {
        emit_collect_fee(env, partner_index, dst, &partner.payout, quote.fee);
    }
    emit_trade(env, src, total_amount_in, dst, quote.net, trader);

    Ok(quote.net)
}

/// Hand one leg to a route; its output lands back on the router
fn dispatch(
    env: &Env,
    route: &Address,
    token_in: &Address,
    src: &Asset,
    dst: &Asset,
    amount_in: i128,
) -> Result<(), RouterError> {
    approve_for(env, token_in, route, amount_in);

    let this = env.current_contract_address();
    match TradingRouteClient::new(env, route).try_trade(&this, src, dst, &amount_in) {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(_)) => Err(RouterError::RouteFailed),
        Err(err) => Err(route_error(err)),
    }
}

/// Pay the fee to the partner and the rest to the trader
fn settle(env: &Env, trader: &Address, token_out: &Address, payout: &Address, quote: &Quote) {
    let client = token::Client::new(env, token_out);
    let this = env.current_contract_address();

    if quote.fee > 0 {
        client.transfer(&this, payout, &quote.fee);
    }
    if quote.net > 0 {
        client.transfer(&this, trader, &quote.net);
    }
}
