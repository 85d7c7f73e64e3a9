//! Quote engine
//!
//! Gross output comes from the routes, the platform fee is applied
//! once on the aggregate.

use soroban_sdk::{Address, Env, InvokeError, Vec};

use narwhal_route::{Asset, RouteError, TradingRouteClient};

use crate::error::RouterError;
use crate::fees;
use crate::registry;
use crate::storage::read_config;
use crate::types::Quote;

/// Translate a failed route call into the router's vocabulary
pub fn route_error(err: Result<RouteError, InvokeError>) -> RouterError {
    match err {
        Ok(RouteError::SameAsset) => RouterError::SameAsset,
        Ok(RouteError::UnsupportedToken) => RouterError::UnsupportedToken,
        _ => RouterError::RouteFailed,
    }
}

/// Gross output of one enabled route, always positive
pub fn route_gross(
    env: &Env,
    index: u32,
    src: &Asset,
    dst: &Asset,
    amount_in: i128,
) -> Result<i128, RouterError> {
    let route = registry::enabled_route(env, index)?;
    match TradingRouteClient::new(env, &route).try_quote(src, dst, &amount_in) {
        Ok(Ok(amount_out)) if amount_out > 0 => Ok(amount_out),
        // A route reporting nothing can not fill the trade
        Ok(Ok(_)) | Ok(Err(_)) => Err(RouterError::RouteFailed),
        Err(err) => Err(route_error(err)),
    }
}

pub fn quote_single(
    env: &Env,
    index: u32,
    src: &Asset,
    dst: &Asset,
    amount_in: i128,
    partner_index: u32,
    trader: &Address,
) -> Result<Quote, RouterError> {
    read_config(env)?;
    if amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let gross = route_gross(env, index, src, dst, amount_in)?;
    let partner = fees::partner(env, partner_index)?;
    Ok(fees::apply_fee(env, gross, &partner, Some(trader)))
}

/// Quote a trade already split across routes
///
/// Zero legs contribute nothing and are not quoted, at least one leg
/// must carry volume.
pub fn quote_split(
    env: &Env,
    indices: &Vec<u32>,
    src: &Asset,
    amounts_in: &Vec<i128>,
    dst: &Asset,
    partner_index: u32,
    trader: &Address,
) -> Result<Quote, RouterError> {
    read_config(env)?;
    validate_legs(indices, amounts_in)?;

    let mut gross: i128 = 0;
    let mut filled = false;
    for (index, amount_in) in indices.iter().zip(amounts_in.iter()) {
        if amount_in < 0 {
            return Err(RouterError::InvalidAmount);
        }
        if amount_in == 0 {
            continue;
        }
        let leg = route_gross(env, index, src, dst, amount_in)?;
        gross = gross.checked_add(leg).ok_or(RouterError::InvalidAmount)?;
        filled = true;
    }
    if !filled {
        return Err(RouterError::InvalidAmount);
    }

    let partner = fees::partner(env, partner_index)?;
    Ok(fees::apply_fee(env, gross, &partner, Some(trader)))
}

/// Shape checks shared by split quotes and split trades
pub fn validate_legs(indices: &Vec<u32>, amounts_in: &Vec<i128>) -> Result<(), RouterError> {
    if indices.is_empty() {
        return Err(RouterError::EmptyRoutes);
    }
    if indices.len() != amounts_in.len() {
        return Err(RouterError::LengthMismatch);
    }
    Ok(())
}
