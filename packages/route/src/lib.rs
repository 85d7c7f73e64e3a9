//! # Narwhal Route Package
//!
//! Vocabulary shared by the router and every trading route:
//! the `Asset` type, `RouteError`, the route and venue clients,
//! the whitelisted role and the token helpers routes trade with.

#![no_std]

pub mod asset;
pub mod error;
pub mod events;
pub mod funds;
pub mod interface;
pub mod whitelist;

pub use asset::Asset;
pub use error::{RouteError, RouteErrorMsg};
pub use interface::{
    ExchangeClient, ExchangeInterface, StablePoolClient, StablePoolInterface,
    TradingRouteClient, TradingRouteInterface,
};

/// Resolve both ends of a trade and reject same-asset requests
///
/// Runs before any whitelist or pair lookup.
pub fn resolve_pair(
    native: &soroban_sdk::Address,
    src: &Asset,
    dst: &Asset,
) -> Result<(soroban_sdk::Address, soroban_sdk::Address), RouteError> {
    let token_in = src.resolve(native);
    let token_out = dst.resolve(native);
    if token_in == token_out {
        return Err(RouteError::SameAsset);
    }
    Ok((token_in, token_out))
}
