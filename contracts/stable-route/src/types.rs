// Stable route types

use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StableRouteConfig {
    /// Manages the whitelisted role
    pub owner: Address,
    /// Stable-swap pool
    pub pool: Address,
    /// Supported coins, the pool's coin list at initialization
    pub coins: Vec<Address>,
    /// Token contract standing in for `Asset::Native`
    pub native: Address,
}
