// Constant-product route types

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CpRouteConfig {
    /// Manages the whitelisted role
    pub owner: Address,
    /// Constant-product exchange holding the pairs
    pub exchange: Address,
    /// Token contract standing in for `Asset::Native`
    pub native: Address,
    /// Ledger timestamp passed to every swap, `u64::MAX` for none
    pub deadline: u64,
}
