// Bridge route types

use soroban_sdk::{contracttype, Address, Vec};

use narwhal_route::Asset;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeRouteConfig {
    /// Manages the whitelisted role
    pub owner: Address,
    /// Exchange for each hop, one more than `bridges`
    pub exchanges: Vec<Address>,
    /// Intermediate assets between source and destination
    pub bridges: Vec<Asset>,
    /// Token contract standing in for `Asset::Native`
    pub native: Address,
    /// Ledger timestamp passed to every swap, `u64::MAX` for none
    pub deadline: u64,
}
