// Stable pool types

use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Admin allowed to retune amp and fee
    pub admin: Address,
    /// Coin contracts, index order is the pool's coin order
    pub coins: Vec<Address>,
    /// Rate multipliers lifting each coin to 18 decimals
    pub multipliers: Vec<i128>,
    /// Amplification coefficient
    pub amp: u32,
    /// Swap fee in 1e10 units (4_000_000 = 0.04%)
    pub fee: u32,
}
