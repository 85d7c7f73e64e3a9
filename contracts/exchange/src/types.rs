// Exchange types

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    /// Admin allowed to change the fee
    pub admin: Address,
    /// Swap fee in basis points, charged on the input (30 = 0.30%)
    pub fee_bps: u32,
}

/// Pool of two tokens, stored under its sorted key
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pair {
    /// Lower token address
    pub token0: Address,
    /// Higher token address
    pub token1: Address,
    /// Reserve of token0 held by the exchange
    pub reserve0: i128,
    /// Reserve of token1 held by the exchange
    pub reserve1: i128,
}

impl Pair {
    /// Reserves ordered as (`token_in`, other)
    pub fn reserves_for(&self, token_in: &Address) -> (i128, i128) {
        if *token_in == self.token0 {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    /// Move `amount_in` of `token_in` into the pair and `amount_out` of the other token out
    pub fn apply_swap(&mut self, token_in: &Address, amount_in: i128, amount_out: i128) {
        if *token_in == self.token0 {
            self.reserve0 += amount_in;
            self.reserve1 -= amount_out;
        } else {
            self.reserve1 += amount_in;
            self.reserve0 -= amount_out;
        }
    }
}
