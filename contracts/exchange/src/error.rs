// Exchange error module for Narwhal

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    // Initialization errors (200-209)
    AlreadyInitialized = 200,
    NotInitialized = 201,
    InvalidFee = 202,

    // Pair errors (210-219)
    IdenticalAddresses = 210,
    PairNotFound = 211,
    InvalidPath = 212,

    // Trade errors (220-229)
    InsufficientLiquidity = 220,
    InsufficientInputAmount = 221,
    InsufficientOutputAmount = 222,
    Expired = 223,
}

/// Human-readable error messages for debugging
pub struct ExchangeErrorMsg;

impl ExchangeErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Exchange: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Exchange: not initialized";
    pub const INVALID_FEE: &'static str = "Exchange: fee must be below 100%";

    pub const IDENTICAL_ADDRESSES: &'static str = "Exchange: IDENTICAL_ADDRESSES";
    pub const PAIR_NOT_FOUND: &'static str = "Exchange: pair does not exist";
    pub const INVALID_PATH: &'static str = "Exchange: INVALID_PATH";

    pub const INSUFFICIENT_LIQUIDITY: &'static str = "Exchange: INSUFFICIENT_LIQUIDITY";
    pub const INSUFFICIENT_INPUT_AMOUNT: &'static str = "Exchange: INSUFFICIENT_INPUT_AMOUNT";
    pub const INSUFFICIENT_OUTPUT_AMOUNT: &'static str = "Exchange: INSUFFICIENT_OUTPUT_AMOUNT";
    pub const EXPIRED: &'static str = "Exchange: EXPIRED";
}
