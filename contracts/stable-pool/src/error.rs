// Stable pool error module for Narwhal

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StablePoolError {
    // Initialization errors (300-309)
    AlreadyInitialized = 300,
    NotInitialized = 301,

    // Configuration errors (310-319)
    InvalidCoinCount = 310,
    DuplicateCoin = 311,
    InvalidAmp = 312,
    InvalidFee = 313,
    UnsupportedDecimals = 314,

    // Trade errors (320-329)
    InvalidIndex = 320,
    SameCoin = 321,
    InvalidAmount = 322,
    InsufficientLiquidity = 323,
    SlippageExceeded = 324,
}

/// Human-readable error messages for debugging
pub struct StablePoolErrorMsg;

impl StablePoolErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "StablePool: already initialized";
    pub const NOT_INITIALIZED: &'static str = "StablePool: not initialized";

    pub const INVALID_COIN_COUNT: &'static str = "StablePool: between 2 and 8 coins";
    pub const DUPLICATE_COIN: &'static str = "StablePool: coins must be distinct";
    pub const INVALID_AMP: &'static str = "StablePool: amplification out of range";
    pub const INVALID_FEE: &'static str = "StablePool: fee above maximum";
    pub const UNSUPPORTED_DECIMALS: &'static str = "StablePool: coin has more than 18 decimals";

    pub const INVALID_INDEX: &'static str = "StablePool: coin index out of range";
    pub const SAME_COIN: &'static str = "StablePool: i and j must differ";
    pub const INVALID_AMOUNT: &'static str = "StablePool: amount must be positive";
    pub const INSUFFICIENT_LIQUIDITY: &'static str = "StablePool: pool can not fill the amount";
    pub const SLIPPAGE_EXCEEDED: &'static str = "StablePool: exchange resulted in fewer coins than expected";
}
