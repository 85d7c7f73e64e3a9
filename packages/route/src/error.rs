// Route error module for Narwhal

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouteError {
    // Initialization errors (100-109)
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InvalidConfig = 102,

    // Input validation errors (110-119)
    SameAsset = 110,
    UnsupportedToken = 111,
    InvalidAmount = 112,
    IdenticalHop = 113,

    // Authorization errors (120-129)
    NotWhitelisted = 120,

    // Venue and liquidity errors (130-139)
    PairNotFound = 130,
    InsufficientLiquidity = 131,
    SourceAmountMismatch = 132,
    VenueRejected = 133,
}

/// Human-readable error messages for debugging
pub struct RouteErrorMsg;

impl RouteErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "Route: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Route: not initialized";
    pub const INVALID_CONFIG: &'static str = "Route: one exchange per hop required";

    // Input validation
    pub const SAME_ASSET: &'static str = "destination token can not be source token";
    pub const UNSUPPORTED_TOKEN: &'static str = "tokens're not supported!";
    pub const INVALID_AMOUNT: &'static str = "Route: amount must be positive";
    pub const IDENTICAL_HOP: &'static str = "Route: hop input and output are the same token";

    // Authorization
    pub const NOT_WHITELISTED: &'static str = "caller does not have the whitelisted role";

    // Venue
    pub const PAIR_NOT_FOUND: &'static str = "Route: pair does not exist on the exchange";
    pub const INSUFFICIENT_LIQUIDITY: &'static str = "Route: venue can not fill the amount";
    pub const SOURCE_AMOUNT_MISMATCH: &'static str = "source amount mismatch";
    pub const VENUE_REJECTED: &'static str = "Route: venue rejected the trade";
}
