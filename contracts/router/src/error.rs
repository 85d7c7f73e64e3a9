//! Router error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Registry errors
    RouteNotFound = 10,
    RouteAlreadyEnabled = 11,
    RouteAlreadyDisabled = 12,
    RouteDisabled = 13,

    // Fee errors
    FeeTooHigh = 20,

    // Split validation
    EmptyRoutes = 30,
    LengthMismatch = 31,
    AmountInMismatch = 32,

    // Trade errors
    InsufficientOutput = 40,
    InvalidAmount = 41,
    RouteFailed = 42,
    SameAsset = 43,
    UnsupportedToken = 44,

    // Search errors
    NotEnoughCandidates = 50,
    InvalidBucketCount = 51,
    SearchTooLarge = 52,
    NoViableRoute = 53,
}

/// Human-readable error messages for debugging
pub struct RouterErrorMsg;

impl RouterErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "Router: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Router: not initialized";

    // Registry
    pub const ROUTE_NOT_FOUND: &'static str = "Router: route index does not exist";
    pub const ROUTE_ALREADY_ENABLED: &'static str = "This trading route is enabled";
    pub const ROUTE_ALREADY_DISABLED: &'static str = "This trading route is disabled";
    pub const ROUTE_DISABLED: &'static str = "This trading route is disabled";

    // Fees
    pub const FEE_TOO_HIGH: &'static str = "fee: no more than 1%";

    // Split validation
    pub const EMPTY_ROUTES: &'static str = "routes can not be empty";
    pub const LENGTH_MISMATCH: &'static str = "routes and srcAmounts lengths mismatch";
    pub const AMOUNT_IN_MISMATCH: &'static str = "source amount mismatch";

    // Trade
    pub const INSUFFICIENT_OUTPUT: &'static str = "destination amount too low";
    pub const INVALID_AMOUNT: &'static str = "Router: amount must be positive";
    pub const ROUTE_FAILED: &'static str = "Router: trading route failed";
    pub const SAME_ASSET: &'static str = "destination token can not be source token";
    pub const UNSUPPORTED_TOKEN: &'static str = "tokens're not supported!";

    // Search
    pub const NOT_ENOUGH_CANDIDATES: &'static str = "Router: at least two routes are required";
    pub const INVALID_BUCKET_COUNT: &'static str = "Router: bucket count must be 1 to 100";
    pub const SEARCH_TOO_LARGE: &'static str = "Router: routes x buckets exceeds the search cap";
    pub const NO_VIABLE_ROUTE: &'static str = "Router: no route could fill the trade";
}
