// Constants module for the Narwhal math package
//
// - Clear documentation for each constant
// - Grouped by functionality
// - Uses the type each constant is consumed as

// ============================================================
// BASIS POINT CONSTANTS
// ============================================================

/// Basis point denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Maximum partner fee in basis points (1%)
/// Enforced on every write to the fee schedule
pub const MAX_PARTNER_FEE_BPS: u32 = 100;

/// Platform fee charged by the default partner slot (0.1%)
pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 10;

/// Default venue fee for constant-product exchanges (0.3%)
pub const DEFAULT_EXCHANGE_FEE_BPS: u32 = 30;

// ============================================================
// VOLUME SPLIT CONSTANTS
// ============================================================

/// Volume shares are whole percentages
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Upper bound for the number of split buckets (1% granularity)
pub const MAX_SPLIT_BUCKETS: u32 = 100;

// ============================================================
// STABLE SWAP CONSTANTS
// ============================================================

/// Fee denominator for stable-swap pools (1e10 = 100%)
pub const STABLE_FEE_DENOMINATOR: u128 = 10_000_000_000;

/// Maximum stable-swap fee (10%)
pub const MAX_STABLE_FEE: u32 = 1_000_000_000;

/// All coin balances are normalized to 18 decimals before invariant math
pub const STABLE_PRECISION_DECIMALS: u32 = 18;

/// Maximum amplification coefficient
pub const MAX_AMP: u32 = 1_000_000;

/// Maximum coins in a single stable-swap pool
pub const MAX_STABLE_COINS: u32 = 8;

/// Newton iteration limit for D and y
/// Both converge in a handful of rounds on sane pools
pub const MAX_STABLE_ITERATIONS: u32 = 255;
