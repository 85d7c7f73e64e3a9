//! Router type definitions

use soroban_sdk::{contracttype, Address, String, Vec};

// ============================================================
// ROUTER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouterConfig {
    /// Owner of the registry and fee schedule
    pub owner: Address,
    /// Token contract standing in for `Asset::Native`
    pub native: Address,
}

// ============================================================
// REGISTRY
// ============================================================

/// Registered trading route
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteEntry {
    /// Descriptive name, not unique
    pub name: String,
    /// Route contract
    pub route: Address,
    /// Disabled routes can not be quoted or traded
    pub enabled: bool,
}

// ============================================================
// FEE SCHEDULE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partner {
    /// Receives the platform fee
    pub payout: Address,
    /// Fee on gross output in basis points, at most 100
    pub fee_bps: u32,
    pub label: String,
}

/// Holders of `eligible_balance` of `token` trade without the platform fee
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoyaltyConfig {
    pub token: Option<Address>,
    pub eligible_balance: i128,
}

// ============================================================
// RESULTS
// ============================================================

/// Output split into platform fee and trader share
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Total output of the routes
    pub gross: i128,
    pub fee: i128,
    /// gross - fee
    pub net: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BestRoute {
    pub route_index: u32,
    /// Net of the partner 0 fee
    pub amount_out: i128,
}

/// Best two-way split of a trade
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitPlan {
    pub route_indices: Vec<u32>,
    /// Whole percentages, sum to 100
    pub volume_shares: Vec<u32>,
    /// Net of the partner 0 fee
    pub amount_out: i128,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Router config
    Config,
    /// Initialization flag
    Initialized,
    /// Number of registered routes
    RouteCount,
    /// Route entry by index
    Route(u32),
    /// Partner by index
    Partner(u32),
    /// Loyalty token and threshold
    Loyalty,
}
