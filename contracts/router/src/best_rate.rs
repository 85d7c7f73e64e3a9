//! Best-rate search
//!
//! Candidates are ranked on output net of the partner 0 fee. A
//! candidate or split point that fails to quote, or quotes nothing, is
//! skipped and never aborts the search.

use soroban_sdk::{log, vec, Env, Vec};

use narwhal_math::{bucket_share, split_amount, split_fee, MAX_SPLIT_BUCKETS, PERCENT_DENOMINATOR};
use narwhal_route::Asset;

use crate::error::RouterError;
use crate::fees::{self, DEFAULT_PARTNER};
use crate::quote::route_gross;
use crate::registry;
use crate::storage::read_config;
use crate::types::{BestRoute, SplitPlan};

/// Score of a candidate that could not be quoted
const FAILED: i128 = -1;

/// Upper bound on candidates times buckets for one split search
pub const MAX_SPLIT_POINTS: u32 = 64;

/// Gross output of a leg, or `FAILED`
///
/// A zero leg is not quoted but its route must still be registered and
/// enabled, so every plan names only routes `split_trades` accepts.
fn score(env: &Env, index: u32, src: &Asset, dst: &Asset, amount_in: i128) -> i128 {
    if amount_in == 0 {
        return match registry::enabled_route(env, index) {
            Ok(_) => 0,
            Err(err) => {
                log!(env, "route skipped", index, amount_in, err as u32);
                FAILED
            }
        };
    }
    match route_gross(env, index, src, dst, amount_in) {
        Ok(gross) => gross,
        Err(err) => {
            log!(env, "route skipped", index, amount_in, err as u32);
            FAILED
        }
    }
}

pub fn one_route(
    env: &Env,
    src: &Asset,
    dst: &Asset,
    amount_in: i128,
    candidates: &Vec<u32>,
) -> Result<BestRoute, RouterError> {
    read_config(env)?;
    if candidates.is_empty() {
        return Err(RouterError::EmptyRoutes);
    }
    if amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let mut best_index: Option<u32> = None;
    let mut best_gross = FAILED;
    for index in candidates.iter() {
        let gross = score(env, index, src, dst, amount_in);
        if gross > best_gross {
            best_gross = gross;
            best_index = Some(index);
        }
    }

    let route_index = best_index.ok_or(RouterError::NoViableRoute)?;
    let partner = fees::partner(env, DEFAULT_PARTNER)?;
    let quote = fees::apply_fee(env, best_gross, &partner, None);

    Ok(BestRoute {
        route_index,
        amount_out: quote.net,
    })
}

/// Exhaustive two-route split over `num_buckets + 1` share points
///
/// Every leg is quoted once up front, pairs then only add the
/// precomputed outputs.
pub fn split_two_routes(
    env: &Env,
    src: &Asset,
    dst: &Asset,
    amount_in: i128,
    candidates: &Vec<u32>,
    num_buckets: u32,
) -> Result<SplitPlan, RouterError> {
    read_config(env)?;
    if candidates.len() < 2 {
        return Err(RouterError::NotEnoughCandidates);
    }
    if num_buckets == 0 || num_buckets > MAX_SPLIT_BUCKETS {
        return Err(RouterError::InvalidBucketCount);
    }
    if candidates.len().saturating_mul(num_buckets) > MAX_SPLIT_POINTS {
        return Err(RouterError::SearchTooLarge);
    }
    if amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let points = num_buckets + 1;

    // first[c * points + k]: candidate c carrying the first leg at bucket k
    let mut first: Vec<i128> = Vec::new(env);
    let mut second: Vec<i128> = Vec::new(env);
    for index in candidates.iter() {
        for k in 0..points {
            let (leg_a, leg_b) = split_amount(amount_in, bucket_share(k, num_buckets));
            first.push_back(score(env, index, src, dst, leg_a));
            second.push_back(score(env, index, src, dst, leg_b));
        }
    }

    let partner = fees::partner(env, DEFAULT_PARTNER)?;

    let mut best: Option<(u32, u32, u32)> = None;
    let mut best_net = FAILED;
    for a in 0..candidates.len() {
        for b in (a + 1)..candidates.len() {
            for k in 0..points {
                let out_a = first.get(a * points + k).unwrap_or(FAILED);
                let out_b = second.get(b * points + k).unwrap_or(FAILED);
                if out_a == FAILED || out_b == FAILED {
                    continue;
                }

                let Some(gross) = out_a.checked_add(out_b) else {
                    continue;
                };
                let (_, net) = split_fee(gross, partner.fee_bps);
                if net > best_net {
                    best_net = net;
                    best = Some((a, b, k));
                }
            }
        }
    }

    let (a, b, k) = best.ok_or(RouterError::NoViableRoute)?;
    let share_a = bucket_share(k, num_buckets);
    let route_a = candidates.get(a).ok_or(RouterError::RouteNotFound)?;
    let route_b = candidates.get(b).ok_or(RouterError::RouteNotFound)?;

    Ok(SplitPlan {
        route_indices: vec![env, route_a, route_b],
        volume_shares: vec![env, share_a, PERCENT_DENOMINATOR - share_a],
        amount_out: best_net,
    })
}
