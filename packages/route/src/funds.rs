//! Token movement helpers for route contracts

use soroban_sdk::{token, Address, Env};

use crate::RouteError;

/// Approvals only need to outlive the current invocation
const APPROVAL_LEDGERS: u32 = 100;

/// Pull `amount` of `token` from `owner` into the current contract
///
/// The owner must have approved this contract beforehand. A short
/// allowance or balance is reported instead of trapping in the token.
pub fn pull_from(env: &Env, token: &Address, owner: &Address, amount: i128) -> Result<(), RouteError> {
    let client = token::Client::new(env, token);
    let this = env.current_contract_address();

    if client.allowance(owner, &this) < amount || client.balance(owner) < amount {
        return Err(RouteError::SourceAmountMismatch);
    }

    client.transfer_from(&this, owner, &this, &amount);
    Ok(())
}

/// Let `spender` draw `amount` of `token` from the current contract
pub fn approve_for(env: &Env, token: &Address, spender: &Address, amount: i128) {
    let expiration = env.ledger().sequence().saturating_add(APPROVAL_LEDGERS);
    token::Client::new(env, token).approve(
        &env.current_contract_address(),
        spender,
        &amount,
        &expiration,
    );
}

/// Balance of `token` held by the current contract
pub fn own_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
