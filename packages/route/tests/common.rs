use soroban_sdk::{contract, contractimpl, testutils::Address as _, token, Address, Env};

/// Bare contract used as the "current contract" for package helpers
#[contract]
pub struct Holder;

#[contractimpl]
impl Holder {
    pub fn ping(_env: Env) -> u32 {
        1
    }
}

pub fn register_holder(env: &Env) -> Address {
    env.register(Holder, ())
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}
