// Asset identifiers shared by routes and the router

use soroban_sdk::{contracttype, Address};

/// Source or destination of a trade
///
/// `Native` stands for the chain's native currency. It is resolved to the
/// native token contract at each route or router boundary, so venue math
/// only ever sees token addresses.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Native,
    Token(Address),
}

impl Asset {
    /// Token contract backing this asset
    pub fn resolve(&self, native: &Address) -> Address {
        match self {
            Asset::Native => native.clone(),
            Asset::Token(token) => token.clone(),
        }
    }
}
