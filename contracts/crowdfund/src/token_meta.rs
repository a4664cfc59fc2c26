//! Token metadata lookup.
//!
//! `get_token_symbol` short-circuits the two assets a campaign realistically
//! collects on mainnet so clients get a stable label without a cross-contract
//! call; anything else is asked for its own `symbol()`.

use soroban_sdk::{token, Address, Env, String};

/// Mainnet Stellar Asset Contract for native XLM.
pub(crate) const XLM_CONTRACT: &str = "CAS3J7GYLGXMF6TDJBBYYSE3HQ6BBSMLNUQ34T6TZMYMW2EVH34XOWMA";

/// Mainnet Stellar Asset Contract for Circle USDC.
pub(crate) const USDC_CONTRACT: &str = "CCW67TSZV3SSS2HXMBQ5JFGCKJNXKZM7UQUWUZPUTHXSTZLEO7SJMI75";

/// Return a short display symbol for `token`.
///
/// The well-known assets are matched by strkey so the lookup never invokes
/// them; unknown tokens are queried through the token interface.
pub fn token_symbol(env: &Env, token: &Address) -> String {
    let strkey = token.to_string();
    if strkey == String::from_str(env, XLM_CONTRACT) {
        return String::from_str(env, "XLM");
    }
    if strkey == String::from_str(env, USDC_CONTRACT) {
        return String::from_str(env, "USDC");
    }
    token::Client::new(env, token).symbol()
}
