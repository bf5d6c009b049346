use std::time::{SystemTime, UNIX_EPOCH};

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{utils::format_units, Address, U256},
    providers::{Provider, ProviderBuilder},
    signers::local::{coins_bip39::English, MnemonicBuilder},
    transports::http::{Client, Http},
};
use eyre::WrapErr;
use tracing::info;

use crate::config::DEADLINE_SECS;

/// Derives the first account of `mnemonic` and binds it to an HTTP provider on `rpc_url`.
///
/// The node is queried once for its chain id so an unreachable endpoint fails here.
pub async fn build_provider(
    rpc_url: &str,
    mnemonic: &str,
) -> eyre::Result<(impl Provider<Http<Client>, Ethereum>, Address)> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(0)
        .wrap_err("invalid derivation index")?
        .build()
        .wrap_err("invalid mnemonic")?;
    let address = signer.address();

    let url = rpc_url
        .parse()
        .wrap_err_with(|| format!("invalid RPC url {rpc_url}"))?;
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .wrap_err_with(|| format!("node at {rpc_url} did not answer"))?;
    info!(chain_id, %address, "Connected to node");

    Ok((provider, address))
}

/// Swap deadline counted from now, in unix seconds.
pub fn deadline_from_now() -> U256 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    U256::from(now + DEADLINE_SECS)
}

/// Human-readable amount for logs; falls back to the raw integer.
pub fn display_units(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_twenty_minutes_out() {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let deadline = deadline_from_now();
        assert!(deadline >= U256::from(now + 1200));
        assert!(deadline <= U256::from(now + 1205));
    }

    #[test]
    fn display_units_scales_by_decimals() {
        assert!(display_units(U256::from(1_500_000), 6).starts_with("1.5"));
        assert!(display_units(U256::from(42), 0).starts_with("42"));
    }
}
