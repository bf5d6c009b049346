use alloy::primitives::Address;

/// Gas limit used for every `approve` call. Approvals are not estimated.
pub const APPROVAL_GAS_LIMIT: u64 = 100_000;

/// Share of the quoted output the swap must at least return (5% slippage).
pub const SLIPPAGE_KEEP_PERCENT: u64 = 95;

/// Seconds between submitting the swap and its on-chain deadline.
pub const DEADLINE_SECS: u64 = 20 * 60;

/// Decimals of the chain's native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Where to swap: node endpoint and the pre-deployed contracts of the target chain.
#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub rpc_url: String,
    pub router: Address,
    pub factory: Address,
    /// Contract token wrapping the native asset (WBNB, WETH, ...).
    pub wrapped_native: Address,
    /// Symbol that selects native output, compared case-insensitively.
    pub native_symbol: String,
    /// Block explorer base, without trailing slash.
    pub explorer_url: String,
}

impl SwapConfig {
    pub fn transaction_link(&self, hash: impl std::fmt::Display) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_link_joins_explorer_and_hash() {
        let config = SwapConfig {
            rpc_url: String::new(),
            router: Address::ZERO,
            factory: Address::ZERO,
            wrapped_native: Address::ZERO,
            native_symbol: "BNB".to_string(),
            explorer_url: "https://bscscan.com/".to_string(),
        };
        assert_eq!(
            config.transaction_link("0xabc"),
            "https://bscscan.com/tx/0xabc"
        );
    }
}
