use alloy::primitives::{utils::format_ether, Address, U256};

/// Failure reported by a chain collaborator (transport, contract call, signer).
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Transaction submitted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStage {
    AllowanceReset,
    Approve,
    Swap,
}

impl std::fmt::Display for TxStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStage::AllowanceReset => write!(f, "resetting allowance"),
            TxStage::Approve => write!(f, "approving tokens"),
            TxStage::Swap => write!(f, "executing swap"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("error connecting to provider or creating wallet")]
    Connection(#[source] ClientError),

    #[error("error fetching native balance")]
    BalanceFetch(#[source] ClientError),

    #[error("error fetching metadata for token {token}")]
    TokenMetadata {
        token: String,
        #[source]
        source: ClientError,
    },

    #[error("invalid swap amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("insufficient balance for token {token}")]
    InsufficientBalance { token: String },

    #[error("liquidity check failed for pair {token_a} -> {token_b}")]
    LiquidityCheck {
        token_a: Address,
        token_b: Address,
        #[source]
        source: ClientError,
    },

    #[error("no liquidity pool found for pair {token_a} -> {token_b}")]
    NoLiquidity { token_a: Address, token_b: Address },

    #[error("error fetching gas fee data")]
    FeeData(#[source] ClientError),

    #[error("error fetching getAmountsOut quote")]
    Quote(#[source] ClientError),

    #[error("error estimating gas for swap")]
    GasEstimate(#[source] ClientError),

    #[error("not enough {symbol} for gas fees, short by {} {symbol} ({shortfall} wei)", format_ether(.shortfall.to_owned()))]
    InsufficientGas { symbol: String, shortfall: U256 },

    #[error("error {stage}")]
    Transaction {
        stage: TxStage,
        #[source]
        source: ClientError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_gas_reports_exact_shortfall() {
        let err = SwapError::InsufficientGas {
            symbol: "BNB".to_string(),
            shortfall: U256::from(1_500_000_000_000_000_000u128),
        };
        let message = err.to_string();
        assert!(message.starts_with("not enough BNB for gas fees, short by 1.5"));
        assert!(message.ends_with("BNB (1500000000000000000 wei)"));
    }

    #[test]
    fn transaction_error_keeps_cause() {
        let err = SwapError::Transaction {
            stage: TxStage::Approve,
            source: "transaction reverted".into(),
        };
        assert_eq!(err.to_string(), "error approving tokens");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("transaction reverted"));
    }
}
