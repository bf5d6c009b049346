use alloy::primitives::{Address, TxHash, U256};

use crate::{error::ClientError, path::SwapKind};

pub mod rpc;

/// Arguments of a router swap call, shared by gas estimation and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapCall {
    pub kind: SwapKind,
    pub amount_in: U256,
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub to: Address,
    /// Unix timestamp after which the router rejects the swap.
    pub deadline: U256,
}

/// Read/write access to the chain for one signer.
///
/// Write methods return once the transaction is mined and fail if it reverted.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    fn signer(&self) -> Address;

    async fn native_balance(&self, owner: Address) -> Result<U256, ClientError>;

    async fn token_name(&self, token: Address) -> Result<String, ClientError>;

    async fn token_decimals(&self, token: Address) -> Result<u8, ClientError>;

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ClientError>;

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ClientError>;

    /// Pool for the pair, `Address::ZERO` when none exists.
    async fn get_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, ClientError>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128, ClientError>;

    async fn amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, ClientError>;

    async fn estimate_swap_gas(&self, router: Address, call: &SwapCall) -> Result<u64, ClientError>;

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        gas_limit: u64,
    ) -> Result<TxHash, ClientError>;

    async fn swap(&self, router: Address, call: &SwapCall, gas_limit: u64)
        -> Result<TxHash, ClientError>;
}
