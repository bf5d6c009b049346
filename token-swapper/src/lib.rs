use adapters::{rpc::RpcChainClient, ChainClient, SwapCall};
use alloy::{
    primitives::{Address, U256},
    transports::http::{Client, Http},
};
use amount::{compute_amount_in, min_amount_out};
use config::{SwapConfig, APPROVAL_GAS_LIMIT, NATIVE_DECIMALS};
use error::{SwapError, TxStage};
use helpers::{build_provider, deadline_from_now, display_units};
use path::{OutputToken, SwapPath};
use tracing::{debug, info};

pub mod adapters;
pub mod amount;
pub mod config;
pub mod contracts;
pub mod error;
pub mod helpers;
pub mod path;


pub struct SwapRequest {
    /// BIP-39 phrase of the swapping wallet.
    pub mnemonic: String,
    /// `"50%"` of the balance or a fixed decimal amount such as `"10.5"`.
    pub amount: String,
    pub input_token: String,
    /// Token address, or the native symbol to receive the native asset.
    pub output_token: String,
}

impl std::fmt::Debug for SwapRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapRequest")
            .field("mnemonic", &"<redacted>")
            .field("amount", &self.amount)
            .field("input_token", &self.input_token)
            .field("output_token", &self.output_token)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// `None` for the native asset.
    pub address: Option<Address>,
    pub name: String,
    pub decimals: u8,
    pub balance: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas_limit: u64,
    pub gas_price: u128,
    /// `gas_limit * gas_price` in wei.
    pub cost: U256,
}

impl GasEstimate {
    pub fn new(gas_limit: u64, gas_price: u128) -> Self {
        Self {
            gas_limit,
            gas_price,
            cost: U256::from(gas_limit) * U256::from(gas_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapResult {
    pub success: bool,
    pub transaction_link: String,
}

/// Connects with the request's wallet and runs the swap to completion.
pub async fn swap_tokens(
    config: &SwapConfig,
    request: &SwapRequest,
) -> Result<SwapResult, SwapError> {
    let (provider, signer) = build_provider(&config.rpc_url, &request.mnemonic)
        .await
        .map_err(|report| SwapError::Connection(report.into()))?;
    let client = RpcChainClient::<Http<Client>, _>::new(provider, signer);
    SwapOrchestrator::new(client, config.clone())
        .execute(request)
        .await
}

pub struct SwapOrchestrator<C: ChainClient> {
    pub client: C,
    pub config: SwapConfig,
}

impl<C: ChainClient> SwapOrchestrator<C> {
    pub fn new(client: C, config: SwapConfig) -> Self {
        Self { client, config }
    }

    /// Runs every step after connecting. The first failing step aborts the run;
    /// transactions already mined by then stay on chain.
    pub async fn execute(&self, request: &SwapRequest) -> Result<SwapResult, SwapError> {
        let client = &self.client;
        let config = &self.config;
        let symbol = config.native_symbol.as_str();
        let signer = client.signer();

        let native_balance = client
            .native_balance(signer)
            .await
            .map_err(SwapError::BalanceFetch)?;
        info!(
            balance = %display_units(native_balance, NATIVE_DECIMALS),
            "{symbol} balance"
        );

        let input_address: Address =
            request
                .input_token
                .trim()
                .parse()
                .map_err(|err| SwapError::TokenMetadata {
                    token: request.input_token.clone(),
                    source: Box::new(err),
                })?;
        let input = self.fetch_token(input_address, signer).await?;
        info!(
            token = %input.name,
            balance = %display_units(input.balance, input.decimals),
            "Input token balance"
        );

        let amount_in = compute_amount_in(&request.amount, input.balance, input.decimals)
            .map_err(|err| SwapError::InvalidAmount {
                amount: request.amount.clone(),
                reason: err.to_string(),
            })?;
        info!(
            amount = %display_units(amount_in, input.decimals),
            token = %input.name,
            "Swap amount"
        );
        if amount_in.is_zero() {
            return Err(SwapError::InsufficientBalance { token: input.name });
        }

        let output_token = OutputToken::parse(&request.output_token, symbol).map_err(|err| {
            SwapError::TokenMetadata {
                token: request.output_token.clone(),
                source: Box::new(err),
            }
        })?;
        let output = match output_token {
            OutputToken::Native => TokenInfo {
                address: None,
                name: symbol.to_string(),
                decimals: NATIVE_DECIMALS,
                balance: native_balance,
            },
            OutputToken::Token(address) => self.fetch_token(address, signer).await?,
        };

        let path = SwapPath::build(input_address, output_token, config.wrapped_native);
        debug!(path = ?path.tokens(), kind = ?path.kind(), "Swap path");

        for (token_a, token_b) in path.hops() {
            let pair = client
                .get_pair(config.factory, token_a, token_b)
                .await
                .map_err(|source| SwapError::LiquidityCheck {
                    token_a,
                    token_b,
                    source,
                })?;
            if pair == Address::ZERO {
                return Err(SwapError::NoLiquidity { token_a, token_b });
            }
            debug!(%token_a, %token_b, %pair, "Pool found");
        }

        let gas_price = client.gas_price().await.map_err(SwapError::FeeData)?;
        let approval_gas = GasEstimate::new(APPROVAL_GAS_LIMIT, gas_price);
        info!(
            cost = %display_units(approval_gas.cost, NATIVE_DECIMALS),
            "Estimated gas for approve in {symbol}"
        );

        let amounts = client
            .amounts_out(config.router, amount_in, path.tokens())
            .await
            .map_err(SwapError::Quote)?;
        let amount_out_expected = *amounts
            .last()
            .ok_or_else(|| SwapError::Quote("router returned no amounts".into()))?;
        let amount_out_min = min_amount_out(amount_out_expected);
        info!(
            expected = %display_units(amount_out_expected, output.decimals),
            minimum = %display_units(amount_out_min, output.decimals),
            token = %output.name,
            "Quoted output"
        );

        let call = SwapCall {
            kind: path.kind(),
            amount_in,
            amount_out_min,
            path: path.tokens().to_vec(),
            to: signer,
            deadline: deadline_from_now(),
        };
        let swap_gas_limit = client
            .estimate_swap_gas(config.router, &call)
            .await
            .map_err(SwapError::GasEstimate)?;
        let swap_gas = GasEstimate::new(swap_gas_limit, gas_price);
        info!(
            gas_limit = swap_gas.gas_limit,
            cost = %display_units(swap_gas.cost, NATIVE_DECIMALS),
            "Estimated gas for swap in {symbol}"
        );

        let total_gas_cost = approval_gas.cost + swap_gas.cost;
        info!(
            cost = %display_units(total_gas_cost, NATIVE_DECIMALS),
            "Total estimated gas cost in {symbol}"
        );
        if native_balance < total_gas_cost {
            return Err(SwapError::InsufficientGas {
                symbol: symbol.to_string(),
                shortfall: total_gas_cost - native_balance,
            });
        }

        let allowance = client
            .allowance(input_address, signer, config.router)
            .await
            .map_err(|source| SwapError::Transaction {
                stage: TxStage::AllowanceReset,
                source,
            })?;
        if !allowance.is_zero() {
            info!(%allowance, "Resetting allowance to 0");
            let hash = client
                .approve(input_address, config.router, U256::ZERO, APPROVAL_GAS_LIMIT)
                .await
                .map_err(|source| SwapError::Transaction {
                    stage: TxStage::AllowanceReset,
                    source,
                })?;
            info!(%hash, "Allowance reset to 0");
        }

        info!(router = %config.router, "Approving tokens for router");
        let hash = client
            .approve(input_address, config.router, amount_in, APPROVAL_GAS_LIMIT)
            .await
            .map_err(|source| SwapError::Transaction {
                stage: TxStage::Approve,
                source,
            })?;
        info!(%hash, "Tokens approved");

        info!("Executing swap");
        let call = SwapCall {
            deadline: deadline_from_now(),
            ..call
        };
        let hash = client
            .swap(config.router, &call, swap_gas.gas_limit)
            .await
            .map_err(|source| SwapError::Transaction {
                stage: TxStage::Swap,
                source,
            })?;
        info!(%hash, "Swap executed successfully");

        Ok(SwapResult {
            success: true,
            transaction_link: config.transaction_link(hash),
        })
    }

    async fn fetch_token(&self, token: Address, owner: Address) -> Result<TokenInfo, SwapError> {
        let metadata_error = |source| SwapError::TokenMetadata {
            token: token.to_string(),
            source,
        };
        let name = self.client.token_name(token).await.map_err(metadata_error)?;
        let decimals = self
            .client
            .token_decimals(token)
            .await
            .map_err(metadata_error)?;
        let balance = self
            .client
            .token_balance(token, owner)
            .await
            .map_err(metadata_error)?;
        Ok(TokenInfo {
            address: Some(token),
            name,
            decimals,
            balance,
        })
    }
}
