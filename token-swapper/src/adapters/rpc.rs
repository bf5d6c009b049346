use std::marker::PhantomData;

use alloy::{
    network::Ethereum,
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionBuilder, Provider},
    transports::Transport,
};
use tracing::debug;

use super::{ChainClient, SwapCall};
use crate::{
    contracts::{
        UniswapV2Factory::{self, UniswapV2FactoryInstance},
        UniswapV2Router02::{self, UniswapV2Router02Instance},
        ERC20::{self, ERC20Instance},
    },
    error::ClientError,
    path::SwapKind,
};

/// [`ChainClient`] backed by an alloy provider that signs with the swapping wallet.
pub struct RpcChainClient<T, P> {
    provider: P,
    signer: Address,
    _transport: PhantomData<T>,
}

impl<T, P> RpcChainClient<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    pub fn new(provider: P, signer: Address) -> Self {
        Self {
            provider,
            signer,
            _transport: PhantomData,
        }
    }

    fn erc20(&self, token: Address) -> ERC20Instance<T, &P, Ethereum> {
        ERC20::new(token, &self.provider)
    }

    fn factory(&self, factory: Address) -> UniswapV2FactoryInstance<T, &P, Ethereum> {
        UniswapV2Factory::new(factory, &self.provider)
    }

    fn router(&self, router: Address) -> UniswapV2Router02Instance<T, &P, Ethereum> {
        UniswapV2Router02::new(router, &self.provider)
    }
}

async fn confirm<T: Transport + Clone>(
    pending: PendingTransactionBuilder<T, Ethereum>,
) -> Result<TxHash, ClientError> {
    let hash = *pending.tx_hash();
    debug!(%hash, "Waiting for confirmation");
    let receipt = pending.get_receipt().await?;
    if !receipt.status() {
        return Err(format!("transaction {hash} reverted").into());
    }
    debug!(%hash, block = ?receipt.block_number, gas_used = ?receipt.gas_used, "Confirmed");
    Ok(receipt.transaction_hash)
}

impl<T, P> ChainClient for RpcChainClient<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    fn signer(&self) -> Address {
        self.signer
    }

    async fn native_balance(&self, owner: Address) -> Result<U256, ClientError> {
        Ok(self.provider.get_balance(owner).await?)
    }

    async fn token_name(&self, token: Address) -> Result<String, ClientError> {
        Ok(self.erc20(token).name().call().await?._0)
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, ClientError> {
        Ok(self.erc20(token).decimals().call().await?._0)
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ClientError> {
        Ok(self.erc20(token).balanceOf(owner).call().await?._0)
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ClientError> {
        Ok(self.erc20(token).allowance(owner, spender).call().await?._0)
    }

    async fn get_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, ClientError> {
        Ok(self.factory(factory).getPair(token_a, token_b).call().await?.pair)
    }

    async fn gas_price(&self) -> Result<u128, ClientError> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, ClientError> {
        let amounts = self
            .router(router)
            .getAmountsOut(amount_in, path.to_vec())
            .call()
            .await?
            .amounts;
        Ok(amounts)
    }

    async fn estimate_swap_gas(&self, router: Address, call: &SwapCall) -> Result<u64, ClientError> {
        let router = self.router(router);
        let SwapCall {
            kind,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        } = call.clone();
        let gas = match kind {
            SwapKind::TokensForNative => {
                router
                    .swapExactTokensForETH(amount_in, amount_out_min, path, to, deadline)
                    .from(self.signer)
                    .estimate_gas()
                    .await?
            }
            SwapKind::TokensForTokens => {
                router
                    .swapExactTokensForTokens(amount_in, amount_out_min, path, to, deadline)
                    .from(self.signer)
                    .estimate_gas()
                    .await?
            }
        };
        Ok(gas)
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        gas_limit: u64,
    ) -> Result<TxHash, ClientError> {
        let pending = self
            .erc20(token)
            .approve(spender, amount)
            .from(self.signer)
            .gas(gas_limit)
            .send()
            .await?;
        confirm(pending).await
    }

    async fn swap(
        &self,
        router: Address,
        call: &SwapCall,
        gas_limit: u64,
    ) -> Result<TxHash, ClientError> {
        let router = self.router(router);
        let SwapCall {
            kind,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        } = call.clone();
        let pending = match kind {
            SwapKind::TokensForNative => {
                router
                    .swapExactTokensForETH(amount_in, amount_out_min, path, to, deadline)
                    .from(self.signer)
                    .gas(gas_limit)
                    .send()
                    .await?
            }
            SwapKind::TokensForTokens => {
                router
                    .swapExactTokensForTokens(amount_in, amount_out_min, path, to, deadline)
                    .from(self.signer)
                    .gas(gas_limit)
                    .send()
                    .await?
            }
        };
        confirm(pending).await
    }
}
