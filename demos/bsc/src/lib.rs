use alloy::primitives::{address, Address};
use token_swapper::config::SwapConfig;

pub static PANCAKESWAP_ROUTER_ADDRESS: Address = address!("10ed43c718714eb63d5aa57b78b54704e256024e");
pub static PANCAKESWAP_FACTORY_ADDRESS: Address = address!("ca143ce32fe78f1f7019d7d551a6402fc5350c73");
pub static WBNB_ADDRESS: Address = address!("bb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c");

pub const RPC_URL: &str = "https://bsc-dataseed.binance.org/";
pub const EXPLORER_URL: &str = "https://bscscan.com";
pub const NATIVE_SYMBOL: &str = "BNB";

/// Used when neither the environment nor `.env` sets `MNEMONIC`.
pub const MNEMONIC: &str = "";
/// Percentage of the balance (`"100%"`) or a fixed amount (`"10"`).
pub const AMOUNT: &str = "50%";
pub const INPUT_TOKEN: &str = "0xe9e7cea3dedca5984780bafc599bd69add087d56";
pub const OUTPUT_TOKEN: &str = "BNB";

pub fn swap_config() -> SwapConfig {
    SwapConfig {
        rpc_url: RPC_URL.to_string(),
        router: PANCAKESWAP_ROUTER_ADDRESS,
        factory: PANCAKESWAP_FACTORY_ADDRESS,
        wrapped_native: WBNB_ADDRESS,
        native_symbol: NATIVE_SYMBOL.to_string(),
        explorer_url: EXPLORER_URL.to_string(),
    }
}
