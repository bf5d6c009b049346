use bsc::{swap_config, AMOUNT, INPUT_TOKEN, MNEMONIC, OUTPUT_TOKEN};
use dotenvy::dotenv;
use eyre::WrapErr;
use token_swapper::{swap_tokens, SwapRequest};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let request = SwapRequest {
        mnemonic: std::env::var("MNEMONIC").unwrap_or_else(|_| MNEMONIC.to_string()),
        amount: AMOUNT.to_string(),
        input_token: INPUT_TOKEN.to_string(),
        output_token: OUTPUT_TOKEN.to_string(),
    };
    info!(?request, "Starting swap");

    let result = swap_tokens(&swap_config(), &request)
        .await
        .wrap_err("swap failed")?;

    info!(success = result.success, tx_link = %result.transaction_link, "Swap result");

    Ok(())
}
