use market_gym::drqn::DrqnConfig;
use market_gym::env::{Environment, Market, RenderMode};
use market_gym::gateway::{RestClient, load_config, load_default_config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn print_help() {
    eprintln!(
        r#"Market Gym - order book environment for a Binance-compatible exchange

USAGE:
    market-gym [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
                        (default: config/market_gym.json)
    --symbol <SYMBOL>   Override market.symbol, e.g. ETH/USDT
    --seed <N>          Override market.seed
    --render <MODE>     Render mode: human or ansi (default: human)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter

EXAMPLES:
    # Observe the default market
    market-gym

    # Observe ETH/USDT with a fixed seed
    market-gym --symbol ETH/USDT --seed 42

    # Print the book as returned ansi text
    market-gym --render ansi
"#
    );
}

struct Args {
    config_path: Option<String>,
    symbol: Option<String>,
    seed: Option<u64>,
    render: RenderMode,
}

/// Returns `None` when help was requested
fn parse_args(mut iter: impl Iterator<Item = String>) -> anyhow::Result<Option<Args>> {
    let mut args = Args {
        config_path: None,
        symbol: None,
        seed: None,
        render: RenderMode::Human,
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {
                args.config_path = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--config requires a path argument"))?,
                );
            }
            "--symbol" | "-s" => {
                args.symbol = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--symbol requires a value"))?,
                );
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a value"))?;
                args.seed = Some(value.parse()?);
            }
            "--render" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--render requires a mode"))?;
                args.render = value.parse().map_err(anyhow::Error::msg)?;
            }
            other => {
                print_help();
                anyhow::bail!("unknown argument: {}", other);
            }
        }
    }

    Ok(Some(args))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "market_gym=info".into()))
        .init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        print_help();
        return Ok(());
    };

    let mut config = match &args.config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            load_config(path)?
        }
        None => load_default_config()?,
    };
    if let Some(symbol) = args.symbol {
        config.market.symbol = symbol;
    }
    if let Some(seed) = args.seed {
        config.market.seed = Some(seed);
    }
    config.validate()?;

    let exchange = RestClient::from_config(&config.exchange)?;
    tracing::info!(
        exchange = %config.exchange.id,
        url = %exchange.base_url(),
        "Connecting"
    );

    let mut market = Market::with_settings(exchange, config.market.to_settings()).await?;

    if let Some(observation) = market.state() {
        tracing::info!(
            symbol = %market.symbol(),
            shape = ?observation.shape(),
            seed = market.current_seed(),
            "Initial observation"
        );
    }

    let action = market.sample_action();
    tracing::info!(?action, "Sampled action");

    let agent_config: DrqnConfig = config.agent.to_drqn_config();
    tracing::info!(
        n_epochs = agent_config.n_epochs,
        batch_size = agent_config.batch_size,
        "DRQN training is not available; observing only"
    );

    if let Some(text) = market.render(args.render)? {
        print!("{}", text);
    }
    market.close();

    Ok(())
}
