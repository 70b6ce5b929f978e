use anyhow::Result;
use clap::Parser;
use jump_cli::{Config, ConsoleMap, Planner};
use jump_cli::table;
use jump_core::Phase;
use jump_sdk::RouteClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route server URL (falls back to ROUTE_SERVER_URL, then localhost)
    #[arg(long)]
    url: Option<String>,

    /// Start system name
    start: String,

    /// End system name
    end: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let url = args.url.unwrap_or_else(|| Config::from_env().server_url);

    let client = RouteClient::new(url);
    let mut map = ConsoleMap::new();
    let mut planner = Planner::new();
    planner.set_start(&args.start);
    planner.set_end(&args.end);

    planner.find_route(&client, &mut map).await;

    match planner.state().phase() {
        Phase::Displayed => print!("{}", table::render_table(planner.plan())),
        Phase::Failed => {
            if let Some(message) = planner.state().message() {
                println!("{}", message.text());
            }
        }
        Phase::Idle | Phase::Loading => println!("Route has no jumps"),
    }

    Ok(())
}
