//! Project Gateway - HTTP REST API for workspace projects.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::Workspace;
use gateway_lib::config::GatewayConfig;
use gateway_lib::session::SessionTokens;

#[derive(Parser)]
#[command(name = "project-gateway")]
#[command(about = "Workspace project management API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides GATEWAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GATEWAY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a session token for local development
    Token {
        #[arg(long, env = "TOKEN_USER")]
        user: String,
        #[arg(long, default_value = "1")]
        workspace_id: i64,
        #[arg(long, default_value = "default")]
        workspace_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            gateway_lib::run_server(config).await?;
        }
        Commands::Token {
            user,
            workspace_id,
            workspace_name,
        } => {
            config.validate()?;
            let token = SessionTokens::new(&config.jwt)
                .issue(&user, &Workspace::new(workspace_id, workspace_name))?;
            println!("{}", token);
        }
    }

    Ok(())
}
