use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "tender-cli")]
#[command(about = "Client for the tender registry", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single tender
    Get { id: String },
    /// Record a tender
    Add {
        key: String,
        /// Tender type (Service, Supply, Work, Building, ...)
        kind: String,
        size: String,
        timestamp: String,
        lots: String,
    },
    /// List every tender
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let path = match cli.command {
        Commands::Get { id } => format!("/get_tender/{}", id),
        Commands::Add {
            key,
            kind,
            size,
            timestamp,
            lots,
        } => {
            let fields = [key, kind, size, timestamp, lots];
            if let Some(bad) = fields.iter().find(|f| f.contains('-')) {
                return Err(format!("field '{}' must not contain '-'", bad).into());
            }
            format!("/add_tender/{}", fields.join("-"))
        }
        Commands::All => "/get_all_tenders".to_string(),
    };

    let res = client.get(format!("{}{}", base, path)).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: registry returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
