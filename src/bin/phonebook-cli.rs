use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "phonebook-cli")]
#[command(about = "Command-line client for the phonebook service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every entry
    List,
    /// Show one entry
    Get { id: String },
    /// Add an entry
    Add { name: String, number: String },
    /// Delete an entry
    Delete { id: String },
    /// Show the entry count and server time
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let persons = format!("{}/api/persons", cli.url.trim_end_matches('/'));

    match cli.command {
        Commands::List => {
            let res = client.get(&persons).send().await?;
            print_json(res).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{persons}/{id}")).send().await?;
            print_json(res).await?;
        }
        Commands::Add { name, number } => {
            let res = client
                .post(&persons)
                .json(&json!({ "name": name, "number": number }))
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Delete { id } => {
            let res = client.delete(format!("{persons}/{id}")).send().await?;
            if check_status(res).await?.is_some() {
                println!("Deleted {id}");
            }
        }
        Commands::Info => {
            let res = client
                .get(format!("{}/info", cli.url.trim_end_matches('/')))
                .send()
                .await?;
            if let Some(res) = check_status(res).await? {
                println!("{}", res.text().await?.trim());
            }
        }
    }

    Ok(())
}

/// Returns the response on success; prints the error body and returns `None` otherwise.
async fn check_status(
    res: reqwest::Response,
) -> Result<Option<reqwest::Response>, Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        return Ok(Some(res));
    }

    eprintln!("Error: phonebook returned status {}", status);
    if let Ok(text) = res.text().await {
        eprintln!("Response: {}", text);
    }
    Ok(None)
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(res) = check_status(res).await? {
        let json: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    }
    Ok(())
}
