use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all employees
    List,
    /// Show one employee
    Get {
        /// Employee UUID
        id: String,
    },
    /// Create an employee
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long)]
        salary: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/api/v1/employee", cli.url.trim_end_matches('/'));

    match cli.command {
        Commands::List => {
            let res = client.get(&base).send().await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/{}", base, id)).send().await?;
            print_response(res).await?;
        }
        Commands::Create {
            first_name,
            last_name,
            email,
            job_title,
            salary,
        } => {
            let mut body = Map::new();
            body.insert("firstName".into(), first_name.into());
            body.insert("lastName".into(), last_name.into());
            if let Some(email) = email {
                body.insert("email".into(), email.into());
            }
            if let Some(job_title) = job_title {
                body.insert("jobTitle".into(), job_title.into());
            }
            if let Some(salary) = salary {
                body.insert("salary".into(), salary.into());
            }

            let res = client.post(&base).json(&Value::Object(body)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(failure_message(status, &body).into());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Error text for a non-2xx reply, preferring the server's `message` field.
fn failure_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    format!("employee API returned status {}: {}", status, detail)
}
