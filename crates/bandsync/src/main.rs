use anyhow::Result;
use bandsync_common::{logger, AppConfig, UPSTREAM_URL_ENV};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "bandsync")]
#[command(about = "Bandsync - relays audio uploads to the analysis service", long_about = None)]
struct Cli {
    /// Log to the console only, skipping the log file
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay server
    Serve {
        /// Host to bind to (overrides SERVER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Analysis service URL (overrides PYTHON_SERVICE_URL)
        #[arg(long)]
        upstream_url: Option<String>,
    },
}

impl Commands {
    /// Apply flags given on the command line; anything omitted keeps the env value
    fn apply(self, config: &mut AppConfig) {
        match self {
            Commands::Serve { host, port, upstream_url } => {
                if let Some(host) = host {
                    config.server_host = host;
                }
                if let Some(port) = port {
                    config.server_port = port;
                }
                if let Some(url) = upstream_url {
                    config.upstream_url = url;
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before any CLI override is applied on top of it
    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    if let Some(command) = cli.command {
        command.apply(&mut config);
    }

    config.validate()?;
    if cli.no_log_file {
        logger::setup_console_logging(&config.log_level)?;
    } else {
        logger::setup_logging(&config.log_dir, &config.log_level)?;
    }

    tracing::info!("Bandsync relay starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Upstream ({}): {}", UPSTREAM_URL_ENV, config.upstream_url);

    println!("Server listening on http://{}", config.server_bind_address());

    bandsync_server::start_server(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_config(args: &[&str], env: AppConfig) -> AppConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut config = env;
        if let Some(command) = cli.command {
            command.apply(&mut config);
        }
        config
    }

    #[test]
    fn test_serve_keeps_env_bind_address() {
        let mut env = AppConfig::default();
        env.server_host = "127.0.0.1".to_string();
        env.server_port = 9000;

        let config = serve_config(&["bandsync", "serve"], env);
        assert_eq!(config.server_bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_serve_flags_override_env() {
        let mut env = AppConfig::default();
        env.server_port = 9000;

        let config = serve_config(
            &[
                "bandsync",
                "serve",
                "--port",
                "7070",
                "--upstream-url",
                "http://analysis:5000/analyze",
            ],
            env,
        );
        assert_eq!(config.server_port, 7070);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.upstream_url, "http://analysis:5000/analyze");
    }

    #[test]
    fn test_no_log_file_flag() {
        let cli = Cli::try_parse_from(["bandsync", "serve", "--no-log-file"]).unwrap();
        assert!(cli.no_log_file);
    }
}
