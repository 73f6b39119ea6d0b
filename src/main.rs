use anyhow::Result;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use solmap_render::config::ServiceConfig;
use solmap_render::server::{create_app, AppState};
use solmap_render::{encoder, render_solmap};

// Simple CLI without clap
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Solmap Render v{}", solmap_render::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Solmap Render v{}", solmap_render::VERSION);
        println!("\nUsage:");
        println!("  {} serve [--port N] [--cluster URL]", args[0]);
        println!("  {} <SOLMAP_NUMBER> [--output PATH] [--cluster URL]", args[0]);
        println!("  {} --version", args[0]);
        println!("\nOptions:");
        println!("  --port, -p N         Port for the HTTP server (default: 8080)");
        println!("  --cluster, -c URL    Use the specified RPC URL (default: mainnet-beta)");
        println!("  --output, -o PATH    Save the PNG to the specified file path");
        println!("  --version, -v        Show version information");
        println!("\nEnvironment: SOLMAP_RPC_URL, SOLMAP_PORT (flags take precedence)");
        return Ok(());
    }

    let mut config = ServiceConfig::from_env()?;
    let mut output_path = None;

    // Parse optional arguments
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--cluster" | "-c" => {
                if i + 1 < args.len() {
                    config.rpc_url = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --cluster");
                    return Ok(());
                }
            },
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse()?;
                    i += 2;
                } else {
                    println!("Error: Missing value for --port");
                    return Ok(());
                }
            },
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --output");
                    return Ok(());
                }
            },
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    // Serve mode: run the HTTP service
    if args[1] == "serve" {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        info!("Starting server on {}", addr);
        info!("RPC endpoint: {}", config.rpc_url);

        let app = create_app(AppState { config: config.clone() });
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        return Ok(());
    }

    // Render mode: one solmap number to a PNG file
    let solmap_number: u64 = args[1].parse()?;
    println!("Rendering solmap: {}", solmap_number);

    let raster = render_solmap(&config.rpc_url, solmap_number).await?;
    let path = output_path
        .unwrap_or_else(|| PathBuf::from(format!("solmap_{}.png", solmap_number)));
    encoder::save_image(&raster, &path)?;

    println!("Saved to: {}", path.display());
    Ok(())
}
