use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use dynqr::cli::{Cli, Commands};
use dynqr::config::{get_config, init_config};
use dynqr::runtime::modes;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());
    let config = get_config();

    match cli.command {
        None | Some(Commands::Serve) => {
            // guard 在 main 返回时 drop，刷出剩余日志
            let _guard = match dynqr::system::init_logging(&config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    return ExitCode::FAILURE;
                }
            };

            if let Err(e) = modes::run_server(Arc::clone(&config)).await {
                tracing::error!("Server exited with error: {:#}", e);
                eprintln!("{:#}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Some(command) => match modes::run_cli(command, &config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e.format_colored());
                ExitCode::FAILURE
            }
        },
    }
}
