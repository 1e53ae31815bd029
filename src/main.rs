use anyhow::Result;
use clap::Parser;

use talk_cli::cli::commands::{ask, chat, configure, health};
use talk_cli::cli::{Args, Command};
use talk_cli::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Some(Command::Ask { message }) => {
            let code = ask::run_ask(&args.service, message).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        Some(Command::Health) => {
            health::run_health(&args.service).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat) | None => {
            chat::run_chat(&args.service).await?;
        }
    }

    Ok(())
}
