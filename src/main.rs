//! Pragatix command line entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::str::FromStr;

use pragatix::application::board::render::BoardRenderer;
use pragatix::application::board::{ReviewBoard, StatusFilter, seed};
use pragatix::infra::app_config::load_config;
use pragatix::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "pragatix")]
#[command(version)]
#[command(about = "Data review tracking and user registration service", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the registration HTTP service
    Serve {
        /// Port to bind, overriding the configuration file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the sample review board
    Board {
        /// Search query matched against id, data source and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: all, pending, in-progress, completed or flagged
        #[arg(long, default_value = "all")]
        status: String,

        /// Page to show (1-based, clamped to the page count)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Reviews per page
        #[arg(long, default_value_t = ReviewBoard::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Serve { port } => {
            let mut config = load_config();
            if let Some(port) = port {
                config.port = port;
            }
            let state = AppState::new(config)?;
            pragatix::http::serve(state).await
        }
        Commands::Board {
            search,
            status,
            page,
            page_size,
        } => {
            let filter = StatusFilter::from_str(&status).map_err(anyhow::Error::msg)?;
            let mut board = seed::sample_board(page_size);
            board.set_search_query(search);
            board.set_status_filter(filter);
            board.go_to_page(page);
            print!("{}", BoardRenderer::render(&board));
            Ok(())
        }
    }
}
