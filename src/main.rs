use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mailbox_chess::console::console_top::{run_stdio_loop, ConsoleConfig, OpponentKind};
use mailbox_chess::utils::render_game_state::RenderStyle;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Human,
    Random,
}

/// Play chess at the terminal. The engine enforces piece-movement rules only:
/// check, checkmate, castling and promotion are not modelled.
#[derive(Debug, Parser)]
#[command(name = "mailbox_chess", version)]
struct Args {
    /// Start from this FEN instead of the standard opening position.
    #[arg(long)]
    fen: Option<String>,

    /// Who plays Black.
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the board with letters instead of chess glyphs.
    #[arg(long)]
    ascii: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "mailbox_chess=trace").
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig {
        initial_fen: args.fen,
        opponent: match args.opponent {
            Opponent::Human => OpponentKind::Human,
            Opponent::Random => OpponentKind::Random,
        },
        seed: args.seed,
        style: if args.ascii {
            RenderStyle::Ascii
        } else {
            RenderStyle::Unicode
        },
    };

    run_stdio_loop(config)?;
    Ok(())
}
