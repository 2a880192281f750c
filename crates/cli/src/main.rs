mod input;
mod render;
mod setup;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two-player Othello in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of rows (even, 4-26); asked interactively when omitted
    #[arg(long, value_parser = setup::dimension_arg)]
    rows: Option<usize>,

    /// Number of columns (even, 4-26); asked interactively when omitted
    #[arg(long, value_parser = setup::dimension_arg)]
    cols: Option<usize>,

    /// Skip setup and use the default players and board size
    #[arg(short, long)]
    quick: bool,

    /// Mark the legal cells of the player to move
    #[arg(long)]
    hints: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Keep earlier output instead of clearing the screen each turn
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    if args.no_color {
        colored::control::set_override(false);
    }

    let settings = ui::Settings {
        rows: args.rows,
        cols: args.cols,
        quick: args.quick,
        hints: args.hints,
        clear: !args.no_clear,
    };

    let mut console = input::Console::new()?;
    ui::ui_loop(&settings, &mut console)
}

/// Logs go to stderr so they never mix with the board. Set `RUST_LOG` to
/// see them, e.g. `RUST_LOG=othello_core=debug`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
