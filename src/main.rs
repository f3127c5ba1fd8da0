use anyhow::{Context, Result};
use tracing::info;
use vantage_core::{Mailbox, Position, STARTING_FEN};
use vantage_engine::{Engine, EngineConfig, evaluate};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // The FEN may arrive as one quoted argument or as its six fields.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let fen = if args.is_empty() {
        STARTING_FEN.to_string()
    } else {
        args.join(" ")
    };

    let board: Mailbox = fen.parse().with_context(|| format!("invalid FEN: {fen}"))?;
    let config = EngineConfig::from_env().context("reading engine configuration")?;
    let engine = Engine::new(config);

    let score = evaluate(&board);
    let key = engine.fingerprint(&board);
    info!(%fen, score, key, seeded = config.seed.is_some(), "position loaded");

    println!("fen:         {board}");
    println!("to move:     {}", board.side_to_move());
    println!("evaluation:  {score}");
    println!("fingerprint: {key:016x}");
    Ok(())
}
