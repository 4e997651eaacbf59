use anyhow::Result;
use clap::{Parser, ValueEnum};
use pixel_snake::game::GameConfig;
use pixel_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "pixel_snake")]
#[command(version, about = "Terminal snake in two rule variants")]
struct Cli {
    /// Rule variant to play
    #[arg(long, default_value = "arena")]
    variant: Variant,

    /// Field width in pixels (must be a multiple of the 20px cell)
    #[arg(long, default_value = "800")]
    width: i32,

    /// Field height in pixels (must be a multiple of the 20px cell)
    #[arg(long, default_value = "600")]
    height: i32,
}

#[derive(Clone, ValueEnum)]
enum Variant {
    /// One starting segment, no walls, a self-collision ends the process
    Classic,
    /// Three starting segments, walled field, collisions respawn the game
    Arena,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.variant {
        Variant::Classic => GameConfig::classic(),
        Variant::Arena => GameConfig::arena(),
    }
    .with_field(cli.width, cli.height);
    config.validate()?;

    let mut play = PlayMode::new(config);
    play.run().await
}
