use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gridloop::{Phase, Player, PlayerConfig};

#[derive(Parser, Debug)]
#[command(name = "gridloop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the phase-event timeline for a number of loop cycles as JSON.
    Trace(TraceArgs),
    /// Print the resolved scene snapshot at a point in time as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Player config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of full cycles to trace.
    #[arg(long, default_value_t = 2)]
    cycles: u32,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Player config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clock time in seconds.
    #[arg(long)]
    at: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<PlayerConfig> {
    let Some(path) = path else {
        return Ok(PlayerConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: PlayerConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(config)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let mut player = Player::new(config)?;
    player.play()?;

    let want = args.cycles as usize * Phase::ALL.len();
    // Generously bounded stepping; a cycle is a few seconds for any sane config.
    let mut steps = 0u64;
    while player.events().len() < want {
        player.advance(0.05)?;
        steps += 1;
        if steps > 10_000_000 {
            anyhow::bail!("gave up after {steps} steps without reaching {want} phase events");
        }
    }

    let events = &player.events()[..want];
    println!("{}", serde_json::to_string_pretty(events)?);
    eprintln!("traced {} phase events over {} cycles", want, args.cycles);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let mut player = Player::new(config)?;
    player.play()?;
    player.advance(args.at)?;

    let snapshot = player.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
