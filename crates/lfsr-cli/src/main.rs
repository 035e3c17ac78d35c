//! Command-line interface for `lfsr`.

#![forbid(unsafe_code)]

use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use lfsr_core::{custom_sequence, Lfsr};
use lfsr_scramble::{scramble, unscramble, ScrambleConfig};
use num_bigint::BigUint;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Linear feedback shift register CLI.
#[derive(Parser)]
#[command(
    name = "lfsr",
    version,
    author,
    about = "Generate LFSR cycles and scramble byte positions with them"
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the terms of a native-width sequence.
    Terms {
        #[command(flatten)]
        register: RegisterArgs,
        /// Stop after this many terms.
        #[arg(long)]
        limit: Option<u64>,
        /// Print terms in hex instead of decimal.
        #[arg(long, default_value_t = false)]
        hex: bool,
    },
    /// Count the terms until the register returns to its start.
    Period {
        #[command(flatten)]
        register: RegisterArgs,
    },
    /// Print the terms of an arbitrary-width sequence (hex).
    Big {
        /// Tap mask, decimal or 0x-prefixed hex.
        #[arg(long, value_parser = parse_biguint)]
        taps: BigUint,
        /// Starting state, decimal or 0x-prefixed hex.
        #[arg(long, value_parser = parse_biguint, default_value = "1")]
        start: BigUint,
        /// Stop after this many terms.
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Permute the byte positions of the input.
    Scramble(ScrambleArgs),
    /// Undo `scramble` for the same width and start.
    Unscramble(ScrambleArgs),
    /// Scramble and restore "demonstration" with a 4-bit register.
    Demo,
}

#[derive(Args)]
struct RegisterArgs {
    /// Register width in bits (2-64).
    #[arg(long)]
    width: u32,
    /// Custom tap mask; the maximal table entry is used when omitted.
    #[arg(long, value_parser = parse_u64)]
    taps: Option<u64>,
    /// Starting state.
    #[arg(long, value_parser = parse_u64, default_value = "1")]
    start: u64,
}

#[derive(Args)]
struct ScrambleArgs {
    /// Input as UTF-8 text.
    #[arg(long, conflicts_with = "hex", required_unless_present = "hex")]
    text: Option<String>,
    /// Input as hex bytes.
    #[arg(long)]
    hex: Option<String>,
    /// Register width; defaults to the narrowest that covers the input.
    /// Run time grows with 2^width, not with the input length.
    #[arg(long)]
    width: Option<u32>,
    /// Starting state.
    #[arg(long, value_parser = parse_u64, default_value = "1")]
    start: u64,
    /// Print the output as (lossy) UTF-8 text instead of hex.
    #[arg(long, default_value_t = false)]
    raw: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    match cli.command {
        Commands::Terms {
            register,
            limit,
            hex,
        } => cmd_terms(&register, limit, hex),
        Commands::Period { register } => cmd_period(&register),
        Commands::Big { taps, start, limit } => cmd_big(&taps, &start, limit),
        Commands::Scramble(args) => cmd_permute(&args, Direction::Forward),
        Commands::Unscramble(args) => cmd_permute(&args, Direction::Inverse),
        Commands::Demo => cmd_demo(),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("set up logging")?;
    Ok(())
}

fn build_sequence(register: &RegisterArgs) -> Result<Lfsr<u64>> {
    let sequence = match register.taps {
        Some(taps) => Lfsr::with_width(register.width, taps, register.start),
        None => Lfsr::maximal(register.width, register.start),
    };
    sequence.context("configure register")
}

fn cmd_terms(register: &RegisterArgs, limit: Option<u64>, hex: bool) -> Result<()> {
    let sequence = build_sequence(register)?;
    let width = register.width.div_ceil(4) as usize;
    let mut out = BufWriter::new(io::stdout().lock());
    for term in sequence.take(limit.map_or(usize::MAX, clamp_limit)) {
        if hex {
            writeln!(out, "{term:#0w$x}", w = width + 2)?;
        } else {
            writeln!(out, "{term}")?;
        }
    }
    out.flush().context("write terms")?;
    Ok(())
}

fn cmd_period(register: &RegisterArgs) -> Result<()> {
    let sequence = build_sequence(register)?;
    if let Some(known) = sequence.remaining() {
        info!(width = register.width, "maximal taps, period known");
        println!("{known}");
        return Ok(());
    }
    let count = sequence.fold(0u64, |n, _| n + 1);
    println!("{count}");
    Ok(())
}

fn cmd_big(taps: &BigUint, start: &BigUint, limit: Option<u64>) -> Result<()> {
    let sequence = custom_sequence(taps, start).context("configure register")?;
    let digits = sequence.width().div_ceil(4) as usize;
    let mut out = BufWriter::new(io::stdout().lock());
    for term in sequence.take(limit.map_or(usize::MAX, clamp_limit)) {
        writeln!(out, "0x{term:0digits$x}")?;
    }
    out.flush().context("write terms")?;
    Ok(())
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

fn cmd_permute(args: &ScrambleArgs, direction: Direction) -> Result<()> {
    let data = match (&args.text, &args.hex) {
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode input hex")?,
        _ => bail!("exactly one of --text or --hex is required"),
    };
    let config = ScrambleConfig {
        width: args
            .width
            .unwrap_or_else(|| ScrambleConfig::fitting(data.len()).width),
        start: args.start,
    };
    info!(width = config.width, start = config.start, len = data.len(), "permuting input");
    let output = match direction {
        Direction::Forward => scramble(&data, &config),
        Direction::Inverse => unscramble(&data, &config),
    }
    .context("permute input")?;
    if args.raw {
        println!("{}", String::from_utf8_lossy(&output));
    } else {
        println!("{}", hex::encode(output));
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let config = ScrambleConfig::default();
    let plaintext = b"demonstration";
    let scrambled = scramble(plaintext, &config).context("scramble demo text")?;
    println!("{}", String::from_utf8_lossy(&scrambled));
    let restored = unscramble(&scrambled, &config).context("unscramble demo text")?;
    println!("{}", String::from_utf8_lossy(&restored));
    if restored != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn clamp_limit(limit: u64) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}

fn parse_u64(value: &str) -> Result<u64, String> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid number {value:?}: {e}"))
}

fn parse_biguint(value: &str) -> Result<BigUint, String> {
    let value = value.trim();
    let (digits, radix) = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => (digits, 16),
        None => (value, 10),
    };
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| format!("invalid number {value:?}"))
}
