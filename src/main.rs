//! Emotion Reflection CLI
//!
//! Usage:
//!   emotion-reflection --serve                      # HTTP API server
//!   emotion-reflection --text "your text here"      # Single analysis
//!   emotion-reflection --interactive                # Read lines from stdin
//!   emotion-reflection --text "text" --json         # JSON output

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use emotion_reflection::core::{run_server, validate_text, EmotionScorer, EmotionSelector, ServerConfig};
use emotion_reflection::error::AnalysisError;
use emotion_reflection::types::{EmotionReading, ScoreMap};
use emotion_reflection::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "emotion-reflection",
    version = VERSION,
    about = "Emotion Reflection - guess the emotion behind a piece of text",
    long_about = "Emotion Reflection scores text against a fixed keyword lexicon of\n\
                  eight emotions, adds a little random smoothing, and reports the\n\
                  dominant emotion with a confidence value.\n\n\
                  Modes:\n  \
                  --serve        HTTP API server mode\n  \
                  --text         Analyze a single text\n  \
                  --interactive  Analyze lines from stdin"
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: String,

    /// Allowed CORS origin (repeatable)
    #[arg(
        long = "allowed-origin",
        default_values_t = ServerConfig::default().allowed_origins
    )]
    allowed_origins: Vec<String>,

    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the full score map
    #[arg(long)]
    verbose: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref text) = args.text {
        let mut rng = make_rng(args.seed);
        if let Err(e) = analyze_and_print(text, &args, &mut rng) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    } else {
        run_interactive(&args);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Validate, score, select and print one text
fn analyze_and_print(text: &str, args: &Args, rng: &mut StdRng) -> Result<(), AnalysisError> {
    validate_text(text)?;

    let scores = EmotionScorer::new().score_with(text, rng);
    let reading = EmotionSelector::new().select_with(&scores, rng);

    if args.json {
        print_json(&reading, &scores, args.verbose);
    } else if args.verbose {
        print_verbose(&reading, &scores);
    } else if args.no_color {
        println!("{}", reading.to_parseable_string());
    } else {
        println!("{}", reading.to_terminal_string());
    }
    Ok(())
}

/// Run interactive mode
fn run_interactive(args: &Args) {
    let mut rng = make_rng(args.seed);

    print_header(args.no_color);
    println!("Type text and press Enter to analyze. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut analyzed = 0usize;

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().eq_ignore_ascii_case("quit") || line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match analyze_and_print(line, args, &mut rng) {
            Ok(()) => analyzed += 1,
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    println!("\nSession ended. Texts analyzed: {}", analyzed);
}

fn print_header(no_color: bool) {
    let title = format!("Emotion Reflection v{}", VERSION);
    if no_color {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!();
}

fn print_json(reading: &EmotionReading, scores: &ScoreMap, verbose: bool) {
    #[derive(serde::Serialize)]
    struct VerboseOutput<'a> {
        #[serde(flatten)]
        reading: &'a EmotionReading,
        scores: &'a ScoreMap,
    }

    let json = if verbose {
        serde_json::to_string(&VerboseOutput { reading, scores })
    } else {
        serde_json::to_string(reading)
    };
    match json {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("failed to serialize output: {}", e),
    }
}

fn print_verbose(reading: &EmotionReading, scores: &ScoreMap) {
    println!("┌──────────────────────────────────┐");
    println!("│ {}", reading.to_terminal_string());
    println!("├──────────────────────────────────┤");
    for (emotion, score) in scores.iter() {
        let bar = "█".repeat((score * 20.0).round() as usize);
        let marker = if emotion == reading.emotion { "◀" } else { "" };
        println!(
            "│ {:<10} {:.3} {} {}",
            emotion.as_str().color(emotion.color()),
            score,
            bar.color(emotion.color()),
            marker
        );
    }
    println!("└──────────────────────────────────┘");
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    let config = ServerConfig {
        addr: args.addr.clone(),
        allowed_origins: args.allowed_origins.clone(),
        seed: args.seed,
    };

    if let Err(e) = run_server(config).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
