//! CLI entry point for treedoc

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treedoc::output::{DETAILED_REPORT_FILE, SIMPLE_REPORT_FILE};
use treedoc::{Error, OutputConfig, ReportMode, WalkerConfig, generate, print_json, print_summary};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treedoc")]
#[command(about = "Write markdown reports of a project's file structure")]
#[command(version)]
struct Args {
    /// Project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Which reports to generate
    #[arg(short, long, value_enum, default_value = "simple")]
    mode: ReportMode,

    /// Destination of the simple report
    #[arg(short, long, default_value = SIMPLE_REPORT_FILE)]
    output: PathBuf,

    /// Destination of the detailed report
    #[arg(long = "detailed-output", default_value = DETAILED_REPORT_FILE)]
    detailed_output: PathBuf,

    /// Also skip directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Print the scan result as JSON to stdout
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Ask for the path and report mode on stdin
    #[arg(short, long, conflicts_with_all = ["path", "mode"])]
    interactive: bool,
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for path and mode, falling back to the current directory and the
/// simple report on blank answers.
fn prompt_for_run() -> io::Result<(PathBuf, ReportMode)> {
    println!("Project structure reader");
    println!("{}", "=".repeat(40));

    let path = prompt("Project path (blank for current directory): ")?;
    let path = if path.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(path)
    };

    println!();
    println!("Available options:");
    println!("1. Simple structure (default)");
    println!("2. Detailed structure (with sizes)");
    println!("3. Both");
    let selector = prompt("\nChoose an option (1-3): ")?;

    Ok((path, ReportMode::from_selector(&selector)))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (path, mode) = if args.interactive {
        prompt_for_run().unwrap_or_else(|e| {
            eprintln!("treedoc: cannot read input: {}", e);
            process::exit(1);
        })
    } else {
        (args.path.clone(), args.mode)
    };

    let walker_config = WalkerConfig::default().with_ignore_patterns(args.ignore.clone());
    let output_config = OutputConfig {
        simple_path: args.output.clone(),
        detailed_path: args.detailed_output.clone(),
        use_color: should_use_color(args.color),
    };

    let (summary, scan_result) = match generate(&path, mode, &walker_config, &output_config) {
        Ok(done) => done,
        Err(Error::PathNotFound(_)) => {
            eprintln!(
                "treedoc: cannot access '{}': No such file or directory",
                path.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("treedoc: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&scan_result)
    } else {
        print_summary(&summary, output_config.use_color)
    };

    if let Err(e) = result {
        eprintln!("treedoc: error writing output: {}", e);
        process::exit(1);
    }
}
