use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use parinfer_core::{indent_mode, paren_mode, Options, ParinferResult};

/// The main CLI argument parser.
#[derive(Parser)]
#[command(name = "parinfer")]
#[command(version)]
#[command(about = "Keep parens and indentation in sync for Lisp-family source", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Shared cursor/output flags for both modes.
#[derive(Args)]
struct ModeArgs {
    /// Path to the source file, or `-` to read stdin.
    #[arg(value_name = "FILE")]
    path: PathBuf,
    /// Zero-based column of the cursor.
    #[arg(long)]
    cursor_x: Option<usize>,
    /// Zero-based line the cursor is on.
    #[arg(long)]
    cursor_line: Option<usize>,
    /// Signed horizontal change the editor just applied at the cursor.
    #[arg(long)]
    cursor_dx: Option<isize>,
    /// Print the full result (text, success, changed lines, error) as JSON.
    #[arg(long)]
    json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run Indent Mode: indentation is authoritative, trailing close-parens
    /// are corrected to match it.
    Indent(ModeArgs),
    /// Run Paren Mode: parens are authoritative, indentation is corrected
    /// to match them.
    Paren(ModeArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (args, run): (&ModeArgs, fn(&str, &Options) -> ParinferResult) = match &cli.command {
        Commands::Indent(args) => (args, indent_mode),
        Commands::Paren(args) => (args, paren_mode),
    };

    let text = read_source(&args.path)?;
    let options = Options {
        cursor_x: args.cursor_x,
        cursor_line: args.cursor_line,
        cursor_dx: args.cursor_dx,
    };

    let result = run(&text, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.text);
    }

    if !result.success {
        if let Some(err) = &result.error {
            eprintln!(
                "error: {} at line {}, column {}",
                err.message(),
                err.line_no,
                err.x
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(path: &std::path::Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
