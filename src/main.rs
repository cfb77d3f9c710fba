use std::fs;
use std::path::PathBuf;

use clap::Parser;

use rst2md::Config;

#[derive(Parser)]
#[command(name = "rst2md")]
#[command(about = "Convert rst chapters to Markdown")]
struct Cli {
    /// Input rst file
    input: PathBuf,

    /// Output Markdown file (defaults to input name with .md extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let rst = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };

    // Convert rst to Markdown
    let markdown = match rst2md::rst_to_markdown_with_config(&rst, &config) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Determine output path
    let output = cli.output.unwrap_or_else(|| cli.input.with_extension("md"));

    // Write Markdown
    if let Err(e) = fs::write(&output, markdown) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
