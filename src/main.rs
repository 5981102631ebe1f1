use std::fs;
use std::path::PathBuf;

use clap::Parser;
use mdhtml::Config;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file.
    input: PathBuf,

    /// Output HTML file (defaults to input name with the configured extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file.
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Print the document title instead of writing HTML.
    #[arg(long, conflicts_with = "blocks")]
    title: bool,

    /// Print each block's type and first line instead of writing HTML.
    #[arg(long)]
    blocks: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    if cli.title {
        match mdhtml::extract_title(&markdown) {
            Ok(title) => println!("{title}"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.blocks {
        for (block_type, block) in mdhtml::parse_blocks(&markdown) {
            let first_line = block.lines().next().unwrap_or_default();
            println!("{block_type}\t{first_line}");
        }
        return;
    }

    let config = Config::load(&cli.config);
    log::debug!("Using config {:?}", config);

    // Convert markdown to HTML
    let html = match mdhtml::markdown_to_html(&markdown) {
        Ok(html) => config.finish_output(html),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(&config.output.extension));

    // Write HTML
    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
