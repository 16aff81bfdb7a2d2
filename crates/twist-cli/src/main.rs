use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "twist")]
#[command(about = "twist — transition/will-change utility-class generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a .css file from a JSON options file
    Build {
        /// Input options file (JSON)
        path: String,
    },

    /// Check a JSON options file without generating output
    Check {
        /// Input options file (JSON)
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path } => cmd_build(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str) {
    let source = read_source(path);

    let css = match twist_css::render_json(&source) {
        Ok(css) => css,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Write the stylesheet next to the options file
    let stem = Path::new(path).file_stem().unwrap().to_str().unwrap();
    let dir = Path::new(path).parent().unwrap_or(Path::new("."));
    let css_path = dir.join(format!("{stem}.css"));

    if let Err(e) = std::fs::write(&css_path, &css) {
        eprintln!("Error writing {}: {e}", css_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", css_path.display());
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    if let Err(e) = twist_config::Options::from_json(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
