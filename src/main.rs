use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use icongen::{Color, IconGenerator, TextStats};

#[derive(Parser)]
#[command(name = "icongen")]
#[command(about = "Generate square PNG icons with a centered mark")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Icon sizes in pixels, one file per size
    #[arg(value_name = "SIZE", default_values_t = [128u32],
          value_parser = clap::value_parser!(u32).range(1..))]
    sizes: Vec<u32>,

    /// Directory to write icons into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Background color (#rrggbb)
    #[arg(long, value_name = "HEX", default_value_t = Color::BACKGROUND)]
    background: Color,

    /// Foreground color (#rrggbb)
    #[arg(long, value_name = "HEX", default_value_t = Color::FOREGROUND)]
    foreground: Color,

    /// Save every intermediate canvas to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Count characters, lines and words
    Count {
        /// Text to count (read from stdin when omitted)
        text: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Some(Command::Count { text }) = args.command {
        let text = match text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        println!("{}", TextStats::from_text(&text));
        return Ok(());
    }

    let mut generator = IconGenerator::new()
        .with_output_dir(args.out_dir)
        .with_background(args.background)
        .with_foreground(args.foreground)
        .with_verbose(args.verbose);

    if let Some(debug_dir) = args.debug_out {
        generator = generator.with_debug(debug_dir)?;
    }

    for path in generator.generate_all(&args.sizes)? {
        println!("{}", path.display());
    }

    Ok(())
}
