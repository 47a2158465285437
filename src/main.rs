use std::path::PathBuf;
use std::process;

use clap::Parser;

use mdcanvas::LayoutOptions;

#[derive(Parser)]
#[command(name = "mdcanvas")]
#[command(about = "Generate a JSON Canvas summary board from Markdown notes", long_about = None)]
struct Args {
    /// Vault directory to scan for Markdown notes
    vault: PathBuf,

    /// Case-sensitive substring a note's file name must contain
    #[arg(long, short = 'f', default_value = "")]
    filter: String,

    /// Output canvas file
    #[arg(long, short = 'o', default_value = "Summary.canvas")]
    output: PathBuf,

    /// Horizontal distance between note columns
    #[arg(long)]
    column_width: Option<i64>,

    /// Width of every emitted node
    #[arg(long)]
    node_width: Option<i64>,

    /// Vertical spacing between stacked nodes
    #[arg(long)]
    gap: Option<i64>,

    /// Estimated height per line of text
    #[arg(long)]
    line_height: Option<i64>,

    /// Extra height per line referencing a raster image
    #[arg(long)]
    image_height: Option<i64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut options = LayoutOptions::default();
    if let Some(v) = args.column_width {
        options.column_width = v;
    }
    if let Some(v) = args.node_width {
        options.node_width = v;
    }
    if let Some(v) = args.gap {
        options.gap = v;
    }
    if let Some(v) = args.line_height {
        options.line_height = v;
    }
    if let Some(v) = args.image_height {
        options.image_height = v;
    }

    match mdcanvas::generate_canvas_with(&args.vault, &args.filter, &args.output, &options) {
        Ok(stats) if stats.notes == 0 => {
            println!("No notes matched filter {:?}", args.filter);
        }
        Ok(stats) => {
            println!(
                "Wrote {} ({} nodes from {} notes)",
                args.output.display(),
                stats.nodes,
                stats.notes,
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
