pub mod canvas;
mod error;
pub mod markdown;
pub mod model;
pub mod vault;

pub use canvas::layout::LayoutOptions;
pub use canvas::{CanvasFile, CanvasNode, NodeSink};
pub use error::Error;
pub use vault::{DocumentProvider, Vault};

use std::path::Path;
use std::time::Instant;

/// Counts reported back to the caller after a successful run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateStats {
    /// Notes that matched the filter (empty match is a success).
    pub notes: usize,
    /// Canvas nodes emitted across all columns.
    pub nodes: usize,
}

pub fn generate_canvas(
    vault_dir: &Path,
    filter: &str,
    output: &Path,
) -> Result<GenerateStats, Error> {
    generate_canvas_with(vault_dir, filter, output, &LayoutOptions::default())
}

pub fn generate_canvas_with(
    vault_dir: &Path,
    filter: &str,
    output: &Path,
    options: &LayoutOptions,
) -> Result<GenerateStats, Error> {
    let provider = Vault::new(vault_dir);
    let mut sink = CanvasFile::new(output);
    generate(&provider, filter, &mut sink, options)
}

/// Run the full pipeline against custom collaborators: resolve documents,
/// lay them out into columns, hand the node sequence to the sink.
///
/// Re-running with the same inputs produces an identical node sequence.
pub fn generate(
    provider: &impl DocumentProvider,
    filter: &str,
    sink: &mut impl NodeSink,
    options: &LayoutOptions,
) -> Result<GenerateStats, Error> {
    let t0 = Instant::now();

    let documents = provider.documents(filter)?;
    let t_scan = t0.elapsed();

    let nodes = canvas::render(&documents, options);
    let t_layout = t0.elapsed();

    sink.accept(&nodes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: scan={:.1}ms, layout={:.1}ms, write={:.1}ms, total={:.1}ms ({} notes, {} nodes)",
        t_scan.as_secs_f64() * 1000.0,
        (t_layout - t_scan).as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        documents.len(),
        nodes.len(),
    );

    Ok(GenerateStats {
        notes: documents.len(),
        nodes: nodes.len(),
    })
}
