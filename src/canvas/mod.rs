//! JSON Canvas output: node descriptors, serialization, and the sink that
//! writes the finished board to disk.

pub mod layout;

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Error;
use crate::model::Document;

use layout::{LayoutOptions, layout_column};

/// A positioned, sized, labeled box on the canvas. Created once during
/// layout, emitted in traversal order, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl CanvasNode {
    /// A `text` node with a deterministic id derived from its emission
    /// ordinal, so identical inputs produce byte-identical canvases.
    pub fn text(ordinal: usize, text: String, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            id: format!("{ordinal:016x}"),
            node_type: "text".into(),
            text,
            x,
            y,
            width,
            height,
        }
    }
}

/// Lay out the given notes into columns, one per note in order. Notes are
/// expected to be already filtered and sorted by the caller.
pub fn render(documents: &[Document], options: &LayoutOptions) -> Vec<CanvasNode> {
    let mut nodes = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        layout_column(document, index as i64, options, &mut nodes);
    }
    nodes
}

#[derive(Serialize)]
struct CanvasBody<'a> {
    nodes: &'a [CanvasNode],
    edges: [&'a str; 0],
}

/// Serialize nodes as a JSON Canvas document. `edges` is always present and
/// empty; this generator never links nodes.
pub fn to_json(nodes: &[CanvasNode]) -> Result<String, Error> {
    serde_json::to_string_pretty(&CanvasBody { nodes, edges: [] })
        .map_err(|e| Error::Canvas(e.to_string()))
}

/// Receives the finished node sequence. A sink failure is terminal for the
/// invocation; individual nodes are never retried.
pub trait NodeSink {
    fn accept(&mut self, nodes: &[CanvasNode]) -> Result<(), Error>;
}

/// Sink that writes a `.canvas` JSON file, replacing any previous content.
pub struct CanvasFile {
    path: PathBuf,
}

impl CanvasFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NodeSink for CanvasFile {
    fn accept(&mut self, nodes: &[CanvasNode]) -> Result<(), Error> {
        let mut json = to_json(nodes)?;
        json.push('\n');
        std::fs::write(&self.path, json).map_err(Error::Io)
    }
}
