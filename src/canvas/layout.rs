//! Layout engine: stacks one column of boxes per note, one box per section.

use crate::markdown;
use crate::model::{Document, HeadingLevel, Section};

use super::CanvasNode;

/// Layout constants. Every value can be overridden; `default()` carries the
/// stock geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Estimated height of one line of text.
    pub line_height: i64,
    /// Extra height for a line referencing a raster image.
    pub image_height: i64,
    /// Vertical spacing between stacked nodes.
    pub gap: i64,
    /// Horizontal distance between note columns.
    pub column_width: i64,
    /// Width of every emitted node.
    pub node_width: i64,
    /// Horizontal indent of section nodes relative to their title node.
    pub sub_x_offset: i64,
    /// File-name suffixes that mark a line as containing an image
    /// (case-sensitive substring match).
    pub image_extensions: Vec<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_height: 30,
            image_height: 250,
            gap: 50,
            column_width: 700,
            node_width: 500,
            sub_x_offset: 50,
            image_extensions: vec![".png".into(), ".jpg".into()],
        }
    }
}

/// Estimated rendered height of a block of text.
///
/// This is a heuristic, not a glyph measurement: every `\n`-delimited line
/// (a trailing empty line included) contributes `line_height`, and every
/// line naming a raster image adds `image_height` on top of that.
pub fn measure(text: &str, options: &LayoutOptions) -> i64 {
    let mut lines: i64 = 0;
    let mut images: i64 = 0;
    for line in text.split('\n') {
        lines += 1;
        if options
            .image_extensions
            .iter()
            .any(|ext| line.contains(ext.as_str()))
        {
            images += 1;
        }
    }
    lines * options.line_height + images * options.image_height
}

/// Embed-style reference pointing at a section of a note: `![[Base#Title]]`.
///
/// The note name loses its trailing file extension. Any `" #c"` in the
/// assembled reference becomes `" c"`: the consuming renderer treats
/// `#c`-prefixed anchor fragments specially, and this rewrite is what it
/// expects. Other `#`-prefixed fragments pass through untouched.
pub fn embed_reference(name: &str, title: &str) -> String {
    let base = match name.rsplit_once('.') {
        Some((base, _)) => base,
        None => name,
    };
    format!("![[{base}#{title}]]").replace(" #c", " c")
}

/// Vertical write position for one column. Local to the column traversal, so
/// columns never interfere with each other.
struct Cursor {
    previous_y: i64,
    previous_height: i64,
}

impl Cursor {
    fn new() -> Self {
        Self {
            previous_y: 0,
            previous_height: 0,
        }
    }

    /// Y for the next node of `height`, leaving `gap` below the previous one.
    fn advance(&mut self, gap: i64, height: i64) -> i64 {
        let y = self.previous_y + self.previous_height + gap;
        self.previous_y = y;
        self.previous_height = height;
        y
    }
}

/// Lay out one note into column `column`, appending nodes in document order:
/// each title node immediately followed by its section nodes.
///
/// A note without any top-level heading appends nothing; the column index is
/// still consumed by the caller, so the empty column keeps its x-slot.
pub(super) fn layout_column(
    document: &Document,
    column: i64,
    options: &LayoutOptions,
    nodes: &mut Vec<CanvasNode>,
) {
    let sections = markdown::parse(&document.content);
    let column_x = column * options.column_width;
    let mut cursor = Cursor::new();

    for section in &sections {
        match section.level {
            HeadingLevel::Top => {
                if !section.text.is_empty() {
                    let height = measure(&section.text, options);
                    let y = cursor.advance(options.gap, height);
                    nodes.push(CanvasNode::text(
                        nodes.len(),
                        format!("# {}", section.text),
                        column_x,
                        y,
                        options.node_width,
                        height,
                    ));
                }
                for child in &section.children {
                    push_section_node(child, document, column_x, &mut cursor, options, nodes);
                }
            }
            // Parent-less subsection: its level-1 span was empty, so it keeps
            // stacking on the same cursor without a title node above it.
            HeadingLevel::Sub => {
                push_section_node(section, document, column_x, &mut cursor, options, nodes);
            }
        }
    }
}

fn push_section_node(
    section: &Section,
    document: &Document,
    column_x: i64,
    cursor: &mut Cursor,
    options: &LayoutOptions,
    nodes: &mut Vec<CanvasNode>,
) {
    let height = measure(section.body(), options);
    let y = cursor.advance(options.gap, height);
    nodes.push(CanvasNode::text(
        nodes.len(),
        embed_reference(&document.name, section.title()),
        column_x + options.sub_x_offset,
        y,
        options.node_width,
        height,
    ));
}
