//! Splits raw markdown into a two-level section tree.
//!
//! Two line-wise passes: the first cuts the document into chunks at lines
//! that begin with exactly `# ` (content before the first such line is not
//! represented), the second cuts each chunk at lines that begin with exactly
//! `## `. Deeper markers (`###` and beyond) are ordinary body text.

use crate::model::{HeadingLevel, Section};

/// Parse document text into sections. Never fails: text without any
/// top-level heading yields an empty list.
pub fn parse(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    for chunk in top_level_chunks(text) {
        split_chunk(&chunk, &mut sections);
    }
    sections
}

/// First pass: group lines into chunks opened by `# ` lines. The marker is
/// consumed, so each chunk starts with the heading's title line.
fn top_level_chunks(text: &str) -> Vec<Vec<&str>> {
    let mut chunks: Vec<Vec<&str>> = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    for line in text.split('\n') {
        if let Some(title) = line.strip_prefix("# ") {
            if let Some(done) = current.take() {
                chunks.push(done);
            }
            current = Some(vec![title]);
        } else if let Some(chunk) = current.as_mut() {
            chunk.push(line);
        }
    }
    if let Some(done) = current.take() {
        chunks.push(done);
    }
    chunks
}

/// Second pass: split one chunk into its level-1 span and level-2 children.
///
/// An empty level-1 span (the heading line was blank and a `## ` line follows
/// immediately) produces no level-1 section; its children are appended
/// directly and the layout stacks them on the same column cursor.
fn split_chunk(chunk: &[&str], sections: &mut Vec<Section>) {
    let boundary = chunk
        .iter()
        .position(|line| line.starts_with("## "))
        .unwrap_or(chunk.len());

    let h1_text = chunk[..boundary].join("\n");
    let children = sub_sections(&chunk[boundary..]);

    if h1_text.is_empty() {
        sections.extend(children);
    } else {
        sections.push(Section {
            level: HeadingLevel::Top,
            text: h1_text,
            children,
        });
    }
}

fn sub_sections(lines: &[&str]) -> Vec<Section> {
    let mut children = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    for line in lines {
        if let Some(title) = line.strip_prefix("## ") {
            if let Some(done) = current.take() {
                children.push(sub_section(done));
            }
            current = Some(vec![title]);
        } else if let Some(sub) = current.as_mut() {
            sub.push(line);
        }
    }
    if let Some(done) = current.take() {
        children.push(sub_section(done));
    }
    children
}

fn sub_section(lines: Vec<&str>) -> Section {
    Section {
        level: HeadingLevel::Sub,
        text: lines.join("\n"),
        children: Vec::new(),
    }
}
