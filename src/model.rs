#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    Top,
    Sub,
}

/// A titled span of document text bounded by heading markers.
///
/// The span is stored whole (title line plus body, markers stripped) rather
/// than pre-split: a trailing empty line is part of the span and counts
/// toward the height estimate, and splitting into separate title/body
/// strings would lose it.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub level: HeadingLevel,
    pub text: String,
    /// Level-2 subsections in document order; always empty on `Sub` sections.
    pub children: Vec<Section>,
}

impl Section {
    /// First line of the span: the heading text.
    pub fn title(&self) -> &str {
        match self.text.find('\n') {
            Some(i) => &self.text[..i],
            None => &self.text,
        }
    }

    /// Everything after the heading line, up to the next sibling or child
    /// boundary. Empty when the heading stands alone.
    pub fn body(&self) -> &str {
        match self.text.find('\n') {
            Some(i) => &self.text[i + 1..],
            None => "",
        }
    }
}

/// A named note with its full text, immutable once read.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// File name including extension; the extension is stripped when the
    /// name is embedded in a reference.
    pub name: String,
    pub content: String,
}
