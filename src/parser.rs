use crate::comments::CommentSpec;

/// Whether the document is to be commented out or uncommented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    CommentOut,
    Uncomment,
}

/// One physical line, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    content: &'a [u8],
    pad: usize,
    blank: bool,
}

impl<'a> Line<'a> {
    fn scan(content: &'a [u8]) -> Self {
        let pad = content
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        let blank = matches!(&content[pad..], [] | [b'\n']);

        Self {
            content,
            pad,
            blank,
        }
    }

    /// Full line bytes, including the trailing newline if present.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Width in bytes of the leading space/tab run.
    pub fn pad(&self) -> usize {
        self.pad
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The line after its leading whitespace.
    pub fn body(&self) -> &'a [u8] {
        &self.content[self.pad..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument<'a> {
    lines: Vec<Line<'a>>,
    common_indent: usize,
    mode: Mode,
}

impl<'a> ParsedDocument<'a> {
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    pub fn common_indent(&self) -> usize {
        self.common_indent
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Total input length in bytes.
    pub fn len(&self) -> usize {
        self.lines.iter().map(|l| l.content.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indices of the first and last non-blank lines, if there are any.
    pub fn content_span(&self) -> Option<(usize, usize)> {
        let first = self.lines.iter().position(|l| !l.blank)?;
        let last = self.lines.iter().rposition(|l| !l.blank)?;
        Some((first, last))
    }

    fn non_blank(&self) -> impl Iterator<Item = &Line<'a>> {
        self.lines.iter().filter(|l| !l.blank)
    }
}

/// Split `src` into lines and derive the common indent and toggle mode.
///
/// Lines are collected first; indent and mode are computed from the finished
/// line list, so nothing is latched while scanning.
pub fn parse<'a>(src: &'a [u8], spec: &CommentSpec) -> ParsedDocument<'a> {
    let lines = src.split_inclusive(|&b| b == b'\n').map(Line::scan).collect();

    let mut doc = ParsedDocument {
        lines,
        common_indent: 0,
        mode: Mode::Uncomment,
    };
    doc.common_indent = common_indent(&doc, spec);
    doc.mode = detect_mode(&doc, spec);
    doc
}

/// In block style a leading blank line means the text is always wrapped again,
/// so such a selection nests another `prefix ... suffix` layer on each toggle.
fn detect_mode(doc: &ParsedDocument<'_>, spec: &CommentSpec) -> Mode {
    let prefix = spec.prefix();

    let commented = if spec.is_block_style() {
        // Only the very first line decides, blank or not.
        doc.lines.first().is_none_or(|l| l.body().starts_with(prefix))
    } else {
        doc.non_blank().all(|l| l.body().starts_with(prefix))
    };

    if commented {
        Mode::Uncomment
    } else {
        Mode::CommentOut
    }
}

fn common_indent(doc: &ParsedDocument<'_>, spec: &CommentSpec) -> usize {
    if spec.is_block_style() {
        let first = doc.lines.first().map_or(0, |l| l.pad);
        // The prefix lands on the first non-blank line, so never reach past
        // its indentation.
        doc.non_blank().next().map_or(first, |l| first.min(l.pad))
    } else {
        doc.non_blank().map(|l| l.pad).min().unwrap_or(0)
    }
}
