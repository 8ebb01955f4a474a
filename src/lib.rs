use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::debug;

pub mod comments;
pub mod error;
pub mod parser;
pub mod toggle;

pub use crate::comments::CommentSpec;
pub use crate::error::{Marker, ToggleError};
pub use crate::parser::{Line, Mode, ParsedDocument, parse};

use crate::toggle::{
    comment_out_multi_line, comment_out_single_line, uncomment_multi_line, uncomment_single_line,
};

/// Configuration passed from the CLI layer (main.rs) into the core logic.
#[derive(Debug)]
pub struct Config {
    pub prefix: String,
    pub suffix: Option<String>,
}

impl Config {
    pub fn comment_spec(&self) -> Result<CommentSpec, ToggleError> {
        CommentSpec::new(
            self.prefix.as_bytes(),
            self.suffix.as_ref().map(|s| s.as_bytes().to_vec()),
        )
    }
}

/// Comment out or uncomment `src`, whichever its current content calls for.
pub fn toggle(src: &[u8], spec: &CommentSpec) -> Result<Vec<u8>, ToggleError> {
    let doc = parse(src, spec);

    debug!(
        mode = ?doc.mode(),
        block = spec.is_block_style(),
        indent = doc.common_indent(),
        lines = doc.lines().len(),
        "parsed input"
    );

    match (doc.mode(), spec.is_block_style()) {
        (Mode::CommentOut, false) => Ok(comment_out_single_line(&doc, spec)),
        (Mode::CommentOut, true) => Ok(comment_out_multi_line(&doc, spec)),
        (Mode::Uncomment, false) => uncomment_single_line(&doc, spec),
        (Mode::Uncomment, true) => uncomment_multi_line(&doc, spec),
    }
}

/// Read all of `input`, toggle it, and write the result to `output` in one go.
pub fn run_with_config<R: Read, W: Write>(cfg: Config, mut input: R, mut output: W) -> Result<()> {
    let spec = cfg.comment_spec()?;

    let mut src = Vec::new();
    input
        .read_to_end(&mut src)
        .context("Failed to read input")?;

    let out = toggle(&src, &spec).context("Failed to toggle comments")?;

    output.write_all(&out).context("Failed to write output")?;
    output.flush().context("Failed to write output")?;

    Ok(())
}
