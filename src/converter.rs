use crate::cli::{Cli, INPUT_PATH};
use crate::file_reader::FileReader;
use crate::normalizer;
use crate::reader::TextReader;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;

pub fn convert(cli: &Cli) -> Result<()> {
    let reader = FileReader::new(INPUT_PATH);
    debug!(
        path = %reader.path().display(),
        ignored_args = cli.ignored.len(),
        "normalizing"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    normalize_into(&reader, &mut out)
}

/// Read everything from `reader`, normalize it, and write it to `out` as one line.
/// Nothing is written if the read fails.
pub fn normalize_into<R: TextReader, W: Write>(reader: &R, out: &mut W) -> Result<()> {
    let content = reader.read()?;
    let result = normalizer::process(&content);

    writeln!(out, "{}", result).context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    debug!(
        input_bytes = content.len(),
        output_bytes = result.len(),
        "wrote normalized text"
    );
    Ok(())
}
