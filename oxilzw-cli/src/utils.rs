//! Utility functions for the CLI.

use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Deref;
use std::path::Path;

/// Read-only view over an input file.
pub enum InputView {
    /// Memory-mapped file contents.
    Mapped(Mmap),
    /// Zero-length file (nothing to map).
    Empty,
}

impl Deref for InputView {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputView::Mapped(mmap) => mmap,
            InputView::Empty => &[],
        }
    }
}

/// Memory-map `path` read-only.
pub fn map_input(path: &Path) -> io::Result<InputView> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len == 0 {
        debug!("{} is empty", path.display());
        return Ok(InputView::Empty);
    }

    // SAFETY: The mapping is read-only; the file must not be truncated or
    // modified by another process while it is mapped.
    let mmap = unsafe { Mmap::map(&file)? };
    debug!("Mapped {} ({} bytes)", path.display(), mmap.len());
    Ok(InputView::Mapped(mmap))
}

/// Open the output sink: a file if given, standard output otherwise.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Format a ratio as a percentage, or `-` when the denominator is zero.
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 / whole as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(3, 0), "-");
    }

    #[test]
    fn test_empty_view() {
        let view = InputView::Empty;
        assert!(view.is_empty());
    }
}
