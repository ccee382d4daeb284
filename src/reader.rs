use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;

/// Reads integers from a newline-delimited text source, one per line.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored. A line that is not an
/// integer, a blank one included, yields an error naming its 1-based line number.
pub struct IntegerReader<R> {
    reader: R,
    line: String,
    line_no: usize,
}

impl<R: BufRead> IntegerReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
        }
    }

    pub fn recv(&mut self) -> Option<anyhow::Result<i64>> {
        self.line.clear();
        let read_bytes = match self.reader.read_line(&mut self.line) {
            Ok(b) => b,
            Err(err) => {
                return Some(
                    Err(err).with_context(|| format!("line {}: read failed", self.line_no + 1)),
                )
            }
        };
        if read_bytes == 0 {
            return None;
        }
        self.line_no += 1;
        let line_no = self.line_no;
        let text = self.line.trim();
        Some(
            text.parse::<i64>()
                .with_context(|| format!("line {line_no}: invalid integer {text:?}")),
        )
    }
}

impl<R: BufRead> Iterator for IntegerReader<R> {
    type Item = anyhow::Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

/// Loads every integer from the file at `path`.
pub fn read_integers(path: impl AsRef<Path>) -> anyhow::Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    IntegerReader::new(BufReader::new(file))
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("cannot read integers from {}", path.display()))
}
