// crates/extract_section/src/lib.rs

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a line-number annotation of the form optional whitespace, `+`,
/// digits, `:`, plus any whitespace that follows the colon (e.g. `  +42: `).
/// The pattern is a literal, so compilation cannot fail at runtime.
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\+\d+:\s*").expect("annotation pattern is a valid regex"));

/// Removes the first line-number annotation from a line.
///
/// Only the first occurrence is stripped, matching conventional
/// single-substitution semantics: `  +3: hello` becomes `hello`, while a
/// second annotation later in the same line is left alone.
pub fn strip_annotation(line: &str) -> Cow<'_, str> {
    ANNOTATION.replace(line, "")
}

/// Extracts a brace-delimited section from a stream of lines.
///
/// A section opens at a line matching `{` followed by the pattern and closes
/// at a line matching the pattern followed by `}`. Both the opening and the
/// closing line belong to the section. The pattern is used verbatim as a
/// regex fragment, so metacharacters keep their meaning; it is trusted input.
#[derive(Debug)]
pub struct SectionExtractor {
    start: Regex,
    end: Regex,
}

impl SectionExtractor {
    /// Compiles the start and end matchers from the raw pattern fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if either derived expression is not a valid regex,
    /// naming the expression that failed to compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let start_src = format!(r"\{{{}", pattern);
        let end_src = format!(r"{}\}}", pattern);
        let start = Regex::new(&start_src)
            .with_context(|| format!("invalid start matcher '{}'", start_src))?;
        let end = Regex::new(&end_src)
            .with_context(|| format!("invalid end matcher '{}'", end_src))?;
        Ok(Self { start, end })
    }

    /// Scans `reader` line by line until end of stream, writing the lines of
    /// every matched section to `writer` in input order.
    ///
    /// Per line, in order: a start match turns the scan on, a turned-on scan
    /// emits the line with its first line-number annotation removed, and an
    /// end match turns the scan off. The ordering means the line that opens a
    /// section and the line that closes it are both emitted, including when
    /// they are the same line. Reaching end of stream with a section still
    /// open is not an error; the open section is emitted through the last
    /// line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a line fails (including input that is not
    /// valid UTF-8) or if writing an emitted line fails.
    pub fn extract<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        let mut inside = false;
        for line in reader.lines() {
            let line = line.context("error reading input line")?;
            if self.start.is_match(&line) {
                inside = true;
            }
            if inside {
                writeln!(writer, "{}", strip_annotation(&line))
                    .context("error writing output line")?;
            }
            if self.end.is_match(&line) {
                inside = false;
            }
        }
        Ok(())
    }
}
