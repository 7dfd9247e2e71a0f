use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Arg, Command};

use extract_section::SectionExtractor;

fn main() -> Result<()> {
    let matches = Command::new("extract_log_section")
        .version("0.1.0")
        .about("Extracts a brace-delimited section from a log stream read from stdin")
        .arg(
            Arg::new("pattern")
                .required(true)
                .help(
                    "Regex fragment naming the section: a line matching '{' followed by \
                     the pattern opens it, a line matching the pattern followed by '}' \
                     closes it",
                ),
        )
        .get_matches();

    let pattern = matches.get_one::<String>("pattern").unwrap();
    let extractor = SectionExtractor::new(pattern)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    extractor.extract(stdin.lock(), &mut writer)?;
    writer.flush()?;
    Ok(())
}
