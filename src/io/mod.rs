//! Reading samples from text and JSON input

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::core::sample::Sample;

/// Parse observations separated by whitespace and/or commas
///
/// Lines starting with `#` are ignored.
pub fn parse_sample(text: &str) -> Result<Sample> {
    let mut values = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token.parse().map_err(|_| {
                Error::Parse(format!(
                    "line {}: '{}' is not a number",
                    line_no + 1,
                    token
                ))
            })?;
            values.push(value);
        }
    }

    Ok(Sample::new(values))
}

/// Parse a JSON array of numbers
pub fn parse_json_sample(text: &str) -> Result<Sample> {
    let values: Vec<f64> = serde_json::from_str(text).map_err(Error::Json)?;
    Ok(Sample::new(values))
}

/// Read a sample from a file, or from stdin when `path` is `-`
///
/// Files with a `.json` extension are read as a JSON array, anything else
/// as delimited text.
pub fn read_sample<P: AsRef<Path>>(path: P) -> Result<Sample> {
    let path = path.as_ref();
    let mut text = String::new();

    if path == Path::new("-") {
        io::stdin().read_to_string(&mut text).map_err(Error::Io)?;
    } else {
        let with_path = |e: io::Error| {
            Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        };
        let file = File::open(path).map_err(with_path)?;
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(with_path)?;
    }

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_sample(&text),
        _ => parse_sample(&text),
    };

    parsed.map_err(|e| match e {
        Error::Parse(msg) => Error::Parse(format!("{}: {}", path.display(), msg)),
        Error::Json(e) => Error::Parse(format!("{}: {}", path.display(), e)),
        other => other,
    })
}
