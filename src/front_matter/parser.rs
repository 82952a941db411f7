use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde_yaml::Value;

use crate::front_matter::types::FrontMatter;

lazy_static! {
    static ref ENTRY_REGEX: Regex = Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_.-]*)\s*:\s*(.*)$").unwrap();
    static ref INTEGER_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

const DELIMITER: &str = "---";

/// Split a document into its front matter and body.
///
/// The block must start on the very first line and end at the next line
/// that is exactly `---`. Without a closing delimiter the metadata is empty
/// and the whole input is the body.
pub fn parse_front_matter(content: &str) -> (FrontMatter, &str) {
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {
            let mut offset = first.len();
            let mut block = Vec::new();

            for line in lines {
                offset += line.len();
                if is_delimiter(line) {
                    let front_matter = parse_block(&block);
                    debug!("Parsed front matter with {} entries", front_matter.len());
                    return (front_matter, &content[offset..]);
                }
                block.push(line);
            }

            warn!("Front matter is missing its closing delimiter, treating it as body");
            (FrontMatter::default(), content)
        }
        _ => (FrontMatter::default(), content),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_block(lines: &[&str]) -> FrontMatter {
    let mut front_matter = FrontMatter::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match ENTRY_REGEX.captures(line) {
            Some(caps) => {
                front_matter.insert(caps[1].to_string(), parse_scalar(&caps[2]));
            }
            None => warn!("Skipping malformed front matter line: {}", line),
        }
    }

    front_matter
}

/// Interpret a raw value: `true`/`false` are booleans, all digits are an
/// integer, everything else is a string.
fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if INTEGER_REGEX.is_match(raw) {
        if let Ok(number) = raw.parse::<u64>() {
            return Value::Number(number.into());
        }
    }

    Value::String(strip_quotes(raw).to_string())
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}
