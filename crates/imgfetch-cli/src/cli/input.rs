//! Reading URLs and answers from the terminal.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Words that end interactive mode (case-insensitive).
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Split one input line into URLs: comma-separated if it contains a comma,
/// otherwise the whole (trimmed) line. Empty entries are dropped.
pub fn parse_url_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read URLs until a blank line or EOF.
pub fn read_url_list<R: BufRead>(input: &mut R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    while let Some(line) = read_line(input)? {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        urls.extend(parse_url_line(line));
    }
    Ok(urls)
}

/// Print `prompt` and read one line; `None` on EOF.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    read_line(input)
}

pub fn is_quit(answer: &str) -> bool {
    QUIT_WORDS
        .iter()
        .any(|w| answer.trim().eq_ignore_ascii_case(w))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("read from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
