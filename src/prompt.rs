//! Line-based interactive prompts.
//!
//! A strictly sequential, one-question-at-a-time dialogue over stdin.
//! Prompts render on stderr so that stdout stays clean for consumers.
//! EOF anywhere means cancellation, surfaced as `None`; callers translate
//! that into a successful exit.

use crate::error::{Result, SprigError};
use std::io::{self, BufRead, Write};

/// Ask a free-text question. `None` on EOF.
pub fn prompt_line(message: &str) -> Result<Option<String>> {
    eprint!("{}", message);
    io::stderr()
        .flush()
        .map_err(|e| SprigError::UserError(format!("failed to flush prompt: {}", e)))?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| SprigError::UserError(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Numbered single-select with a default. `None` on EOF.
pub fn prompt_select(message: &str, options: &[String], default_index: usize) -> Result<Option<usize>> {
    for (i, option) in options.iter().enumerate() {
        let marker = if i == default_index { " (default)" } else { "" };
        eprintln!("  {}) {}{}", i + 1, option, marker);
    }

    loop {
        let Some(line) = prompt_line(&format!("{} [{}]: ", message, default_index + 1))? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default_index));
        }
        match parse_index(&line, options.len()) {
            Some(index) => return Ok(Some(index)),
            None => eprintln!("enter a number between 1 and {}", options.len()),
        }
    }
}

/// Yes/no confirmation with a default. `None` on EOF.
pub fn prompt_confirm(message: &str, default_yes: bool) -> Result<Option<bool>> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    loop {
        let Some(line) = prompt_line(&format!("{} [{}]: ", message, hint))? else {
            return Ok(None);
        };
        match line.to_ascii_lowercase().as_str() {
            "" => return Ok(Some(default_yes)),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => eprintln!("answer y or n"),
        }
    }
}

/// Comma-separated index multi-select over `count` items.
///
/// Empty input picks `default`, `all` selects everything, `none` selects
/// nothing. `None` on EOF.
pub fn prompt_multi_select(
    message: &str,
    count: usize,
    default: &[usize],
) -> Result<Option<Vec<usize>>> {
    loop {
        let Some(line) = prompt_line(&format!("{}: ", message))? else {
            return Ok(None);
        };
        match parse_multi_selection(&line, count, default) {
            Some(selection) => return Ok(Some(selection)),
            None => eprintln!(
                "enter comma-separated numbers between 1 and {}, `all`, `none`, or press enter for the default",
                count
            ),
        }
    }
}

/// Parse a 1-based index into a 0-based one, bounds-checked.
pub(crate) fn parse_index(raw: &str, count: usize) -> Option<usize> {
    let value = raw.trim().parse::<usize>().ok()?;
    if value == 0 || value > count {
        return None;
    }
    Some(value - 1)
}

pub(crate) fn parse_multi_selection(raw: &str, count: usize, default: &[usize]) -> Option<Vec<usize>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(default.to_vec());
    }
    if trimmed.eq_ignore_ascii_case("a") || trimmed.eq_ignore_ascii_case("all") {
        return Some((0..count).collect());
    }
    if trimmed.eq_ignore_ascii_case("none") {
        return Some(Vec::new());
    }

    let mut selection = Vec::new();
    for part in trimmed.split(',') {
        let index = parse_index(part, count)?;
        if !selection.contains(&index) {
            selection.push(index);
        }
    }
    Some(selection)
}
