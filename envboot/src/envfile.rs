//! Line level editing of `KEY=VALUE` env files.
use crate::error::BootstrapError;
use regex::{Match, Regex};

/// Which branch [upsert] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line for the key existed, one was appended
    Inserted,
    /// The existing line for the key got the new value
    Replaced,
}

/// Matches a whole `KEY=...` line. `R` keeps the `\r` of CRLF endings out of the match.
fn key_line(key: &str) -> Result<Regex, BootstrapError> {
    Regex::new(&format!(r"(?mR)^{}=.*$", regex::escape(key))).map_err(Into::into)
}

/// Returns `true` if any line in `text` starts with `key=`.
pub fn contains_key(text: &str, key: &str) -> Result<bool, BootstrapError> {
    Ok(key_line(key)?.is_match(text))
}

/// Sets `key` to `value` in the given env text.
///
/// The first `key=` line is rewritten in place and any later ones are dropped, so the
/// result always holds exactly one line for the key. When there is none, `key=value` is
/// appended on its own line. Every other line is left as is.
pub fn upsert(text: &str, key: &str, value: &str) -> Result<(String, Outcome), BootstrapError> {
    let pattern = key_line(key)?;
    let line = format!("{key}={value}");

    let mut matches = pattern.find_iter(text);

    let Some(first) = matches.next() else {
        let mut out = String::with_capacity(text.len() + line.len() + 2);
        out.push_str(text);
        if !text.is_empty() && !text.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
        return Ok((out, Outcome::Inserted));
    };

    let mut out = String::with_capacity(text.len() + line.len());
    out.push_str(&text[..first.start()]);
    out.push_str(&line);

    let mut cursor = first.end();
    for duplicate in matches {
        out.push_str(&text[cursor..duplicate.start()]);
        cursor = past_terminator(text, &duplicate);
    }
    out.push_str(&text[cursor..]);

    Ok((out, Outcome::Replaced))
}

fn past_terminator(text: &str, m: &Match) -> usize {
    let rest = &text[m.end()..];
    if rest.starts_with("\r\n") {
        m.end() + 2
    } else if rest.starts_with('\n') {
        m.end() + 1
    } else {
        m.end()
    }
}
