//! Line prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{BufRead, ErrorKind, IsTerminal};

use crate::error::{Result, StarterError};

/// Convert dialoguer errors to StarterError.
///
/// In raw mode Ctrl+C arrives as a key, reported as `ErrorKind::Interrupted`.
fn map_dialoguer_err(e: dialoguer::Error) -> StarterError {
    let io: std::io::Error = e.into();
    if io.kind() == ErrorKind::Interrupted {
        StarterError::InputInterrupted
    } else {
        StarterError::Io(io)
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Read one line from `reader`, without the line terminator.
///
/// Returns `None` at end of input.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let len = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(len);
    Ok(Some(buf))
}

/// Prompt for one line of input.
///
/// Uses a dialoguer input field when both stdin and `term` are terminals,
/// and plain line reads from stdin otherwise, so piped input works.
pub fn prompt_line(prompt: &str, term: &Term) -> Result<Option<String>> {
    if term.is_term() && std::io::stdin().is_terminal() {
        let input = Input::<String>::with_theme(&prompt_theme())
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?;
        return Ok(Some(input));
    }

    term.write_str(&format!("{}: ", prompt))?;
    term.flush()?;
    let line = read_line_from(&mut std::io::stdin().lock())?;
    if line.is_none() {
        term.write_line("")?;
    }
    Ok(line)
}
