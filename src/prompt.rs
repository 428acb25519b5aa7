// src/prompt.rs

//! The overwrite confirmation prompt.

use crate::errors::{io_error_with_path, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Returns true for the accepted affirmative answers: `y` and `yes`, trimmed, any case.
///
/// # Examples
/// ```
/// use ghdir::prompt::is_affirmative;
///
/// assert!(is_affirmative(" YES\n"));
/// assert!(!is_affirmative(""));
/// assert!(!is_affirmative("yep"));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Asks whether the existing directory at `target` may be overwritten.
///
/// Writes the question to `out`, then reads exactly one line from `input`.
/// The default is "no": empty input or end of input declines.
pub fn confirm_overwrite<R: BufRead + ?Sized, W: Write + ?Sized>(
    target: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    write!(
        out,
        "Directory '{}' already exists. Do you want to overwrite it? (y/N): ",
        target.display()
    )
    .and_then(|_| out.flush())
    .map_err(|e| io_error_with_path(e, "<stdout>"))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| io_error_with_path(e, "<stdin>"))?;

    let confirmed = is_affirmative(&answer);
    log::debug!("Overwrite answer {:?} -> {}", answer.trim(), confirmed);
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let confirmed = confirm_overwrite(Path::new("out/utils"), &mut reader, &mut out).unwrap();
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_affirmative_tokens() {
        for yes in ["y", "Y", "yes", "YeS", "  y  ", "yes\r\n"] {
            assert!(is_affirmative(yes), "{yes:?}");
        }
        for no in ["", "n", "no", "yess", "y e s", "ok"] {
            assert!(!is_affirmative(no), "{no:?}");
        }
    }

    #[test]
    fn test_confirm_overwrite_prints_question() {
        let (confirmed, printed) = ask("y\n");
        assert!(confirmed);
        assert!(printed.contains("Directory 'out/utils' already exists"));
        assert!(printed.ends_with("(y/N): "));
    }

    #[test]
    fn test_confirm_overwrite_defaults_to_no() {
        assert!(!ask("\n").0);
        assert!(!ask("").0);
        assert!(!ask("n\n").0);
    }

    #[test]
    fn test_confirm_overwrite_reads_only_one_line() {
        let mut reader = Cursor::new(b"no\nyes\n".to_vec());
        let mut out = Vec::new();
        assert!(!confirm_overwrite(Path::new("x"), &mut reader, &mut out).unwrap());
        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "yes\n");
    }
}
