//! Yes/no prompt
//!
//! One question, one line of input, one answer. Only `y` (any case, surrounding
//! whitespace ignored) counts as yes; there is no retry.

use std::io::{self, BufRead, Write};

/// Question asked when the caller has none
pub const DEFAULT_QUESTION: &str = "Are you sure?";

/// The only answer accepted as yes
pub const POSITIVE_ANSWER: &str = "y";

/// Shown in upper case as the default
pub const NEGATIVE_ANSWER: &str = "N";

/// Check a raw answer line
pub fn is_positive(answer: &str) -> bool {
    answer.trim().to_lowercase() == POSITIVE_ANSWER
}

/// Ask `question` on `output` and read one answer line from `input`.
///
/// End of input is treated as an empty answer.
pub fn ask_yes_no<R, W>(question: &str, mut input: R, mut output: W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{} [{}/{}] ", question, POSITIVE_ANSWER, NEGATIVE_ANSWER)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let positive = is_positive(&answer);
    tracing::debug!(answer = answer.trim_end(), positive, "prompt answered");
    Ok(positive)
}

/// Ask `question` on the terminal
pub fn prompt_user_yes_no(question: &str) -> io::Result<bool> {
    ask_yes_no(question, io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn answer(input: &str) -> bool {
        ask_yes_no(DEFAULT_QUESTION, Cursor::new(input), io::sink()).unwrap()
    }

    #[test]
    fn test_question_format() {
        let mut out = Vec::new();
        ask_yes_no(DEFAULT_QUESTION, Cursor::new("n\n"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Are you sure? [y/N] \n");
    }

    #[test]
    fn test_custom_question() {
        let mut out = Vec::new();
        ask_yes_no("Delete everything?", Cursor::new("y\n"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Delete everything? [y/N] \n");
    }

    #[test]
    fn test_positive_answers() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("Y \n"));
        assert!(answer("  y\r\n"));
        assert!(answer("y"));
    }

    #[test]
    fn test_negative_answers() {
        assert!(!answer("n\n"));
        assert!(!answer("N\n"));
        assert!(!answer("\n"));
        assert!(!answer("yes\n"));
        assert!(!answer("yy\n"));
        assert!(!answer("garbage\n"));
    }

    #[test]
    fn test_end_of_input_is_no() {
        assert!(!answer(""));
    }

    #[test]
    fn test_reads_a_single_line() {
        let mut input = Cursor::new("n\ny\n");
        assert!(!ask_yes_no(DEFAULT_QUESTION, &mut input, io::sink()).unwrap());

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "y\n");
    }
}
