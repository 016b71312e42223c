//! Confirmation Prompt
//!
//! One yes/no-style question on the terminal. The prompt is scoped to a
//! single CLI invocation (created in `cli::run`, dropped on exit) so a
//! workflow may ask several questions in sequence; there is no process-wide
//! singleton to exhaust.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// The only answer treated as agreement; everything else cancels.
pub const AFFIRMATIVE: &str = "yes";

/// Default option labels offered by the workflows.
pub const YES_NO: [&str; 2] = ["yes", "no"];

/// Seam between the workflows and the terminal, mockable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    /// Asks a question and returns the raw line the user typed.
    fn ask(&mut self, message: &str, options: &[&'static str]) -> io::Result<String>;
}

/// Line-oriented prompt over arbitrary reader/writer pairs.
///
/// The generic parameters exist so tests can drive the prompt with an
/// in-memory buffer; production code uses [`ConfirmPrompt::stdio`].
pub struct ConfirmPrompt<R, W> {
    input: R,
    output: W,
}

impl ConfirmPrompt<StdinLock<'static>, Stdout> {
    /// Builds the prompt over standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        ConfirmPrompt {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt<R, W> {
    /// Builds a prompt over explicit handles.
    pub fn new(input: R, output: W) -> Self {
        ConfirmPrompt { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for ConfirmPrompt<R, W> {
    /// Writes `"<message> (<opt1>/<opt2>/...): "`, blocks for one line and
    /// returns it with only the trailing newline removed. The options are
    /// display-only; no validation or re-prompting happens here - callers
    /// compare the answer themselves.
    ///
    /// # Errors
    /// * If writing the question or reading the answer fails.
    fn ask(&mut self, message: &str, options: &[&'static str]) -> io::Result<String> {
        write!(self.output, "{message} ({}): ", options.join("/"))?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        while answer.ends_with('\n') || answer.ends_with('\r') {
            answer.pop();
        }

        Ok(answer)
    }
}

/// Whether an answer counts as agreement. Only a case-insensitive `"yes"`
/// does; an answer outside the offered set defaults to cancellation.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(AFFIRMATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask_with(input: &str, message: &str, options: &[&'static str]) -> (String, String) {
        let mut written = Vec::new();
        let answer = {
            let mut prompt = ConfirmPrompt::new(input.as_bytes(), &mut written);
            prompt.ask(message, options).unwrap()
        };

        (answer, String::from_utf8(written).unwrap())
    }

    #[test]
    fn renders_message_and_joined_options() {
        let (_, written) = ask_with("yes\n", "Proceed?", &YES_NO);

        assert_eq!(written, "Proceed? (yes/no): ");
    }

    #[test]
    fn returns_raw_answer_without_normalization() {
        let (answer, _) = ask_with("YES\n", "Proceed?", &YES_NO);

        assert_eq!(answer, "YES");
    }

    #[test]
    fn strips_carriage_return_and_newline() {
        let (answer, _) = ask_with("no\r\n", "Proceed?", &YES_NO);

        assert_eq!(answer, "no");
    }

    #[test]
    fn sequential_prompts_on_one_instance() {
        let mut written = Vec::new();
        let mut prompt = ConfirmPrompt::new("yes\nno\n".as_bytes(), &mut written);

        assert_eq!(prompt.ask("First?", &YES_NO).unwrap(), "yes");
        assert_eq!(prompt.ask("Second?", &YES_NO).unwrap(), "no");
    }

    #[test]
    fn affirmative_is_case_insensitive_and_exact() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("YeS"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes "));
    }
}
