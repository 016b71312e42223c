use std::fmt::Display;

use console::style;

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The prefix for each message type (e.g., "ERROR")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    /// Styles the prefix for terminal display.
    fn styled_prefix() -> String;
}

// Define the message types
struct Error;
struct Warning;
struct Success;
struct Info;

// Implement the MessageType trait for each type
impl MessageType for Error {
    const PREFIX: &'static str = "ERROR";
    const TO_STDERR: bool = true;

    fn styled_prefix() -> String {
        style(Self::PREFIX).red().bold().to_string()
    }
}

impl MessageType for Warning {
    const PREFIX: &'static str = "WARNING";

    fn styled_prefix() -> String {
        style(Self::PREFIX).yellow().bold().to_string()
    }
}

impl MessageType for Success {
    const PREFIX: &'static str = "SUCCESS";

    fn styled_prefix() -> String {
        style(Self::PREFIX).green().bold().to_string()
    }
}

impl MessageType for Info {
    const PREFIX: &'static str = "INFO";

    fn styled_prefix() -> String {
        style(Self::PREFIX).cyan().to_string()
    }
}

/// # `format_message`
/// Formats a message as `<PREFIX>: <title>` with optional details below.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message (may be empty).
///
/// ## Returns
/// * String - The formatted message.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}: {title}", T::styled_prefix())
    } else {
        format!("{}: {title}\n\n{details}", T::styled_prefix())
    }
}

/// # `print_message`
/// Prints a message to the stream the message type targets.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
fn print_message<T: MessageType>(title: &str, details: &str) {
    let message = format_message::<T>(title, details);

    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
pub fn print_error(title: &str, details: &str) {
    print_message::<Error>(title, details);
}

/// # `print_warning`
/// Prints a warning message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the warning message.
/// - `details`: The details of the warning message.
pub fn print_warning(title: &str, details: &str) {
    print_message::<Warning>(title, details);
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    print_message::<Success>(title, details);
}

/// # `print_info`
/// Prints an informational message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the informational message.
/// - `details`: The details of the informational message.
pub fn print_info(title: &str, details: &str) {
    print_message::<Info>(title, details);
}

/// # `format_list`
/// Formats a list of items with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `items`: The list of items to format.
///
/// ## Returns
/// * String - A formatted string representation of the list.
pub fn format_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        let items = vec!["first", "second"];

        assert_eq!(format_list(&items), "  - first\n  - second");
    }

    #[test]
    fn test_format_message_without_details() {
        let message = format_message::<Info>("nothing to do", "");

        assert!(message.contains("INFO"));
        assert!(message.ends_with(": nothing to do"));
    }

    #[test]
    fn test_format_message_with_details() {
        let message = format_message::<Success>("done", "all steps completed");

        assert!(message.contains("SUCCESS"));
        assert!(message.contains("done"));
        assert!(message.contains("all steps completed"));
    }
}
