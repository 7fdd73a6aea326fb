use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::prelude::Describe;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the printer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Lays out help text in two columns: the option (or command) on the left, its description on the right.
///
/// The description column starts at a fixed column.
/// When a terminal width is known, descriptions are word-wrapped to fit it.
#[derive(Debug, Default, Clone)]
pub struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// Create a printer for the given terminal width (`None` disables wrapping).
    pub fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Create a printer for the width of the current terminal, if there is one.
    pub fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    fn description_width(&self) -> Option<usize> {
        let total_width = self.terminal_width?;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

        if target_total_width >= HELP_COLUMN + MINIMUM_DESCRIPTION_WIDTH {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Description fits within the target total {target_total_width}.");
            }

            Some(target_total_width - HELP_COLUMN)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Description does not fit within the target total {target_total_width}.  Selecting: {MINIMUM_DESCRIPTION_WIDTH}.");
            }

            Some(MINIMUM_DESCRIPTION_WIDTH)
        }
    }

    /// Render one help block: `left` padded to the description column, followed by the description.
    /// Each of the `notes` is placed on its own line, aligned with the description.
    pub(crate) fn entry(&self, left: &str, description: Option<&str>, notes: &[String]) -> String {
        let description_lines = match (description, self.description_width()) {
            (Some(d), Some(width)) => chunk(d, width),
            (Some(d), None) if !d.is_empty() => vec![d.to_string()],
            _ => Vec::default(),
        };
        let mut out = String::default();
        let mut continuation = Vec::default();

        if left.chars().count() < HELP_COLUMN {
            let mut description_lines = description_lines.into_iter();
            let first = description_lines.next().unwrap_or_default();
            out.push_str(format!("{left:width$}{first}", width = HELP_COLUMN).trim_end());
            continuation.extend(description_lines);
        } else {
            out.push_str(left);
            continuation.extend(description_lines);
        }

        continuation.extend(notes.iter().cloned());

        for line in continuation {
            out.push('\n');
            out.push_str(&format!("{:width$}{line}", "", width = HELP_COLUMN));
        }

        out.push('\n');
        out
    }

    pub(crate) fn usage_line(&self, program: &str, parser: &dyn Describe) -> String {
        let summary: String = parser
            .usage()
            .iter()
            .map(|fragment| format!(" {fragment}"))
            .collect();
        format!("usage: {program} [{}]{summary}", HELP_FLAGS[0])
    }

    /// The full help message for `program`, line by line.
    pub(crate) fn help_lines(
        &self,
        program: &str,
        about: Option<&str>,
        parser: &dyn Describe,
    ) -> Vec<String> {
        let mut lines = vec![self.usage_line(program, parser)];

        if let Some(about) = about {
            lines.push(String::default());

            match self.terminal_width {
                Some(tw) => lines.extend(chunk(about, std::cmp::max(tw, MINIMUM_DESCRIPTION_WIDTH))),
                None => lines.push(about.to_string()),
            }
        }

        let help = parser.help(self);

        if !help.is_empty() {
            lines.push(String::default());
            lines.extend(help.lines().map(String::from));
        }

        lines.push(String::default());
        lines.push(
            self.entry(&HELP_FLAGS.join(", "), Some(HELP_MESSAGE), &[])
                .trim_end()
                .to_string(),
        );
        lines
    }

    pub(crate) fn print_help(
        &self,
        program: &str,
        about: Option<&str>,
        parser: &dyn Describe,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.help_lines(program, about, parser) {
            user_interface.print(line);
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + increment + 1 < characters.len() {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use rstest::rstest;

    #[test]
    fn entry_padded() {
        // Setup
        let printer = Printer::default();

        // Execute
        let entry = printer.entry("-w, --width <u32>", Some("The width."), &[]);

        // Verify
        assert_eq!(
            entry,
            format!("-w, --width <u32>{:23}The width.\n", "")
        );
        assert_eq!(entry.find("The width."), Some(HELP_COLUMN));
    }

    #[test]
    fn entry_bare() {
        let printer = Printer::default();
        assert_eq!(printer.entry("--width <u32>", None, &[]), "--width <u32>\n");
        assert_eq!(printer.entry("--width <u32>", Some(""), &[]), "--width <u32>\n");
    }

    #[test]
    fn entry_notes() {
        // Setup
        let printer = Printer::default();

        // Execute
        let entry = printer.entry(
            "--fullscreen <bool>",
            None,
            &["By default: false".to_string(), "Implicitly: true".to_string()],
        );

        // Verify
        let lines: Vec<&str> = entry.lines().collect();
        assert_eq!(
            lines,
            vec![
                "--fullscreen <bool>".to_string(),
                format!("{:40}By default: false", ""),
                format!("{:40}Implicitly: true", ""),
            ]
        );
    }

    #[test]
    fn entry_overlong() {
        // Setup
        let printer = Printer::default();
        let left = "--some-exceedingly-long-pattern, --another <String>";

        // Execute
        let entry = printer.entry(left, Some("Description."), &[]);

        // Verify
        assert_eq!(entry, format!("{left}\n{:40}Description.\n", ""));
    }

    #[test]
    fn entry_non_ascii() {
        // Setup
        let printer = Printer::default();
        let left = format!("--{} <u32>", "ö".repeat(30));

        // Execute
        let entry = printer.entry(&left, Some("Description."), &[]);

        // Verify
        assert_eq!(entry, format!("{left}  Description.\n"));
        assert_eq!(entry.chars().position(|c| c == 'D'), Some(HELP_COLUMN));
    }

    #[test]
    fn entry_wrapped() {
        // Setup
        // 80 * 0.95 = 76, leaving 36 for the description.
        let printer = Printer::new(Some(80));
        let description = "The quick brown fox jumps over the lazy dog and keeps on running.";

        // Execute
        let entry = printer.entry("--fox", Some(description), &[]);

        // Verify
        let lines: Vec<&str> = entry.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("--fox{:35}The quick brown fox jumps over the", ""));
        assert_eq!(lines[1], format!("{:40}lazy dog and keeps on running.", ""));
    }

    #[rstest]
    #[case("", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 5, vec!["abc", "def"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("a  b", 5, vec!["a b"])]
    #[case("abcdefgh", 5, vec!["abcd-", "efgh"])]
    #[case("abcdefghi", 5, vec!["abcd-", "efghi"])]
    #[case("abcdefghijk", 5, vec!["abcd-", "efgh-", "ijk"])]
    #[case("ab abcdefgh", 5, vec!["ab", "abcd-", "efgh"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn narrow_terminal() {
        let printer = Printer::new(Some(10));
        assert_eq!(printer.description_width(), Some(MINIMUM_DESCRIPTION_WIDTH));

        let printer = Printer::new(Some(100));
        assert_eq!(printer.description_width(), Some(95 - HELP_COLUMN));

        let printer = Printer::default();
        assert_eq!(printer.description_width(), None);
    }

    struct Nothing;

    impl Describe for Nothing {
        fn usage(&self) -> Vec<String> {
            Vec::default()
        }

        fn help(&self, _printer: &Printer) -> String {
            String::default()
        }

        fn verify(&self) -> Result<(), crate::parser::ConfigError> {
            Ok(())
        }
    }

    #[test]
    fn print_help_empty() {
        // Setup
        let printer = Printer::default();
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help("program", None, &Nothing, &interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            format!(
                "usage: program [--help]\n\n--help, -?{:30}Show this help message and exit.",
                ""
            )
        );
    }

    #[test]
    fn print_help_about() {
        // Setup
        let printer = Printer::default();
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help("program", Some("Does things."), &Nothing, &interface);

        // Verify
        let message = interface.consume_message();
        assert!(message.starts_with("usage: program [--help]\n\nDoes things.\n\n--help, -?"));
    }
}
