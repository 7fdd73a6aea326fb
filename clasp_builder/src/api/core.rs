use crate::parser::{ConfigError, ConsoleInterface, GeneralParser, Printer, UserInterface};
use crate::prelude::Describe;

/// The command line parser of a program.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::{CommandLineParser, Opt};
///
/// let parser = CommandLineParser::new(
///     "program",
///     Opt::<u32>::new("width").pattern("-w") | Opt::<u32>::new("height").pattern("-h"),
/// )
/// .about("Open a window.")
/// .build();
///
/// assert_eq!(parser.parse_tokens(&["-w=800", "-h=600"]), Ok((800, 600)));
/// ```
pub struct CommandLineParser<P> {
    program: String,
    about: Option<String>,
    parser: P,
}

impl<P: Describe> CommandLineParser<P> {
    /// Create a command line parser for `program` (the program name), which parses via `parser`.
    pub fn new(program: impl Into<String>, parser: P) -> Self {
        Self {
            program: program.into(),
            about: None,
            parser,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// An about message documents the command line parser in full sentence/paragraph format.
    /// We recommend allowing `clasp` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<P>, ConfigError> {
        self.parser.verify()?;

        Ok(GeneralParser::new(
            self.program,
            self.about,
            self.parser,
            Printer::terminal(),
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated field).
    pub fn build_parser(self) -> Result<GeneralParser<P>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated field).
    ///
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<P> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
