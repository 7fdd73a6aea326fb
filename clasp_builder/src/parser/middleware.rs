use std::env;

use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::prelude::{Describe, Parse};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
///
/// The parser is not consumed by parsing; it may be invoked any number of times.
pub struct GeneralParser<P> {
    program: String,
    about: Option<String>,
    parser: P,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<P> GeneralParser<P> {
    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        parser: P,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            parser,
            printer,
            user_interface,
        }
    }

    #[cfg(test)]
    pub(crate) fn details(&self) -> (String, Option<String>) {
        (self.program.clone(), self.about.clone())
    }
}

impl<P> std::fmt::Debug for GeneralParser<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let about = if let Some(a) = &self.about {
            format!(", {a}")
        } else {
            "".to_string()
        };

        write!(f, "GeneralParser[{p}{about}]", p = self.program)
    }
}

impl<P: Describe> GeneralParser<P> {
    fn print_help(&self, tokens: &[&str], user_interface: &(impl UserInterface + ?Sized)) {
        // The subject of the help request is a command only when it leads the tokens.
        let subject = tokens
            .first()
            .and_then(|first| self.parser.command(first).map(|command| (first, command)));

        match subject {
            Some((name, command)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Printing help for command '{name}'.");
                }

                self.printer.print_help(
                    &format!("{} {name}", self.program),
                    command.about(),
                    command,
                    user_interface,
                );
            }
            None => {
                self.printer.print_help(
                    &self.program,
                    self.about.as_deref(),
                    &self.parser,
                    user_interface,
                );
            }
        }
    }

    fn invoke<'a>(
        &self,
        tokens: &[&'a str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<P::Output, i32>
    where
        P: Parse<'a>,
    {
        if tokens.iter().any(|token| HELP_FLAGS.contains(token)) {
            self.print_help(tokens, user_interface);
            return Err(0);
        }

        match self.parser.parse(tokens) {
            Ok(output) => Ok(output),
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse failed: {error:?}.");
                }

                user_interface.print_error(error);
                user_interface
                    .print_error_context(self.printer.usage_line(&self.program, &self.parser));
                Err(1)
            }
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the tokens fail to parse, the error is displayed and this returns with `Err(1)`.
    ///
    /// If any token is a help switch (`--help` or `-?`), the help message is displayed and this returns with `Err(0)`.
    /// When the first token names a command, the help message is that of the command.
    /// Otherwise, it is the help message of the whole program.
    pub fn parse_tokens<'a>(&self, tokens: &[&'a str]) -> Result<P::Output, i32>
    where
        P: Parse<'a>,
    {
        self.invoke(tokens, &*self.user_interface)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the tokens fail to parse, the error is displayed and the program exits with error code `1` (via `std::process::exit`).
    ///
    /// If the help switch is encountered, the help message is displayed and the program exits with error code `0`.
    ///
    /// The output cannot borrow from the Cli arguments, since they are dropped before returning.
    pub fn parse<O>(&self) -> O
    where
        P: for<'a> Parse<'a, Output = O>,
    {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(output) => output,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// The help message that `--help` displays for the program.
    #[cfg(feature = "unit_test")]
    pub fn help_message(&self) -> String {
        self.printer
            .help_lines(&self.program, self.about.as_deref(), &self.parser)
            .join("\n")
    }
}
