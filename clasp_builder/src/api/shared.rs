use std::ops::BitOr;

use crate::api::{Cases, Concat, IntoCases, Listing, Selector};
use crate::model::Shared;
use crate::parser::{ConfigError, ParseError, Printer};
use crate::prelude::{Describe, Parse};

/// Options shared by every command of a selector.
///
/// Combine with commands via the `|` operator to build a [`WithShared`] parser.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::{Choice2, Command, Opt, Shared, SharedOptions};
/// use clasp::prelude::*;
///
/// let parser = SharedOptions::new(Opt::flag("verbose").pattern("-v"))
///     | Command::new("build", Opt::<String>::new("target").pattern("--target"))
///     | Command::new("clean", Opt::<String>::new("target").pattern("--target"));
///
/// let Shared { shared, command } = parser.parse(&["build", "-v", "--target=x86"]).unwrap();
/// assert!(shared);
/// assert_eq!(command, Choice2::A("x86".to_string()));
/// ```
pub struct SharedOptions<S> {
    parser: S,
}

impl<S> SharedOptions<S> {
    /// Create the shared options from a parser (typically a compound of options).
    pub fn new(parser: S) -> Self {
        Self { parser }
    }
}

impl<S, R: IntoCases> BitOr<R> for SharedOptions<S> {
    type Output = WithShared<S, R::Cases>;

    fn bitor(self, rhs: R) -> Self::Output {
        WithShared {
            shared: self.parser,
            selector: Selector::new(rhs.into_cases()),
        }
    }
}

/// A parser of shared options alongside a selection of commands.
///
/// Both are parsed against the full list of tokens, independently of one another.
/// The command must be the first token, since that is how it is selected.
/// The shared options may appear anywhere after it, interleaved with the command's own options.
/// The output is a [`Shared`].
pub struct WithShared<S, C> {
    shared: S,
    selector: Selector<C>,
}

impl<S, C, R> BitOr<R> for WithShared<S, C>
where
    R: IntoCases,
    C: Concat<R::Cases>,
{
    type Output = WithShared<S, C::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        WithShared {
            shared: self.shared,
            selector: self.selector | rhs,
        }
    }
}

impl<'a, S: Parse<'a>, C: Cases<'a>> Parse<'a> for WithShared<S, C> {
    type Output = Shared<S::Output, C::Output>;

    fn parse(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError> {
        let shared = self.shared.parse(tokens);
        let command = self.selector.parse(tokens);

        match (shared, command) {
            (Ok(shared), Ok(command)) => Ok(Shared { shared, command }),
            (shared, command) => Err(ParseError::several(
                vec![shared.err(), command.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

impl<S: Describe, C: Listing> Describe for WithShared<S, C> {
    fn usage(&self) -> Vec<String> {
        let mut usage = self.shared.usage();
        usage.extend(self.selector.usage());
        usage
    }

    fn help(&self, printer: &Printer) -> String {
        let shared = self.shared.help(printer);
        let commands = self.selector.help(printer);

        if shared.is_empty() {
            commands
        } else {
            format!("{shared}\n{commands}")
        }
    }

    fn command(&self, name: &str) -> Option<&dyn Describe> {
        self.selector.command(name)
    }

    fn fields(&self) -> Vec<&str> {
        self.shared.fields()
    }

    fn verify(&self) -> Result<(), ConfigError> {
        self.shared.verify()?;
        self.selector.verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Command, Opt};
    use crate::model::Choice2;
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    #[derive(Debug, PartialEq)]
    enum Action {
        Build { target: String },
        Clean,
    }

    fn tool() -> impl for<'a> Parse<'a, Output = Shared<(bool, Vec<String>), Choice2<Action, Action>>> + Describe {
        SharedOptions::new(
            Opt::flag("verbose").pattern("-v").help("Be loud.")
                | Opt::<Vec<String>>::new("platforms")
                    .pattern("--platforms")
                    .default_to(vec!["linux".to_string()]),
        ) | Command::new("build", Opt::<String>::new("target").pattern("--target"))
            .help("Build a target.")
            .map(|target| Action::Build { target })
            | Command::new("clean", Opt::flag("all").pattern("--all"))
                .map(|_| Action::Clean)
    }

    #[test]
    fn parse() {
        // Setup
        let parser = tool();

        // Execute
        let output = parser.parse(&["build", "--target=x86", "--platforms=windows linux xboxone"]);

        // Verify
        assert_eq!(
            output,
            Ok(Shared {
                shared: (
                    false,
                    vec!["windows".to_string(), "linux".to_string(), "xboxone".to_string()]
                ),
                command: Choice2::A(Action::Build {
                    target: "x86".to_string()
                }),
            })
        );
    }

    #[test]
    fn parse_interleaved() {
        // Setup
        let parser = tool();
        let mut rest = vec!["-v", "--target=arm"];

        for _ in 0..5 {
            rest.shuffle(&mut thread_rng());
            let mut tokens = vec!["build"];
            tokens.extend(rest.iter());

            // Execute
            let output = parser.parse(tokens.as_slice());

            // Verify
            assert_eq!(
                output,
                Ok(Shared {
                    shared: (true, vec!["linux".to_string()]),
                    command: Choice2::A(Action::Build {
                        target: "arm".to_string()
                    }),
                }),
                "{tokens:?}"
            );
        }
    }

    #[test]
    fn parse_shared_before_command() {
        // The command is selected by the first token only.
        let parser = tool();
        let error = parser.parse(&["-v", "clean"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnknownCommand {
                token: "-v".to_string()
            }
        );
    }

    #[test]
    fn parse_both_fail() {
        // Setup
        let parser = SharedOptions::new(Opt::<u32>::new("jobs").pattern("-j"))
            | Command::new("clean", Opt::flag("all").pattern("--all"));

        // Execute
        let error = parser.parse(&[]).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::Several(errors) => {
            assert_matches!(&errors[0], ParseError::Missing { field, .. } => {
                assert_eq!(field, "jobs");
            });
            assert_eq!(errors[1], ParseError::MissingCommand);
        });
    }

    #[test]
    fn describe() {
        // Setup
        let parser = tool();

        // Execute
        let help = parser.render_help();

        // Verify
        assert_eq!(
            parser.usage(),
            vec!["[-v[=<bool>]]", "[--platforms=<String ...>]", "{build|clean}", "..."]
        );
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("-v <bool>{:31}Be loud.", ""),
                format!("{:40}By default: false", ""),
                format!("{:40}Implicitly: true", ""),
                "--platforms <String ...>".to_string(),
                format!("{:40}By default: linux", ""),
                "".to_string(),
                format!("build{:35}Build a target.", ""),
                "clean".to_string(),
            ]
        );
        assert_eq!(parser.fields(), vec!["verbose", "platforms"]);
        assert_eq!(parser.command("build").and_then(|c| c.about()), Some("Build a target."));
    }

    #[test]
    fn verify() {
        // Setup
        let parser = SharedOptions::new(
            Opt::<u32>::new("jobs").pattern("-j") | Opt::<u32>::new("jobs").pattern("--jobs"),
        ) | Command::new("clean", Opt::flag("all").pattern("--all"));

        // Execute
        let error = parser.verify().unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Config error: Cannot duplicate the field 'jobs'."
        );
    }
}
