use std::marker::PhantomData;
use std::ops::BitOr;

use crate::api::{Attached, Concat, Map, Unattached};
use crate::model::*;
use crate::parser::{ConfigError, ParseError, Printer};
use crate::prelude::{Describe, Parse};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A named sub-parser.
///
/// A command matches when the first token is exactly its name.
/// The sub-parser is run against the remaining tokens.
///
/// Commands are combined into a [`Selector`] via the `|` operator.
/// The type parameter `H` tracks whether the help message is [`Attached`].
///
/// A command's help message cannot be attached twice.
/// ```compile_fail
/// # use clasp_builder as clasp;
/// use clasp::{Command, Opt};
///
/// let command = Command::new("go", Opt::<u32>::new("speed").pattern("-s"))
///     .help("Go.")
///     .help("Go fast.");
/// ```
pub struct Command<P, H = Unattached> {
    name: String,
    description: Option<String>,
    parser: P,
    help: PhantomData<H>,
}

impl<P> Command<P> {
    /// Create a command `name` that runs `parser`.
    pub fn new(name: impl Into<String>, parser: P) -> Self {
        Self {
            name: name.into(),
            description: None,
            parser,
            help: PhantomData,
        }
    }

    /// Document the help message for this command.
    pub fn help(self, description: impl Into<String>) -> Command<P, Attached> {
        Command {
            name: self.name,
            description: Some(description.into()),
            parser: self.parser,
            help: PhantomData,
        }
    }
}

impl<P, H> Command<P, H> {
    /// Convert the output of this command via `f` (ex: an enum variant constructor).
    /// The result is still a command.
    pub fn map<'a, F, U>(self, f: F) -> Command<Map<P, F>, H>
    where
        P: Parse<'a>,
        F: Fn(P::Output) -> U,
    {
        Command {
            name: self.name,
            description: self.description,
            parser: Map::new(self.parser, f),
            help: PhantomData,
        }
    }

    /// The name of this command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the `token` selects this command.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token
    }
}

/// A parser that is selected by name.
#[doc(hidden)]
pub trait Named {
    /// The name that selects this parser.
    fn name(&self) -> &str;
}

impl<P, H> Named for Command<P, H> {
    fn name(&self) -> &str {
        Command::name(self)
    }
}

impl<'a, P: Parse<'a>, H> Parse<'a> for Command<P, H> {
    type Output = P::Output;

    fn parse(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError> {
        self.parser.parse(tokens.get(1..).unwrap_or_default())
    }
}

impl<P: Describe, H> Describe for Command<P, H> {
    fn usage(&self) -> Vec<String> {
        self.parser.usage()
    }

    fn help(&self, printer: &Printer) -> String {
        self.parser.help(printer)
    }

    fn about(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn verify(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError("A command cannot have an empty name.".to_string()));
        }

        self.parser.verify()
    }
}

/// A tagged union of commands, dispatched on the first token.
///
/// The commands are tried in the order they are combined; the first match wins.
/// The output is a `ChoiceN` (ex: [`Choice2`] for two commands), whose variant identifies the selected command.
/// When every command has the same output type (typically an enum, via [`Command::map`]), `into_inner` unwraps it.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::{Choice2, Command, Opt};
/// use clasp::prelude::*;
///
/// let action = Command::new("open", Opt::<u32>::new("width").pattern("-w"))
///     | Command::new("close", Opt::<u32>::new("delay").pattern("-d").default_to(0));
///
/// assert_eq!(action.parse(&["open", "-w=5"]).unwrap(), Choice2::A(5));
/// assert_eq!(action.parse(&["close"]).unwrap(), Choice2::B(0));
/// assert!(action.parse(&[]).is_err());
/// ```
pub struct Selector<C> {
    cases: C,
}

impl<C> Selector<C> {
    /// Create a selector from a tuple of commands (up to 12).
    pub fn new(cases: C) -> Self {
        Self { cases }
    }
}

/// The commands of a [`Selector`].
#[doc(hidden)]
pub trait Cases<'a> {
    /// The tagged union of the command outputs.
    type Output;

    /// Run the first command which matches `first`, if any.
    fn dispatch(
        &self,
        first: &str,
        tokens: &[&'a str],
    ) -> Option<Result<Self::Output, ParseError>>;
}

/// The commands of a [`Selector`], for description.
#[doc(hidden)]
pub trait Listing {
    /// Each command, with its name, in order.
    fn list(&self) -> Vec<(&str, &dyn Describe)>;
}

/// A command, or commands, that may be flattened into the cases of a [`Selector`].
#[doc(hidden)]
pub trait IntoCases {
    /// The cases tuple.
    type Cases;

    /// Convert into the cases tuple.
    fn into_cases(self) -> Self::Cases;
}

macro_rules! cases {
    ($choice:ident; $($T:ident),+) => {
        impl<'a, $($T: Parse<'a> + Named),+> Cases<'a> for ($($T,)+) {
            type Output = $choice<$($T::Output),+>;

            #[allow(non_snake_case)]
            fn dispatch(
                &self,
                first: &str,
                tokens: &[&'a str],
            ) -> Option<Result<Self::Output, ParseError>> {
                let ($($T,)+) = self;

                $(
                    if Named::name($T) == first {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Dispatching to command '{first}'.");
                        }

                        return Some($T.parse(tokens).map($choice::$T));
                    }
                )+

                None
            }
        }

        impl<$($T: Named + Describe),+> Listing for ($($T,)+) {
            #[allow(non_snake_case)]
            fn list(&self) -> Vec<(&str, &dyn Describe)> {
                let ($($T,)+) = self;
                vec![$((Named::name($T), $T as &dyn Describe)),+]
            }
        }
    };
}

cases!(Choice1; A);
cases!(Choice2; A, B);
cases!(Choice3; A, B, C);
cases!(Choice4; A, B, C, D);
cases!(Choice5; A, B, C, D, E);
cases!(Choice6; A, B, C, D, E, F);
cases!(Choice7; A, B, C, D, E, F, G);
cases!(Choice8; A, B, C, D, E, F, G, H);
cases!(Choice9; A, B, C, D, E, F, G, H, I);
cases!(Choice10; A, B, C, D, E, F, G, H, I, J);
cases!(Choice11; A, B, C, D, E, F, G, H, I, J, K);
cases!(Choice12; A, B, C, D, E, F, G, H, I, J, K, L);

impl<'a, C: Cases<'a>> Parse<'a> for Selector<C> {
    type Output = C::Output;

    fn parse(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError> {
        let first = tokens.first().ok_or(ParseError::MissingCommand)?;

        match self.cases.dispatch(first, tokens) {
            Some(result) => result,
            None => Err(ParseError::UnknownCommand {
                token: first.to_string(),
            }),
        }
    }
}

impl<C: Listing> Describe for Selector<C> {
    fn usage(&self) -> Vec<String> {
        let names: Vec<&str> = self.cases.list().into_iter().map(|(name, _)| name).collect();
        vec![format!("{{{}}}", names.join("|")), "...".to_string()]
    }

    fn help(&self, printer: &Printer) -> String {
        self.cases
            .list()
            .into_iter()
            .map(|(name, command)| printer.entry(name, command.about(), &[]))
            .collect()
    }

    fn command(&self, name: &str) -> Option<&dyn Describe> {
        self.cases
            .list()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, command)| command)
    }

    fn verify(&self) -> Result<(), ConfigError> {
        for (_, command) in self.cases.list() {
            command.verify()?;
        }

        Ok(())
    }
}

impl<P, H> IntoCases for Command<P, H> {
    type Cases = (Command<P, H>,);

    fn into_cases(self) -> Self::Cases {
        (self,)
    }
}

impl<C> IntoCases for Selector<C> {
    type Cases = C;

    fn into_cases(self) -> Self::Cases {
        self.cases
    }
}

impl<P, H, R> BitOr<R> for Command<P, H>
where
    R: IntoCases,
    (Command<P, H>,): Concat<R::Cases>,
{
    type Output = Selector<<(Command<P, H>,) as Concat<R::Cases>>::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        Selector::new(self.into_cases().concat(rhs.into_cases()))
    }
}

impl<C, R> BitOr<R> for Selector<C>
where
    R: IntoCases,
    C: Concat<R::Cases>,
{
    type Output = Selector<C::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        Selector::new(self.cases.concat(rhs.into_cases()))
    }
}
