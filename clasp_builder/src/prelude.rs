//! Traits which, typically, may be imported without concern: `use clasp::prelude::*`.

use crate::api::Map;
use crate::parser::{ConfigError, ParseError, Printer};

/// Behaviour to parse a typed output from the Cli tokens.
///
/// The lifetime `'a` is the lifetime of the token storage.
/// An output that borrows from the tokens (ex: `&'a str`) cannot outlive them.
pub trait Parse<'a> {
    /// The type produced by a successful parse.
    type Output;

    /// Parse the tokens into `Self::Output`.
    /// The parser is not modified, so it may be invoked any number of times.
    fn parse(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError>;

    /// Convert the output of this parser via `f`.
    ///
    /// This is how a composed result becomes a named record (ex: a struct, or a variant of an enum).
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }
}

/// Behaviour to describe the declarative structure of a parser.
///
/// All methods are read-only traversals; none of them depend on the Cli tokens.
pub trait Describe {
    /// The usage summary fragments (ex: `-w=<u32>`, `[--fullscreen[=<bool>]]`).
    fn usage(&self) -> Vec<String>;

    /// Render the help text via the `printer`.
    fn help(&self, printer: &Printer) -> String;

    /// Render the help text without any terminal wrapping.
    fn render_help(&self) -> String {
        self.help(&Printer::default())
    }

    /// The about message of this parser, if any.
    fn about(&self) -> Option<&str> {
        None
    }

    /// Find the command `name` amongst those this parser dispatches on.
    fn command(&self, _name: &str) -> Option<&dyn Describe> {
        None
    }

    /// The field identities this parser contributes to an enclosing compound.
    fn fields(&self) -> Vec<&str> {
        Vec::default()
    }

    /// Check the composition for configuration errors (ex: a repeated field).
    fn verify(&self) -> Result<(), ConfigError>;
}

/// Behaviour to display a value type on the help message.
pub trait Value {
    /// The name of the type, shown as the `<hint>` of an option.
    fn hint() -> String;

    /// Render the value as text (ex: for the `By default:` line).
    fn render(&self) -> String;
}

/// Behaviour to convert the text of a token into a value.
// Needs to be imported in order to implement a custom conversion.
pub trait Convert<'a>: Value + Sized {
    /// Convert the `text`, returning `None` if it is not a valid `Self`.
    fn convert(text: &'a str) -> Option<Self>;
}
