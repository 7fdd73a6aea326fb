use crate::parser::{ConfigError, ParseError, Printer};
use crate::prelude::{Describe, Parse};

/// A parser whose output is converted via a function.
/// Built via [`Parse::map`] (or [`Command::map`](./struct.Command.html#method.map)).
///
/// The description is that of the inner parser.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::Opt;
/// use clasp::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Window {
///     width: u32,
///     height: u32,
/// }
///
/// let window = (Opt::<u32>::new("width").pattern("-w") | Opt::<u32>::new("height").pattern("-h"))
///     .map(|(width, height)| Window { width, height });
///
/// assert_eq!(window.parse(&["-w=800", "-h=600"]).unwrap(), Window { width: 800, height: 600 });
/// ```
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<'a, P, F, U> Parse<'a> for Map<P, F>
where
    P: Parse<'a>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, tokens: &[&'a str]) -> Result<U, ParseError> {
        self.parser.parse(tokens).map(&self.f)
    }
}

impl<P: Describe, F> Describe for Map<P, F> {
    fn usage(&self) -> Vec<String> {
        self.parser.usage()
    }

    fn help(&self, printer: &Printer) -> String {
        self.parser.help(printer)
    }

    fn about(&self) -> Option<&str> {
        self.parser.about()
    }

    fn command(&self, name: &str) -> Option<&dyn Describe> {
        self.parser.command(name)
    }

    fn fields(&self) -> Vec<&str> {
        self.parser.fields()
    }

    fn verify(&self) -> Result<(), ConfigError> {
        self.parser.verify()
    }
}
