use std::collections::HashSet;
use std::ops::BitOr;

use crate::api::{Concat, Map, Opt};
use crate::parser::{ConfigError, ParseError, Printer};
use crate::prelude::{Describe, Parse};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A conjunction of parsers, each of which is run against the full list of tokens.
///
/// The output is the tuple of the member outputs, in member order.
/// Every member must succeed for the compound to succeed.
/// The members must have distinct fields; otherwise, parsing fails with [`ParseError::Config`].
///
/// Typically built via the `|` operator on options.
/// Use [`Compound::new`] to include arbitrary parsers (ex: a command selector) as members.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::Opt;
/// use clasp::prelude::*;
///
/// let window = Opt::<u32>::new("width").pattern("-w")
///     | Opt::<u32>::new("height").pattern("-h")
///     | Opt::flag("fullscreen").pattern("--fullscreen");
///
/// assert_eq!(window.parse(&["-h=1080", "-w=1920"]).unwrap(), (1920, 1080, false));
/// ```
pub struct Compound<M> {
    members: M,
}

impl<M> Compound<M> {
    /// Create a compound parser from a tuple of member parsers (up to 12).
    pub fn new(members: M) -> Self {
        Self { members }
    }
}

/// The member parsers of a [`Compound`].
#[doc(hidden)]
pub trait Members<'a> {
    /// The tuple of member outputs.
    type Output;

    /// Run every member (without short circuiting), collecting their outputs.
    fn parse_all(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError>;
}

/// The member parsers of a [`Compound`], for description.
#[doc(hidden)]
pub trait DescribeMembers {
    /// Each member, in order.
    fn each(&self) -> Vec<&dyn Describe>;
}

/// A parser that may be flattened into the members of a [`Compound`].
#[doc(hidden)]
pub trait IntoMembers {
    /// The members tuple.
    type Members;

    /// Convert into the members tuple.
    fn into_members(self) -> Self::Members;
}

macro_rules! members {
    ($($T:ident),+) => {
        impl<'a, $($T: Parse<'a>),+> Members<'a> for ($($T,)+) {
            type Output = ($($T::Output,)+);

            #[allow(non_snake_case)]
            fn parse_all(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError> {
                let ($($T,)+) = self;
                let results = ($($T.parse(tokens),)+);

                match results {
                    ($(Ok($T),)+) => Ok(($($T,)+)),
                    ($($T,)+) => Err(ParseError::several(
                        vec![$($T.err()),+].into_iter().flatten().collect(),
                    )),
                }
            }
        }

        impl<$($T: Describe),+> DescribeMembers for ($($T,)+) {
            #[allow(non_snake_case)]
            fn each(&self) -> Vec<&dyn Describe> {
                let ($($T,)+) = self;
                vec![$($T as &dyn Describe),+]
            }
        }
    };
}

members!(A);
members!(A, B);
members!(A, B, C);
members!(A, B, C, D);
members!(A, B, C, D, E);
members!(A, B, C, D, E, F);
members!(A, B, C, D, E, F, G);
members!(A, B, C, D, E, F, G, H);
members!(A, B, C, D, E, F, G, H, I);
members!(A, B, C, D, E, F, G, H, I, J);
members!(A, B, C, D, E, F, G, H, I, J, K);
members!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<'a, M: Members<'a> + DescribeMembers> Parse<'a> for Compound<M> {
    type Output = M::Output;

    fn parse(&self, tokens: &[&'a str]) -> Result<Self::Output, ParseError> {
        // An invalid composition never parses, even when it was not built via `CommandLineParser`.
        self.verify()?;
        let result = self.members.parse_all(tokens);

        #[cfg(feature = "tracing_debug")]
        {
            if let Err(error) = &result {
                debug!("Compound failed: {error:?}.");
            }
        }

        result
    }
}

impl<M: DescribeMembers> Describe for Compound<M> {
    fn usage(&self) -> Vec<String> {
        self.members
            .each()
            .into_iter()
            .flat_map(|member| member.usage())
            .collect()
    }

    fn help(&self, printer: &Printer) -> String {
        self.members
            .each()
            .into_iter()
            .map(|member| member.help(printer))
            .collect()
    }

    fn command(&self, name: &str) -> Option<&dyn Describe> {
        self.members
            .each()
            .into_iter()
            .find_map(|member| member.command(name))
    }

    fn fields(&self) -> Vec<&str> {
        self.members
            .each()
            .into_iter()
            .flat_map(|member| member.fields())
            .collect()
    }

    fn verify(&self) -> Result<(), ConfigError> {
        let mut fields = HashSet::new();

        for member in self.members.each() {
            member.verify()?;

            for field in member.fields() {
                if !fields.insert(field) {
                    return Err(ConfigError(format!("Cannot duplicate the field '{field}'.")));
                }
            }
        }

        Ok(())
    }
}

impl<M> IntoMembers for Compound<M> {
    type Members = M;

    fn into_members(self) -> Self::Members {
        self.members
    }
}

impl<T, C> IntoMembers for Opt<T, C> {
    type Members = (Opt<T, C>,);

    fn into_members(self) -> Self::Members {
        (self,)
    }
}

impl<P, F> IntoMembers for Map<P, F> {
    type Members = (Map<P, F>,);

    fn into_members(self) -> Self::Members {
        (self,)
    }
}

impl<M, R> BitOr<R> for Compound<M>
where
    R: IntoMembers,
    M: Concat<R::Members>,
{
    type Output = Compound<M::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        Compound::new(self.members.concat(rhs.into_members()))
    }
}

impl<T, C, R> BitOr<R> for Opt<T, C>
where
    R: IntoMembers,
    (Opt<T, C>,): Concat<R::Members>,
{
    type Output = Compound<<(Opt<T, C>,) as Concat<R::Members>>::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        Compound::new(self.into_members().concat(rhs.into_members()))
    }
}

impl<P, F, R> BitOr<R> for Map<P, F>
where
    R: IntoMembers,
    (Map<P, F>,): Concat<R::Members>,
{
    type Output = Compound<<(Map<P, F>,) as Concat<R::Members>>::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        Compound::new(self.into_members().concat(rhs.into_members()))
    }
}
