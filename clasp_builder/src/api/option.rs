use std::marker::PhantomData;

use crate::parser::{ConfigError, ParseError, Printer};
use crate::prelude::{Convert, Describe, Parse, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

type Converter<T> = Box<dyn Fn(&str) -> Option<T> + Send + Sync>;

struct Check<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

/// Marks a capability that has not been attached.
#[derive(Debug)]
pub struct Unattached;

/// Marks a capability that has been attached.
#[derive(Debug)]
pub struct Attached;

/// The capabilities attached to an [`Opt`], tracked in its type.
///
/// In order: the description `S`, the hint `H`, the default `D`, the implicit value `I`, the check `K`, and the converter `V`.
/// Each is either [`Unattached`] or [`Attached`].
#[derive(Debug)]
pub struct Capabilities<S, H, D, I, K, V>(PhantomData<(S, H, D, I, K, V)>);

/// The capabilities of a new option: none.
pub type Fresh = Capabilities<Unattached, Unattached, Unattached, Unattached, Unattached, Unattached>;

/// The type of [`Opt::flag`]: a `bool` option with a default and an implicit value.
pub type Flag =
    Opt<bool, Capabilities<Unattached, Unattached, Attached, Attached, Unattached, Unattached>>;

/// A named option; the atomic parser.
///
/// An option matches a token which is exactly one of its patterns (ex: `--fullscreen`), or a pattern followed by `=value` (ex: `--width=1920`).
/// Every token is scanned; the first match wins.
/// As such, options are independent of their position amongst the tokens.
///
/// Capabilities are attached via the builder methods, in any order.
/// Except for [`Opt::pattern`], each capability may be attached at most once.
/// The attached capabilities are part of the option's type, so a second attachment does not compile.
///
/// ### Example
/// ```
/// # use clasp_builder as clasp;
/// use clasp::Opt;
/// use clasp::prelude::*;
///
/// let width = Opt::<u32>::new("width")
///     .pattern("-w")
///     .pattern("--width")
///     .help("The width of the window.")
///     .check(|w| *w > 0, "must be positive")
///     .default_to(800);
///
/// assert_eq!(width.parse(&["--width=1920"]).unwrap(), 1920);
/// assert_eq!(width.parse(&[]).unwrap(), 800);
/// assert!(width.parse(&["-w=0"]).is_err());
/// ```
///
/// A capability cannot be attached twice.
/// ```compile_fail
/// # use clasp_builder as clasp;
/// use clasp::Opt;
///
/// let width = Opt::<u32>::new("width").pattern("-w").default_to(1).default_to(2);
/// ```
///
/// ```compile_fail
/// # use clasp_builder as clasp;
/// use clasp::Opt;
///
/// let width = Opt::<u32>::new("width").pattern("-w").hint("a").help("b").hint("c");
/// ```
pub struct Opt<T, C = Fresh> {
    field: String,
    patterns: Vec<String>,
    hint: Option<String>,
    description: Option<String>,
    default: Option<T>,
    implicit: Option<T>,
    check: Option<Check<T>>,
    converter: Option<Converter<T>>,
    capabilities: PhantomData<C>,
}

impl<T> Opt<T> {
    /// Create an option for the `field` identity.
    /// The field must be unique amongst the options of a compound.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            patterns: Vec::default(),
            hint: None,
            description: None,
            default: None,
            implicit: None,
            check: None,
            converter: None,
            capabilities: PhantomData,
        }
    }
}

impl Opt<bool> {
    /// Create a flag: `false` by default, `true` when named without a value.
    pub fn flag(field: impl Into<String>) -> Flag {
        Opt::new(field).default_to(false).implicitly(true)
    }
}

impl<T, C> Opt<T, C> {
    /// Add a pattern that this option matches (ex: `-w`, `--width`).
    /// May be repeated; patterns are checked in the order they are added.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    fn attach<N>(self) -> Opt<T, N> {
        Opt {
            field: self.field,
            patterns: self.patterns,
            hint: self.hint,
            description: self.description,
            default: self.default,
            implicit: self.implicit,
            check: self.check,
            converter: self.converter,
            capabilities: PhantomData,
        }
    }

    /// The field identity of this option.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether the option has a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether the option has an implicit value.
    pub fn has_implicit(&self) -> bool {
        self.implicit.is_some()
    }

    /// Whether the option has a check.
    pub fn has_check(&self) -> bool {
        self.check.is_some()
    }

    /// Whether the option has a custom converter.
    pub fn has_custom_parser(&self) -> bool {
        self.converter.is_some()
    }

    /// Match the `token` against the patterns, in order.
    ///
    /// Returns the value text: empty for an exact match, otherwise the text following `pattern=`.
    pub fn matches<'t>(&self, token: &'t str) -> Option<&'t str> {
        self.patterns.iter().find_map(|pattern| {
            let rest = token.strip_prefix(pattern.as_str())?;

            if rest.is_empty() {
                Some(rest)
            } else {
                rest.strip_prefix('=')
            }
        })
    }
}

impl<T, H, D, I, K, V> Opt<T, Capabilities<Unattached, H, D, I, K, V>> {
    /// Document the help message for this option.
    pub fn help(
        self,
        description: impl Into<String>,
    ) -> Opt<T, Capabilities<Attached, H, D, I, K, V>> {
        let mut option = self.attach();
        option.description.replace(description.into());
        option
    }
}

impl<T, S, D, I, K, V> Opt<T, Capabilities<S, Unattached, D, I, K, V>> {
    /// Display `hint` in place of the type name on the help message.
    pub fn hint(self, hint: impl Into<String>) -> Opt<T, Capabilities<S, Attached, D, I, K, V>> {
        let mut option = self.attach();
        option.hint.replace(hint.into());
        option
    }
}

impl<T, S, H, I, K, V> Opt<T, Capabilities<S, H, Unattached, I, K, V>> {
    /// The value when no token matches.
    /// Without a default, the option is mandatory.
    pub fn default_to(self, value: T) -> Opt<T, Capabilities<S, H, Attached, I, K, V>> {
        let mut option = self.attach();
        option.default.replace(value);
        option
    }
}

impl<T, S, H, D, K, V> Opt<T, Capabilities<S, H, D, Unattached, K, V>> {
    /// The value when a token matches the pattern exactly (without `=value`).
    ///
    /// The implicit value is neither converted nor checked.
    pub fn implicitly(self, value: T) -> Opt<T, Capabilities<S, H, D, Attached, K, V>> {
        let mut option = self.attach();
        option.implicit.replace(value);
        option
    }
}

impl<T, S, H, D, I, V> Opt<T, Capabilities<S, H, D, I, Unattached, V>> {
    /// Reject converted values for which `predicate` is false, reporting `message`.
    pub fn check(
        self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Opt<T, Capabilities<S, H, D, I, Attached, V>> {
        let mut option = self.attach();
        option.check.replace(Check {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        option
    }
}

impl<T, S, H, D, I, K> Opt<T, Capabilities<S, H, D, I, K, Unattached>> {
    /// Convert the value text via `converter`, in place of the type's [`Convert`] implementation.
    pub fn custom_parser(
        self,
        converter: impl Fn(&str) -> Option<T> + Send + Sync + 'static,
    ) -> Opt<T, Capabilities<S, H, D, I, K, Attached>> {
        let mut option = self.attach();
        option.converter.replace(Box::new(converter));
        option
    }
}

impl<T: Value, C> Opt<T, C> {
    fn hint_text(&self) -> String {
        self.hint.clone().unwrap_or_else(T::hint)
    }

    /// Convert and check the value `text`.
    pub fn parse_value<'a>(&self, text: &'a str) -> Result<T, ParseError>
    where
        T: Convert<'a>,
    {
        let converted = match &self.converter {
            Some(converter) => converter(text),
            None => T::convert(text),
        };
        let value = converted.ok_or_else(|| ParseError::InvalidConversion {
            field: self.field.clone(),
            token: text.to_string(),
            hint: self.hint_text(),
        })?;

        if let Some(check) = &self.check {
            if !(check.predicate)(&value) {
                return Err(ParseError::FailedCheck {
                    field: self.field.clone(),
                    token: text.to_string(),
                    message: check.message.clone(),
                });
            }
        }

        Ok(value)
    }
}

impl<'a, T: Convert<'a> + Clone, C> Parse<'a> for Opt<T, C> {
    type Output = T;

    fn parse(&self, tokens: &[&'a str]) -> Result<T, ParseError> {
        match tokens.iter().copied().find_map(|token| self.matches(token)) {
            Some(text) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{f}' matched with '{text}'.", f = self.field);
                }

                match &self.implicit {
                    Some(implicit) if text.is_empty() => Ok(implicit.clone()),
                    _ => self.parse_value(text),
                }
            }
            None => self.default.clone().ok_or_else(|| ParseError::Missing {
                field: self.field.clone(),
                patterns: self.patterns.join(", "),
            }),
        }
    }
}

impl<T: Value, C> Describe for Opt<T, C> {
    fn usage(&self) -> Vec<String> {
        let pattern = self.patterns.first().cloned().unwrap_or_default();
        let hint = self.hint_text();
        let fragment = if self.has_implicit() {
            format!("{pattern}[=<{hint}>]")
        } else {
            format!("{pattern}=<{hint}>")
        };

        if self.has_default() {
            vec![format!("[{fragment}]")]
        } else {
            vec![fragment]
        }
    }

    fn help(&self, printer: &Printer) -> String {
        let left = format!("{} <{}>", self.patterns.join(", "), self.hint_text());
        let mut notes = Vec::default();

        if let Some(default) = &self.default {
            notes.push(format!("By default: {}", default.render()));
        }

        if let Some(implicit) = &self.implicit {
            notes.push(format!("Implicitly: {}", implicit.render()));
        }

        printer.entry(&left, self.description.as_deref(), &notes)
    }

    fn fields(&self) -> Vec<&str> {
        vec![&self.field]
    }

    fn verify(&self) -> Result<(), ConfigError> {
        if self.patterns.is_empty() {
            return Err(ConfigError(format!(
                "The option '{f}' requires at least one pattern.",
                f = self.field
            )));
        }

        if self.patterns.iter().any(|pattern| pattern.is_empty()) {
            return Err(ConfigError(format!(
                "The option '{f}' cannot have an empty pattern.",
                f = self.field
            )));
        }

        Ok(())
    }
}

impl<T, C> std::fmt::Debug for Opt<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = if let Some(d) = &self.description {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Opt[{t}, {field}, {patterns}{help}]",
            t = std::any::type_name::<T>(),
            field = self.field,
            patterns = self.patterns.join(" "),
        )
    }
}
