use thiserror::Error;

/// An error in the composition of a parser, found when the parser is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// An error parsing the Cli tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No token matched a mandatory option.
    #[error("Option '{field}' is required ({patterns}).")]
    Missing {
        /// The field identity of the option.
        field: String,
        /// The patterns of the option.
        patterns: String,
    },

    /// A matched token's value could not be converted.
    #[error("Option '{field}' cannot convert '{token}' to {hint}.")]
    InvalidConversion {
        /// The field identity of the option.
        field: String,
        /// The value text of the token.
        token: String,
        /// The hint of the option's type.
        hint: String,
    },

    /// A converted value was rejected by the option's check.
    #[error("Option '{field}' rejects '{token}': {message}")]
    FailedCheck {
        /// The field identity of the option.
        field: String,
        /// The value text of the token.
        token: String,
        /// The message of the check.
        message: String,
    },

    /// The first token does not name any command.
    #[error("Unknown command '{token}'.")]
    UnknownCommand {
        /// The first token.
        token: String,
    },

    /// There is no token to select a command with.
    #[error("A command is required.")]
    MissingCommand,

    /// The parser is not a valid composition (ex: a repeated field).
    /// Reported when a compound is parsed without first being built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// More than one part of a parser failed.
    #[error("{}", join(.0))]
    Several(Vec<ParseError>),
}

impl ParseError {
    /// Combine the failures of the parts of a parser, in part order.
    /// Must be provided at least one error.
    pub(crate) fn several(errors: Vec<ParseError>) -> Self {
        let mut flat = Vec::default();

        for error in errors {
            match error {
                ParseError::Several(inner) => flat.extend(inner),
                error => flat.push(error),
            }
        }

        assert!(!flat.is_empty(), "internal error - must combine at least one error");

        if flat.len() == 1 {
            flat.remove(0)
        } else {
            ParseError::Several(flat)
        }
    }
}

fn join(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}
