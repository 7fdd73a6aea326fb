//! `clasp` is a declarative, compositional command line parser for Rust.
//!
//! A command line parser in `clasp` is a value, composed from small parsers with the `|` operator.
//! The type of the composition tracks exactly what it produces, so the result of a parse is a typed value (not a map of strings).
//! `clasp` prioritizes the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Composition over configuration*:
//! Options, commands, and groups of either are ordinary values which may be built in one place and combined in another.
//! * *Mistakes found up front*:
//! Composition errors (ex: two options with the same field) are reported when the parser is built, before any token is parsed.
//! * *Detailed yet basic UX*:
//! The help and error output is synthesized from the same declarative structure as the parser.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/window.rs")]
//! ```
//!
//! ```console
//! $ window --help
//! usage: window [--help] -w=<u32> -h=<u32> [-f[=<bool>]] [-n=<name>]
//!
//! Open a window of the given size.
//!
//! -w, --width <u32>                       The width of the window, in pixels.
//! -h, --height <u32>                      The height of the window, in pixels.
//! -f, --fullscreen <bool>                 Open the window in fullscreen mode.
//!                                         By default: false
//!                                         Implicitly: true
//! -n, --name <name>                       The user that owns the window.
//!                                         By default: anonymous
//!
//! --help, -?                              Show this help message and exit.
//!
//! $ window -w=1920 -h=1080 --fullscreen
//! Window { width: 1920, height: 1080, fullscreen: true, username: "anonymous" }
//!
//! $ window -w=1920
//! Parse error: Option 'height' is required (-h, --height).
//! usage: window [--help] -w=<u32> -h=<u32> [-f[=<bool>]] [-n=<name>]
//! ```
//!
//! # Options
//! An [`Opt`] is the atomic parser: one named option, producing one value.
//! It matches a token which is exactly one of its patterns (ex: `--fullscreen`), or a pattern followed by `=value` (ex: `--width=1920`).
//! Every token is scanned and the first match wins, so options may appear in any order.
//! There is no `--width 1920` (space separated) syntax, and no grouping of short flags (ex: `-abc`).
//!
//! Capabilities are attached via builder methods:
//! * [`Opt::pattern`]: a pattern to match; may be repeated.
//! * [`Opt::help`]: the description on the help message.
//! * [`Opt::default_to`]: the value when no token matches.
//! Without a default, the option is mandatory.
//! * [`Opt::implicitly`]: the value when a pattern is given without `=value`.
//! * [`Opt::check`]: a predicate that converted values must pass.
//! * [`Opt::custom_parser`]: a conversion in place of the type's own.
//! * [`Opt::hint`]: the text shown in place of the type name on the help message.
//!
//! Other than `pattern`, each capability may be attached at most once.
//! The attached capabilities are tracked in the type of the option, so attaching one twice does not compile.
//! The shorthand [`Opt::flag`] is a `bool` option which is `false` by default and `true` implicitly.
//!
//! The value type `T` is converted via [Convert](./prelude/trait.Convert.html).
//! `clasp` provides conversions for the primitive types, `String`, `PathBuf`, `&str` (a view of the token itself), `Option<T>`, and `Vec<T>`.
//! A `Vec<T>` converts each space separated item of the value, ex: `--platforms="windows linux"`.
//!
//! # Compounds
//! Combining parsers with `|` makes a [`Compound`], whose output is the flat tuple of its members' outputs.
//! Every member is run against the full list of tokens; the compound succeeds only if every member does.
//! When more than one member fails, all of their errors are reported.
//! The members of a compound must have distinct fields.
//! A repeated field is reported as a [`ConfigError`] when the parser is built, and as [`ParseError::Config`] if the compound is parsed directly.
//! Use [`Parse::map`](./prelude/trait.Parse.html#method.map) to turn the tuple into a struct.
//!
//! # Commands
//! A [`Command`] names a sub-parser; it matches when the first token is exactly its name.
//! Combining commands with `|` makes a [`Selector`], which dispatches to the first command (in order of combination) that matches.
//! The output of a selector is a tagged union: [`Choice2`] for two commands, [`Choice3`] for three, and so on.
//! Its variant identifies the selected command, even when the commands have the same output type.
//! When every command produces the same type (ex: an enum, built via [`Command::map`]), [`Choice2::into_inner`] unwraps it.
//!
//! ```no_run
#![doc = include_str!("../demos/launcher.rs")]
//! ```
//!
//! ```console
//! $ launcher --help
//! usage: launcher [--help] {open-window|fetch-url} ...
//!
//! Launch one of the available actions.
//!
//! open-window                             Open a new window.
//! fetch-url                               Fetch the contents of a url.
//!
//! --help, -?                              Show this help message and exit.
//!
//! $ launcher open-window --help
//! usage: launcher open-window [--help] [-w=<u32>] [-h=<u32>]
//!
//! Open a new window.
//!
//! -w <u32>                                The width of the window.
//!                                         By default: 800
//! -h <u32>                                The height of the window.
//!                                         By default: 600
//!
//! --help, -?                              Show this help message and exit.
//!
//! $ launcher close-window
//! Parse error: Unknown command 'close-window'.
//! usage: launcher [--help] {open-window|fetch-url} ...
//! ```
//!
//! ### Shared options
//! Options which apply to every command are set up via [`SharedOptions`].
//! The shared options and the command are parsed independently from the full list of tokens.
//! The command must be the first token; the shared options may be interleaved with the command's own options after it.
//! The output is a [`Shared`].
//!
//! ```no_run
#![doc = include_str!("../demos/build_tool.rs")]
//! ```
//!
//! # Help
//! Any token `--help` or `-?` displays the help message.
//! `-h` is not reserved, so it remains available to options (ex: `-h=1080`).
//! When the first token names a command, the help message is that of the command.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
pub use clasp_builder::*;
