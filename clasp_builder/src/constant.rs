// Exact-match tokens that request the help message.
// `-h` is left to user options (ex: `-h=1080`).
pub(crate) const HELP_FLAGS: [&str; 2] = ["--help", "-?"];
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

// Column at which descriptions start in an option's help block.
pub(crate) const HELP_COLUMN: usize = 40;
