use clasp::prelude::*;
use clasp::{CommandLineParser, Opt};

#[derive(Debug)]
struct Window {
    width: u32,
    height: u32,
    fullscreen: bool,
    username: String,
}

fn main() {
    let options = Opt::<u32>::new("width")
        .pattern("-w")
        .pattern("--width")
        .help("The width of the window, in pixels.")
        .check(|w| *w > 0, "must be positive")
        | Opt::<u32>::new("height")
            .pattern("-h")
            .pattern("--height")
            .help("The height of the window, in pixels.")
            .check(|h| *h > 0, "must be positive")
        | Opt::flag("fullscreen")
            .pattern("-f")
            .pattern("--fullscreen")
            .help("Open the window in fullscreen mode.")
        | Opt::<String>::new("username")
            .pattern("-n")
            .pattern("--name")
            .hint("name")
            .help("The user that owns the window.")
            .default_to("anonymous".to_string());

    let parser = CommandLineParser::new(
        "window",
        options.map(|(width, height, fullscreen, username)| Window {
            width,
            height,
            fullscreen,
            username,
        }),
    )
    .about("Open a window of the given size.")
    .build();

    let window = parser.parse();
    println!("{window:?}");
}
