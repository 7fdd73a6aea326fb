use clasp::prelude::*;
use clasp::{Choice2, Command, CommandLineParser, Opt};
use std::path::PathBuf;

#[derive(Debug)]
enum Action {
    OpenWindow { width: u32, height: u32 },
    FetchUrl { url: String, output: Option<PathBuf> },
}

fn main() {
    let open_window = Command::new(
        "open-window",
        Opt::<u32>::new("width")
            .pattern("-w")
            .help("The width of the window.")
            .default_to(800)
            | Opt::<u32>::new("height")
                .pattern("-h")
                .help("The height of the window.")
                .default_to(600),
    )
    .help("Open a new window.")
    .map(|(width, height)| Action::OpenWindow { width, height });

    let fetch_url = Command::new(
        "fetch-url",
        Opt::<String>::new("url")
            .pattern("--url")
            .help("The url to fetch.")
            | Opt::<Option<PathBuf>>::new("output")
                .pattern("-o")
                .pattern("--output")
                .help("Write the response to this file.")
                .default_to(None),
    )
    .help("Fetch the contents of a url.")
    .map(|(url, output)| Action::FetchUrl { url, output });

    let parser = CommandLineParser::new(
        "launcher",
        (open_window | fetch_url).map(Choice2::into_inner),
    )
        .about("Launch one of the available actions.")
        .build();

    match parser.parse() {
        Action::OpenWindow { width, height } => {
            println!("Opening a {width}x{height} window.");
        }
        Action::FetchUrl { url, output } => match output {
            Some(path) => println!("Fetching {url} into {}.", path.display()),
            None => println!("Fetching {url}."),
        },
    }
}
