use clasp::{Choice2, Command, CommandLineParser, Opt, Shared, SharedOptions};

fn main() {
    let shared = Opt::flag("verbose")
        .pattern("-v")
        .pattern("--verbose")
        .help("Print every step.")
        | Opt::<String>::new("profile")
            .pattern("--profile")
            .help("The build profile.")
            .check(|p| p == "debug" || p == "release", "must be debug or release")
            .default_to("debug".to_string());

    let build = Command::new(
        "build",
        Opt::<Vec<String>>::new("platforms")
            .pattern("--platforms")
            .help("The platforms to build for.")
            .default_to(vec!["linux".to_string()])
            | Opt::<u8>::new("jobs")
                .pattern("-j")
                .pattern("--jobs")
                .help("The number of parallel jobs; all cores when given without a value.")
                .default_to(1)
                .implicitly(0),
    )
    .help("Build the project.");

    let clean = Command::new(
        "clean",
        Opt::flag("all")
            .pattern("--all")
            .help("Also remove downloaded dependencies."),
    )
    .help("Remove build outputs.");

    let parser = CommandLineParser::new("build-tool", SharedOptions::new(shared) | build | clean)
        .about("Build or clean the project.")
        .build();

    let Shared {
        shared: (verbose, profile),
        command,
    } = parser.parse();

    if verbose {
        println!("Profile: {profile}");
    }

    match command {
        Choice2::A((platforms, jobs)) => {
            println!("Building for {} with {jobs} job(s).", platforms.join(", "));
        }
        Choice2::B(all) => println!("Cleaning (all: {all})."),
    }
}
