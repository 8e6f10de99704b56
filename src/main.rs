use glyph_layout::cli::{self, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run `glyphwrap --help` for usage");
            std::process::exit(2);
        }
    };

    match command {
        Command::PrintConfig => {
            let config = glyph_layout::config::Config::default();
            match toml::to_string_pretty(&config) {
                Ok(s) => print!("{s}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Version => println!("glyphwrap {}", env!("CARGO_PKG_VERSION")),
        Command::Help => print!("{}", cli::help()),
        Command::Wrap(options) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = cli::run(&options, &mut out) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
