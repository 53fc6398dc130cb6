use clap::Parser;
use diffmatch_cli::Cli;
use diffmatch_cli::init_logging;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli.run(&mut out) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
