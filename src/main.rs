// src/main.rs

use pylaunch::{cli, logging, run};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("pylaunch error: {err}");
        std::process::exit(1);
    }

    match run(&args.passthrough) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pylaunch error: {err}");
            std::process::exit(1);
        }
    }
}
