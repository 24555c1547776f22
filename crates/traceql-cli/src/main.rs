mod cli;
mod commands;
mod telemetry;

use cli::{CheckParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            init_logging(params.verbose);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            init_logging(params.verbose);
            commands::tree::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging(verbosity: u8) {
    if let Err(e) = telemetry::init(verbosity) {
        eprintln!("warning: {}", e);
    }
}
