use logfind::run;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let cfg = match cli::parse_from(std::env::args_os()) {
        Ok(cfg) => cfg,
        Err(err) => err.exit(),
    };

    logfind::logging::init(cfg.verbosity);

    match run(&cfg) {
        Ok(result) => {
            print!("{}", result.output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("logfind: {}", err);
            ExitCode::from(2)
        }
    }
}
