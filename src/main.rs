use ip_calculator::cli::{parse_args, run_interactive, run_once, USAGE};
use ip_calculator::config::{init_logging, Settings};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    log::info!("#Start main()");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }
    let format = args.output.unwrap_or(settings.output);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.query {
        Some((ip, mask)) => {
            if run_once(&mut out, format, &ip, &mask)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            let stdin = io::stdin();
            run_interactive(&mut stdin.lock(), &mut out, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
