use clap::Parser;
use img2braille::cli::{self, Args, Invocation, EXIT_CONFIG_ERROR};
use img2braille::config::Config;
use img2braille::Converter;

fn main() {
    // argv without even a program name
    if std::env::args_os().next().is_none() {
        println!("How did you get here?");
        std::process::exit(1);
    }

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            cli::init_logging(args.verbose, None);
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    cli::init_logging(args.verbose, config.log.level.as_deref());

    let converter = Converter::new(config.convert_options());
    let invocation = Invocation::from_args(&args);
    log::debug!("Invocation: {:?}", invocation);

    let code = cli::run(
        &invocation,
        &converter,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}
