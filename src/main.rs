use burrow::core::config::Config;
use burrow::flags::Flags;
use burrow::shell::Shell;
use env_logger::Env;
use log::LevelFilter;
use std::env;
use std::io;

fn main() -> Result<(), burrow::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("burrow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from_flags(&flags);
    init_logging(config.debug);

    let shell = Shell::new(config.clone());
    if let Err(e) = config.load(shell.system()) {
        if !config.quiet {
            eprintln!("burrow: {}", e);
        }
    }

    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout().lock(), io::stderr().lock())
}

fn init_logging(debug: bool) {
    let default_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::new().filter_or("BURROW_LOG", default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
