use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::io::BufRead;
use techcalc::cmd::{run, split_and_strip};
use techcalc::config::{log_config_path, Config};

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return Ok(());
    }
    // No usable log4rs.yml, warnings to stderr only.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(&log_config_path(|key| std::env::var(key).ok()))?;
    log::info!("#Start main()");

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match run(&args, &config) {
            Ok(out) => print!("{out}"),
            Err(e) => {
                eprintln!("{} {e}", "ERROR".on_red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // No arguments: one command per line from stdin.
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let words = split_and_strip(&line);
        if words.is_empty() {
            continue;
        }
        match run(&words, &config) {
            Ok(out) => print!("{out}"),
            Err(e) => eprintln!("{} {e}", "ERROR".on_red()),
        }
    }
    Ok(())
}
