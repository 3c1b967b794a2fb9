use std::process;

use suitereg::{command, report, LogTarget};

fn main() {
    let args: Vec<_> = std::env::args().collect();

    let config = match command::parse(&args) {
        Ok(c) => c,
        Err(usage) => {
            println!("{}", usage);
            process::exit(2)
        }
    };

    if let Some(target) = config.log {
        let _ = match target {
            LogTarget::File(path) => match fern::log_file(&path) {
                Ok(file) => logger_init(file),
                Err(_) => logger_init(std::io::stderr()),
            },
            LogTarget::Stderr => logger_init(std::io::stderr()),
        };
    }

    match report::run(&config.command) {
        Ok(lines) => {
            for l in lines {
                println!("{}", l);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1)
        }
    }
}

fn logger_init<T: Into<fern::Output>>(logger: T) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                    "{}[{}] - {}",
                    chrono::Local::now().format("[%Y-%m-%d %H:%M]"),
                    record.level(),
                    message))
        })
        .level(log::LevelFilter::Debug)
        .chain(logger)
        .apply()?;
    Ok(())
}
