use getopts::Options;

#[derive(Debug, PartialEq)]
pub enum Command {
    /// Supported suites in preference order.
    List,
    /// Identifier for a canonical name.
    Name(String),
    /// Canonical name for an identifier.
    Id(String),
    /// Resolve a configured ciphersuite list.
    Check(String),
    /// The supported list as a ClientHello `cipher_suites` vector.
    Wire,
    Help(String),
}

#[derive(Debug, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(String),
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub command: Command,
    pub log: Option<LogTarget>,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("l", "list", "List supported ciphersuites, most preferred first")
        .optopt("n", "name", "Print the identifier of a ciphersuite", "NAME")
        .optopt("i", "id", "Print the name of a ciphersuite identifier", "ID")
        .optopt("c", "check", "Resolve a ':' separated ciphersuite list", "LIST")
        .optflag("w", "wire", "Print the supported list as ClientHello bytes")
        .optflag("h", "help", "Show usage")
        .optflagopt("", "log", "Enable log", "PATH_TO_FILE");
    opts
}

/// Parse command line arguments, `args[0]` being the program name.
///
/// On failure the short usage line is returned.
pub fn parse(args: &[String]) -> Result<Config, String> {
    let program = args.first().map(|s| s.as_str()).unwrap_or("suitereg");
    let opts = options();

    let matches = match opts.parse(&args[1.min(args.len())..]) {
        Ok(m) => m,
        Err(e) => return Err(format!("{}\n{}", e, opts.short_usage(program))),
    };

    let log = if matches.opt_present("log") {
        Some(match matches.opt_str("log") {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        })
    } else {
        None
    };

    let command = if matches.opt_present("help") {
        Command::Help(opts.usage("Ciphersuite registry"))
    } else if let Some(name) = matches.opt_str("n") {
        Command::Name(name)
    } else if let Some(id) = matches.opt_str("i") {
        Command::Id(id)
    } else if let Some(list) = matches.opt_str("c") {
        Command::Check(list)
    } else if matches.opt_present("w") {
        Command::Wire
    } else {
        Command::List
    };

    Ok(Config { command, log })
}
