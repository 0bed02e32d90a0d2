use clap::Parser;
use logdash_core::cli::{self, Command};
use logdash_core::logging::{LogFormat, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logdash",
    version,
    about = "logdash: access-log analytics for static dashboards"
)]
struct Cli {
    /// Diagnostic log format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Auto)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    if let Err(e) = cli::run(cli.command) {
        eprintln!("logdash error: {e:#}");
        std::process::exit(1);
    }
}
