mod cli;
mod convert_cmd;
mod logging;
mod preview_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        cli::Commands::Preview {
            ref extract,
            ref format,
        } => preview_cmd::run(extract, format),
        cli::Commands::Convert {
            ref extract,
            ref output,
            ref sheet_prefix,
            plain,
        } => convert_cmd::run(extract, output, sheet_prefix, plain),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
