use std::{io, process::ExitCode};

use clap::Parser;
use monkey_lexer::{errors::errors::format_error, logger::Logger, repl};

#[derive(Parser)]
#[command(name = "monkey-lexer")]
#[command(version, about = "Echoes the tokens of each line typed at the prompt")]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[arg(long, default_value = repl::PROMPT, help = "Prompt written before each line is read")]
    prompt: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    Logger::init(args.debug);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match repl::start(stdin.lock(), &mut stdout, &args.prompt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
