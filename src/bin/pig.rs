//! pig: play the dice game Pig on the terminal.

use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use std::process;

use rust_pig::cli::{parse_args, run_session, Command, Console, USAGE};

fn main() {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Play(cli)) => cli,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run `pig --help` for usage.");
            process::exit(2);
        }
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());

    if let Some(path) = &cli.event_log {
        let file = OpenOptions::new().create(true).append(true).open(path);
        match file {
            Ok(file) => console = console.with_event_log(Box::new(BufWriter::new(file))),
            Err(err) => {
                eprintln!("Failed to open event log {}: {err}", path.display());
                process::exit(1);
            }
        }
    }

    if let Err(err) = run_session(&cli, &mut console) {
        eprintln!("{err}");
        process::exit(1);
    }
}
