//! Console glue: argument parsing, the text frontend and the play-again
//! session loop.

pub mod args;
pub mod console;
pub mod session;

pub use args::{parse_args, CliArgs, Command, USAGE};
pub use console::{Console, RULES};
pub use session::{run_session, PLAY_AGAIN_QUESTION};
