mod game;

pub use game::{parse_command, run_command, Exercise, LiftCommand};
