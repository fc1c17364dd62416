use crate::db::users::{self, LiftingStats};
use crate::db::Database;
use crate::errors::ServerError;
use rand::Rng;

const MAX_REPS: i64 = 10;
const DEFAULT_REPS: i64 = 5;

// Roughly one set in twelve goes wrong.
const INJURY_ODDS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Bench,
    Squat,
    Deadlift,
}

impl Exercise {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Bench => "bench",
            Exercise::Squat => "squat",
            Exercise::Deadlift => "deadlift",
        }
    }

    fn parse(word: &str) -> Option<Exercise> {
        match word {
            "bench" => Some(Exercise::Bench),
            "squat" => Some(Exercise::Squat),
            "deadlift" => Some(Exercise::Deadlift),
            _ => None,
        }
    }

    fn current(&self, stats: &LiftingStats) -> i64 {
        match self {
            Exercise::Bench => stats.bench,
            Exercise::Squat => stats.squat,
            Exercise::Deadlift => stats.deadlift,
        }
    }

    fn apply(&self, stats: &mut LiftingStats, gain: i64) {
        match self {
            Exercise::Bench => stats.bench += gain,
            Exercise::Squat => stats.squat += gain,
            Exercise::Deadlift => stats.deadlift += gain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftCommand {
    Set { exercise: Exercise, reps: i64 },
    Status,
    Rest,
}

/// Parses slash-command text: an exercise with optional rep count,
/// `status`, or `rest`. Reps are clamped to something a human could do.
pub fn parse_command(text: &str) -> Result<LiftCommand, ServerError> {
    let mut words = text.split_whitespace();

    let head = match words.next() {
        Some(w) => w.to_lowercase(),
        None => return Ok(LiftCommand::Status),
    };

    match head.as_str() {
        "status" => Ok(LiftCommand::Status),
        "rest" => Ok(LiftCommand::Rest),
        word => {
            let exercise = Exercise::parse(word).ok_or_else(|| {
                ServerError::BadRequest(format!(
                    "unknown lift '{word}' (try bench, squat, deadlift, status or rest)"
                ))
            })?;

            let reps = match words.next() {
                Some(n) => n.parse::<i64>().map_err(|_| {
                    ServerError::BadRequest(format!("'{n}' is not a rep count"))
                })?,
                None => DEFAULT_REPS,
            };

            Ok(LiftCommand::Set {
                exercise,
                reps: reps.clamp(1, MAX_REPS),
            })
        }
    }
}

enum SetOutcome {
    Gain(i64),
    Injury(i64),
}

fn perform_set(
    stats: &mut LiftingStats,
    exercise: Exercise,
    reps: i64,
    rng: &mut impl Rng,
) -> SetOutcome {
    if rng.gen_ratio(1, INJURY_ODDS) {
        let damage = rng.gen_range(5..=15);
        stats.health = (stats.health - damage).max(0);
        SetOutcome::Injury(damage)
    } else {
        let gain = rng.gen_range(1..=reps.min(5));
        exercise.apply(stats, gain);
        SetOutcome::Gain(gain)
    }
}

/// Executes one lifting command for the invoking user and returns the
/// line Slack shows back to them.
pub fn run_command(db: &Database, slack_name: &str, text: &str) -> Result<String, ServerError> {
    let command = parse_command(text)?;
    let mut user = users::get_or_create_user(db, slack_name)?;
    let mut rng = rand::thread_rng();

    let reply = match command {
        LiftCommand::Status => {
            let s = &user.lifting;
            format!(
                "{slack_name}: bench {}, squat {}, deadlift {} (total {}), health {}",
                s.bench,
                s.squat,
                s.deadlift,
                s.total(),
                s.health
            )
        }
        LiftCommand::Rest => {
            let recovered = rng.gen_range(5..=10);
            user.lifting.health = (user.lifting.health + recovered).min(100);
            users::update_lifting(db, slack_name, &user.lifting)?;
            format!(
                "{slack_name} takes a rest day. Health up {recovered} to {}",
                user.lifting.health
            )
        }
        LiftCommand::Set { exercise, reps } => {
            if user.lifting.health == 0 {
                return Ok(format!(
                    "{slack_name} is in no state to lift. Try '/lift rest' first."
                ));
            }

            let outcome = perform_set(&mut user.lifting, exercise, reps, &mut rng);
            users::update_lifting(db, slack_name, &user.lifting)?;

            match outcome {
                SetOutcome::Gain(gain) => format!(
                    "{slack_name} put in {reps} reps. {} up {gain} to {} (total {}, health {})",
                    exercise.as_str(),
                    exercise.current(&user.lifting),
                    user.lifting.total(),
                    user.lifting.health
                ),
                SetOutcome::Injury(damage) => format!(
                    "{slack_name} tweaked something on the {}. Health down {damage} to {}. No gains.",
                    exercise.as_str(),
                    user.lifting.health
                ),
            }
        }
    };

    Ok(reply)
}
