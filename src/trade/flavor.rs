use crate::slack::{Attachment, Message};
use rand::Rng;

/// The act-three map vendor the bot roleplays when the market has
/// nothing new to report.
pub const SPEAKER: &str = "Hargan";
pub const SPEAKER_COLOR: &str = "#af8159";

const LINES: &[&str] = &[
    "Got any maps?",
    "Nothing new on the market. Typical.",
    "Back in my day we traded with alteration orbs and we were grateful.",
    "I checked the shops again. Nobody's selling anything you'd want.",
    "You know what sells? Maps. You know what you're watching for? Not maps.",
    "Still nothing. Maybe lower your standards.",
    "The economy sleeps and so should you.",
    "I once sold a Kaom's Heart for three alchs. We don't talk about it.",
    "If something worth buying shows up, you'll hear it here first.",
    "All quiet. Even the scammers have gone to bed.",
];

const INITIAL_SASS: u32 = 100;

/// Mood counter deciding when Hargan pipes up. Lives for the process,
/// owned by the poll loop; never persisted. The random threshold makes
/// the gap between lines geometric rather than a fixed cadence.
pub struct FlavorState {
    sass_level: u32,
}

impl FlavorState {
    pub fn new() -> Self {
        Self {
            sass_level: INITIAL_SASS,
        }
    }

    /// Nothing before 9am, nothing after... well, 3am. He keeps odd
    /// hours.
    pub fn hour_allows(hour: u32) -> bool {
        hour >= 9 || hour < 3
    }

    /// One quiet cycle (no new-item notification went out). Returns a
    /// line to post if the mood boiled over, which also resets it.
    pub fn tick(&mut self, hour: u32, rng: &mut impl Rng) -> Option<&'static str> {
        if !Self::hour_allows(hour) {
            return None;
        }

        let threshold = rng.gen_range(120..=280);
        if self.sass_level > threshold {
            self.sass_level = 0;
            Some(LINES[rng.gen_range(0..LINES.len())])
        } else {
            self.sass_level += rng.gen_range(1..=3);
            None
        }
    }
}

impl Default for FlavorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Packages a line as the single-attachment message Hargan posts.
pub fn flavor_message(line: &str) -> Message {
    Message::with_attachments(vec![Attachment {
        title: Some(SPEAKER.to_string()),
        color: Some(SPEAKER_COLOR.to_string()),
        text: Some(line.to_string()),
        ..Attachment::new(line)
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_speaks_during_the_quiet_hours() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = FlavorState::new();
        state.sass_level = 10_000;

        for hour in 3..9 {
            for _ in 0..50 {
                assert!(state.tick(hour, &mut rng).is_none());
            }
        }
        // and the mood did not move while gated
        assert_eq!(state.sass_level, 10_000);
    }

    #[test]
    fn speaks_within_a_bounded_number_of_quiet_cycles() {
        // worst case: threshold always 280, increment always 1, so the
        // counter must cross within 282 ticks of a reset
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = FlavorState::new();

        let mut gaps = Vec::new();
        let mut since_last = 0u32;
        for _ in 0..5_000 {
            since_last += 1;
            if state.tick(12, &mut rng).is_some() {
                gaps.push(since_last);
                since_last = 0;
            }
        }

        assert!(gaps.len() >= 2, "expected repeated emissions, got {gaps:?}");
        assert!(gaps.iter().all(|&g| g <= 282), "gap too long: {gaps:?}");
    }

    #[test]
    fn emitting_resets_the_mood() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = FlavorState::new();
        state.sass_level = 10_000;

        let line = state.tick(12, &mut rng);
        assert!(line.is_some());
        assert_eq!(state.sass_level, 0);
    }

    #[test]
    fn quiet_ticks_raise_the_mood_by_one_to_three() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = FlavorState::new();
        state.sass_level = 0;

        for expected_min in 1..=30 {
            let before = state.sass_level;
            assert!(state.tick(12, &mut rng).is_none());
            let bump = state.sass_level - before;
            assert!((1..=3).contains(&bump));
            assert!(state.sass_level >= expected_min);
        }
    }

    #[test]
    fn hargan_message_carries_the_line_and_the_accent_color() {
        let msg = flavor_message("Got any maps?");
        assert_eq!(msg.attachments.len(), 1);
        let a = &msg.attachments[0];
        assert_eq!(a.title.as_deref(), Some(SPEAKER));
        assert_eq!(a.color.as_deref(), Some(SPEAKER_COLOR));
        assert_eq!(a.text.as_deref(), Some("Got any maps?"));
    }
}
