use shared::{RoutineStep, TrainingIntent};

const EASY: &[(&str, &str)] = &[
    ("Warm-up", "10 min brisk walk or very easy jog"),
    ("Main block", "30 min conversational pace, nose breathing"),
    ("Cool-down", "5 min walk + 5 min calf and hip stretches"),
];

const TEMPO: &[(&str, &str)] = &[
    ("Warm-up", "12 min easy + 4 x 20 s strides"),
    ("Tempo block", "2 x 12 min at comfortably hard pace, 3 min easy between"),
    ("Cool-down", "10 min easy jog, then light stretching"),
];

const INTERVALS: &[(&str, &str)] = &[
    ("Warm-up", "15 min easy + mobility drills"),
    ("Intervals", "6 x 400 m fast, 90 s walk or jog recovery"),
    ("Float", "4 x 1 min steady, 1 min easy"),
    ("Cool-down", "10 min easy, finish with a walk"),
];

const TRAIL: &[(&str, &str)] = &[
    ("Warm-up", "10 min easy on flat ground"),
    ("Climbs", "5 x 2 min uphill at strong effort, walk back down"),
    ("Rolling terrain", "20 min steady, power-hike the steep parts"),
    ("Cool-down", "10 min easy + ankle mobility"),
];

/// Fixed workout for a training intent; distance and mode play no part.
pub fn synthesize_routine(intent: TrainingIntent) -> Vec<RoutineStep> {
    let steps = match intent {
        TrainingIntent::Easy => EASY,
        TrainingIntent::Tempo => TEMPO,
        TrainingIntent::Intervals => INTERVALS,
        TrainingIntent::Trail => TRAIL,
    };

    steps
        .iter()
        .map(|(step, detail)| RoutineStep {
            step: (*step).to_string(),
            detail: (*detail).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INTENTS: [TrainingIntent; 4] = [
        TrainingIntent::Easy,
        TrainingIntent::Tempo,
        TrainingIntent::Intervals,
        TrainingIntent::Trail,
    ];

    #[test]
    fn test_routines_have_three_or_four_steps() {
        for intent in ALL_INTENTS {
            let steps = synthesize_routine(intent);
            assert!((3..=4).contains(&steps.len()), "{intent}: {}", steps.len());
        }
    }

    #[test]
    fn test_routines_open_with_warm_up_and_close_with_cool_down() {
        for intent in ALL_INTENTS {
            let steps = synthesize_routine(intent);
            assert_eq!(steps.first().unwrap().step, "Warm-up");
            assert_eq!(steps.last().unwrap().step, "Cool-down");
        }
    }

    #[test]
    fn test_routines_are_distinct() {
        let easy = synthesize_routine(TrainingIntent::Easy);
        let intervals = synthesize_routine(TrainingIntent::Intervals);
        assert_ne!(easy, intervals);
        assert_eq!(intervals[1].step, "Intervals");
    }

    #[test]
    fn test_routine_is_stable() {
        assert_eq!(
            synthesize_routine(TrainingIntent::Tempo),
            synthesize_routine(TrainingIntent::Tempo)
        );
    }
}
