use once_cell::sync::Lazy;
use regex::Regex;
use shared::{ActivityMode, Focus, Intent, TrainingIntent};

pub const KM_PER_MILE: f64 = 1.609;
/// Upper bound for a parsed distance; larger figures are clamped to it.
pub const MAX_DISTANCE_KM: f64 = 500.0;

// Stored as Option so a pattern that fails to compile degrades to "no distance".
static KM_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:km|k|kilómetros)").ok());

static MILE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:mi|millas)").ok());

const WALK_KEYWORDS: &[&str] = &["walk", "camina", "caminar", "pasear", "paseo"];
const JOG_KEYWORDS: &[&str] = &["jog", "trote", "trotar"];
const HIKE_KEYWORDS: &[&str] = &["trail", "sendero", "hike"];
const RUN_KEYWORDS: &[&str] = &["run", "correr", "carrera", "fast", "rápid", "rapid", "interval"];

const INTERVAL_KEYWORDS: &[&str] = &["interval", "series"];
const TEMPO_KEYWORDS: &[&str] = &["tempo", "pace", "ritmo"];
const TRAIL_KEYWORDS: &[&str] = &["trail", "sendero", "elevation", "elevación", "desnivel"];

const PARK_KEYWORDS: &[&str] = &["park", "parque"];
const LIGHTING_KEYWORDS: &[&str] = &["lighting", "ilumina", "luz"];
const TRAFFIC_KEYWORDS: &[&str] = &["traffic", "tráfico", "trafico"];

/// Infer an [`Intent`] from a free-text prompt.
///
/// Never fails: a prompt without any recognised keyword keeps `current_mode`,
/// leaves the distance unset and falls back to an easy, balanced route.
pub fn classify(prompt: &str, current_mode: ActivityMode) -> Intent {
    let text = prompt.to_lowercase();

    let distance_km = extract_distance_km(prompt);
    let mode = infer_mode(&text, current_mode);
    let training_intent = infer_training_intent(&text);
    let focus = infer_focus(&text, training_intent);

    tracing::debug!(
        "classified prompt: mode={mode} distance={distance_km:?} intent={training_intent} focus={focus}"
    );

    Intent {
        mode,
        distance_km,
        focus,
        training_intent,
    }
}

/// Kilometre figures win over mile figures; miles are converted.
pub fn extract_distance_km(prompt: &str) -> Option<f64> {
    let km = match first_number(KM_PATTERN.as_ref(), prompt) {
        Some(km) => km,
        None => first_number(MILE_PATTERN.as_ref(), prompt)? * KM_PER_MILE,
    };
    Some(km.min(MAX_DISTANCE_KM)).filter(|km| *km > 0.0)
}

fn first_number(pattern: Option<&Regex>, prompt: &str) -> Option<f64> {
    let captures = pattern?.captures(prompt)?;
    let raw = captures.get(1)?.as_str().replace(',', ".");
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Checks run in a fixed order and the last one that matches wins.
fn infer_mode(text: &str, current_mode: ActivityMode) -> ActivityMode {
    let checks = [
        (WALK_KEYWORDS, ActivityMode::Walk),
        (JOG_KEYWORDS, ActivityMode::Jog),
        (HIKE_KEYWORDS, ActivityMode::Hike),
        (RUN_KEYWORDS, ActivityMode::Run),
    ];

    let mut mode = current_mode;
    for (keywords, candidate) in checks {
        if contains_any(text, keywords) {
            mode = candidate;
        }
    }
    mode
}

fn infer_training_intent(text: &str) -> TrainingIntent {
    if contains_any(text, INTERVAL_KEYWORDS) {
        TrainingIntent::Intervals
    } else if contains_any(text, TEMPO_KEYWORDS) {
        TrainingIntent::Tempo
    } else if contains_any(text, TRAIL_KEYWORDS) {
        TrainingIntent::Trail
    } else {
        TrainingIntent::Easy
    }
}

fn infer_focus(text: &str, training_intent: TrainingIntent) -> Focus {
    if contains_any(text, PARK_KEYWORDS) {
        Focus::Parks
    } else if contains_any(text, LIGHTING_KEYWORDS) {
        Focus::HighLighting
    } else if contains_any(text, TRAFFIC_KEYWORDS) {
        Focus::LowTraffic
    } else if training_intent == TrainingIntent::Trail {
        Focus::MixedTerrain
    } else {
        Focus::Balanced
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
