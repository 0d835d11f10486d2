use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityMode {
    Run,
    Jog,
    Walk,
    Hike,
}

impl ActivityMode {
    pub const ALL: [ActivityMode; 4] = [Self::Run, Self::Jog, Self::Walk, Self::Hike];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Jog => "jog",
            Self::Walk => "walk",
            Self::Hike => "hike",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Jog => "Jog",
            Self::Walk => "Walk",
            Self::Hike => "Hike",
        }
    }
}

impl fmt::Display for ActivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "run" => Ok(Self::Run),
            "jog" => Ok(Self::Jog),
            "walk" => Ok(Self::Walk),
            "hike" => Ok(Self::Hike),
            other => Err(format!("unknown activity mode `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingIntent {
    Easy,
    Tempo,
    Intervals,
    Trail,
}

impl TrainingIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Tempo => "tempo",
            Self::Intervals => "intervals",
            Self::Trail => "trail",
        }
    }
}

impl fmt::Display for TrainingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short descriptive label attached to a generated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    #[serde(rename = "Parks")]
    Parks,
    #[serde(rename = "High lighting")]
    HighLighting,
    #[serde(rename = "Low traffic")]
    LowTraffic,
    #[serde(rename = "Mixed terrain")]
    MixedTerrain,
    #[serde(rename = "Balanced route")]
    Balanced,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Parks => "Parks",
            Self::HighLighting => "High lighting",
            Self::LowTraffic => "Low traffic",
            Self::MixedTerrain => "Mixed terrain",
            Self::Balanced => "Balanced route",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub mode: ActivityMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub focus: Focus,
    pub training_intent: TrainingIntent,
}

/// Point of a schematic route in the normalized 0–100 plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub title: String,
    pub distance_km: f64,
    pub safety_label: String,
    pub elevation_label: String,
    pub estimated_minutes: u32,
    pub surface_label: String,
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    pub step: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointRole {
    Start,
    Mid,
    End,
}

/// Geographic vertex handed to the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapVertex {
    pub position: MapPoint,
    pub role: PointRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_serialize_lowercase() {
        let json = serde_json::to_string(&ActivityMode::Hike).unwrap();
        assert_eq!(json, "\"hike\"");
    }

    #[test]
    fn focus_serializes_as_label() {
        let json = serde_json::to_string(&Focus::HighLighting).unwrap();
        assert_eq!(json, "\"High lighting\"");
        let back: Focus = serde_json::from_str("\"Balanced route\"").unwrap();
        assert_eq!(back, Focus::Balanced);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(" Walk ".parse::<ActivityMode>(), Ok(ActivityMode::Walk));
        assert!("swim".parse::<ActivityMode>().is_err());
    }

    #[test]
    fn intent_omits_missing_distance() {
        let intent = Intent {
            mode: ActivityMode::Run,
            distance_km: None,
            focus: Focus::Balanced,
            training_intent: TrainingIntent::Easy,
        };
        let json = serde_json::to_value(intent).unwrap();
        assert!(json.get("distance_km").is_none());
        assert_eq!(json["training_intent"], "easy");
    }
}
