use shared::{ActivityMode, MapPoint};

pub const DEFAULT_MAP_CENTER: MapPoint = MapPoint {
    lng: -3.7038,
    lat: 40.4168,
};
pub const DEFAULT_DISTANCE_KM: f64 = 5.0;

const ENV_MAP_CENTER: &str = "COACH_MAP_CENTER";
const ENV_DEFAULT_DISTANCE: &str = "COACH_DEFAULT_DISTANCE_KM";
const ENV_DEFAULT_MODE: &str = "COACH_DEFAULT_MODE";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be `lat,lng`, got `{value}`")]
    InvalidCenter { var: &'static str, value: String },
    #[error("{var} must be a positive number of kilometres, got `{value}`")]
    InvalidDistance { var: &'static str, value: String },
    #[error("{var}: {message}")]
    InvalidMode { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoachConfig {
    /// Geographic anchor of the normalized route plane.
    pub map_center: MapPoint,
    /// Used when a prompt does not mention a distance.
    pub default_distance_km: f64,
    pub default_mode: ActivityMode,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            map_center: DEFAULT_MAP_CENTER,
            default_distance_km: DEFAULT_DISTANCE_KM,
            default_mode: ActivityMode::Run,
        }
    }
}

impl CoachConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAP_CENTER) {
            config.map_center = parse_center(&raw).ok_or(ConfigError::InvalidCenter {
                var: ENV_MAP_CENTER,
                value: raw,
            })?;
        }

        if let Some(raw) = lookup(ENV_DEFAULT_DISTANCE) {
            config.default_distance_km = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|km| km.is_finite() && *km > 0.0)
                .ok_or(ConfigError::InvalidDistance {
                    var: ENV_DEFAULT_DISTANCE,
                    value: raw,
                })?;
        }

        if let Some(raw) = lookup(ENV_DEFAULT_MODE) {
            config.default_mode = raw
                .parse()
                .map_err(|message| ConfigError::InvalidMode {
                    var: ENV_DEFAULT_MODE,
                    message,
                })?;
        }

        Ok(config)
    }
}

fn parse_center(raw: &str) -> Option<MapPoint> {
    let (lat, lng) = raw.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(MapPoint { lng, lat })
}
