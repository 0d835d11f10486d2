use shared::{ActivityMode, Focus, Route, Waypoint};

/// Routes above this distance get an extra point before the finish.
const LONG_ROUTE_KM: f64 = 9.0;
/// Routes above this distance also get an extra point after the start.
const EXTRA_LONG_ROUTE_KM: f64 = 12.0;

pub fn pace_minutes_per_km(mode: ActivityMode) -> f64 {
    match mode {
        ActivityMode::Walk => 11.5,
        ActivityMode::Run => 5.2,
        ActivityMode::Jog => 6.5,
        ActivityMode::Hike => 10.5,
    }
}

pub fn estimate_minutes(distance_km: f64, mode: ActivityMode) -> u32 {
    (distance_km * pace_minutes_per_km(mode)).round() as u32
}

/// Same mode and same distance to one decimal give the same id.
pub fn route_id(distance_km: f64, mode: ActivityMode) -> String {
    let tenths = (distance_km * 10.0).round() as i64;
    format!("coach-{mode}-{tenths}")
}

pub fn elevation_label(mode: ActivityMode) -> &'static str {
    match mode {
        ActivityMode::Hike => "+200 m",
        ActivityMode::Run => "+80 m",
        ActivityMode::Jog | ActivityMode::Walk => "+40 m",
    }
}

pub fn surface_label(mode: ActivityMode, focus: Focus) -> &'static str {
    match mode {
        ActivityMode::Hike => "Trail",
        _ => focus.label(),
    }
}

/// Build a schematic coach route for the requested distance.
///
/// The polyline is not a path over a road network: a fixed four point shape
/// is stretched with extra points once the distance crosses 9 km and 12 km.
pub fn synthesize_route(distance_km: f64, mode: ActivityMode, focus: Focus) -> Route {
    let waypoints = shape_waypoints(distance_km);
    let route = Route {
        id: route_id(distance_km, mode),
        title: format!("Coach {} · {distance_km:.1} km", mode.label()),
        distance_km,
        safety_label: safety_label(focus).to_string(),
        elevation_label: elevation_label(mode).to_string(),
        estimated_minutes: estimate_minutes(distance_km, mode),
        surface_label: surface_label(mode, focus).to_string(),
        waypoints,
    };

    tracing::info!(
        "synthesized route {} ({:.1} km, {} min, {} waypoints)",
        route.id,
        route.distance_km,
        route.estimated_minutes,
        route.waypoints.len()
    );
    route
}

fn safety_label(focus: Focus) -> &'static str {
    match focus {
        Focus::HighLighting | Focus::Parks => "High",
        Focus::LowTraffic | Focus::Balanced => "Medium",
        Focus::MixedTerrain => "Remote",
    }
}

fn shape_waypoints(distance_km: f64) -> Vec<Waypoint> {
    let mut points = vec![
        Waypoint::labeled(20.0, 72.0, "Start"),
        Waypoint::new(38.0, 48.0),
        Waypoint::new(60.0, 56.0),
        Waypoint::labeled(74.0, 34.0, "Finish"),
    ];

    if distance_km > LONG_ROUTE_KM {
        let finish = points.len() - 1;
        points.insert(finish, Waypoint::labeled(72.0, 40.0, "Turnaround"));
        if let Some(last) = points.last_mut() {
            last.x = 82.0;
            last.y = 22.0;
        }
    }

    if distance_km > EXTRA_LONG_ROUTE_KM {
        points.insert(1, Waypoint::new(24.0, 58.0));
    }

    points
}
