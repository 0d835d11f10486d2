use shared::{ActivityMode, Route, Waypoint};

struct CatalogEntry {
    slug: &'static str,
    title: &'static str,
    distance_km: f64,
    safety: &'static str,
    elevation: &'static str,
    minutes: u32,
    surface: &'static str,
    points: &'static [(f64, f64, Option<&'static str>)],
}

const RUN: &[CatalogEntry] = &[
    CatalogEntry {
        slug: "riverside-loop",
        title: "Riverside loop",
        distance_km: 6.4,
        safety: "High",
        elevation: "+35 m",
        minutes: 33,
        surface: "Paved path",
        points: &[
            (16.0, 70.0, Some("Bridge")),
            (30.0, 52.0, None),
            (52.0, 44.0, Some("Boathouse")),
            (70.0, 58.0, None),
            (84.0, 40.0, Some("Finish")),
        ],
    },
    CatalogEntry {
        slug: "stadium-tempo",
        title: "Stadium tempo",
        distance_km: 8.0,
        safety: "Medium",
        elevation: "+60 m",
        minutes: 42,
        surface: "Mixed",
        points: &[
            (22.0, 28.0, Some("Stadium")),
            (44.0, 36.0, None),
            (58.0, 62.0, None),
            (78.0, 70.0, Some("Finish")),
        ],
    },
];

const JOG: &[CatalogEntry] = &[CatalogEntry {
    slug: "garden-circuit",
    title: "Garden circuit",
    distance_km: 4.2,
    safety: "High",
    elevation: "+20 m",
    minutes: 27,
    surface: "Gravel",
    points: &[
        (30.0, 66.0, Some("Gate")),
        (42.0, 42.0, None),
        (64.0, 38.0, Some("Fountain")),
        (70.0, 60.0, Some("Finish")),
    ],
}];

const WALK: &[CatalogEntry] = &[
    CatalogEntry {
        slug: "old-town-stroll",
        title: "Old town stroll",
        distance_km: 3.1,
        safety: "High",
        elevation: "+15 m",
        minutes: 36,
        surface: "Cobblestone",
        points: &[
            (40.0, 76.0, Some("Plaza")),
            (46.0, 56.0, None),
            (58.0, 46.0, Some("Market")),
            (62.0, 30.0, Some("Finish")),
        ],
    },
    CatalogEntry {
        slug: "lakeside-walk",
        title: "Lakeside walk",
        distance_km: 5.0,
        safety: "High",
        elevation: "+10 m",
        minutes: 58,
        surface: "Boardwalk",
        points: &[
            (18.0, 48.0, Some("Pier")),
            (36.0, 34.0, None),
            (60.0, 30.0, None),
            (80.0, 46.0, Some("Finish")),
        ],
    },
];

const HIKE: &[CatalogEntry] = &[CatalogEntry {
    slug: "ridge-trail",
    title: "Ridge trail",
    distance_km: 11.5,
    safety: "Remote",
    elevation: "+420 m",
    minutes: 121,
    surface: "Trail",
    points: &[
        (14.0, 84.0, Some("Trailhead")),
        (28.0, 62.0, None),
        (46.0, 40.0, Some("Viewpoint")),
        (64.0, 30.0, None),
        (86.0, 16.0, Some("Summit")),
    ],
}];

fn entries(mode: ActivityMode) -> &'static [CatalogEntry] {
    match mode {
        ActivityMode::Run => RUN,
        ActivityMode::Jog => JOG,
        ActivityMode::Walk => WALK,
        ActivityMode::Hike => HIKE,
    }
}

/// Built-in routes shown for a mode before any coach route.
pub fn catalog_routes(mode: ActivityMode) -> Vec<Route> {
    entries(mode)
        .iter()
        .map(|entry| Route {
            id: format!("catalog-{mode}-{}", entry.slug),
            title: entry.title.to_string(),
            distance_km: entry.distance_km,
            safety_label: entry.safety.to_string(),
            elevation_label: entry.elevation.to_string(),
            estimated_minutes: entry.minutes,
            surface_label: entry.surface.to_string(),
            waypoints: entry
                .points
                .iter()
                .map(|(x, y, label)| Waypoint {
                    x: *x,
                    y: *y,
                    label: label.map(str::to_string),
                })
                .collect(),
        })
        .collect()
}
