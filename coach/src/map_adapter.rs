use serde::Serialize;
use shared::{ActivityMode, MapBounds, MapPoint, MapVertex, PointRole, Route, Waypoint};

use crate::config::DEFAULT_MAP_CENTER;

/// Degrees per unit of the normalized 0–100 plane.
pub const PLANE_SCALE_DEG: f64 = 0.00075;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("map engine failed to initialize: {0}")]
    Init(String),
    #[error("map layer `{layer}` rejected update: {message}")]
    Layer { layer: String, message: String },
}

/// Linear offset transform from the route plane to geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    pub center: MapPoint,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
        }
    }
}

impl MapTransform {
    pub fn new(center: MapPoint) -> Self {
        Self { center }
    }

    pub fn to_geo(&self, point: &Waypoint) -> MapPoint {
        MapPoint {
            lng: self.center.lng + (point.x - 50.0) * PLANE_SCALE_DEG,
            lat: self.center.lat + (50.0 - point.y) * PLANE_SCALE_DEG,
        }
    }

    pub fn vertices(&self, route: &Route) -> Vec<MapVertex> {
        let count = route.waypoints.len();
        route
            .waypoints
            .iter()
            .enumerate()
            .map(|(idx, point)| MapVertex {
                position: self.to_geo(point),
                role: point_role(idx, count),
                label: point.label.clone(),
            })
            .collect()
    }
}

pub fn point_role(idx: usize, count: usize) -> PointRole {
    if idx == 0 {
        PointRole::Start
    } else if idx + 1 == count {
        PointRole::End
    } else {
        PointRole::Mid
    }
}

pub fn bounds(vertices: &[MapVertex]) -> Option<MapBounds> {
    let first = vertices.first()?.position;
    let initial = MapBounds {
        min_lng: first.lng,
        max_lng: first.lng,
        min_lat: first.lat,
        max_lat: first.lat,
    };
    Some(vertices.iter().fold(initial, |acc, vertex| MapBounds {
        min_lng: acc.min_lng.min(vertex.position.lng),
        max_lng: acc.max_lng.max(vertex.position.lng),
        min_lat: acc.min_lat.min(vertex.position.lat),
        max_lat: acc.max_lat.max(vertex.position.lat),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStyle {
    pub line_color: &'static str,
    pub line_width: f64,
    pub dashed: bool,
}

impl RouteStyle {
    pub fn for_mode(mode: ActivityMode) -> Self {
        match mode {
            ActivityMode::Run => Self {
                line_color: "#ff5a36",
                line_width: 5.0,
                dashed: false,
            },
            ActivityMode::Jog => Self {
                line_color: "#ffb020",
                line_width: 4.5,
                dashed: false,
            },
            ActivityMode::Walk => Self {
                line_color: "#2f9e6b",
                line_width: 4.0,
                dashed: true,
            },
            ActivityMode::Hike => Self {
                line_color: "#7b5cff",
                line_width: 4.0,
                dashed: true,
            },
        }
    }
}

/// Rendering surface the core draws on. Implemented by the map bridge in the
/// browser and by fakes in tests.
pub trait MapSurface {
    fn draw_route(&mut self, vertices: &[MapVertex]) -> Result<(), MapError>;

    fn apply_style(&mut self, style: &RouteStyle) -> Result<(), MapError>;

    fn fit_bounds(&mut self, bounds: &MapBounds) -> Result<(), MapError>;
}

/// Draw `route` on `surface`.
///
/// Only a failure to draw the line is reported. Styling and camera fitting
/// are cosmetic: their failures are logged and dropped.
pub fn render_route<S: MapSurface + ?Sized>(
    surface: &mut S,
    transform: &MapTransform,
    route: &Route,
    mode: ActivityMode,
) -> Result<(), MapError> {
    let vertices = transform.vertices(route);
    surface.draw_route(&vertices)?;

    if let Err(err) = surface.apply_style(&RouteStyle::for_mode(mode)) {
        tracing::debug!("ignoring route style failure for {}: {err}", route.id);
    }
    if let Some(bounds) = bounds(&vertices) {
        if let Err(err) = surface.fit_bounds(&bounds) {
            tracing::debug!("ignoring camera fit failure for {}: {err}", route.id);
        }
    }
    Ok(())
}

/// Identifies one map engine initialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapTicket(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    Idle,
    Initializing(MapTicket),
    Ready(MapTicket),
    /// Permanent until the next [`MapBootstrap::begin`].
    Failed { ticket: MapTicket, message: String },
}

/// Tracks map engine bootstrap so that a newer attempt supersedes older ones.
#[derive(Debug, Clone)]
pub struct MapBootstrap {
    next: u32,
    status: MapStatus,
}

impl Default for MapBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapBootstrap {
    pub fn new() -> Self {
        Self {
            next: 1,
            status: MapStatus::Idle,
        }
    }

    /// Starts a new attempt. Returns its ticket and the ticket of the instance
    /// that must be torn down, if any.
    pub fn begin(&mut self) -> (MapTicket, Option<MapTicket>) {
        let ticket = MapTicket(self.next);
        self.next = self.next.wrapping_add(1);

        let previous = match &self.status {
            MapStatus::Idle => None,
            MapStatus::Initializing(prev) | MapStatus::Ready(prev) => Some(*prev),
            MapStatus::Failed { ticket, .. } => Some(*ticket),
        };
        if let Some(prev) = previous {
            tracing::debug!("map bootstrap {} supersedes {}", ticket.0, prev.0);
        }
        self.status = MapStatus::Initializing(ticket);
        (ticket, previous)
    }

    /// Marks `ticket` ready. Returns false when the ticket is stale.
    ///
    /// A failure reported for the current ticket is not final: the engine may
    /// still finish loading the same instance, which then becomes ready.
    pub fn complete(&mut self, ticket: MapTicket) -> bool {
        let current = match &self.status {
            MapStatus::Initializing(current) => Some(*current),
            MapStatus::Failed { ticket: current, .. } => Some(*current),
            MapStatus::Idle | MapStatus::Ready(_) => None,
        };
        if current != Some(ticket) {
            tracing::debug!("ignoring stale map completion {}", ticket.0);
            return false;
        }
        self.status = MapStatus::Ready(ticket);
        true
    }

    /// Records a failed attempt. Returns false when the ticket is stale.
    pub fn fail(&mut self, ticket: MapTicket, message: impl Into<String>) -> bool {
        if self.status != MapStatus::Initializing(ticket) {
            tracing::debug!("ignoring stale map failure {}", ticket.0);
            return false;
        }
        let message = message.into();
        tracing::warn!("{}", MapError::Init(message.clone()));
        self.status = MapStatus::Failed { ticket, message };
        true
    }

    pub fn status(&self) -> &MapStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status, MapStatus::Ready(_))
    }
}
