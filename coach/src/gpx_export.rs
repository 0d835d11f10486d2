use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use shared::{MapVertex, Route};

use crate::error::CoachError;
use crate::map_adapter::MapTransform;

const CREATOR: &str = "route_coach";

/// Encode the route's geographic polyline as a base64 GPX 1.1 track.
pub fn encode_route_as_gpx(route: &Route, transform: &MapTransform) -> Result<String, CoachError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.into()),
        ..Default::default()
    };
    let mut track = Track {
        name: Some(route.title.clone()),
        ..Default::default()
    };

    let mut segment = TrackSegment::new();
    for waypoint in transform.vertices(route).iter().map(to_waypoint) {
        segment.points.push(waypoint);
    }
    track.segments.push(segment);
    gpx.tracks.push(track);

    let mut buffer = Vec::new();
    gpx::write(&gpx, &mut buffer)?;
    Ok(BASE64.encode(buffer))
}

fn to_waypoint(vertex: &MapVertex) -> Waypoint {
    let mut waypoint = Waypoint::new(Point::new(vertex.position.lng, vertex.position.lat));
    waypoint.name = vertex.label.clone();
    waypoint
}
