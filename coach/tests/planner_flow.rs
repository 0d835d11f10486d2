use coach::{
    CoachConfig, PlannerSession, classify, estimate_minutes,
    map_adapter::{MapError, MapSurface, MapTransform, RouteStyle, render_route},
    synthesize_route,
};
use shared::{ActivityMode, Focus, MapBounds, MapVertex, PointRole, TrainingIntent};

#[derive(Default)]
struct FlakyMap {
    vertices: Vec<MapVertex>,
}

impl MapSurface for FlakyMap {
    fn draw_route(&mut self, vertices: &[MapVertex]) -> Result<(), MapError> {
        self.vertices = vertices.to_vec();
        Ok(())
    }

    fn apply_style(&mut self, _style: &RouteStyle) -> Result<(), MapError> {
        Err(MapError::Layer {
            layer: "route-line".into(),
            message: "style is not loaded yet".into(),
        })
    }

    fn fit_bounds(&mut self, _bounds: &MapBounds) -> Result<(), MapError> {
        Ok(())
    }
}

#[test]
fn documented_prompts_classify_as_expected() {
    let park = classify("Quiero 7 km suaves en parque", ActivityMode::Run);
    assert_eq!(park.mode, ActivityMode::Run);
    assert_eq!(park.distance_km, Some(7.0));
    assert_eq!(park.focus, Focus::Parks);
    assert_eq!(park.training_intent, TrainingIntent::Easy);

    let fast = classify("Dame intervalos rápidos", ActivityMode::Walk);
    assert_eq!(fast.mode, ActivityMode::Run);
    assert_eq!(fast.training_intent, TrainingIntent::Intervals);
    assert!(fast.distance_km.is_none());

    let trail = classify("Un trail con desnivel", ActivityMode::Jog);
    assert_eq!(trail.mode, ActivityMode::Hike);
    assert_eq!(trail.training_intent, TrainingIntent::Trail);
    assert_eq!(trail.focus, Focus::MixedTerrain);
}

#[test]
fn waypoint_thresholds_and_time_estimate() {
    assert_eq!(synthesize_route(10.0, ActivityMode::Run, Focus::Parks).waypoints.len(), 5);
    assert_eq!(synthesize_route(13.0, ActivityMode::Run, Focus::Parks).waypoints.len(), 6);
    assert_eq!(estimate_minutes(8.0, ActivityMode::Run), 42);
}

#[test]
fn reissuing_similar_prompt_overwrites_route() {
    let mut session = PlannerSession::new(CoachConfig::default());
    let before = session.routes().count();

    session.submit_prompt("run 8.01 km near the park");
    session.submit_prompt("run 7.98 km with low traffic");

    let routes: Vec<_> = session.routes().collect();
    assert_eq!(routes.len(), before + 1);
    let coach_route = routes.last().unwrap();
    assert_eq!(coach_route.id, "coach-run-80");
    assert_eq!(coach_route.surface_label, "Low traffic");
}

#[test]
fn active_route_renders_despite_style_failure() {
    let mut session = PlannerSession::default();
    session.submit_prompt("Un trail con desnivel de 10 km");
    let route = session.active_route().unwrap().clone();

    let mut map = FlakyMap::default();
    render_route(&mut map, &session.transform(), &route, session.mode()).unwrap();

    assert_eq!(map.vertices.len(), 5);
    assert_eq!(map.vertices.first().unwrap().role, PointRole::Start);
    assert_eq!(map.vertices.last().unwrap().role, PointRole::End);
    let expected = MapTransform::default().to_geo(&route.waypoints[0]);
    assert_eq!(map.vertices[0].position, expected);
}

#[test]
fn plan_serializes_for_display() {
    let mut session = PlannerSession::default();
    let plan = session.submit_prompt("tempo 6 km con buena luz").unwrap();
    let json = serde_json::to_value(plan).unwrap();

    assert_eq!(json["intent"]["mode"], "run");
    assert_eq!(json["intent"]["focus"], "High lighting");
    assert_eq!(json["intent"]["training_intent"], "tempo");
    assert_eq!(json["route"]["estimated_minutes"], 31);
    assert!(json["routine"].as_array().unwrap().len() >= 3);
}
