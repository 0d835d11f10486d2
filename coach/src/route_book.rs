use std::collections::BTreeMap;

use shared::{ActivityMode, Route};

use crate::catalog::catalog_routes;

/// Routes available per activity mode: the static catalog, then coach routes.
#[derive(Debug, Clone)]
pub struct RouteBook {
    catalog: BTreeMap<ActivityMode, Vec<Route>>,
    coached: BTreeMap<ActivityMode, Vec<Route>>,
}

impl Default for RouteBook {
    fn default() -> Self {
        Self::with_catalog()
    }
}

impl RouteBook {
    pub fn with_catalog() -> Self {
        let catalog = ActivityMode::ALL
            .into_iter()
            .map(|mode| (mode, catalog_routes(mode)))
            .collect();
        Self {
            catalog,
            coached: BTreeMap::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            catalog: BTreeMap::new(),
            coached: BTreeMap::new(),
        }
    }

    /// Stores a coach route under `mode`, replacing an entry with the same id in place.
    pub fn upsert(&mut self, mode: ActivityMode, route: Route) {
        let routes = self.coached.entry(mode).or_default();
        match routes.iter_mut().find(|existing| existing.id == route.id) {
            Some(existing) => {
                tracing::debug!("replacing coach route {} for {mode}", route.id);
                *existing = route;
            }
            None => routes.push(route),
        }
    }

    pub fn routes_for(&self, mode: ActivityMode) -> impl Iterator<Item = &Route> {
        let catalog = self.catalog.get(&mode).into_iter().flatten();
        let coached = self.coached.get(&mode).into_iter().flatten();
        catalog.chain(coached)
    }

    pub fn first_for(&self, mode: ActivityMode) -> Option<&Route> {
        self.routes_for(mode).next()
    }

    pub fn find(&self, mode: ActivityMode, id: &str) -> Option<&Route> {
        self.routes_for(mode).find(|route| route.id == id)
    }

    pub fn coached_count(&self, mode: ActivityMode) -> usize {
        self.coached.get(&mode).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_synth::synthesize_route;
    use shared::Focus;

    #[test]
    fn test_catalog_comes_before_coach_routes() {
        let mut book = RouteBook::with_catalog();
        let coach = synthesize_route(7.0, ActivityMode::Run, Focus::Parks);
        book.upsert(ActivityMode::Run, coach.clone());

        let ids: Vec<&str> = book
            .routes_for(ActivityMode::Run)
            .map(|route| route.id.as_str())
            .collect();
        assert_eq!(ids.last(), Some(&coach.id.as_str()));
        assert!(ids[0].starts_with("catalog-run-"));
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let mut book = RouteBook::empty();
        book.upsert(ActivityMode::Jog, synthesize_route(5.01, ActivityMode::Jog, Focus::Parks));
        book.upsert(
            ActivityMode::Jog,
            synthesize_route(4.99, ActivityMode::Jog, Focus::LowTraffic),
        );

        assert_eq!(book.coached_count(ActivityMode::Jog), 1);
        let route = book.first_for(ActivityMode::Jog).unwrap();
        assert_eq!(route.surface_label, "Low traffic");
    }

    #[test]
    fn test_upsert_keeps_position_on_replace() {
        let mut book = RouteBook::empty();
        book.upsert(ActivityMode::Walk, synthesize_route(3.0, ActivityMode::Walk, Focus::Parks));
        book.upsert(ActivityMode::Walk, synthesize_route(6.0, ActivityMode::Walk, Focus::Parks));
        book.upsert(
            ActivityMode::Walk,
            synthesize_route(3.0, ActivityMode::Walk, Focus::HighLighting),
        );

        let routes: Vec<&Route> = book.routes_for(ActivityMode::Walk).collect();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].surface_label, "High lighting");
        assert_eq!(routes[1].distance_km, 6.0);
    }

    #[test]
    fn test_modes_are_isolated() {
        let mut book = RouteBook::empty();
        book.upsert(ActivityMode::Hike, synthesize_route(8.0, ActivityMode::Hike, Focus::Parks));
        assert!(book.first_for(ActivityMode::Run).is_none());
        assert!(book.find(ActivityMode::Hike, "coach-hike-80").is_some());
        assert!(book.find(ActivityMode::Run, "coach-hike-80").is_none());
    }
}
