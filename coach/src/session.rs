use serde::Serialize;
use shared::{ActivityMode, Intent, Route, RoutineStep};

use crate::classifier::classify;
use crate::config::CoachConfig;
use crate::error::CoachError;
use crate::map_adapter::MapTransform;
use crate::route_book::RouteBook;
use crate::route_synth::synthesize_route;
use crate::routine::synthesize_routine;

/// Everything the coach produced for one prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachPlan {
    pub prompt: String,
    pub intent: Intent,
    pub route: Route,
    pub routine: Vec<RoutineStep>,
}

/// Per-session planner state: selected mode, its routes and the active one.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    config: CoachConfig,
    mode: ActivityMode,
    book: RouteBook,
    active: Option<String>,
    last_plan: Option<CoachPlan>,
}

impl PlannerSession {
    pub fn new(config: CoachConfig) -> Self {
        Self::with_book(config, RouteBook::with_catalog())
    }

    /// Session configured from `COACH_*` environment variables.
    pub fn from_env() -> Result<Self, CoachError> {
        Ok(Self::new(CoachConfig::from_env()?))
    }

    pub fn with_book(config: CoachConfig, book: RouteBook) -> Self {
        let mode = config.default_mode;
        let active = book.first_for(mode).map(|route| route.id.clone());
        Self {
            config,
            mode,
            book,
            active,
            last_plan: None,
        }
    }

    pub fn mode(&self) -> ActivityMode {
        self.mode
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn transform(&self) -> MapTransform {
        MapTransform::new(self.config.map_center)
    }

    /// Switching mode always resets the selection to that mode's first route.
    pub fn set_mode(&mut self, mode: ActivityMode) {
        self.mode = mode;
        self.active = self.book.first_for(mode).map(|route| route.id.clone());
        tracing::debug!("mode set to {mode}, active route {:?}", self.active);
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.book.routes_for(self.mode)
    }

    pub fn active_route(&self) -> Option<&Route> {
        let id = self.active.as_deref()?;
        self.book.find(self.mode, id)
    }

    pub fn select_route(&mut self, id: &str) -> Result<&Route, CoachError> {
        let mode = self.mode;
        let route = self
            .book
            .find(mode, id)
            .ok_or_else(|| CoachError::UnknownRoute {
                id: id.to_string(),
                mode,
            })?;
        self.active = Some(route.id.clone());
        Ok(route)
    }

    pub fn last_plan(&self) -> Option<&CoachPlan> {
        self.last_plan.as_ref()
    }

    /// Run the coach on a prompt. Blank prompts are ignored.
    ///
    /// The generated route is stored under the inferred mode, which becomes the
    /// session mode, and is made active.
    pub fn submit_prompt(&mut self, prompt: &str) -> Option<&CoachPlan> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            tracing::debug!("ignoring blank prompt");
            return None;
        }

        let intent = classify(prompt, self.mode);
        let distance_km = intent.distance_km.unwrap_or(self.config.default_distance_km);
        let route = synthesize_route(distance_km, intent.mode, intent.focus);
        let routine = synthesize_routine(intent.training_intent);

        self.book.upsert(intent.mode, route.clone());
        self.mode = intent.mode;
        self.active = Some(route.id.clone());

        tracing::info!(
            "coach plan ready: {} for {} ({})",
            route.id,
            intent.mode,
            intent.training_intent
        );

        self.last_plan = Some(CoachPlan {
            prompt: prompt.to_string(),
            intent,
            route,
            routine,
        });
        self.last_plan.as_ref()
    }
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new(CoachConfig::default())
    }
}
