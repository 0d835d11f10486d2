use coach::{
    CoachConfig, PlannerSession,
    map_adapter::{MapBootstrap, MapError, MapStatus, MapSurface, MapTicket, RouteStyle, render_route},
};
use seed::{prelude::*, *};
use serde::Deserialize;
use serde_wasm_bindgen::to_value;
use shared::{ActivityMode, Intent, MapBounds, MapVertex, Route, RoutineStep};
use wasm_bindgen::{
    JsCast,
    prelude::{JsValue, wasm_bindgen},
};

const MAP_CONTAINER_ID: &str = "planner-map";

#[wasm_bindgen(module = "/maplibre_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map(container_id: &str, generation: u32, center: JsValue);
    #[wasm_bindgen(js_name = destroyMap)]
    fn destroy_map(generation: u32);
    #[wasm_bindgen(js_name = drawRoute, catch)]
    fn draw_route_js(vertices: JsValue) -> Result<(), JsValue>;
    #[wasm_bindgen(js_name = applyRouteStyle, catch)]
    fn apply_route_style_js(style: JsValue) -> Result<(), JsValue>;
    #[wasm_bindgen(js_name = fitRoute, catch)]
    fn fit_route_js(bounds: JsValue) -> Result<(), JsValue>;
}

pub struct Model {
    page: Page,
    session: PlannerSession,
    prompt: String,
    map: MapBootstrap,
    error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Page {
    Landing,
    Planner,
}

pub enum Msg {
    OpenPlanner,
    BackToLanding,
    PromptChanged(String),
    SubmitPrompt,
    SetMode(ActivityMode),
    SelectRoute(String),
    MapReady { generation: u32 },
    MapFailed { generation: u32, message: String },
}

#[derive(Deserialize)]
struct MapEventPayload {
    generation: u32,
    #[serde(default)]
    message: Option<String>,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::window_event(Ev::from("map-ready"), |event| {
        map_event_payload(event).map(|payload| Msg::MapReady {
            generation: payload.generation,
        })
    }));
    orders.stream(streams::window_event(Ev::from("map-error"), |event| {
        map_event_payload(event).map(|payload| Msg::MapFailed {
            generation: payload.generation,
            message: payload
                .message
                .unwrap_or_else(|| "unknown map error".to_string()),
        })
    }));

    Model {
        page: Page::Landing,
        session: PlannerSession::new(CoachConfig::default()),
        prompt: String::new(),
        map: MapBootstrap::new(),
        error: None,
    }
}

fn map_event_payload(event: web_sys::Event) -> Option<MapEventPayload> {
    let event = event.dyn_into::<web_sys::CustomEvent>().ok()?;
    serde_wasm_bindgen::from_value(event.detail()).ok()
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::OpenPlanner => {
            model.page = Page::Planner;
            start_map(model, orders);
        }
        Msg::BackToLanding => {
            model.page = Page::Landing;
        }
        Msg::PromptChanged(val) => model.prompt = val,
        Msg::SubmitPrompt => {
            if model.session.submit_prompt(&model.prompt).is_some() {
                model.prompt.clear();
                model.error = None;
                redraw_active_route(model);
            }
        }
        Msg::SetMode(mode) => {
            model.session.set_mode(mode);
            redraw_active_route(model);
        }
        Msg::SelectRoute(id) => match model.session.select_route(&id).map(|_| ()) {
            Ok(()) => {
                model.error = None;
                redraw_active_route(model);
            }
            Err(err) => model.error = Some(err.to_string()),
        },
        Msg::MapReady { generation } => {
            if model.map.complete(MapTicket(generation)) {
                web_sys::console::debug_1(&format!("[frontend] map {generation} ready").into());
                redraw_active_route(model);
            }
        }
        Msg::MapFailed {
            generation,
            message,
        } => {
            if model.map.fail(MapTicket(generation), message.clone()) {
                web_sys::console::error_1(
                    &format!("[frontend] map {generation} failed: {message}").into(),
                );
            }
        }
    }
}

/// Starts a map engine bootstrap once the container is in the DOM, tearing
/// down whatever instance an earlier bootstrap created.
fn start_map(model: &mut Model, orders: &mut impl Orders<Msg>) {
    let (ticket, previous) = model.map.begin();
    if let Some(previous) = previous {
        destroy_map(previous.0);
    }
    let center = to_value(&model.session.config().map_center).unwrap_or(JsValue::NULL);
    orders.after_next_render(move |_| {
        web_sys::console::debug_1(&format!("[frontend] init map {}", ticket.0).into());
        init_map(MAP_CONTAINER_ID, ticket.0, center);
    });
}

fn redraw_active_route(model: &Model) {
    if !model.map.is_ready() {
        return;
    }
    let Some(route) = model.session.active_route() else {
        return;
    };
    let mut surface = JsMapSurface;
    if let Err(err) = render_route(
        &mut surface,
        &model.session.transform(),
        route,
        model.session.mode(),
    ) {
        web_sys::console::error_1(&format!("[frontend] failed to draw {}: {err}", route.id).into());
    }
}

struct JsMapSurface;

impl MapSurface for JsMapSurface {
    fn draw_route(&mut self, vertices: &[MapVertex]) -> Result<(), MapError> {
        call_layer("route", vertices, draw_route_js)
    }

    fn apply_style(&mut self, style: &RouteStyle) -> Result<(), MapError> {
        call_layer("route-line", style, apply_route_style_js)
    }

    fn fit_bounds(&mut self, bounds: &MapBounds) -> Result<(), MapError> {
        call_layer("camera", bounds, fit_route_js)
    }
}

fn call_layer<T: serde::Serialize + ?Sized>(
    layer: &str,
    payload: &T,
    call: fn(JsValue) -> Result<(), JsValue>,
) -> Result<(), MapError> {
    let layer_error = |message: String| MapError::Layer {
        layer: layer.to_string(),
        message,
    };
    let value = to_value(payload).map_err(|err| layer_error(err.to_string()))?;
    call(value).map_err(|err| layer_error(format!("{err:?}")))
}

pub fn view(model: &Model) -> Node<Msg> {
    match model.page {
        Page::Landing => view_landing(),
        Page::Planner => view_planner(model),
    }
}

fn view_landing() -> Node<Msg> {
    let feature = |title: &str, body: &str| {
        div![C!["feature-card"], h3![title], p![body]]
    };

    div![
        C!["landing"],
        header![C!["hero"],
            h1!["Tell the coach how you want to move"],
            p!["Describe your session in your own words: distance, pace, parks or trails. Get a route and a workout in one tap."],
            button![
                C!["cta"],
                "Open planner",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::OpenPlanner
                }),
            ],
        ],
        section![
            C!["features"],
            feature("Run, jog, walk or hike", "Switch activity and get routes that fit the way you move."),
            feature("Plain-language prompts", "\"7 km suaves en parque\" or \"fast intervals\" both work."),
            feature("Workouts included", "Every plan ships with a warm-up, a main block and a cool-down."),
        ],
    ]
}

fn view_planner(model: &Model) -> Node<Msg> {
    div![
        C!["planner"],
        nav![
            C!["planner-nav"],
            button![
                "← Back",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::BackToLanding
                }),
            ],
            view_mode_tabs(model.session.mode()),
        ],
        div![
            C!["planner-body"],
            aside![
                C!["sidebar"],
                view_prompt_form(model),
                view_route_list(model),
                model
                    .session
                    .last_plan()
                    .map(|plan| view_plan(&plan.routine, &plan.intent))
                    .unwrap_or_else(|| empty![]),
            ],
            view_map(model.map.status()),
        ],
    ]
}

fn view_mode_tabs(current: ActivityMode) -> Node<Msg> {
    div![
        C!["mode-tabs"],
        ActivityMode::ALL.iter().map(|mode| {
            let mode = *mode;
            button![
                C![IF!(mode == current => "active")],
                mode.label(),
                ev(Ev::Click, move |event| {
                    event.prevent_default();
                    Msg::SetMode(mode)
                }),
            ]
        }),
    ]
}

fn view_prompt_form(model: &Model) -> Node<Msg> {
    form![
        C!["prompt-form"],
        textarea![
            attrs! {
                At::Placeholder => "Quiero 7 km suaves en parque",
                At::Value => model.prompt.as_str(),
                At::SpellCheck => "false",
            },
            input_ev(Ev::Input, Msg::PromptChanged),
        ],
        button![
            "Ask the coach",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::SubmitPrompt
            }),
        ],
        if let Some(error) = &model.error {
            p![C!["error"], error]
        } else {
            empty![]
        }
    ]
}

fn view_route_list(model: &Model) -> Node<Msg> {
    let active = model.session.active_route().map(|route| route.id.clone());
    ul![
        C!["route-list"],
        model.session.routes().map(|route| {
            let is_active = active.as_deref() == Some(route.id.as_str());
            view_route_card(route, is_active)
        }),
    ]
}

fn view_route_card(route: &Route, is_active: bool) -> Node<Msg> {
    let id = route.id.clone();
    li![
        C!["route-card", IF!(is_active => "active")],
        h3![route.title.as_str()],
        p![format!(
            "{:.1} km · {}",
            route.distance_km,
            format_minutes(route.estimated_minutes)
        )],
        div![
            C!["route-tags"],
            span![format!("Safety: {}", route.safety_label)],
            span![route.elevation_label.as_str()],
            span![route.surface_label.as_str()],
        ],
        ev(Ev::Click, move |_| Msg::SelectRoute(id)),
    ]
}

fn view_plan(routine: &[RoutineStep], intent: &Intent) -> Node<Msg> {
    div![
        C!["coach-plan"],
        div![
            C!["intent-chips"],
            span![intent.mode.label()],
            span![intent.training_intent.as_str()],
            span![intent.focus.label()],
            intent
                .distance_km
                .map(|km| span![format!("{km:.1} km")])
                .unwrap_or_else(|| empty![]),
        ],
        ol![
            C!["routine"],
            routine
                .iter()
                .map(|step| li![strong![step.step.as_str()], " ", span![step.detail.as_str()]]),
        ],
    ]
}

fn view_map(status: &MapStatus) -> Node<Msg> {
    div![
        C!["map-panel"],
        div![id![MAP_CONTAINER_ID], C!["map"]],
        map_placeholder(status)
            .map(|text| div![C!["map-placeholder"], text])
            .unwrap_or_else(|| empty![]),
    ]
}

fn map_placeholder(status: &MapStatus) -> Option<&'static str> {
    match status {
        MapStatus::Ready(_) => None,
        MapStatus::Idle | MapStatus::Initializing(_) => Some("Loading map…"),
        MapStatus::Failed { .. } => Some("Map unavailable. Routes and workouts still work."),
    }
}

fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}
