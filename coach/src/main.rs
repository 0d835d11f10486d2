use clap::Parser;
use coach::{PlannerSession, gpx_export::encode_route_as_gpx};
use serde::Serialize;
use shared::{ActivityMode, Route};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "route-coach",
    author,
    version,
    about = "Turn a free-text training request into a schematic route and workout"
)]
struct Args {
    /// Activity mode used when the prompt does not name one (defaults to COACH_DEFAULT_MODE)
    #[arg(long)]
    mode: Option<ActivityMode>,

    /// Print the generated route as a base64 GPX document instead of JSON
    #[arg(long)]
    gpx: bool,

    /// List the routes available for the resulting mode
    #[arg(long)]
    routes: bool,

    /// Prompt, e.g. "Quiero 7 km suaves en parque"
    prompt: Vec<String>,
}

#[derive(Serialize)]
struct RouteListing<'a> {
    mode: ActivityMode,
    active: Option<&'a str>,
    routes: Vec<&'a Route>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coach=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut session = PlannerSession::from_env()?;
    tracing::debug!("loaded config {:?}", session.config());

    if let Some(mode) = args.mode {
        session.set_mode(mode);
    }

    let prompt = args.prompt.join(" ");
    let plan = session.submit_prompt(&prompt).cloned();
    if plan.is_none() && !args.routes {
        tracing::warn!("empty prompt, nothing to plan");
    }

    if args.routes {
        let listing = RouteListing {
            mode: session.mode(),
            active: session.active_route().map(|route| route.id.as_str()),
            routes: session.routes().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let Some(plan) = plan else {
        return Ok(());
    };

    if args.gpx {
        println!("{}", encode_route_as_gpx(&plan.route, &session.transform())?);
    } else {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
