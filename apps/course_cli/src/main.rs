use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{config::load_settings, DispatchOutcome, InteractionController};
use futures::future::join_all;
use shared::{
    domain::{ActionKind, CourseId},
    Catalog,
};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
struct Args {
    /// Optional TOML settings file; missing files are ignored.
    #[arg(long, default_value = "course_client.toml")]
    config: PathBuf,
    #[arg(long)]
    collector_url: Option<String>,
    /// JSON array of course records replacing the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every course and its action controls.
    List,
    Buy {
        course_id: String,
    },
    Enroll {
        course_id: String,
        #[arg(long = "type", value_enum, default_value_t = EnrollArg::FreeTrial)]
        enrollment: EnrollArg,
    },
    /// Fire several actions on one course back to back and follow every event.
    Burst {
        course_id: String,
        #[arg(required = true)]
        actions: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EnrollArg {
    FreeTrial,
    Audit,
}

impl From<EnrollArg> for ActionKind {
    fn from(value: EnrollArg) -> Self {
        match value {
            EnrollArg::FreeTrial => ActionKind::FreeTrialEnrollment,
            EnrollArg::Audit => ActionKind::AuditEnrollment,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)
        .with_context(|| format!("failed to load settings from {}", args.config.display()))?;
    if let Some(url) = args.collector_url {
        settings.collector_url = url;
    }

    let catalog = match &args.catalog {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Catalog::from_json_str(&raw)
                .with_context(|| format!("invalid catalog {}", path.display()))?
        }
        None => Catalog::builtin(),
    };
    let controller = InteractionController::from_settings(catalog, &settings)
        .context("failed to build interaction controller")?;

    match args.command {
        Command::List => print!("{}", render::catalog(&controller)),
        Command::Buy { course_id } => {
            run_single(&controller, CourseId::new(course_id), ActionKind::Purchase).await?
        }
        Command::Enroll {
            course_id,
            enrollment,
        } => run_single(&controller, CourseId::new(course_id), enrollment.into()).await?,
        Command::Burst { course_id, actions } => {
            let kinds = actions
                .iter()
                .map(|raw| {
                    ActionKind::parse(raw).with_context(|| {
                        format!("unknown action '{raw}' (expected buy, free-trial or audit)")
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            run_burst(controller, CourseId::new(course_id), kinds).await?
        }
    }

    Ok(())
}

async fn run_single(
    controller: &InteractionController,
    course_id: CourseId,
    kind: ActionKind,
) -> Result<()> {
    let handle = controller.trigger(&course_id, kind)?;
    let outcome = handle.await.context("dispatch task failed")?;
    println!("{}", render::notification(controller.notification().as_ref()));
    if outcome != DispatchOutcome::Accepted {
        warn!(%course_id, action = %kind, ?outcome, "action did not go through");
    }
    Ok(())
}

async fn run_burst(
    controller: InteractionController,
    course_id: CourseId,
    kinds: Vec<ActionKind>,
) -> Result<()> {
    if controller.catalog().get(&course_id).is_none() {
        bail!("unknown course {course_id}");
    }

    let mut stream = BroadcastStream::new(controller.subscribe());
    let printer = tokio::spawn(async move {
        while let Some(item) = stream.next().await {
            match item {
                Ok(event) => println!("{}", render::event(&event)),
                Err(err) => warn!(error = %err, "event printer fell behind"),
            }
        }
    });

    let handles = kinds
        .into_iter()
        .map(|kind| controller.trigger(&course_id, kind))
        .collect::<Result<Vec<_>, _>>()?;
    for outcome in join_all(handles).await {
        outcome.context("dispatch task failed")?;
    }

    println!(
        "visible: {}",
        render::notification(controller.notification().as_ref())
    );
    // The printer ends once the pending dismissal fires and every sender is gone.
    drop(controller);
    printer.await.context("event printer failed")?;
    Ok(())
}
