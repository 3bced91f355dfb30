//! Subcommand handlers
//!
//! Handlers build an [`Outcome`] and leave printing to `main`, so they can be
//! driven from tests.

use anyhow::Context;
use clap::ArgMatches;
use itpgen_catalog::EquipmentPair;
use itpgen_engine::{itp_markdown, mos_markdown, DocumentEngine, EngineConfig};
use itpgen_project::{
    DocumentStore, MemoryStore, ProjectFilter, ProjectId, ProjectSession, ProjectStatus,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Which document to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentKind {
    Itp,
    Mos,
}

/// Rendered command output
#[derive(Debug)]
pub(crate) struct Outcome {
    pub(crate) text: String,
    pub(crate) destination: Option<PathBuf>,
    pub(crate) success: bool,
}

impl Outcome {
    fn stdout(text: String) -> Self {
        Self {
            text,
            destination: None,
            success: true,
        }
    }

    /// Print or write the output and map success to an exit code
    pub(crate) async fn emit(self) -> anyhow::Result<ExitCode> {
        match &self.destination {
            Some(path) => {
                tokio::fs::write(path, &self.text)
                    .await
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!("Wrote {}", path.display());
            }
            None => print!("{}", self.text),
        }
        Ok(if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

async fn open_store(path: &Path) -> anyhow::Result<Arc<MemoryStore>> {
    let store = MemoryStore::load(path)
        .await
        .with_context(|| format!("loading store {}", path.display()))?;
    tracing::debug!("Loaded {} projects from {}", store.len(), path.display());
    Ok(Arc::new(store))
}

fn engine_for(config: Option<&PathBuf>) -> anyhow::Result<DocumentEngine> {
    let config = match config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    Ok(DocumentEngine::new(config))
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    args: &'a ArgMatches,
    name: &str,
) -> anyhow::Result<&'a T> {
    args.get_one::<T>(name)
        .with_context(|| format!("missing --{name}"))
}

/// `itp` / `mos`
pub(crate) async fn document(kind: DocumentKind, args: &ArgMatches) -> anyhow::Result<Outcome> {
    let store = open_store(required::<PathBuf>(args, "store")?).await?;
    let id = ProjectId::from(required::<String>(args, "project")?.as_str());
    let engine = engine_for(args.get_one::<PathBuf>("config"))?;
    let session = ProjectSession::new(store, engine.cache());

    let set = engine.open(&session, &id).await?;
    let json = args.get_flag("json");
    let text = match (kind, json) {
        (DocumentKind::Itp, false) => itp_markdown(&set.itp),
        (DocumentKind::Mos, false) => mos_markdown(&set.mos),
        (DocumentKind::Itp, true) => serde_json::to_string_pretty(&set.itp)? + "\n",
        (DocumentKind::Mos, true) => serde_json::to_string_pretty(&set.mos)? + "\n",
    };

    Ok(Outcome {
        destination: args.get_one::<PathBuf>("output").cloned(),
        ..Outcome::stdout(text)
    })
}

/// `validate`: fails when any selection does not resolve cleanly
pub(crate) async fn validate(args: &ArgMatches) -> anyhow::Result<Outcome> {
    let store = open_store(required::<PathBuf>(args, "store")?).await?;
    let id = ProjectId::from(required::<String>(args, "project")?.as_str());
    let project = store.get(&id).await?;

    let report = DocumentEngine::default().validate(&project);
    let text = if args.get_flag("json") {
        serde_json::to_string_pretty(&report)? + "\n"
    } else {
        let mut text = report.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    };

    Ok(Outcome {
        success: report.is_clean(),
        ..Outcome::stdout(text)
    })
}

/// `list`
pub(crate) async fn list(args: &ArgMatches) -> anyhow::Result<Outcome> {
    let store = open_store(required::<PathBuf>(args, "store")?).await?;

    let mut filter = ProjectFilter::all();
    if let Some(status) = args.get_one::<String>("status") {
        let status: ProjectStatus = status.parse()?;
        filter = filter.with_status(status);
    }
    if let Some(customer) = args.get_one::<String>("customer") {
        filter = filter.with_customer(customer.as_str());
    }

    let mut text = String::new();
    for project in store.list(&filter).await? {
        let pairs = EquipmentPair::ALL
            .into_iter()
            .filter(|pair| !project.selection(*pair).is_empty())
            .count();
        text.push_str(&format!(
            "{}\t{}\t{}\t{} selections\n",
            project.id, project.status, project.customer_name, pairs
        ));
    }
    Ok(Outcome::stdout(text))
}
