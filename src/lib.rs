// src/lib.rs

pub mod analytics;
pub mod cli;
pub mod config;
pub mod curriculum;
pub mod engine;
pub mod errors;
pub mod export;
pub mod filter;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod progress;
pub mod report;
pub mod types;
pub mod watch;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::analytics::{completion_by_category, ordered_by, overall_completion, share_progress_text};
use crate::cli::{CliArgs, Command, LayoutArgs, ListArgs, OutputFormat, SetArgs};
use crate::config::{default_config_path, load_and_validate, load_or_default, ConfigFile};
use crate::curriculum::{load_curriculum, Curriculum};
use crate::engine::{JsonLinesSink, Runtime, RuntimeEvent, ViewCore, ViewOptions};
use crate::export::{generate_skill_sheet, skill_sheet_file_name};
use crate::filter::{apply_filters, FilterCriteria};
use crate::fs::{FileSystem, RealFileSystem};
use crate::layout::{apply_focus, compute_colored_layout};
use crate::progress::{save_progress, FileBackend, ProgressPatch, ProgressStore, PROGRESS_EXPORT_FILE};
use crate::watch::{
    curriculum_event, fingerprint_file, progress_event, spawn_stdin_reader, spawn_watcher,
    WatchSources,
};

/// Loaded state shared by the one-shot commands.
struct App {
    cfg: ConfigFile,
    fs: Arc<dyn FileSystem>,
    curriculum: Curriculum,
    store: ProgressStore<FileBackend>,
}

impl App {
    fn load(cfg: ConfigFile, fs: Arc<dyn FileSystem>) -> Result<Self> {
        let curriculum = load_curriculum(fs.as_ref(), &cfg.curriculum_path(), cfg.categories())?;
        let store = ProgressStore::load(FileBackend::new(cfg.progress_path(), Arc::clone(&fs)));
        Ok(Self {
            cfg,
            fs,
            curriculum,
            store,
        })
    }
}

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => load_or_default(default_config_path())?,
    };
    debug!(base_dir = ?cfg.base_dir(), "configuration loaded");

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if let Command::Watch = args.command {
        return run_watch(&cfg, fs).await;
    }

    let mut app = App::load(cfg, fs)?;
    match args.command {
        Command::Check => cmd_check(&app),
        Command::Layout(layout_args) => cmd_layout(&app, layout_args),
        Command::List(list_args) => cmd_list(&app, list_args),
        Command::Show { id } => cmd_show(&app, &id),
        Command::Set(set_args) => cmd_set(&mut app, set_args),
        Command::Dashboard { counting } => cmd_dashboard(&app, counting),
        Command::ExportSheet { output, stdout } => cmd_export_sheet(&app, output.as_deref(), stdout),
        Command::ExportProgress { output } => cmd_export_progress(&app, output.as_deref()),
        Command::Import { file } => cmd_import(&mut app, &file),
        Command::Watch => Ok(()),
    }
}

fn cmd_check(app: &App) -> Result<()> {
    let path = app.cfg.curriculum_path();
    let hash = fingerprint_file(app.fs.as_ref(), &path)?;
    println!(
        "{:?}: {} items ({} including children), fingerprint {}",
        path,
        app.curriculum.len(),
        app.curriculum.flattened().len(),
        &hash[..12.min(hash.len())]
    );
    print!(
        "{}",
        report::render_tree(app.curriculum.items(), app.store.map())?
    );
    Ok(())
}

fn cmd_layout(app: &App, args: LayoutArgs) -> Result<()> {
    let items = match &args.item {
        Some(id) => app.curriculum.sub_curriculum(id)?.into_items(),
        None => app.curriculum.items().to_vec(),
    };
    let policy = args.policy.unwrap_or(app.cfg.config.layout_policy);

    let mut layout = compute_colored_layout(&items, policy, &app.cfg.layout, app.store.map())?;
    apply_focus(&mut layout, &items, args.focus.as_deref());

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
        OutputFormat::Text => print!("{}", report::render_layout(&layout)),
    }
    Ok(())
}

fn cmd_list(app: &App, args: ListArgs) -> Result<()> {
    let criteria = FilterCriteria {
        query: args.query.unwrap_or_default(),
        categories: args.categories,
        statuses: args.statuses,
    };
    let visible = apply_filters(app.curriculum.items(), app.store.map(), &criteria);
    debug!(visible = visible.len(), total = app.curriculum.len(), "filtered items");
    print!("{}", report::render_list(&visible, app.store.map()));
    Ok(())
}

fn cmd_show(app: &App, id: &str) -> Result<()> {
    let item = app.curriculum.resolve(id)?;
    let record = app.store.get(id).cloned().unwrap_or_default();
    let dependents = app.curriculum.dependents_of(id);
    print!("{}", report::render_item(item, &record, &dependents));
    Ok(())
}

fn cmd_set(app: &mut App, args: SetArgs) -> Result<()> {
    let patch = ProgressPatch {
        status: args.status,
        reason: args.reason,
        repo_url: args.repo_url,
    };
    if patch.is_empty() {
        bail!("nothing to update: pass --status, --reason or --repo-url");
    }
    let record = save_progress(&mut app.store, &app.curriculum, &args.id, patch)?;
    println!("{}: {}", args.id, record.status);
    Ok(())
}

fn cmd_dashboard(app: &App, counting: Option<types::CountingMode>) -> Result<()> {
    let mode = counting.unwrap_or(app.cfg.config.counting);
    let items = app.curriculum.items();
    let overall = overall_completion(items, app.store.map(), mode);
    let by_category = ordered_by(
        completion_by_category(items, app.store.map(), mode),
        app.cfg.categories(),
    );
    print!("{}", report::render_dashboard(&overall, &by_category));
    println!("{}", share_progress_text(overall.percentage));
    Ok(())
}

fn cmd_export_sheet(app: &App, output: Option<&Path>, to_stdout: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let sheet = generate_skill_sheet(
        app.curriculum.items(),
        app.store.map(),
        app.cfg.categories(),
        today,
    );
    if to_stdout {
        print!("{}", sheet);
        return Ok(());
    }
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| skill_sheet_file_name(today).into());
    app.fs.write(&path, sheet.as_bytes())?;
    info!(?path, "wrote skill sheet");
    println!("{}", path.display());
    Ok(())
}

fn cmd_export_progress(app: &App, output: Option<&Path>) -> Result<()> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PROGRESS_EXPORT_FILE.into());
    let bytes = app.store.export_bytes()?;
    app.fs.write(&path, &bytes)?;
    info!(?path, records = app.store.map().len(), "exported progress");
    println!("{}", path.display());
    Ok(())
}

fn cmd_import(app: &mut App, file: &Path) -> Result<()> {
    let bytes = app.fs.read(file)?;
    let count = app.store.import_bytes(&bytes)?;
    println!("imported {} progress records", count);
    Ok(())
}

/// Event loop for `watch`: file watcher + stdin commands + view core.
async fn run_watch(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> Result<()> {
    let sources = WatchSources {
        curriculum: cfg.curriculum_path(),
        progress: cfg.progress_path(),
        categories: cfg.categories().to_vec(),
    };

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher_handle = spawn_watcher(sources.clone(), Arc::clone(&fs), rt_tx.clone())?;
    let _input = spawn_stdin_reader(rt_tx.clone());

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    // Initial frame: progress first so the first layout is already coloured.
    rt_tx
        .send(progress_event(Arc::clone(&fs), &sources.progress))
        .await?;
    rt_tx
        .send(curriculum_event(
            fs.as_ref(),
            &sources.curriculum,
            &sources.categories,
        ))
        .await?;

    let core = ViewCore::new(ViewOptions {
        policy: cfg.config.layout_policy,
        spacing: cfg.layout,
    });
    let runtime = Runtime::new(core, rt_rx, JsonLinesSink::new(std::io::stdout()));
    runtime.run().await?;
    Ok(())
}
