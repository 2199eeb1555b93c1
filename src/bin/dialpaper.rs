use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use dialpaper::{
    Action, DispatchReport, FileStorage, RESOLUTIONS, StateStorage as _, Studio, StudioOpts,
};

#[derive(Parser, Debug)]
#[command(name = "dialpaper", version, about = "Compose clock-face wallpapers")]
struct Cli {
    /// Directory holding the persisted scene.
    #[arg(long, global = true, value_name = "DIR", default_value = ".dialpaper")]
    store: PathBuf,

    /// TTF/OTF font for the clock labels. Falls back to $DIALPAPER_FONT.
    #[arg(long, global = true, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the stored scene as a PNG.
    Render(OutArgs),
    /// Apply actions from JSON files (one action or an array per file), then render.
    Apply {
        #[arg(required = true, value_name = "ACTION_JSON")]
        files: Vec<PathBuf>,
        #[command(flatten)]
        out: OutArgs,
    },
    /// Resize the canvas to a preset (see `presets`), then render.
    Resize {
        key: String,
        #[command(flatten)]
        out: OutArgs,
    },
    /// Restore the default scene, then render.
    Reset(OutArgs),
    /// List resolution presets.
    Presets,
    /// Print the stored scene as JSON.
    Show,
}

#[derive(clap::Args, Debug)]
struct OutArgs {
    /// Output PNG file, or a directory to write `wallpaper.png` into.
    #[arg(long, value_name = "PATH", default_value = ".")]
    out: PathBuf,
}

fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::from_default_env().add_directive(
        format!("dialpaper={level}")
            .parse()
            .context("build log filter")?,
    );
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.cmd {
        Command::Presets => {
            for r in RESOLUTIONS {
                println!("{}\t{}x{}\t{}", r.key, r.width, r.height, r.label);
            }
            Ok(())
        }
        Command::Show => {
            let state = FileStorage::new(&cli.store).load().unwrap_or_default();
            let json = serde_json::to_string_pretty(&state).context("serialize scene")?;
            println!("{json}");
            Ok(())
        }
        Command::Render(out) => {
            let studio = open_studio(&cli.store, cli.font.as_deref())?;
            export(&studio, &out.out)
        }
        Command::Apply { files, out } => {
            let mut studio = open_studio(&cli.store, cli.font.as_deref())?;
            for path in &files {
                for action in read_actions(path)? {
                    report(&studio.dispatch(action));
                }
            }
            export(&studio, &out.out)
        }
        Command::Resize { key, out } => {
            let action = Action::resize_to_preset(&key)
                .with_context(|| format!("unknown resolution preset '{key}'"))?;
            let mut studio = open_studio(&cli.store, cli.font.as_deref())?;
            report(&studio.dispatch(action));
            export(&studio, &out.out)
        }
        Command::Reset(out) => {
            let mut studio = open_studio(&cli.store, cli.font.as_deref())?;
            report(&studio.dispatch(Action::Reset));
            export(&studio, &out.out)
        }
    }
}

fn open_studio(store: &Path, font: Option<&Path>) -> anyhow::Result<Studio<FileStorage>> {
    let font_path = font
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("DIALPAPER_FONT").map(PathBuf::from));
    let font_bytes = match font_path {
        Some(p) => Some(
            std::fs::read(&p).with_context(|| format!("read font '{}'", p.display()))?,
        ),
        None => {
            tracing::warn!("no font given (--font or DIALPAPER_FONT); clock labels will be skipped");
            None
        }
    };
    Studio::new(FileStorage::new(store), StudioOpts { font_bytes }).context("open studio")
}

fn read_actions(path: &Path) -> anyhow::Result<Vec<Action>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read action file '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse action file '{}'", path.display()))?;
    let actions = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Action>, _>>(),
        other => serde_json::from_value(other).map(|a| vec![a]),
    };
    actions.with_context(|| format!("decode actions in '{}'", path.display()))
}

fn report(r: &DispatchReport) {
    if let Some(reason) = &r.rejected {
        eprintln!("rejected: {reason}");
    }
    for f in &r.failed {
        eprintln!("{} layer failed: {}", f.layer, f.message);
    }
    if let Some(err) = &r.composite_error {
        eprintln!("composite skipped: {err}");
    }
    if let Some(err) = &r.save_error {
        eprintln!("save failed: {err}");
    }
}

fn export(studio: &Studio<FileStorage>, out: &Path) -> anyhow::Result<()> {
    let path = studio
        .export_to(out)
        .with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
