/// MT3D Terminal Demo - Interactive collision scenes
///
/// Controls:
///   - Tab: Next scene
///   - Arrow Keys: Orbit the camera
///   - +/-: Zoom, Shift+HJKL: Pan
///   - WASD / R/F: Move the active primitive
///   - [ / ]: Shrink / grow the active primitive
///   - Q/ESC: Quit
use clap::Parser;
use mt3d_terminal::{SceneKind, TerminalApp};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Interactive terminal demos for the mt3d geometry queries")]
struct Cli {
    /// The scene to open first
    #[arg(short, long, value_enum, default_value_t = SceneKind::SpherePlane)]
    scene: SceneKind,
    /// The log file to write to
    ///
    /// The terminal itself is the render surface, so nothing is logged without one.
    /// Filter with RUST_LOG (defaults to "info").
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::options().append(true).create(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Some(path) = &args.log_file {
        if let Err(err) = init_logging(path) {
            eprintln!("failed to open log file at {}: {err}", path.display());
            return ExitCode::from(2);
        }
    }

    info!(scene = ?args.scene, "starting terminal demo");

    let result = TerminalApp::new(args.scene).and_then(|mut app| app.run());

    match result {
        Ok(()) => {
            info!("terminal demo exited");
            println!("Thank you for using the MT3D terminal demos!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "terminal demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
