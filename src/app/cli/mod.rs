//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AppError, MirrorConfig, MirrorLayout, PROJECT_DIR_ENV, WriteMode, layout};

#[derive(Parser)]
#[command(name = "spm-mirror")]
#[command(version)]
#[command(
    about = "Mirror JDStatusBarNotification sources for SPM and fix up public header imports",
    long_about = None
)]
struct Cli {
    /// Project root containing JDStatusBarNotification/ (empty means the working directory)
    #[arg(long, env = PROJECT_DIR_ENV, value_name = "PATH")]
    project_dir: Option<OsString>,
    /// Mirror directory name, relative to the project root
    #[arg(long, default_value = layout::MIRROR_DIR, value_name = "NAME")]
    mirror_dir: String,
    /// Replace rewritten headers via a temporary file and rename
    #[arg(long)]
    atomic: bool,
}

impl Cli {
    fn into_config(self) -> MirrorConfig {
        let write_mode = if self.atomic { WriteMode::Atomic } else { WriteMode::Truncate };
        MirrorConfig::new(PathBuf::from(self.project_dir.unwrap_or_default()))
            .with_layout(MirrorLayout::default().with_mirror_dir(self.mirror_dir))
            .with_write_mode(write_mode)
    }
}

pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_mirror(cli.into_config()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_mirror(config: MirrorConfig) -> Result<(), AppError> {
    let mirror_dir = config.layout.mirror_dir.clone();
    let outcome = crate::app::api::mirror(config)?;

    println!(
        "✅ Mirrored {} file(s) into {}/, rewrote {} import(s) in {} header(s)",
        outcome.copied.files,
        mirror_dir,
        outcome.total_replacements(),
        outcome.rewritten().count()
    );
    Ok(())
}
