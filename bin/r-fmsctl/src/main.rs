//! ---
//! fms_section: "03-admin-tooling"
//! fms_subsection: "binary"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Control CLI for administrators inspecting R-FMS releases."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use r_fms_logging as logging;
use r_fms_version::VersionInfo;

mod release;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "R-FMS release inspection utility",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(subcommand, about = "Release metadata actions")]
    Release(release::ReleaseCommand),
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    logging::announce_release("r-fmsctl", VersionInfo::current());
    if cli.version {
        println!("{}", VersionInfo::current().extended());
        return Ok(());
    }
    // Running without a subcommand shows the release of this binary.
    let command = cli.command.unwrap_or(Commands::Release(
        release::ReleaseCommand::Show(release::ShowOptions::default()),
    ));
    match command {
        Commands::Release(cmd) => release::run(cmd)?,
    }
    Ok(())
}
