/// Song Player - interactive controller for an mpd music player
use clap::Parser;
use song_player::{config::PlayerConfig, logging, repl, Controller, Services};
use song_session::SessionStore;
use song_system::{AmixerMixer, MediaLibrary, MpcPlayer, SystemHost};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "song-player")]
#[command(about = "Control an mpd music player with one-letter commands", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = PlayerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    logging::init(&config.paths.log_file);

    let services = Services {
        player: MpcPlayer::new(&config.system.mpc),
        mixer: AmixerMixer::new(&config.system.amixer, &config.system.mixer_control),
        host: SystemHost::new(config.system.shutdown_command.clone()),
    };
    let library = MediaLibrary::new(&config.paths.music_dir, &config.library.extension)
        .max_depth(config.library.max_depth);
    let store = SessionStore::new(&config.paths.state_file, config.session_defaults());

    let mut lines = repl::spawn_stdin_reader()?;
    let interrupt = repl::listen_for_interrupt()?;

    println!("Please wait for > prompt before entering commands");

    let mut controller = Controller::start(
        services,
        library,
        store,
        config.controller_settings(),
        io::stdout(),
    );

    let exit = repl::run(&mut controller, &mut lines, interrupt).await;
    tracing::debug!("exit mode {:?}", exit);

    Ok(())
}
