// Entrypoint for the CLI application.
// - Keeps `main` small: load the library and hand the session to the UI loop.
// - Returns `anyhow::Result` so a corrupt or unreadable library file stops
//   the program with a readable message.

use anyhow::Context;
use personal_library_cli::{ui::main_menu, Config, Session};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_cwd()?;
    log::debug!("using library file {}", config.library_path.display());

    let session = Session::from_config(&config).context("Failed to load library")?;

    // Blocks until the user leaves the menu.
    main_menu(session)?;
    Ok(())
}
