use std::path::Path;

use clap::{Arg, Command};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("grid-tile-editor")
        .about("Place, delete and drag floor tiles on a snapping grid")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to config.toml")
                .takes_value(true)
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("no-preferences")
                .long("no-preferences")
                .help("Do not load or save grid preferences"),
        )
        .get_matches();

    let config_path = matches
        .value_of("config")
        .ok_or_else(|| anyhow::anyhow!("missing --config value"))?;
    let mut config = grid_tile_editor::load_config(Path::new(config_path));

    if matches.is_present("no-preferences") {
        config.editor.persist_preferences = false;
    }

    grid_tile_editor::run_editor(&config);
    Ok(())
}
