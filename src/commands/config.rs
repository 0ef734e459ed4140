//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use corpusprep::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml()?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the user config file lives, noting when it does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{} (not created, defaults in use)", config_path.display());
    }
    Ok(())
}

/// Write the default configuration to `path`, or to the user config file.
///
/// An existing file is only replaced with `force`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("Wrote {}", config_path.display());
    Ok(())
}
