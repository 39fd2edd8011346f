//! Profiles subcommand.

use color_eyre::Result;

use crate::config::Config;
use crate::profiles;

/// Print the effective profiles (built-ins plus configured overrides) as JSON.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let effective = profiles::resolve(&config.profiles);
    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(())
}
