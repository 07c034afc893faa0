use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventDeskConfig) -> Result<()> {
    let path = EventDeskConfig::config_path()?;

    println!("{} {}", "Config file:".dimmed(), path.display());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
