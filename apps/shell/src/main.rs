use anyhow::Context;
use paw::domain::config::ClientConfig;
use paw::kernel::config::load_config;
use paw_shell::{Shell, init_logging};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config: ClientConfig =
        load_config(std::env::args().nth(1)).context("Failed to load configuration")?;
    let _logger = init_logging("pawcalc", &config.log)?;

    let shell = Shell::builder().config(config).build()?;
    let home = shell.home()?;
    let view = shell.navigate(&home);

    info!(location = %home, ?view, routes = shell.router().entries().count(), "PawCalc shell ready");

    Ok(())
}
