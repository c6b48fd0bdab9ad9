use clap::Parser;
use studyspark::cli::{run_command, Cli};
use studyspark::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.clone() {
        None => {
            logging::init_tui_tracing();
            let config = cli.load_config()?;
            ui::run(config)
        }
        Some(command) => {
            logging::init_cli_tracing();
            let config = cli.load_config()?;
            run_command(command, &config)
        }
    }
}
