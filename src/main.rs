use anyhow::Result;
use distro_tools::cli;

fn main() -> Result<()> {
    cli::run_cli()
}
