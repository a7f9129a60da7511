use anyhow::{Context, Result};
use shopfront_cli::ShellConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    shopfront_observability::init();

    let config = ShellConfig::from_env()?;
    let mut store = config.build_store()?;
    tracing::info!(
        store = %config.store_name,
        products = store.products().len(),
        "catalog loaded"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shopfront_cli::run(
        &mut store,
        &config.store_name,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .context("menu loop aborted")?;

    tracing::info!("shell exited");
    Ok(())
}
