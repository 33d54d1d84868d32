use anyhow::Context;

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = catalog_demo::DemoConfig::from_env();
    let results = catalog_demo::run(&config);

    tracing::info!(total = results.total, "search finished");

    let json = serde_json::to_string_pretty(&results).context("failed to encode results")?;
    println!("{json}");
    Ok(())
}
