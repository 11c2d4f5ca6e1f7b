use anyhow::Context;
use listing_browser::config::Config;
use listing_browser::sources;
use listing_browser::store;
use listing_browser::ui::{Controller, Event, Page};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 Listing Browser");
    info!("==================");

    let source = sources::from_location(&config.data)?;
    let controller = Controller::new(store::global());
    let mut page = Page::default();

    // The controller has already logged the failure
    if controller.load(source.as_ref(), &mut page).await.is_err() {
        std::process::exit(1);
    }

    for (field, value) in config.selections() {
        if !page.form.select_mut(field).choose(field, value) {
            warn!("{} has no option {:?}, leaving it on All", field, value);
        }
        controller.handle(&mut page, Event::Change(field));
    }

    if config.apply_inputs(&mut page.form) {
        controller.handle(&mut page, Event::Input);
    }

    tokio::fs::write(&config.output, page.grid.markup())
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    info!(
        "💾 Saved grid ({:?}, {} redraws) to {}",
        page.state,
        page.grid.draws(),
        config.output.display()
    );

    let json = serde_json::to_string_pretty(&page.form)?;
    tokio::fs::write(&config.form_output, json)
        .await
        .with_context(|| format!("Failed to write {}", config.form_output.display()))?;
    info!("💾 Saved form state to {}", config.form_output.display());

    Ok(())
}
