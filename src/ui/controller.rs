use super::{Page, ViewState};
use crate::filter::{filter, narrow, PriceBounds};
use crate::models::{Field, Property};
use crate::render::draw;
use crate::sources::DatasetSource;
use crate::store::DatasetStore;
use anyhow::Result;
use tracing::{debug, error, info, warn};

/// Something the user did on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Search box, price inputs or sort choice changed
    Input,
    /// One of the dropdowns changed
    Change(Field),
    /// The reset button
    Reset,
}

/// Routes page events to the filter pipeline. Holds no state of its own.
pub struct Controller<'s> {
    store: &'s DatasetStore,
}

impl<'s> Controller<'s> {
    pub fn new(store: &'s DatasetStore) -> Self {
        Self { store }
    }

    /// Load the dataset, store it and draw the initial page.
    ///
    /// Failures are logged here; the page stays idle.
    pub async fn load(&self, source: &dyn DatasetSource, page: &mut Page) -> Result<()> {
        if self.store.is_loaded() {
            error!("Dataset already loaded; not loading {}", source.describe());
            anyhow::bail!("dataset already loaded");
        }

        info!("Loading dataset from {}...", source.describe());

        let records = match source.load().await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to load dataset from {}: {:#}", source.describe(), e);
                return Err(e);
            }
        };

        let dataset = match self.store.set(records, source.describe()) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("{:#}", e);
                return Err(e);
            }
        };

        seed(page, &dataset.records);
        page.state = ViewState::Loaded;
        Ok(())
    }

    /// React to one page event. Events before the dataset is loaded are ignored.
    pub fn handle(&self, page: &mut Page, event: Event) {
        let Some(dataset) = self.store.get() else {
            warn!("Ignoring {:?}: dataset not loaded", event);
            return;
        };
        let records = &dataset.records;

        debug!("Handling {:?}", event);
        match event {
            Event::Input => refresh(page, records),
            Event::Change(_) => {
                narrow_form(page, records);
                refresh(page, records);
            }
            Event::Reset => {
                page.form.reset();
                seed(page, records);
                page.state = ViewState::Loaded;
            }
        }
    }
}

/// Calibrate prices, fill the dropdowns and draw every record in dataset order
fn seed(page: &mut Page, records: &[Property]) {
    match PriceBounds::calibrate(records) {
        Ok(bounds) => page.form.apply_bounds(bounds),
        Err(e) => error!("Price range not calibrated, check the dataset: {:#}", e),
    }
    page.form.populate_options(records);
    draw(&mut page.grid, records, None);
    info!("Showing all {} properties", records.len());
}

/// Narrow every dropdown, repeating while stale selections get dropped,
/// so no option list is left narrowed by a selection that was cleared
fn narrow_form(page: &mut Page, records: &[Property]) {
    loop {
        let selections = page.form.selections();
        page.form.apply_narrowed(narrow(records, &selections));
        if page.form.selections() == selections {
            break;
        }
    }
}

fn refresh(page: &mut Page, records: &[Property]) {
    let criteria = page.form.criteria();
    let filtered = filter(records, &criteria);
    draw(&mut page.grid, &filtered, criteria.search.as_ref());
    page.state = ViewState::Filtered;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use crate::render::NO_RESULTS;
    use crate::test_support::{sample, StaticSource};

    async fn loaded(store: &DatasetStore) -> Page {
        let mut page = Page::default();
        Controller::new(store)
            .load(&StaticSource(sample()), &mut page)
            .await
            .unwrap();
        page
    }

    #[tokio::test]
    async fn test_load_seeds_page() {
        let store = DatasetStore::new();
        let page = loaded(&store).await;

        assert_eq!(page.state, ViewState::Loaded);
        assert_eq!(page.form.min_price.value, "40");
        assert_eq!(page.form.max_price.value, "121");
        assert_eq!(page.form.location.options.len(), 3);
        assert_eq!(page.grid.markup().matches("property-card").count(), 4);
        assert_eq!(page.grid.draws(), 1);
    }

    #[tokio::test]
    async fn test_load_twice_is_rejected() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;

        let again = Controller::new(&store)
            .load(&StaticSource(Vec::new()), &mut page)
            .await;
        assert!(again.is_err());
        assert_eq!(store.get().unwrap().records.len(), 4);
        // The page still shows the first load, drawn once
        assert_eq!(page.grid.draws(), 1);
        assert_eq!(page.form.location.options.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_dataset_loads_without_bounds() {
        let store = DatasetStore::new();
        let mut page = Page::default();
        Controller::new(&store)
            .load(&StaticSource(Vec::new()), &mut page)
            .await
            .unwrap();

        assert!(page.form.min_price.value.is_empty());
        assert_eq!(page.grid.markup(), NO_RESULTS);
    }

    #[test]
    fn test_events_before_load_ignored() {
        let store = DatasetStore::new();
        let mut page = Page::default();
        Controller::new(&store).handle(&mut page, Event::Input);

        assert_eq!(page.state, ViewState::Idle);
        assert_eq!(page.grid.draws(), 0);
    }

    #[tokio::test]
    async fn test_input_filters_and_highlights() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;

        page.form.search = "white".to_string();
        Controller::new(&store).handle(&mut page, Event::Input);

        assert_eq!(page.state, ViewState::Filtered);
        let markup = page.grid.markup();
        assert_eq!(markup.matches("property-card").count(), 2);
        assert!(markup.contains(r#"<span class="highlight">White</span>field"#));
    }

    #[tokio::test]
    async fn test_change_narrows_other_dropdowns() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;
        let controller = Controller::new(&store);

        page.form.location.choose(Field::Location, "Whitefield");
        controller.handle(&mut page, Event::Change(Field::Location));

        assert_eq!(
            page.form.bedrooms.options,
            vec![FieldValue::Number(2.0), FieldValue::Number(3.0)]
        );
        assert_eq!(page.form.location.options.len(), 3);
        assert_eq!(page.grid.markup().matches("property-card").count(), 2);
    }

    #[tokio::test]
    async fn test_stale_selection_reverts_to_all() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;
        let controller = Controller::new(&store);

        page.form.bedrooms.choose(Field::Bedrooms, "1");
        controller.handle(&mut page, Event::Change(Field::Bedrooms));
        assert_eq!(page.form.bedrooms.value(), "1");
        assert_eq!(page.form.location.options, vec![FieldValue::from("Hebbal")]);

        // Host page writes a location the narrowed list no longer offers
        page.form.location.selected = Some("Whitefield".into());
        controller.handle(&mut page, Event::Change(Field::Location));

        assert_eq!(page.form.bedrooms.value(), "");
        assert_eq!(page.form.location.value(), "");
        assert_eq!(page.grid.markup().matches("property-card").count(), 4);

        // With nothing selected every dropdown offers the full list again
        assert_eq!(
            page.form.location.options,
            vec![
                FieldValue::from("Whitefield"),
                FieldValue::from("Indiranagar"),
                FieldValue::from("Hebbal"),
            ]
        );
        assert_eq!(
            page.form.bedrooms.options,
            vec![FieldValue::Number(1.0), FieldValue::Number(2.0), FieldValue::Number(3.0)]
        );
    }

    #[tokio::test]
    async fn test_no_results() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;

        page.form.min_price.value = "500".to_string();
        Controller::new(&store).handle(&mut page, Event::Input);
        assert_eq!(page.grid.markup(), NO_RESULTS);
    }

    #[tokio::test]
    async fn test_reset_restores_everything() {
        let store = DatasetStore::new();
        let mut page = loaded(&store).await;
        let initial = page.clone();
        let controller = Controller::new(&store);

        page.form.location.choose(Field::Location, "Whitefield");
        controller.handle(&mut page, Event::Change(Field::Location));
        page.form.search = "white".to_string();
        page.form.min_price.value = "45".to_string();
        controller.handle(&mut page, Event::Input);

        controller.handle(&mut page, Event::Reset);
        assert_eq!(page.state, ViewState::Loaded);
        assert_eq!(page.form, initial.form);
        assert_eq!(page.grid.markup(), initial.grid.markup());
    }
}
