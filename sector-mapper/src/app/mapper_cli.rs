use super::{LogNotifier, SectorMapperApp, SectorMapperError};
use crate::config::SectorMapperConfig;
use crate::view::{HeadlessMapView, LoggingMapView, MapView};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use sector_mapper_core::model::entity::{EntityCategory, EntityId, LayerKind};
use sector_mapper_core::model::thematic::{ThematicRule, UNMATCHED_COLOR};
use sector_mapper_core::store::{JsonFilePersistence, StoreError};
use sector_mapper_core::util::geo_utils;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

type CliApp = SectorMapperApp<JsonFilePersistence, LoggingMapView<HeadlessMapView>, LogNotifier>;

/// Command line tool for inspecting and editing a sector mapper entity file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MapperCli {
    #[arg(long, help = "path to .toml or .json file with sector mapper parameters")]
    pub configuration_file: Option<String>,
    #[arg(long, help = "path to the JSON entity file, overrides the configured store path")]
    pub store_file: Option<String>,
    #[command(subcommand)]
    pub op: MapperOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MapperOperation {
    /// counts of sites, points, markers and groups
    Summary,
    /// grouped listing of entities, as the list panel shows it
    List {
        #[arg(long, help = "only list entities whose name contains this term")]
        search: Option<String>,
        #[arg(long, help = "restrict to one layer: clustered or flat")]
        layer: Option<LayerKind>,
        #[arg(long, default_value_t = 0, help = "number of extra batches to reveal per group")]
        load_more: usize,
    },
    /// locate an entity on the map and report how it was found
    Locate {
        #[arg(long)]
        id: String,
    },
    /// delete an entity and save the store
    Delete {
        #[arg(long)]
        id: String,
    },
    /// print the sector wedges of a site as WKT polygons
    Sectors {
        #[arg(long)]
        id: String,
    },
    /// color imported points by an attribute and print the legend
    Thematic {
        #[arg(long, help = "field name, or custom:<name> for a custom property")]
        attribute: String,
    },
}

impl MapperCli {
    pub fn run(self) -> Result<(), SectorMapperError> {
        let config = match &self.configuration_file {
            None => SectorMapperConfig::default(),
            Some(f) => {
                log::info!("reading sector mapper configuration from {f}");
                SectorMapperConfig::try_from(f)?
            }
        };
        let store_path = self
            .store_file
            .clone()
            .unwrap_or_else(|| config.store_path.clone());
        let view = LoggingMapView::new(config.build_headless_view());
        let mut app = SectorMapperApp::new(
            config,
            JsonFilePersistence::new(store_path),
            view,
            LogNotifier,
        );
        app.start();
        self.op.run(&mut app)
    }
}

impl MapperOperation {
    fn run(self, app: &mut CliApp) -> Result<(), SectorMapperError> {
        match self {
            MapperOperation::Summary => {
                let store = app.store();
                println!("sites: {}", store.sites().count());
                println!("points: {}", store.points().count());
                println!("markers: {}", app.layers().len());
                if let Some(extent) = store.bounds() {
                    println!("extent: {}", extent.to_polygon().wkt_string());
                }
                for category in [
                    EntityCategory::StructuredSite,
                    EntityCategory::ManualPoint,
                    EntityCategory::ImportedPoint,
                ] {
                    for (group, count) in store.groups(category) {
                        println!("  [{category}] {group}: {count}");
                    }
                }
                Ok(())
            }
            MapperOperation::List {
                search,
                layer,
                load_more,
            } => {
                let panel = app.list_panel_mut();
                panel.set_filter(layer, search.as_deref().unwrap_or_default());
                let groups = app
                    .render_list()
                    .into_iter()
                    .map(|v| (v.category, v.name))
                    .collect_vec();
                for (category, name) in groups.iter() {
                    for _ in 0..load_more {
                        app.list_panel_mut().load_more(*category, name);
                    }
                }
                for view in app.render_list() {
                    let hidden = if view.hidden { " (hidden)" } else { "" };
                    println!("[{}] {} - {} entities{hidden}", view.category, view.name, view.total);
                    for item in view.items.iter() {
                        println!("  {}\t{}\t{}", item.id, item.name, item.coordinates);
                    }
                    if view.remaining > 0 {
                        println!("  ... {} more", view.remaining);
                    }
                }
                Ok(())
            }
            MapperOperation::Locate { id } => {
                let outcome = app.locate_outcome(&EntityId::from(id));
                let view = app.view();
                println!("{outcome:?}");
                println!(
                    "view: ({:.6}, {:.6}) at zoom {}",
                    view.center().y(),
                    view.center().x(),
                    view.zoom()
                );
                if let Some(tag) = view.inner().open_popup_tag() {
                    println!("popup: {tag}");
                }
                Ok(())
            }
            MapperOperation::Delete { id } => {
                let removed = app.delete(&EntityId::from(id))?;
                println!("deleted {} ({})", removed.id, removed.name);
                Ok(())
            }
            MapperOperation::Sectors { id } => {
                let id = EntityId::from(id);
                let entity = app
                    .store()
                    .get(&id)
                    .ok_or_else(|| StoreError::EntityNotFound(id.clone()))?;
                let origin = entity.try_position()?;
                for (index, sector) in entity.sectors.iter().enumerate() {
                    let wedge = geo_utils::sector_wedge(
                        &origin,
                        sector.azimuth,
                        sector.beamwidth,
                        sector.range_length(),
                        geo_utils::SECTOR_ARC_STEPS,
                    );
                    let label = sector
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("sector {}", index + 1));
                    println!(
                        "{label}\t{}\t{:.2}\t{}",
                        sector.display_color(),
                        sector.display_opacity(),
                        wedge.wkt_string()
                    );
                }
                Ok(())
            }
            MapperOperation::Thematic { attribute } => {
                if !app.apply_thematic(&attribute) {
                    println!("no imported points carry '{attribute}'");
                    return Ok(());
                }
                let Some(settings) = app.layers().thematic() else {
                    return Ok(());
                };
                println!("{} ({} values)", settings.attribute, settings.total);
                match &settings.rule {
                    ThematicRule::Categorical { mapping } => {
                        for (value, color) in mapping.iter() {
                            let count = settings.counts.get(value).copied().unwrap_or_default();
                            println!("  {color}\t{value}\t{count}");
                        }
                    }
                    ThematicRule::Numerical { ranges } => {
                        for range in ranges.iter() {
                            println!("  {}\t{}\t{}", range.color, range.label, range.count);
                        }
                    }
                }
                println!("  {UNMATCHED_COLOR}\tno value");
                Ok(())
            }
        }
    }
}
