use super::{
    web_mercator, ClusterChild, ClusterNode, MarkerHandle, MarkerSet, PlacedMarker, PopupContent,
    ZoomToShow,
};
use crate::view::MapView;
use geo::{Centroid, MultiPoint, Point};
use itertools::Itertools;
use rstar::primitives::GeomWithData;
use rstar::{PointDistance, RTree};
use sector_mapper_core::model::{
    entity::{EntityId, LayerKind},
    marker::MarkerDescriptor,
};

pub const DEFAULT_CLUSTER_RADIUS_PX: f64 = 80.0;
pub const DEFAULT_MAX_ZOOM: u8 = 19;

/// cluster seed in projected pixel space, carrying the index of its cluster.
type ClusterSeed = GeomWithData<[f64; 2], usize>;

/// marker container that groups markers lying close together on screen.
///
/// markers are kept individually; grouping is recomputed per zoom level from
/// their projected positions. a marker joins the nearest existing cluster whose
/// seed lies within `radius_px` pixels, otherwise it seeds a new cluster.
/// markers are visited in insertion order so the grouping is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterLayer {
    markers: MarkerSet,
    radius_px: f64,
    max_zoom: u8,
}

impl Default for ClusterLayer {
    fn default() -> Self {
        ClusterLayer::new(DEFAULT_CLUSTER_RADIUS_PX, DEFAULT_MAX_ZOOM)
    }
}

impl ClusterLayer {
    pub fn new(radius_px: f64, max_zoom: u8) -> ClusterLayer {
        ClusterLayer {
            markers: MarkerSet::new(LayerKind::Clustered),
            radius_px,
            max_zoom,
        }
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add(
        &mut self,
        tag: EntityId,
        position: Point<f64>,
        descriptor: MarkerDescriptor,
        popup: PopupContent,
    ) -> MarkerHandle {
        self.markers.add(tag, position, descriptor, popup)
    }

    pub fn get(&self, handle: MarkerHandle) -> Option<&PlacedMarker> {
        self.markers.get(handle)
    }

    /// index lookup, independent of how markers are currently grouped.
    pub fn find_by_tag(&self, tag: &EntityId) -> Option<&PlacedMarker> {
        self.markers.find_by_tag(tag)
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        self.markers.markers()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// groups all markers at `zoom`. each inner vec holds the handles of one
    /// cluster in insertion order; single-element groups are lone markers.
    fn groups_at(&self, zoom: u8) -> Vec<Vec<MarkerHandle>> {
        let zoom = zoom.min(self.max_zoom);
        let max_distance_2 = self.radius_px * self.radius_px;
        let mut seeds: RTree<ClusterSeed> = RTree::new();
        let mut groups: Vec<Vec<MarkerHandle>> = vec![];

        for marker in self.markers.markers() {
            let pixel = web_mercator::project(&marker.position, zoom);
            let nearest = seeds
                .locate_within_distance(pixel, max_distance_2)
                .min_by(|a, b| {
                    a.distance_2(&pixel)
                        .total_cmp(&b.distance_2(&pixel))
                        .then(a.data.cmp(&b.data))
                })
                .map(|seed| seed.data);
            match nearest {
                Some(group_index) => groups[group_index].push(marker.handle),
                None => {
                    seeds.insert(GeomWithData::new(pixel, groups.len()));
                    groups.push(vec![marker.handle]);
                }
            }
        }
        groups
    }

    /// the direct children of the layer at `zoom`: cluster nodes and lone markers.
    pub fn children_at(&self, zoom: u8) -> Vec<ClusterChild> {
        self.groups_at(zoom)
            .into_iter()
            .filter_map(|group| match group.as_slice() {
                [] => None,
                [single] => Some(ClusterChild::Marker(*single)),
                _ => group
                    .iter()
                    .filter_map(|h| self.get(*h).map(|m| m.position))
                    .collect::<MultiPoint<f64>>()
                    .centroid()
                    .map(|centroid| ClusterChild::Cluster(ClusterNode::new(centroid, group))),
            })
            .collect_vec()
    }

    /// walks the children at `zoom`, expanding cluster nodes into their leaves,
    /// until a marker carrying `tag` is found.
    pub fn search_children(&self, tag: &EntityId, zoom: u8) -> Option<&PlacedMarker> {
        for child in self.children_at(zoom) {
            let candidates = match &child {
                ClusterChild::Cluster(node) => node.leaves().to_vec(),
                ClusterChild::Marker(handle) => vec![*handle],
            };
            let found = candidates
                .into_iter()
                .filter_map(|h| self.get(h))
                .find(|m| &m.tag == tag);
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// true when the marker is drawn on its own (not inside a cluster node) at `zoom`.
    pub fn is_unclustered(&self, handle: MarkerHandle, zoom: u8) -> bool {
        self.groups_at(zoom)
            .iter()
            .any(|g| g.len() == 1 && g[0] == handle)
    }

    /// lowest zoom, not below `from_zoom`, at which the marker is no longer hidden
    /// inside a cluster. returns None when the marker stays clustered up to the
    /// maximum zoom, which happens when markers share (nearly) the same position.
    pub fn reveal_zoom(&self, handle: MarkerHandle, from_zoom: u8) -> Option<u8> {
        (from_zoom.min(self.max_zoom)..=self.max_zoom).find(|z| self.is_unclustered(handle, *z))
    }

    /// moves the view until the marker is visible on its own, then calls
    /// `on_complete`. markers that never separate are shown at maximum zoom, where
    /// a renderer spiderfies them.
    ///
    /// # Returns
    ///
    /// the zoom the view was moved to and whether the marker is still clustered
    /// there, or None if the handle is not in this layer
    pub fn zoom_to_show_layer<F>(
        &self,
        handle: MarkerHandle,
        view: &mut dyn MapView,
        on_complete: F,
    ) -> Option<ZoomToShow>
    where
        F: FnOnce(&mut dyn MapView, &PlacedMarker),
    {
        let marker = self.get(handle)?;
        let shown = match self.reveal_zoom(handle, view.zoom()) {
            Some(zoom) => ZoomToShow {
                zoom,
                spiderfied: false,
            },
            None => ZoomToShow {
                zoom: self.max_zoom,
                spiderfied: true,
            },
        };
        view.set_view(marker.position, shown.zoom);
        on_complete(view, marker);
        Some(shown)
    }
}
