use anyhow::{Result, bail};
use geo::{Coord, Point, Rect};

use crate::{
    Metric,
    classify::{Breaks, Palette, bucket_index, compute_breaks, extract_value},
    config::MapConfig,
    feature::{Feature, FeatureKind, RegionFilter},
    io::LabelLocations,
    map::{CountySummary, DetailPanel, FeatureStyle, Legend, feature_style},
};
use super::{FeatureRef, LabelChanges, LabelVisibility, Selection, SelectionChange};

/// Everything loaded from disk, before filtering.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    pub cities: Vec<Feature>,
    pub cdps: Vec<Feature>,
    pub locations: LabelLocations,
    pub summary: Option<CountySummary>,
}

/// One feature as it should be drawn in the current pass.
#[derive(Debug, Clone)]
pub struct RenderedFeature<'a> {
    pub feature_ref: FeatureRef,
    pub feature: &'a Feature,
    pub value: f64,
    pub bucket: Option<usize>,
    pub selected: bool,
    pub style: FeatureStyle,
}

#[derive(Debug, Clone)]
pub struct Label<'a> {
    pub text: &'a str,
    pub kind: FeatureKind,
    pub position: Point<f64>,
}

/// A complete, self-consistent snapshot of what the map shows.
#[derive(Debug, Clone)]
pub struct RenderPass<'a> {
    pub metric: Metric,
    /// CDPs first, then cities, with the selected feature last so its outline is on top.
    pub features: Vec<RenderedFeature<'a>>,
    pub labels: Vec<Label<'a>>,
    pub legend: Legend,
    pub panel: Option<DetailPanel>,
    pub notice: Option<String>,
    pub bounds: Rect<f64>,
}

/// Owns all mutable map state. Every mutation runs the affected part of the
/// pipeline to completion before returning, so breaks always belong to the
/// active metric.
#[derive(Debug, Clone)]
pub struct MapController {
    config: MapConfig,
    filter: RegionFilter,
    cities: Vec<Feature>,
    cdps: Vec<Feature>,
    locations: LabelLocations,
    summary: Option<CountySummary>,
    metric: Metric,
    breaks: Breaks,
    selection: Selection,
    labels: LabelVisibility,
}

impl MapController {
    pub fn new(config: MapConfig, data: MapData) -> Self {
        let filter = RegionFilter::new(config.region.to_rect());
        let labels = LabelVisibility::new(config.min_label_zoom, config.zoom, config.show_cities, config.show_cdps);
        let metric = config.metric;

        let mut controller = Self {
            config,
            filter,
            cities: Vec::new(),
            cdps: Vec::new(),
            locations: LabelLocations::new(),
            summary: None,
            metric,
            breaks: compute_breaks(&[], metric.palette().len()),
            selection: Selection::Unselected,
            labels,
        };
        controller.reload(data);
        controller.labels.update();
        controller
    }

    /// Replace the loaded data. Indices into the old layers become meaningless,
    /// so any selection is dropped.
    pub fn reload(&mut self, data: MapData) -> SelectionChange {
        self.cities = self.filter.filter(data.cities);
        self.cdps = self.filter.filter(data.cdps);
        self.locations = data.locations;
        self.summary = data.summary;

        if self.is_empty() {
            tracing::warn!("[controller] no features with demographic data inside the region");
        }
        tracing::info!(cities = self.cities.len(), cdps = self.cdps.len(), "[controller] map data loaded");

        let change = self.selection.click_background();
        self.recompute_breaks();
        change
    }

    #[inline] pub fn config(&self) -> &MapConfig { &self.config }

    #[inline] pub fn metric(&self) -> Metric { self.metric }

    #[inline] pub fn palette(&self) -> &'static Palette { self.metric.palette() }

    #[inline] pub fn breaks(&self) -> &Breaks { &self.breaks }

    #[inline] pub fn selection(&self) -> Selection { self.selection }

    #[inline] pub fn labels(&self) -> &LabelVisibility { &self.labels }

    #[inline] pub fn summary(&self) -> Option<&CountySummary> { self.summary.as_ref() }

    /// True when no feature survived filtering.
    #[inline] pub fn is_empty(&self) -> bool { self.cities.is_empty() && self.cdps.is_empty() }

    pub fn layer(&self, kind: FeatureKind) -> &[Feature] {
        match kind {
            FeatureKind::City => &self.cities,
            FeatureKind::Cdp => &self.cdps,
        }
    }

    pub fn feature(&self, feature: FeatureRef) -> Option<&Feature> {
        self.layer(feature.kind).get(feature.index)
    }

    /// All visible features, CDPs first.
    pub fn feature_refs(&self) -> impl Iterator<Item = FeatureRef> + '_ {
        [FeatureKind::Cdp, FeatureKind::City].into_iter()
            .flat_map(move |kind| (0..self.layer(kind).len()).map(move |index| FeatureRef::new(kind, index)))
    }

    /// Case-insensitive lookup by display name; cities win over CDPs.
    pub fn find_by_name(&self, name: &str) -> Option<FeatureRef> {
        let name = name.trim();
        FeatureKind::ALL.into_iter().find_map(|kind| {
            self.layer(kind).iter()
                .position(|feature| feature.name.eq_ignore_ascii_case(name))
                .map(|index| FeatureRef::new(kind, index))
        })
    }

    /// Switch the active metric: deselect, then recompute breaks from scratch.
    /// Setting the current metric again changes nothing.
    pub fn set_metric(&mut self, metric: Metric) -> SelectionChange {
        if metric == self.metric {
            return SelectionChange::default();
        }
        let change = self.selection.metric_changed();
        self.metric = metric;
        self.recompute_breaks();
        tracing::debug!(metric = %metric, breaks = ?self.breaks.as_slice(), "[controller] metric changed");
        change
    }

    pub fn click_feature(&mut self, feature: FeatureRef) -> Result<SelectionChange> {
        if self.feature(feature).is_none() {
            bail!("[controller] No {} at index {}", feature.kind, feature.index);
        }
        Ok(self.selection.click_feature(feature))
    }

    pub fn click_background(&mut self) -> SelectionChange { self.selection.click_background() }

    pub fn dismiss_panel(&mut self) -> SelectionChange { self.selection.dismiss_panel() }

    pub fn set_zoom(&mut self, zoom: f64) -> LabelChanges { self.labels.set_zoom(zoom) }

    pub fn set_layer_visible(&mut self, kind: FeatureKind, visible: bool) -> LabelChanges {
        self.labels.set_toggle(kind, visible)
    }

    /// Metric value of a visible feature.
    pub fn value(&self, feature: FeatureRef) -> Option<f64> {
        self.feature(feature).map(|f| extract_value(&f.properties, self.metric))
    }

    /// Current style of a visible feature, including selection emphasis.
    pub fn style(&self, feature: FeatureRef) -> Option<FeatureStyle> {
        let style = feature_style(self.feature(feature)?, self.metric, &self.breaks);
        Some(if self.selection.is_selected(feature) { style.highlighted() } else { style })
    }

    pub fn legend(&self) -> Legend {
        Legend::new(self.metric, &self.breaks, self.palette())
    }

    /// Panel for the selected feature, or the county summary when nothing is selected.
    pub fn panel(&self) -> Option<DetailPanel> {
        match self.selection.selected().and_then(|selected| self.feature(selected)) {
            Some(feature) => Some(DetailPanel::for_feature(feature)),
            None => self.summary.as_ref().map(DetailPanel::for_summary),
        }
    }

    /// Label anchor: the override location for this name, else the centroid.
    pub fn label_position(&self, feature: &Feature) -> Option<Point<f64>> {
        self.locations.get(feature.name.as_str())
            .copied()
            .or_else(|| feature.geometry.centroid())
    }

    pub fn render(&self) -> RenderPass<'_> {
        let mut features: Vec<RenderedFeature<'_>> = self.feature_refs()
            .filter_map(|feature_ref| {
                let feature = self.feature(feature_ref)?;
                let value = extract_value(&feature.properties, self.metric);
                let selected = self.selection.is_selected(feature_ref);
                Some(RenderedFeature {
                    feature_ref,
                    feature,
                    value,
                    bucket: bucket_index(Some(value), &self.breaks),
                    selected,
                    style: self.style(feature_ref)?,
                })
            })
            .collect();
        // Stable sort keeps layer order for everything else.
        features.sort_by_key(|rendered| rendered.selected);

        let labels = FeatureKind::ALL.into_iter()
            .filter(|&kind| self.labels.is_visible(kind))
            .flat_map(|kind| self.layer(kind).iter())
            .filter(|feature| !feature.name.is_empty())
            .filter_map(|feature| Some(Label {
                text: feature.name.as_str(),
                kind: feature.kind,
                position: self.label_position(feature)?,
            }))
            .collect();

        let notice = self.is_empty()
            .then(|| "No features with demographic data inside the region".to_string());

        RenderPass {
            metric: self.metric,
            features,
            labels,
            legend: self.legend(),
            panel: self.panel(),
            notice,
            bounds: self.bounds(),
        }
    }

    /// Extent of the visible features, or the configured region when there are none.
    fn bounds(&self) -> Rect<f64> {
        self.cities.iter().chain(&self.cdps)
            .filter_map(|feature| feature.geometry.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
            .unwrap_or_else(|| *self.filter.bounds())
    }

    /// Breaks over every visible feature for the active metric.
    fn recompute_breaks(&mut self) {
        let values: Vec<f64> = self.cities.iter().chain(&self.cdps)
            .map(|feature| extract_value(&feature.properties, self.metric))
            .collect();
        self.breaks = compute_breaks(&values, self.palette().len());
    }
}
