use smallvec::SmallVec;

use crate::feature::FeatureKind;

/// Whether a label layer should be shown right now.
#[inline]
pub fn label_visible(zoom: f64, toggle: bool, min_zoom: f64) -> bool {
    toggle && zoom >= min_zoom
}

/// A label layer whose visibility must change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelChange {
    pub kind: FeatureKind,
    pub visible: bool,
}

pub type LabelChanges = SmallVec<[LabelChange; 2]>;

/// Per-kind label toggles plus the zoom gate. Remembers what was last applied
/// so repeated evaluation with the same inputs reports nothing.
#[derive(Debug, Clone)]
pub struct LabelVisibility {
    min_zoom: f64,
    zoom: f64,
    show_cities: bool,
    show_cdps: bool,
    applied: [Option<bool>; 2],
}

impl LabelVisibility {
    pub fn new(min_zoom: f64, zoom: f64, show_cities: bool, show_cdps: bool) -> Self {
        Self { min_zoom, zoom, show_cities, show_cdps, applied: [None; 2] }
    }

    #[inline] pub fn zoom(&self) -> f64 { self.zoom }

    #[inline] pub fn min_zoom(&self) -> f64 { self.min_zoom }

    #[inline] pub fn zoom_eligible(&self) -> bool { self.zoom >= self.min_zoom }

    pub fn toggle(&self, kind: FeatureKind) -> bool {
        match kind {
            FeatureKind::City => self.show_cities,
            FeatureKind::Cdp => self.show_cdps,
        }
    }

    pub fn is_visible(&self, kind: FeatureKind) -> bool {
        label_visible(self.zoom, self.toggle(kind), self.min_zoom)
    }

    /// Zoom-end event.
    pub fn set_zoom(&mut self, zoom: f64) -> LabelChanges {
        self.zoom = zoom;
        self.update()
    }

    /// Toggle-change event.
    pub fn set_toggle(&mut self, kind: FeatureKind, show: bool) -> LabelChanges {
        match kind {
            FeatureKind::City => self.show_cities = show,
            FeatureKind::Cdp => self.show_cdps = show,
        }
        self.update()
    }

    /// Re-evaluate both layers and report those whose visibility differs from
    /// what was last applied.
    pub fn update(&mut self) -> LabelChanges {
        let mut changes = LabelChanges::new();
        for kind in FeatureKind::ALL {
            let visible = self.is_visible(kind);
            let applied = &mut self.applied[slot(kind)];
            if *applied != Some(visible) {
                *applied = Some(visible);
                changes.push(LabelChange { kind, visible });
            }
        }
        changes
    }
}

#[inline]
fn slot(kind: FeatureKind) -> usize {
    match kind {
        FeatureKind::City => 0,
        FeatureKind::Cdp => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_rule() {
        assert!(!label_visible(10.0, true, 11.0));
        assert!(label_visible(11.0, true, 11.0));
        assert!(!label_visible(14.0, false, 11.0));
        assert!(!label_visible(f64::NAN, true, 11.0));
    }

    #[test]
    fn zooming_in_reveals_labels_without_toggling() {
        let mut labels = LabelVisibility::new(11.0, 9.0, true, false);
        labels.update();
        assert!(!labels.is_visible(FeatureKind::City));

        let changes = labels.set_zoom(12.0);
        assert_eq!(changes.as_slice(), &[LabelChange { kind: FeatureKind::City, visible: true }]);
        assert!(labels.toggle(FeatureKind::City));
        assert!(!labels.is_visible(FeatureKind::Cdp));
    }

    #[test]
    fn repeated_evaluation_is_idempotent() {
        let mut labels = LabelVisibility::new(11.0, 12.0, true, true);
        assert_eq!(labels.update().len(), 2);
        assert!(labels.update().is_empty());
        assert!(labels.set_zoom(13.0).is_empty());
        assert!(labels.set_toggle(FeatureKind::Cdp, true).is_empty());
    }

    #[test]
    fn toggle_off_hides_only_that_kind() {
        let mut labels = LabelVisibility::new(11.0, 12.0, true, true);
        labels.update();
        let changes = labels.set_toggle(FeatureKind::Cdp, false);
        assert_eq!(changes.as_slice(), &[LabelChange { kind: FeatureKind::Cdp, visible: false }]);
        assert!(labels.is_visible(FeatureKind::City));
    }
}
