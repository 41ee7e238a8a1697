use crate::feature::FeatureKind;

/// Non-owning handle to a rendered feature: its layer and index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureRef {
    pub kind: FeatureKind,
    pub index: usize,
}

impl FeatureRef {
    pub fn new(kind: FeatureKind, index: usize) -> Self { Self { kind, index } }
}

/// The features whose style must be redrawn after a transition. `restore`
/// goes back to its default style before `highlight` is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub restore: Option<FeatureRef>,
    pub highlight: Option<FeatureRef>,
}

impl SelectionChange {
    #[inline] pub fn is_empty(&self) -> bool { self.restore.is_none() && self.highlight.is_none() }
}

/// At most one highlighted feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(FeatureRef),
}

impl Selection {
    #[inline]
    pub fn selected(&self) -> Option<FeatureRef> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(feature) => Some(*feature),
        }
    }

    #[inline] pub fn is_selected(&self, feature: FeatureRef) -> bool { self.selected() == Some(feature) }

    /// Select `feature`, replacing any previous selection. Clicking the
    /// already-selected feature changes nothing.
    pub fn click_feature(&mut self, feature: FeatureRef) -> SelectionChange {
        let previous = self.selected();
        if previous == Some(feature) {
            return SelectionChange::default();
        }
        *self = Selection::Selected(feature);
        SelectionChange { restore: previous, highlight: Some(feature) }
    }

    pub fn click_background(&mut self) -> SelectionChange { self.clear() }

    /// Switching metrics always deselects; colors are about to change.
    pub fn metric_changed(&mut self) -> SelectionChange { self.clear() }

    pub fn dismiss_panel(&mut self) -> SelectionChange { self.clear() }

    fn clear(&mut self) -> SelectionChange {
        let restore = self.selected();
        *self = Selection::Unselected;
        SelectionChange { restore, highlight: None }
    }
}
