//! Interactive map state: selection, label visibility, and the controller owning both.

mod controller;
mod labels;
mod selection;

pub use controller::{Label, MapController, MapData, RenderPass, RenderedFeature};
pub use labels::{LabelChange, LabelChanges, LabelVisibility, label_visible};
pub use selection::{FeatureRef, Selection, SelectionChange};
