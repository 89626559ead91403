//! Inker core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{ConversionReport, CopyReport, Msg};
pub use state::{AppState, Phase};
pub use update::update;
pub use view_model::AppViewModel;
