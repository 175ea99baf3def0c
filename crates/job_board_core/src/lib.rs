//! Job board core: pure state machine, favorites store and view projection.
mod effect;
mod favorites;
mod msg;
mod posting;
mod projector;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use favorites::FavoritesSet;
pub use msg::Msg;
pub use posting::{Posting, PostingId, PostingSource};
pub use projector::{project, ViewMode};
pub use state::{AppState, LoadState};
pub use update::update;
pub use view_model::{AppViewModel, PostingRowView, RowAction, EMPTY_ALL, EMPTY_SAVED};
