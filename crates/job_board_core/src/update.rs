use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.begin_load() {
                vec![Effect::LoadPostings]
            } else {
                Vec::new()
            }
        }
        Msg::PostingsLoaded { postings, source } => {
            state.apply_loaded(postings, source);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::ViewModeSelected(mode) => {
            state.set_view_mode(mode);
            Vec::new()
        }
        Msg::SaveClicked { posting_id } => {
            state.save_posting(posting_id);
            Vec::new()
        }
        Msg::RemoveClicked { posting_id } => {
            state.remove_posting(posting_id);
            Vec::new()
        }
    };

    (state, effects)
}
