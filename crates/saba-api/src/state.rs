use saba_meds::lexicon::Lexicon;

/// Shared application state, injected into route handlers via Axum state.
///
/// The lexicon is immutable process-wide reference data; handlers receive
/// it by reference rather than reaching for a global.
#[derive(Clone, Copy)]
pub struct AppState {
    pub lexicon: &'static Lexicon,
}
