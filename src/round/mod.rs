// Public API
pub use classifier::{
    classify, tokenize, ScoringEvent, Utterance, EXPLANATION_MARKER, EXPLANATION_MIN_OVERLAP,
    SENTENCE_MARKER, TASK_MARKER,
};
pub use models::{Round, RoundTrigger, RoundView, TranslationState};

// Internal modules
mod classifier;
mod models;
