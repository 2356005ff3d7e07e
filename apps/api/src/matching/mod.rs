// Matching engine: profile normalization, factor scoring, ranking, explanations.
// Pure over (profile, catalog snapshot, policy); nothing here mutates shared state.

pub mod explain;
pub mod factors;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod profile;
pub mod ranker;
pub mod recommender;
pub mod vocabulary;
