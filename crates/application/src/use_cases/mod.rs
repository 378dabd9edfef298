//! Use cases

mod explain;
mod live_news;
mod predict;
mod suggestions;

pub use explain::Explain;
pub use live_news::LiveNews;
pub use predict::{Predict, PredictInput};
pub use suggestions::Suggestions;
