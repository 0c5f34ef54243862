mod render;
mod sample;

pub use render::encode_samples;
pub use sample::{MetricKind, MetricSample};
