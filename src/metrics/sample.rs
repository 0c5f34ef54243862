/// One (name, kind, value, labels) tuple produced for a single scrape.
/// Samples are transient: the collector builds a fresh list per scrape and
/// nothing is retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub documentation: String,
    pub value: f64,
    pub kind: MetricKind,
    /// Label name/value pairs in insertion order. All samples sharing a
    /// metric name must carry the same label key set, as required by the
    /// exposition format.
    pub labels: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricSample {
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn label_values(&self) -> Vec<&str> {
        self.labels.iter().map(|(_, value)| value.as_str()).collect()
    }
}
