use crate::metrics::{MetricKind, MetricSample};
use prometheus::{CounterVec, Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;

const NO_DOCUMENTATION: &str = "No Documentation";

/// Renders one scrape's samples into the Prometheus text exposition format.
///
/// A fresh registry is built per scrape; the process-wide registry pattern
/// does not fit here because the metric families themselves are derived from
/// vendor-assigned variable names discovered at scrape time.
pub fn encode_samples(samples: &[MetricSample]) -> Result<String, prometheus::Error> {
    let registry = Registry::new();
    let mut counters: HashMap<String, CounterVec> = HashMap::new();
    let mut gauges: HashMap<String, GaugeVec> = HashMap::new();

    for sample in samples {
        let documentation = if sample.documentation.is_empty() {
            NO_DOCUMENTATION
        } else {
            &sample.documentation
        };
        let opts = Opts::new(&sample.name, documentation);

        match sample.kind {
            MetricKind::Counter => {
                let counter = match counters.get(&sample.name) {
                    Some(counter) => counter.clone(),
                    None => {
                        let counter = CounterVec::new(opts, &sample.label_names())?;
                        registry.register(Box::new(counter.clone()))?;
                        counters.insert(sample.name.clone(), counter.clone());
                        counter
                    }
                };
                counter.get_metric_with_label_values(&sample.label_values())?.inc_by(sample.value);
            }
            MetricKind::Gauge => {
                let gauge = match gauges.get(&sample.name) {
                    Some(gauge) => gauge.clone(),
                    None => {
                        let gauge = GaugeVec::new(opts, &sample.label_names())?;
                        registry.register(Box::new(gauge.clone()))?;
                        gauges.insert(sample.name.clone(), gauge.clone());
                        gauge
                    }
                };
                gauge.get_metric_with_label_values(&sample.label_values())?.set(sample.value);
            }
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, kind: MetricKind, value: f64, labels: &[(&str, &str)]) -> MetricSample {
        MetricSample {
            name: name.to_string(),
            documentation: "docs".to_string(),
            value,
            kind,
            labels: labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    #[test]
    fn encodes_a_gauge_sample() {
        let text = encode_samples(&[sample(
            "eagle_device_state",
            MetricKind::Gauge,
            1.0,
            &[("name", "Power Meter"), ("connection_status", "Connected")],
        )])
        .unwrap();

        assert!(text.contains("# TYPE eagle_device_state gauge"));
        assert!(text.contains("connection_status=\"Connected\""));
        assert!(text.contains("name=\"Power Meter\""));
    }

    #[test]
    fn encodes_a_counter_sample() {
        let text = encode_samples(&[sample(
            "eagle_device_last_contact",
            MetricKind::Counter,
            6699.0,
            &[("hardware_address", "0xaf29d6")],
        )])
        .unwrap();

        assert!(text.contains("# TYPE eagle_device_last_contact counter"));
        assert!(text.contains("6699"));
    }

    #[test]
    fn groups_samples_sharing_a_metric_name_into_one_family() {
        let text = encode_samples(&[
            sample("eagle_demand", MetricKind::Gauge, 1.5, &[("device_name", "a")]),
            sample("eagle_demand", MetricKind::Gauge, 2.5, &[("device_name", "b")]),
        ])
        .unwrap();

        assert_eq!(text.matches("# TYPE eagle_demand gauge").count(), 1);
        assert!(text.contains("device_name=\"a\""));
        assert!(text.contains("device_name=\"b\""));
    }

    #[test]
    fn an_empty_documentation_string_renders_the_placeholder() {
        let mut no_docs = sample("eagle_demand", MetricKind::Gauge, 1.5, &[]);
        no_docs.documentation = String::new();

        let text = encode_samples(&[no_docs]).unwrap();

        assert!(text.contains("# HELP eagle_demand No Documentation"));
    }

    #[test]
    fn mismatched_label_key_sets_for_one_name_are_an_error() {
        let result = encode_samples(&[
            sample("eagle_demand", MetricKind::Gauge, 1.5, &[("device_name", "a")]),
            sample("eagle_demand", MetricKind::Gauge, 2.5, &[("component_name", "b"), ("device_name", "a")]),
        ]);

        assert!(result.is_err());
    }
}
