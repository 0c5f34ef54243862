use crate::eagle::client::{EagleClient, EagleClientError};
use crate::eagle::codec::ComponentSelection;
use crate::metrics::{MetricKind, MetricSample};
use tracing::{debug, info, instrument};

const METRIC_PREFIX: &str = "eagle_";

/// Variable names that carry summation-style readings. These become counters;
/// everything else numeric becomes a gauge. Membership is decided by this
/// fixed table, never inferred from value monotonicity, because the protocol
/// gives no ordering guarantee across polls.
const COUNTER_METRICS: [&str; 2] = ["zigbee:CurrentSummationDelivered", "zigbee:CurrentSummationReceived"];

/// Walks the device roster once per scrape and flattens every readable
/// variable into metric samples. Stateless across scrapes: each call
/// recomputes everything from the wire.
#[derive(Debug)]
pub struct EagleCollector {
    client: EagleClient,
}

impl EagleCollector {
    pub fn new(client: EagleClient) -> EagleCollector {
        EagleCollector { client }
    }

    #[instrument(skip(self))]
    pub async fn collect(&self) -> Result<Vec<MetricSample>, EagleClientError> {
        let devices = self.client.device_list().await?;
        info!("Scraping {} device(s)", devices.len());

        let mut samples = Vec::new();
        for device in &devices {
            let hardware_address = device.hardware_address.clone().unwrap_or_default();
            let query = self.client.device_query(&hardware_address, ComponentSelection::All).await?;

            let device_labels = vec![
                ("name".to_string(), query.device.name.clone().unwrap_or_default()),
                ("hardware_address".to_string(), query.device.hardware_address.clone().unwrap_or_default()),
            ];

            match query.device.last_contact.as_ref().and_then(|last_contact| last_contact.as_f64()) {
                Some(last_contact) => samples.push(MetricSample {
                    name: format!("{METRIC_PREFIX}device_last_contact"),
                    documentation: "Time the EAGLE last had contact with the device".to_string(),
                    value: last_contact,
                    kind: MetricKind::Counter,
                    labels: device_labels.clone(),
                }),
                None => debug!(hardware_address, "last contact value is not numeric, skipping"),
            }

            let mut state_labels = device_labels;
            state_labels.push((
                "connection_status".to_string(),
                query.device.connection_status.clone().unwrap_or_default(),
            ));
            samples.push(MetricSample {
                name: format!("{METRIC_PREFIX}device_state"),
                documentation: "State of the EAGLE".to_string(),
                value: 1.0,
                kind: MetricKind::Gauge,
                labels: state_labels,
            });

            let device_name = device.name.as_ref().or(query.device.name.as_ref());
            for component in &query.components {
                for variable in &component.variables {
                    let Some(reading) = variable.as_reading() else {
                        continue;
                    };
                    let Some(name) = reading.name.as_deref() else {
                        continue;
                    };
                    let Some(raw_value) = reading.value.as_deref().filter(|value| !value.trim().is_empty()) else {
                        continue;
                    };
                    // Non-numeric variables (firmware versions and the like)
                    // have no metric representation.
                    let Ok(value) = raw_value.trim().parse::<f64>() else {
                        continue;
                    };
                    if !value.is_finite() {
                        continue;
                    }

                    let mut documentation = reading.description.clone().unwrap_or_default();
                    if let Some(units) = &reading.units {
                        documentation.push_str(&format!(" (Units: {units})"));
                    }

                    let kind = if COUNTER_METRICS.contains(&name) {
                        MetricKind::Counter
                    } else {
                        MetricKind::Gauge
                    };

                    samples.push(MetricSample {
                        name: format!("{METRIC_PREFIX}{name}"),
                        documentation,
                        value,
                        kind,
                        labels: vec![
                            ("device_name".to_string(), device_name.cloned().unwrap_or_default()),
                            ("device_hardware_address".to_string(), hardware_address.clone()),
                            ("component_name".to_string(), component.name.clone().unwrap_or_default()),
                            ("component_fixed_id".to_string(), component.fixed_id.clone().unwrap_or_default()),
                            ("component_hardware_id".to_string(), component.hardware_id.clone().unwrap_or_default()),
                        ],
                    });
                }
            }
        }

        info!("Scraped {} sample(s)", samples.len());
        Ok(samples)
    }
}
