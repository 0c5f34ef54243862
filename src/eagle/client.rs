use crate::app_config::AppConfig;
use crate::eagle::codec::{self, Command, ComponentSelection, ProtocolError};
use crate::eagle::domain::{children, Device, DeviceComponents};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};
use xmltree::Element;

const PATH: &str = "/cgi-bin/post_manager";

/// Client for the Eagle-200's XML command protocol. Every operation is a
/// single request-response round trip with no retry; calls authenticate with
/// HTTP Basic auth using the cloud id and install code.
#[derive(Debug)]
pub struct EagleClient {
    client: Client,
    url: String,
    cloud_id: Option<String>,
    install_code: String,
}

impl EagleClient {
    pub fn new(config: &AppConfig) -> Result<EagleClient, EagleClientError> {
        let eagle = config.eagle();
        let address = match (eagle.address(), eagle.cloud_id()) {
            (Some(address), _) => address.to_string(),
            (None, Some(cloud_id)) => format!("eagle-{cloud_id}.local"),
            (None, None) => return Err(EagleClientError::NoTarget),
        };

        Ok(EagleClient {
            client: Client::new(),
            url: format!("http://{address}{PATH}"),
            cloud_id: eagle.cloud_id().map(str::to_string),
            install_code: eagle.install_code().to_string(),
        })
    }

    #[instrument(skip(self))]
    pub async fn device_list(&self) -> Result<Vec<Device>, EagleClientError> {
        let response = self.call(Command::new("device_list")).await?;
        Ok(children(&response, "Device").map(Device::from_xml).collect())
    }

    #[instrument(skip(self))]
    pub async fn device_details(&self, hardware_address: &str) -> Result<DeviceComponents, EagleClientError> {
        let response = self
            .call(Command::new("device_details").hardware_address(hardware_address))
            .await?;
        Ok(DeviceComponents::from_xml(&response))
    }

    #[instrument(skip(self, selection))]
    pub async fn device_query(
        &self,
        hardware_address: &str,
        selection: ComponentSelection,
    ) -> Result<DeviceComponents, EagleClientError> {
        let response = self
            .call(
                Command::new("device_query")
                    .hardware_address(hardware_address)
                    .components(selection),
            )
            .await?;
        Ok(DeviceComponents::from_xml(&response))
    }

    /// Writes variable values. Fire-and-forget: the result is the raw decoded
    /// acknowledgement.
    #[instrument(skip(self, writes))]
    pub async fn device_control(
        &self,
        hardware_address: &str,
        writes: Vec<(String, Vec<(String, String)>)>,
    ) -> Result<Element, EagleClientError> {
        self.call(
            Command::new("device_control")
                .hardware_address(hardware_address)
                .components(ComponentSelection::Write { components: writes }),
        )
        .await
    }

    async fn call(&self, command: Command) -> Result<Element, EagleClientError> {
        let body = command.to_bytes()?;
        debug!("-> {}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(&self.url)
            .basic_auth(self.cloud_id.as_deref().unwrap_or_default(), Some(&self.install_code))
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        debug!("<- {}", text);

        Ok(codec::parse_response(&text)?)
    }
}

#[derive(Error, Debug)]
pub enum EagleClientError {
    #[error("either an address or a cloud id must be configured")]
    NoTarget,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}
