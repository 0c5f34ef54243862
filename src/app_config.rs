use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    eagle: Eagle,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn eagle(&self) -> &Eagle {
        &self.eagle
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_bind_address")]
    bind_address: String,
}

fn default_port() -> u16 {
    9597
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

impl Core {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }
}

#[derive(Debug, Deserialize)]
pub struct Eagle {
    address: Option<String>,
    cloud_id: Option<String>,
    install_code: String,
    model: Model,
}

impl Eagle {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn cloud_id(&self) -> Option<&str> {
        self.cloud_id.as_deref()
    }

    pub fn install_code(&self) -> &str {
        &self.install_code
    }

    pub fn model(&self) -> Model {
        self.model
    }
}

/// The gateway model to poll. Only the Eagle-200 command set is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Model {
    #[serde(rename = "eagle200")]
    Eagle200,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    port: 9597,
                    bind_address: "0.0.0.0".to_string(),
                },
                eagle: Eagle {
                    address: Some("eagle.local".to_string()),
                    cloud_id: Some("cloud".to_string()),
                    install_code: "secret".to_string(),
                    model: Model::Eagle200,
                },
            },
        }
    }

    pub fn eagle_address(mut self, address: String) -> Self {
        self.config.eagle.address = Some(address);
        self
    }

    pub fn no_address(mut self) -> Self {
        self.config.eagle.address = None;
        self
    }

    pub fn no_target(mut self) -> Self {
        self.config.eagle.address = None;
        self.config.eagle.cloud_id = None;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
