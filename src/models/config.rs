//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::DEFAULT_SIMILAR_COUNT;
use crate::repository::DEFAULT_DATA_PATH;

const DEFAULT_ZMQ_ADDRESS: &str = "tcp://127.0.0.1:5556";

#[derive(Clone, Debug, Deserialize)]
/// Settings of the lookup service.
pub struct ServerConfig {
    pub data_path: String,
    pub zmq_address: String,
    pub default_count: usize,
}

impl ServerConfig {
    /// Builds the configuration from defaults, the optional file `path`
    /// (any format the `config` crate recognises by extension, YAML here)
    /// and `RECOMMENDER_*` environment variables, in increasing priority.
    ///
    /// A `default_count` of zero is rejected.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .set_default("zmq_address", DEFAULT_ZMQ_ADDRESS)?
            .set_default("default_count", DEFAULT_SIMILAR_COUNT as i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("RECOMMENDER"))
            .build()?
            .try_deserialize()?;

        if config.default_count == 0 {
            return Err(ConfigError::Message(
                "default_count must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}
