use keyrank::clock::SystemClock;
use keyrank::config::{ConfigLoader, KeyrankConfig};
use keyrank::core::KeywordRegistry;

pub struct KeyrankCliContext {
    pub config: KeyrankConfig,
    pub registry: KeywordRegistry<SystemClock>,
}

impl KeyrankCliContext {
    pub fn new(config_path: Option<&str>) -> keyrank::Result<Self> {
        let mut loader = ConfigLoader::new();
        match config_path {
            Some(path) => {
                loader.load_file(path)?;
            }
            None => {
                loader.load_default_files();
            }
        }
        let config = loader.load_env().extract()?;

        let registry = keyrank::init(config.clone())?;

        Ok(Self { config, registry })
    }

    /// The inflection point to use when a command does not specify one
    pub fn inflection_point(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.config.scoring.default_inflection_point)
    }
}
