use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

pub const DEFAULT_JOBS_API_URL: &str = "https://teknorix.jobsoid.com/api/v1";

#[derive(Deserialize, Debug)]
pub struct Settings {
    /// public address of this service, used for share links
    pub base_url: String,
    pub service_name: String,
    pub listen_port: String,
    pub jobs_api_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("base_url", "http://localhost:3000")?
            .set_default("service_name", "jobboard")?
            .set_default("listen_port", "3000")?
            .set_default("jobs_api_url", DEFAULT_JOBS_API_URL)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.base_url = s.base_url.trim_end_matches('/').into();
        if s.jobs_api_url.is_empty() {
            s.jobs_api_url = DEFAULT_JOBS_API_URL.into();
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
