use std::time::Duration;

/// Delivery settings, deserializable so the hosting layer can load them from wherever it likes.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Longest `Reason` sent back; longer reasons are cut and end in `...`.
    pub max_reason_length: usize,
    /// Bound on the response PUT, so a hanging endpoint cannot hang the invocation.
    pub response_timeout_secs: u64,
}

impl Config {
    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_reason_length: 203,
            response_timeout_secs: 30,
        }
    }
}
