use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersistenceConfig {
    pub enabled: bool,
    pub interval: u64,
    pub path: String,
}
