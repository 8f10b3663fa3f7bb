use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::thread::available_parallelism;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_trackers_config::ApiTrackersConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::persistence_config::PersistenceConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(4);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                api_key: String::from("MyApiKey"),
                request_interval: 1800,
                request_interval_minimum: 900,
                numwant_default: 30,
                numwant_max: 50,
                peers_timeout: 2700,
                peers_cleanup_interval: 900,
                announce_rate_limit: 0,
                real_ip: String::from("X-Forwarded-For"),
                passkeys: vec![],
            },
            persistence: PersistenceConfig {
                enabled: false,
                interval: 60,
                path: String::from("torrents.json"),
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    keep_alive: 60,
                    request_timeout: 10,
                    disconnect_timeout: 10,
                    threads,
                }
            ),
            api_server: vec!(
                ApiTrackersConfig {
                    enabled: true,
                    bind_address: String::from("127.0.0.1:8080"),
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    threads,
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config<P: AsRef<Path>>(config: &Configuration, path: P) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        Self::load_from_path("config.toml", create)
    }

    /// Loads and validates `path`. When the file is missing or broken and
    /// `create` is set, a default file is written instead and
    /// [`ConfigurationError::Created`] is returned so the operator can edit it.
    pub fn load_from_path<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, ConfigurationError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(ConfigurationError::NotCreated(path.display().to_string()));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(ConfigurationError::Created(path.display().to_string()))
                    }
                    Err(error) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        Err(error)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(log::LevelFilter::Off),
            "trace" => Ok(log::LevelFilter::Trace),
            "debug" => Ok(log::LevelFilter::Debug),
            "info" => Ok(log::LevelFilter::Info),
            "warn" => Ok(log::LevelFilter::Warn),
            "error" => Ok(log::LevelFilter::Error),
            level => Err(ConfigurationError::ValidationError(format!("unknown log level '{level}'"))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;

        let tracker_config = &self.tracker_config;
        if tracker_config.numwant_max == 0 {
            return Err(ConfigurationError::ValidationError(String::from("numwant_max must be greater than 0")));
        }
        if tracker_config.numwant_default > tracker_config.numwant_max {
            return Err(ConfigurationError::ValidationError(format!(
                "numwant_default ({}) exceeds numwant_max ({})",
                tracker_config.numwant_default, tracker_config.numwant_max
            )));
        }
        if tracker_config.peers_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("peers_timeout must be greater than 0")));
        }
        for (name, interval) in [
            ("log_console_interval", self.log_console_interval),
            ("peers_cleanup_interval", tracker_config.peers_cleanup_interval),
            ("persistence interval", self.persistence.interval),
        ] {
            if interval == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than 0")));
            }
        }
        if tracker_config.request_interval_minimum > tracker_config.request_interval {
            return Err(ConfigurationError::ValidationError(String::from("request_interval_minimum exceeds request_interval")));
        }

        let mut check_map = vec![
            ("[TRACKER] Real IP header", tracker_config.real_ip.clone(), r"^[A-Za-z0-9-]{1,64}$"),
        ];
        for passkey in &tracker_config.passkeys {
            check_map.push(("[TRACKER] Passkey", passkey.clone(), r"^[A-Za-z0-9]{1,64}$"));
        }
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        let bind_addresses = self.http_server.iter().filter(|server| server.enabled).map(|server| ("[HTTP]", &server.bind_address))
            .chain(self.api_server.iter().filter(|server| server.enabled).map(|server| ("[API]", &server.bind_address)));
        for (name, bind_address) in bind_addresses {
            if bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("{name} invalid bind_address '{bind_address}'")));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
