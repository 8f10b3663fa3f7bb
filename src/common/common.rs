use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::tracker::enums::tracker_error::TrackerError;

/// Splits a raw query string into percent-decoded values per lower-cased key.
///
/// Repeated keys accumulate (multi-hash scrape). A key without `=` is kept
/// with no values so flags like `no_peer_id` can be detected. Values stay
/// raw bytes; keys must decode to UTF-8.
pub fn parse_query(query: Option<&str>) -> Result<HashMap<String, Vec<Vec<u8>>>, TrackerError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return Ok(queries);
    };

    for query_item in raw_query.split('&').filter(|item| !item.is_empty()) {
        let (key_raw, value_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_raw)
            .decode_utf8()
            .map_err(|_| TrackerError::QueryParseFail)?
            .to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let values = queries.entry(key_name).or_default();
        if let Some(value_raw) = value_raw {
            values.push(percent_encoding::percent_decode_str(value_raw).collect::<Vec<u8>>());
        }
    }

    Ok(queries)
}

/// Resolves the reporting address of a client.
///
/// Order: the `ip` query parameter, then the first entry of the forwarded-for
/// header, then the transport address. Each candidate is skipped when it does
/// not parse. IPv4-mapped IPv6 addresses come back as IPv4.
pub fn resolve_remote_ip(ip_param: Option<&[u8]>, forwarded_for: Option<&str>, remote_addr: Option<&str>) -> Result<IpAddr, TrackerError> {
    let from_param = ip_param
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|value| value.trim().parse::<IpAddr>().ok());

    let from_header = || forwarded_for
        .and_then(|header| header.split(',').next())
        .and_then(|value| value.trim().parse::<IpAddr>().ok());

    let from_remote = || remote_addr.and_then(|addr| {
        addr.parse::<SocketAddr>().map(|socket| socket.ip()).ok()
            .or_else(|| addr.parse::<IpAddr>().ok())
            .or_else(|| addr.split(':').next().and_then(|host| host.parse::<IpAddr>().ok()))
    });

    from_param
        .or_else(from_header)
        .or_else(from_remote)
        .map(normalize_ip)
        .ok_or(TrackerError::MalformedRequest)
}

pub fn normalize_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(IpAddr::V6(v6)),
        v4 => v4,
    }
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    f.write_str(std::str::from_utf8(&chars).map_err(|_| fmt::Error)?)
}

/// Sleeps for `timeout` unless shutdown is signalled first. Returns true on shutdown.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        _ = shutdown_handler.handle() => true,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError>
{
    let level = config.log_level_filter()?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}
