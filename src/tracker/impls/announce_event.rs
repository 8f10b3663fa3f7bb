use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Unknown values are regular announces; clients send all sorts of noise here.
    pub fn from_query(value: &[u8]) -> AnnounceEvent {
        match std::str::from_utf8(value).map(|s| s.to_ascii_lowercase()) {
            Ok(event) => match event.as_str() {
                "started" => AnnounceEvent::Started,
                "stopped" => AnnounceEvent::Stopped,
                "completed" => AnnounceEvent::Completed,
                _ => AnnounceEvent::None,
            },
            Err(_) => AnnounceEvent::None,
        }
    }

    /// Regular announces are the ones subject to the rate limit.
    pub fn is_regular(&self) -> bool {
        matches!(self, AnnounceEvent::None | AnnounceEvent::Started)
    }
}
