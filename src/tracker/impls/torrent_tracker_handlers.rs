use std::collections::{BTreeMap, HashMap};
use std::net::{IpAddr, SocketAddr};
use log::{debug, warn};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

fn first_value<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
    query.get(field).and_then(|values| values.first()).map(|value| value.as_slice())
}

fn parse_number<T: std::str::FromStr>(value: &[u8]) -> Option<T> {
    std::str::from_utf8(value).ok().and_then(|value| value.parse::<T>().ok())
}

fn parse_counter(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<u64, TrackerError> {
    match first_value(query, field) {
        None => Ok(0),
        Some(value) => parse_number::<u64>(value).ok_or(TrackerError::MalformedRequest),
    }
}

impl TorrentTracker {
    /// Turns a decoded announce query into a typed request.
    ///
    /// Checks run in a fixed order (info_hash, peer_id, port, counters,
    /// numwant) and the first failure is returned.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let info_hash = first_value(query, "info_hash").ok_or(TrackerError::MissingInfoHash)?;
        let info_hash = InfoHash::try_from(info_hash)?;

        let peer_id = match first_value(query, "peer_id") {
            None => return Err(TrackerError::MissingPeerID),
            Some(value) if value.is_empty() => return Err(TrackerError::MissingPeerID),
            Some(value) => PeerId::try_from(value)?,
        };

        let port = first_value(query, "port").ok_or(TrackerError::MissingPort)?;
        let port = match parse_number::<u16>(port) {
            None | Some(0) => return Err(TrackerError::InvalidPort),
            Some(port) => port,
        };

        let uploaded = parse_counter(query, "uploaded")?;
        let downloaded = parse_counter(query, "downloaded")?;
        let left = first_value(query, "left")
            .and_then(parse_number::<u64>)
            .ok_or(TrackerError::MalformedRequest)?;

        let event = first_value(query, "event").map(AnnounceEvent::from_query).unwrap_or_default();

        let tracker_config = &self.config.tracker_config;
        let numwant = match first_value(query, "numwant") {
            None => tracker_config.numwant_default,
            Some(value) => parse_number::<u64>(value).ok_or(TrackerError::InvalidNumWant)?,
        }.min(tracker_config.numwant_max);

        let compact = first_value(query, "compact").map(|value| value == b"1").unwrap_or(false);
        let no_peer_id = query.contains_key("no_peer_id");

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            compact,
            no_peer_id,
            event,
            remote_addr,
            numwant,
        })
    }

    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<ScrapeQueryRequest, TrackerError>
    {
        let hashes = match query.get("info_hash") {
            Some(hashes) if !hashes.is_empty() => hashes,
            _ => return Err(TrackerError::MissingInfoHash),
        };
        let info_hash = hashes.iter()
            .map(|hash| InfoHash::try_from(hash.as_slice()))
            .collect::<Result<Vec<InfoHash>, TrackerError>>()?;
        Ok(ScrapeQueryRequest { info_hash })
    }

    /// Registers, refreshes or removes the announcing peer and selects
    /// other peers for it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn handle_announce(&self, announce: AnnounceQueryRequest, passkey: &Passkey) -> Result<AnnounceResult, TrackerError>
    {
        if !self.authorization.authorize(&announce.info_hash, passkey).await {
            warn!("[ANNOUNCE] Passkey {passkey} refused for {}", announce.info_hash);
            self.update_stats(StatsEvent::AuthFailures, 1);
            return Err(TrackerError::InvalidAuth);
        }

        let peer_key = PeerKey {
            peer_id: announce.peer_id,
            peer_addr: SocketAddr::new(announce.remote_addr, announce.port),
        };
        let now = self.clock.now();
        self.check_announce_allowed(&announce, &peer_key, now)?;

        if let Some(client) = announce.peer_id.get_client_prefix() {
            debug!("[ANNOUNCE] {} {:?} from {} ({client})", announce.info_hash, announce.event, peer_key.peer_addr);
        }

        let torrent_peer = TorrentPeer {
            peer_id: announce.peer_id,
            peer_addr: peer_key.peer_addr,
            updated: now,
            uploaded: announce.uploaded,
            downloaded: announce.downloaded,
            left: announce.left,
            event: announce.event,
        };
        let is_seed = torrent_peer.is_seed();

        let stats = match announce.event {
            AnnounceEvent::Stopped => {
                let (_, stats) = self.remove_peer(announce.info_hash, &peer_key)?;
                self.update_stats(StatsEvent::Announces, 1);
                return Ok(AnnounceResult {
                    peers: Vec::new(),
                    stats,
                    interval: self.config.tracker_config.request_interval,
                    min_interval: self.config.tracker_config.request_interval_minimum,
                });
            }
            AnnounceEvent::Completed => self.upsert_peer(announce.info_hash, torrent_peer, true)?.stats,
            AnnounceEvent::Started | AnnounceEvent::None => self.upsert_peer(announce.info_hash, torrent_peer, false)?.stats,
        };

        let peers = self.get_peers_for(&announce.info_hash, &peer_key, is_seed, announce.numwant as usize);
        self.update_stats(StatsEvent::Announces, 1);

        Ok(AnnounceResult {
            peers,
            stats,
            interval: self.config.tracker_config.request_interval,
            min_interval: self.config.tracker_config.request_interval_minimum,
        })
    }

    /// Rejects announces on disabled swarms and regular announces that come
    /// back before `announce_rate_limit` seconds have passed. Mutates nothing.
    fn check_announce_allowed(&self, announce: &AnnounceQueryRequest, peer_key: &PeerKey, now: std::time::Duration) -> Result<(), TrackerError>
    {
        let Some(handle) = self.get_torrent(&announce.info_hash) else {
            return Ok(());
        };
        let entry = handle.lock();
        if !entry.enabled {
            drop(entry);
            debug!("[ANNOUNCE] Swarm {} is disabled", announce.info_hash);
            self.update_stats(StatsEvent::AuthFailures, 1);
            return Err(TrackerError::InvalidAuth);
        }

        let rate_limit = self.config.tracker_config.announce_rate_limit;
        if rate_limit == 0 || !announce.event.is_regular() {
            return Ok(());
        }
        if let Some(previous) = entry.get_peer(peer_key)
            && now.saturating_sub(previous.updated).as_secs() < rate_limit
        {
            drop(entry);
            debug!("[ANNOUNCE] {} announced {} again too soon", peer_key.peer_addr, announce.info_hash);
            self.update_stats(StatsEvent::RateLimited, 1);
            return Err(TrackerError::ClientRequestTooFast);
        }
        Ok(())
    }

    /// Counters for each requested hash. Unknown hashes report zeroes.
    ///
    /// Authorization is checked per hash: refused hashes are left out of the
    /// reply, and the request fails with [`TrackerError::InvalidAuth`] only
    /// when every hash is refused.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn handle_scrape(&self, scrape: ScrapeQueryRequest, passkey: &Passkey) -> Result<BTreeMap<InfoHash, SwarmStats>, TrackerError>
    {
        let mut allowed = Vec::with_capacity(scrape.info_hash.len());
        for info_hash in scrape.info_hash {
            if self.authorization.authorize(&info_hash, passkey).await {
                allowed.push(info_hash);
                continue;
            }
            warn!("[SCRAPE] Passkey {passkey} refused for {info_hash}");
            self.update_stats(StatsEvent::AuthFailures, 1);
        }
        if allowed.is_empty() {
            return Err(TrackerError::InvalidAuth);
        }

        let files = allowed.into_iter()
            .map(|info_hash| (info_hash, self.get_torrent_stats(&info_hash).unwrap_or_default()))
            .collect::<BTreeMap<InfoHash, SwarmStats>>();
        self.update_stats(StatsEvent::Scrapes, 1);
        Ok(files)
    }
}
