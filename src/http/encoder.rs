use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use byteorder::{BigEndian, ReadBytesExt};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Bencodes an announce result.
///
/// In compact mode IPv4 peers go into `peers` as 6-byte entries and IPv6
/// peers into `peers6` as 18-byte entries; `peers6` is left out when empty.
/// Otherwise `peers` is a list of `ip`/`peer id`/`port` dictionaries.
pub fn encode_announce(result: &AnnounceResult, compact: bool, no_peer_id: bool) -> Vec<u8>
{
    let mut response = ben_map! {
        "complete" => ben_int!(result.stats.complete as i64),
        "downloaded" => ben_int!(result.stats.downloaded as i64),
        "incomplete" => ben_int!(result.stats.incomplete as i64),
        "interval" => ben_int!(result.interval as i64),
        "min interval" => ben_int!(result.min_interval as i64)
    };

    if compact {
        let (peers, peers6) = encode_compact_peers(&result.peers);
        if let Some(dict) = response.dict_mut() {
            dict.insert(Cow::from(&b"peers"[..]), ben_bytes!(peers));
            if !peers6.is_empty() {
                dict.insert(Cow::from(&b"peers6"[..]), ben_bytes!(peers6));
            }
        }
        return response.encode();
    }

    let mut peers_list = ben_list!();
    if let Some(list) = peers_list.list_mut() {
        for torrent_peer in result.peers.iter() {
            let mut peer_entry = ben_map! {
                "ip" => ben_bytes!(torrent_peer.peer_addr.ip().to_string()),
                "port" => ben_int!(torrent_peer.peer_addr.port() as i64)
            };
            if !no_peer_id && let Some(dict) = peer_entry.dict_mut() {
                dict.insert(Cow::from(&b"peer id"[..]), ben_bytes!(torrent_peer.peer_id.0.to_vec()));
            }
            list.push(peer_entry);
        }
    }
    if let Some(dict) = response.dict_mut() {
        dict.insert(Cow::from(&b"peers"[..]), peers_list);
    }
    response.encode()
}

/// Bencodes scrape counters as `files` keyed by the raw 20-byte hashes.
pub fn encode_scrape(files: &BTreeMap<InfoHash, SwarmStats>) -> Vec<u8>
{
    let mut files_map = ben_map!();
    if let Some(dict) = files_map.dict_mut() {
        for (info_hash, stats) in files.iter() {
            dict.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(stats.complete as i64),
                "downloaded" => ben_int!(stats.downloaded as i64),
                "incomplete" => ben_int!(stats.incomplete as i64)
            });
        }
    }
    (ben_map! {
        "files" => files_map
    }).encode()
}

pub fn encode_failure(error: &TrackerError) -> Vec<u8>
{
    (ben_map! {
        "failure reason" => ben_bytes!(error.to_string())
    }).encode()
}

/// Splits peers into the compact IPv4 (6 bytes each) and IPv6 (18 bytes
/// each) blobs, addresses and ports in network byte order.
pub fn encode_compact_peers(peers: &[TorrentPeer]) -> (Vec<u8>, Vec<u8>)
{
    let mut peers4 = Vec::with_capacity(peers.len() * 6);
    let mut peers6 = Vec::new();
    for torrent_peer in peers.iter() {
        match torrent_peer.peer_addr.ip() {
            IpAddr::V4(ip) => {
                peers4.extend_from_slice(&ip.octets());
                peers4.extend_from_slice(&torrent_peer.peer_addr.port().to_be_bytes());
            }
            IpAddr::V6(ip) => {
                peers6.extend_from_slice(&ip.octets());
                peers6.extend_from_slice(&torrent_peer.peer_addr.port().to_be_bytes());
            }
        }
    }
    (peers4, peers6)
}

pub fn decode_compact_peers(bytes: &[u8]) -> Result<Vec<SocketAddrV4>, TrackerError>
{
    if bytes.len() % 6 != 0 {
        return Err(TrackerError::MalformedRequest);
    }
    let mut cursor = Cursor::new(bytes);
    let mut peers = Vec::with_capacity(bytes.len() / 6);
    for _ in 0..bytes.len() / 6 {
        let ip = cursor.read_u32::<BigEndian>().map_err(|_| TrackerError::MalformedRequest)?;
        let port = cursor.read_u16::<BigEndian>().map_err(|_| TrackerError::MalformedRequest)?;
        peers.push(SocketAddrV4::new(Ipv4Addr::from(ip), port));
    }
    Ok(peers)
}

