use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = TrackerError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 20]>::try_from(data)
            .map(PeerId)
            .map_err(|_| TrackerError::InvalidPeerID)
    }
}

impl PeerId {
    /// Azureus style client prefix, e.g. `qB` for `-qB4650-...`.
    pub fn get_client_prefix(&self) -> Option<&str> {
        if self.0[0] != b'-' || self.0[7] != b'-' {
            return None;
        }
        std::str::from_utf8(&self.0[1..3]).ok()
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PeerIdVisitor;

        impl<'de> serde::de::Visitor<'de> for PeerIdVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let mut result = PeerId([0u8; 20]);
                hex::decode_to_slice(v, &mut result.0).map_err(|_| serde::de::Error::invalid_value(
                    serde::de::Unexpected::Str(v),
                    &"expected a 40 character hexadecimal string",
                ))?;
                Ok(result)
            }
        }
        des.deserialize_str(PeerIdVisitor)
    }
}
