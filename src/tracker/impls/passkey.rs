use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::passkey::Passkey;

impl Passkey {
    pub fn new(segment: &str) -> Result<Passkey, TrackerError> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::InvalidAuth);
        }
        Ok(Passkey(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passkey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Never log a full passkey.
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{visible}***")
    }
}
