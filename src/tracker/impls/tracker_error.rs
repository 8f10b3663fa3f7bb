use crate::tracker::enums::error_class::ErrorClass;
use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn code(&self) -> u16 {
        match self {
            TrackerError::InvalidReqType => 100,
            TrackerError::MissingInfoHash => 101,
            TrackerError::MissingPeerID => 102,
            TrackerError::MissingPort => 103,
            TrackerError::InvalidPort => 104,
            TrackerError::InvalidInfoHash => 150,
            TrackerError::InvalidPeerID => 151,
            TrackerError::InvalidNumWant => 152,
            TrackerError::InfoHashNotFound => 480,
            TrackerError::InvalidAuth => 490,
            TrackerError::ClientRequestTooFast => 500,
            TrackerError::GenericError(_) => 900,
            TrackerError::MalformedRequest => 901,
            TrackerError::QueryParseFail => 902,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            TrackerError::InvalidAuth => ErrorClass::Authorization,
            TrackerError::ClientRequestTooFast => ErrorClass::RateLimit,
            TrackerError::GenericError(_) => ErrorClass::Internal,
            _ => ErrorClass::Validation,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            TrackerError::InvalidReqType | TrackerError::InfoHashNotFound => 404,
            TrackerError::InvalidAuth => 403,
            TrackerError::ClientRequestTooFast => 429,
            TrackerError::GenericError(_) => 500,
            _ => 400,
        }
    }

    /// Detail for logs. Only internal errors have any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TrackerError::GenericError(detail) => Some(detail.as_str()),
            _ => None,
        }
    }
}
