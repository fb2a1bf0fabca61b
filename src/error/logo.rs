//! Logo payload errors

use super::WhitelabelError;

pub fn decode_failed(reason: impl Into<String>) -> WhitelabelError {
    WhitelabelError::LogoDecodeFailed {
        reason: reason.into(),
    }
}
