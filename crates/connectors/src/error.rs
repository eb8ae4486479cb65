use thiserror::Error;

/// Errors raised while fetching pages from the remote source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source answered with a non-success status.
    #[error("Fetch failed with status {status}: {reason}")]
    Fetch { status: u16, reason: String },

    /// The response body could not be parsed as a page of records.
    #[error("Failed to decode page response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be sent or the body could not be read.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::records::page::PageResponse;

    #[test]
    fn unexpected_body_shape_is_a_decode_error() {
        let err = serde_json::from_str::<PageResponse>(r#"{"rows": []}"#).unwrap_err();
        let err = SourceError::from(err);
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn fetch_error_carries_status_and_reason() {
        let err = SourceError::Fetch {
            status: 503,
            reason: "upstream unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fetch failed with status 503: upstream unavailable"
        );
    }
}
