//! Attribute-keyed ordering
//!
//! Sortable attributes are an enumerated set of typed extractors, resolved
//! once per `order_by` call. Unknown attribute names are a typed error,
//! never a runtime attribute miss. Numeric attributes order numerically,
//! string attributes lexicographically.

use crate::descriptor::StreamDescriptor;

use super::errors::{QueryError, QueryResult};

/// A sortable descriptor attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Itag,
    Resolution,
    Fps,
    MimeType,
    MediaType,
    Subtype,
    Bitrate,
    VideoCodec,
    AudioCodec,
}

/// Extracted attribute value with its natural ordering.
///
/// A single `order_by` call only ever compares values of one variant,
/// since each key extracts one type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Number(u64),
    Text(String),
}

impl SortKey {
    /// Resolves an attribute name (or alias spelling) to a sort key
    pub fn resolve(name: &str) -> QueryResult<Self> {
        match name {
            "itag" => Ok(SortKey::Itag),
            "resolution" | "res" => Ok(SortKey::Resolution),
            "fps" => Ok(SortKey::Fps),
            "mime_type" => Ok(SortKey::MimeType),
            "type" => Ok(SortKey::MediaType),
            "subtype" | "file_extension" => Ok(SortKey::Subtype),
            "bitrate" | "abr" => Ok(SortKey::Bitrate),
            "video_codec" => Ok(SortKey::VideoCodec),
            "audio_codec" => Ok(SortKey::AudioCodec),
            other => Err(QueryError::UnknownAttribute(other.to_string())),
        }
    }

    /// Canonical attribute name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Itag => "itag",
            SortKey::Resolution => "resolution",
            SortKey::Fps => "fps",
            SortKey::MimeType => "mime_type",
            SortKey::MediaType => "type",
            SortKey::Subtype => "subtype",
            SortKey::Bitrate => "bitrate",
            SortKey::VideoCodec => "video_codec",
            SortKey::AudioCodec => "audio_codec",
        }
    }

    /// Extracts this attribute's value, `None` when the descriptor lacks it
    pub fn extract(&self, stream: &StreamDescriptor) -> Option<SortValue> {
        match self {
            SortKey::Itag => Some(SortValue::Number(u64::from(stream.itag))),
            SortKey::Resolution => stream.resolution.clone().map(SortValue::Text),
            SortKey::Fps => stream.fps.map(|fps| SortValue::Number(u64::from(fps))),
            SortKey::MimeType => Some(SortValue::Text(stream.mime_type.clone())),
            SortKey::MediaType => Some(SortValue::Text(stream.media_type().to_string())),
            SortKey::Subtype => Some(SortValue::Text(stream.subtype().to_string())),
            SortKey::Bitrate => stream.bitrate.map(|b| SortValue::Number(u64::from(b))),
            SortKey::VideoCodec => stream.video_codec.clone().map(SortValue::Text),
            SortKey::AudioCodec => stream.audio_codec.clone().map(SortValue::Text),
        }
    }
}
