//! Filter predicates
//!
//! One predicate per conceptual criterion, combined with AND semantics by
//! the engine. Matching is exact equality, no coercion: a descriptor whose
//! optional attribute is absent never matches an equality predicate.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::StreamDescriptor;

/// Caller-supplied predicate function.
///
/// Must be pure with respect to the query's internal state.
pub type CustomPredicate = Arc<dyn Fn(&StreamDescriptor) -> bool + Send + Sync>;

/// A single filter predicate over a stream descriptor
#[derive(Clone)]
pub enum Predicate {
    /// Resolution label equals the given value
    Resolution(String),
    /// Frame rate equals the given value
    Fps(u32),
    /// Full MIME identifier equals the given value
    MimeType(String),
    /// MIME major type equals the given value
    MediaType(String),
    /// MIME subtype equals the given value
    Subtype(String),
    /// Average bitrate equals the given value
    Bitrate(u32),
    /// Video codec equals the given value
    VideoCodec(String),
    /// Audio codec equals the given value
    AudioCodec(String),
    /// Audio track present, video track absent
    OnlyAudio,
    /// Video track present, audio track absent
    OnlyVideo,
    /// Both tracks in a single file
    Progressive,
    /// Tracks delivered separately
    Adaptive,
    /// Caller-supplied predicate function
    Custom(CustomPredicate),
}

impl Predicate {
    /// Evaluates this predicate against a descriptor
    pub fn matches(&self, stream: &StreamDescriptor) -> bool {
        match self {
            Predicate::Resolution(want) => stream.resolution.as_deref() == Some(want.as_str()),
            Predicate::Fps(want) => stream.fps == Some(*want),
            Predicate::MimeType(want) => stream.mime_type == *want,
            Predicate::MediaType(want) => stream.media_type() == want,
            Predicate::Subtype(want) => stream.subtype() == want,
            Predicate::Bitrate(want) => stream.bitrate == Some(*want),
            Predicate::VideoCodec(want) => stream.video_codec.as_deref() == Some(want.as_str()),
            Predicate::AudioCodec(want) => stream.audio_codec.as_deref() == Some(want.as_str()),
            Predicate::OnlyAudio => {
                stream.includes_audio_track() && !stream.includes_video_track()
            }
            Predicate::OnlyVideo => {
                stream.includes_video_track() && !stream.includes_audio_track()
            }
            Predicate::Progressive => stream.is_progressive(),
            Predicate::Adaptive => stream.is_adaptive(),
            Predicate::Custom(f) => f(stream),
        }
    }

    /// Returns the predicate name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Resolution(_) => "resolution",
            Predicate::Fps(_) => "fps",
            Predicate::MimeType(_) => "mime_type",
            Predicate::MediaType(_) => "type",
            Predicate::Subtype(_) => "subtype",
            Predicate::Bitrate(_) => "bitrate",
            Predicate::VideoCodec(_) => "video_codec",
            Predicate::AudioCodec(_) => "audio_codec",
            Predicate::OnlyAudio => "only_audio",
            Predicate::OnlyVideo => "only_video",
            Predicate::Progressive => "progressive",
            Predicate::Adaptive => "adaptive",
            Predicate::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Custom holds an opaque closure, so all variants print by name
        write!(f, "Predicate::{}", self.name())
    }
}
