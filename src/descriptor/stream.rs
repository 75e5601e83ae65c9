//! Stream descriptor record type
//!
//! A descriptor describes one retrievable media variant: its format code
//! (itag), MIME type, resolution, frame rate, average bitrate, and codecs.
//! Track composition is derived from codec presence, never stored.

use serde::{Deserialize, Serialize};

/// A single media stream variant as published in a format manifest.
///
/// Optional fields model genuinely absent attributes: an audio-only
/// stream carries no resolution or frame rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Format identifier code, unique per variant
    pub itag: u32,
    /// Two-part MIME identifier (e.g. "video/mp4")
    pub mime_type: String,
    /// Video resolution label (e.g. "720p"), absent for audio-only streams
    #[serde(default)]
    pub resolution: Option<String>,
    /// Frames per second, absent for audio-only streams
    #[serde(default)]
    pub fps: Option<u32>,
    /// Average bitrate in bits per second
    #[serde(default)]
    pub bitrate: Option<u32>,
    /// Video compression format (e.g. "vp9", "avc1.4d401e")
    #[serde(default)]
    pub video_codec: Option<String>,
    /// Audio compression format (e.g. "opus", "mp4a.40.2")
    #[serde(default)]
    pub audio_codec: Option<String>,
}

impl StreamDescriptor {
    /// Creates a descriptor with only the mandatory attributes set
    pub fn new(itag: u32, mime_type: impl Into<String>) -> Self {
        Self {
            itag,
            mime_type: mime_type.into(),
            resolution: None,
            fps: None,
            bitrate: None,
            video_codec: None,
            audio_codec: None,
        }
    }

    /// Sets the resolution label
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Sets the frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Sets the average bitrate
    pub fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    /// Sets the video codec
    pub fn with_video_codec(mut self, codec: impl Into<String>) -> Self {
        self.video_codec = Some(codec.into());
        self
    }

    /// Sets the audio codec
    pub fn with_audio_codec(mut self, codec: impl Into<String>) -> Self {
        self.audio_codec = Some(codec.into());
        self
    }

    /// Major type of the MIME identifier ("video" in "video/mp4")
    pub fn media_type(&self) -> &str {
        match self.mime_type.split_once('/') {
            Some((major, _)) => major,
            None => &self.mime_type,
        }
    }

    /// Subtype of the MIME identifier ("mp4" in "video/mp4")
    pub fn subtype(&self) -> &str {
        match self.mime_type.split_once('/') {
            Some((_, sub)) => sub,
            None => "",
        }
    }

    /// Returns true if this stream carries an audio track
    pub fn includes_audio_track(&self) -> bool {
        self.audio_codec.is_some()
    }

    /// Returns true if this stream carries a video track
    pub fn includes_video_track(&self) -> bool {
        self.video_codec.is_some()
    }

    /// Progressive: a single file containing both audio and video tracks
    pub fn is_progressive(&self) -> bool {
        self.includes_audio_track() && self.includes_video_track()
    }

    /// Adaptive: exactly one of audio or video, tracks delivered separately
    pub fn is_adaptive(&self) -> bool {
        self.includes_audio_track() != self.includes_video_track()
    }
}
