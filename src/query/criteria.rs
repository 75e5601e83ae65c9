//! Filter criteria and alias normalization
//!
//! A `FilterCriteria` is one configuration value with an explicitly
//! enumerated optional field per filtering option. Aliased options
//! (`res`/`resolution`, `file_extension`/`subtype`, `abr`/`bitrate`) are
//! equivalent entry points for the same criterion; normalization picks the
//! primary value when both are set, so each conceptual criterion
//! contributes at most one predicate.

use std::sync::Arc;

use crate::descriptor::StreamDescriptor;

use super::predicate::{CustomPredicate, Predicate};

/// Filtering options, all optional. An unset field places no constraint.
#[derive(Default, Clone)]
pub struct FilterCriteria {
    /// Video resolution label (e.g. "480p", "720p", "1080p")
    pub resolution: Option<String>,
    /// Alias of `resolution`
    pub res: Option<String>,
    /// Frames per second (e.g. 30 or 60)
    pub fps: Option<u32>,
    /// Full two-part MIME identifier (e.g. "video/mp4")
    pub mime_type: Option<String>,
    /// Major type part of the MIME identifier ("audio", "video")
    pub media_type: Option<String>,
    /// Subtype part of the MIME identifier ("mp4", "webm")
    pub subtype: Option<String>,
    /// Alias of `subtype`
    pub file_extension: Option<String>,
    /// Average bitrate in bits per second
    pub bitrate: Option<u32>,
    /// Alias of `bitrate`
    pub abr: Option<u32>,
    /// Video compression format (e.g. "vp9")
    pub video_codec: Option<String>,
    /// Audio compression format (e.g. "opus")
    pub audio_codec: Option<String>,
    /// Keep only streams with an audio track and no video track
    pub only_audio: bool,
    /// Keep only streams with a video track and no audio track
    pub only_video: bool,
    /// Keep only progressive streams
    pub progressive: bool,
    /// Keep only adaptive streams
    pub adaptive: bool,
    /// Caller-supplied predicates, each additionally ANDed in, in order
    pub custom: Vec<CustomPredicate>,
}

impl FilterCriteria {
    /// Creates an empty criteria set (the identity filter)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resolution constraint
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Sets the resolution constraint via its alias
    pub fn with_res(mut self, res: impl Into<String>) -> Self {
        self.res = Some(res.into());
        self
    }

    /// Sets the frame rate constraint
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Sets the full MIME type constraint
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Sets the MIME major type constraint
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the MIME subtype constraint
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Sets the MIME subtype constraint via its alias
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = Some(extension.into());
        self
    }

    /// Sets the average bitrate constraint
    pub fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    /// Sets the average bitrate constraint via its alias
    pub fn with_abr(mut self, abr: u32) -> Self {
        self.abr = Some(abr);
        self
    }

    /// Sets the video codec constraint
    pub fn with_video_codec(mut self, codec: impl Into<String>) -> Self {
        self.video_codec = Some(codec.into());
        self
    }

    /// Sets the audio codec constraint
    pub fn with_audio_codec(mut self, codec: impl Into<String>) -> Self {
        self.audio_codec = Some(codec.into());
        self
    }

    /// Keeps only streams with an audio track and no video track
    pub fn only_audio(mut self) -> Self {
        self.only_audio = true;
        self
    }

    /// Keeps only streams with a video track and no audio track
    pub fn only_video(mut self) -> Self {
        self.only_video = true;
        self
    }

    /// Keeps only progressive streams
    pub fn progressive(mut self) -> Self {
        self.progressive = true;
        self
    }

    /// Keeps only adaptive streams
    pub fn adaptive(mut self) -> Self {
        self.adaptive = true;
        self
    }

    /// Adds a caller-supplied predicate
    pub fn with_custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&StreamDescriptor) -> bool + Send + Sync + 'static,
    {
        self.custom.push(Arc::new(predicate));
        self
    }

    /// Normalizes the criteria into the composed predicate list.
    ///
    /// Aliases collapse first (primary name wins when both are set), then
    /// each present criterion contributes exactly one predicate in table
    /// order, custom predicates last.
    pub fn to_predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(resolution) = self.resolution.as_ref().or(self.res.as_ref()) {
            predicates.push(Predicate::Resolution(resolution.clone()));
        }
        if let Some(fps) = self.fps {
            predicates.push(Predicate::Fps(fps));
        }
        if let Some(mime_type) = &self.mime_type {
            predicates.push(Predicate::MimeType(mime_type.clone()));
        }
        if let Some(media_type) = &self.media_type {
            predicates.push(Predicate::MediaType(media_type.clone()));
        }
        if let Some(subtype) = self.subtype.as_ref().or(self.file_extension.as_ref()) {
            predicates.push(Predicate::Subtype(subtype.clone()));
        }
        if let Some(bitrate) = self.bitrate.or(self.abr) {
            predicates.push(Predicate::Bitrate(bitrate));
        }
        if let Some(codec) = &self.video_codec {
            predicates.push(Predicate::VideoCodec(codec.clone()));
        }
        if let Some(codec) = &self.audio_codec {
            predicates.push(Predicate::AudioCodec(codec.clone()));
        }
        if self.only_audio {
            predicates.push(Predicate::OnlyAudio);
        }
        if self.only_video {
            predicates.push(Predicate::OnlyVideo);
        }
        if self.progressive {
            predicates.push(Predicate::Progressive);
        }
        if self.adaptive {
            predicates.push(Predicate::Adaptive);
        }
        for custom in &self.custom {
            predicates.push(Predicate::Custom(Arc::clone(custom)));
        }

        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_is_identity() {
        assert!(FilterCriteria::new().to_predicates().is_empty());
    }

    #[test]
    fn test_one_predicate_per_criterion() {
        let predicates = FilterCriteria::new()
            .with_resolution("720p")
            .with_fps(30)
            .with_subtype("mp4")
            .to_predicates();
        assert_eq!(predicates.len(), 3);
    }

    #[test]
    fn test_alias_alone_is_honored() {
        let predicates = FilterCriteria::new().with_res("480p").to_predicates();
        assert_eq!(predicates.len(), 1);
        assert!(matches!(&predicates[0], Predicate::Resolution(r) if r == "480p"));

        let predicates = FilterCriteria::new().with_file_extension("webm").to_predicates();
        assert!(matches!(&predicates[0], Predicate::Subtype(s) if s == "webm"));

        let predicates = FilterCriteria::new().with_abr(128_000).to_predicates();
        assert!(matches!(&predicates[0], Predicate::Bitrate(128_000)));
    }

    #[test]
    fn test_primary_name_wins_over_alias() {
        let predicates = FilterCriteria::new()
            .with_resolution("1080p")
            .with_res("480p")
            .to_predicates();
        // One predicate, carrying the primary value
        assert_eq!(predicates.len(), 1);
        assert!(matches!(&predicates[0], Predicate::Resolution(r) if r == "1080p"));

        let predicates = FilterCriteria::new()
            .with_bitrate(192_000)
            .with_abr(64_000)
            .to_predicates();
        assert_eq!(predicates.len(), 1);
        assert!(matches!(&predicates[0], Predicate::Bitrate(192_000)));
    }

    #[test]
    fn test_flags_contribute_only_when_set() {
        let predicates = FilterCriteria::new().progressive().to_predicates();
        assert_eq!(predicates.len(), 1);
        assert!(matches!(&predicates[0], Predicate::Progressive));
    }

    #[test]
    fn test_custom_predicates_ordered_last() {
        let predicates = FilterCriteria::new()
            .with_custom(|s| s.fps == Some(60))
            .with_fps(60)
            .to_predicates();
        assert_eq!(predicates.len(), 2);
        assert!(matches!(&predicates[0], Predicate::Fps(60)));
        assert!(matches!(&predicates[1], Predicate::Custom(_)));
    }
}
