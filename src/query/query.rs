//! The stream query engine
//!
//! A `StreamQuery` is an immutable snapshot: every transformation returns a
//! freshly constructed query and leaves the source untouched and usable.
//! Descriptors are shared structurally across derived queries; the itag
//! index is derived state, rebuilt from the sequence at every construction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::StreamDescriptor;

use super::criteria::FilterCriteria;
use super::errors::{QueryError, QueryResult};
use super::sort::{SortKey, SortValue};

/// Immutable query over an ordered sequence of stream descriptors
#[derive(Debug, Clone)]
pub struct StreamQuery {
    /// Ordered sequence, insertion order significant
    streams: Vec<Arc<StreamDescriptor>>,
    /// Derived itag lookup, later duplicates overwrite earlier ones
    itag_index: HashMap<u32, Arc<StreamDescriptor>>,
}

impl StreamQuery {
    /// Constructs a query over the given sequence.
    ///
    /// The itag index is built in sequence order, so on duplicate itags
    /// the later descriptor wins. Descriptor shape is not validated.
    pub fn new(streams: Vec<Arc<StreamDescriptor>>) -> Self {
        let mut itag_index = HashMap::with_capacity(streams.len());
        for stream in &streams {
            itag_index.insert(stream.itag, Arc::clone(stream));
        }
        Self {
            streams,
            itag_index,
        }
    }

    /// Constructs a query from owned descriptors
    pub fn from_descriptors(streams: Vec<StreamDescriptor>) -> Self {
        Self::new(streams.into_iter().map(Arc::new).collect())
    }

    /// Applies the given filtering criteria.
    ///
    /// The result keeps the subset satisfying the AND of all contributed
    /// predicates, preserving relative order. Empty criteria return an
    /// equivalent query over the full sequence.
    pub fn filter(&self, criteria: &FilterCriteria) -> StreamQuery {
        let predicates = criteria.to_predicates();
        let kept: Vec<Arc<StreamDescriptor>> = self
            .streams
            .iter()
            .filter(|stream| predicates.iter().all(|p| p.matches(stream)))
            .map(Arc::clone)
            .collect();
        tracing::debug!(
            "filter with {} predicates kept {} of {} streams",
            predicates.len(),
            kept.len(),
            self.streams.len()
        );
        StreamQuery::new(kept)
    }

    /// Sorts the sequence ascending by the named attribute.
    ///
    /// The sort is stable: ties keep their relative order. Fails with
    /// `UnknownAttribute` for a name outside the sortable set, and with
    /// `MissingAttribute` if any descriptor lacks a value for the key.
    pub fn order_by(&self, attribute: &str) -> QueryResult<StreamQuery> {
        let key = SortKey::resolve(attribute)?;
        let mut keyed: Vec<(SortValue, Arc<StreamDescriptor>)> =
            Vec::with_capacity(self.streams.len());
        for stream in &self.streams {
            let value = key
                .extract(stream)
                .ok_or(QueryError::MissingAttribute {
                    itag: stream.itag,
                    attribute: key.as_str(),
                })?;
            keyed.push((value, Arc::clone(stream)));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        tracing::debug!("ordered {} streams by {}", keyed.len(), key.as_str());
        Ok(StreamQuery::new(
            keyed.into_iter().map(|(_, stream)| stream).collect(),
        ))
    }

    /// Reverses the current sequence order.
    ///
    /// This is a structural reversal of whatever the current order is, not
    /// a descending re-sort; chain it directly after `order_by` to obtain
    /// descending order.
    pub fn desc(&self) -> StreamQuery {
        let mut reversed = self.streams.clone();
        reversed.reverse();
        StreamQuery::new(reversed)
    }

    /// Returns an equivalent query; the explicit counterpart to `desc`
    pub fn asc(&self) -> StreamQuery {
        self.clone()
    }

    /// Looks up a descriptor by its itag, `None` when absent
    pub fn get_by_itag(&self, itag: u32) -> Option<&Arc<StreamDescriptor>> {
        self.itag_index.get(&itag)
    }

    /// First element of the sequence, `None` when empty
    pub fn first(&self) -> Option<&Arc<StreamDescriptor>> {
        self.streams.first()
    }

    /// Last element of the sequence, `None` when empty
    pub fn last(&self) -> Option<&Arc<StreamDescriptor>> {
        self.streams.last()
    }

    /// Number of descriptors in the sequence
    pub fn count(&self) -> usize {
        self.streams.len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Read-only view of the full current sequence
    pub fn all(&self) -> &[Arc<StreamDescriptor>] {
        &self.streams
    }

    /// Iterates over the sequence in order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<StreamDescriptor>> {
        self.streams.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_streams() -> Vec<StreamDescriptor> {
        vec![
            StreamDescriptor::new(18, "video/mp4")
                .with_resolution("360p")
                .with_fps(30)
                .with_bitrate(568_000)
                .with_video_codec("avc1.42001E")
                .with_audio_codec("mp4a.40.2"),
            StreamDescriptor::new(22, "video/mp4")
                .with_resolution("720p")
                .with_fps(30)
                .with_bitrate(1_152_000)
                .with_video_codec("avc1.64001F")
                .with_audio_codec("mp4a.40.2"),
            StreamDescriptor::new(137, "video/mp4")
                .with_resolution("1080p")
                .with_fps(30)
                .with_bitrate(4_400_000)
                .with_video_codec("avc1.640028"),
            StreamDescriptor::new(140, "audio/mp4")
                .with_bitrate(128_000)
                .with_audio_codec("mp4a.40.2"),
        ]
    }

    fn sample_query() -> StreamQuery {
        StreamQuery::from_descriptors(sample_streams())
    }

    #[test]
    fn test_construction_preserves_order() {
        let query = sample_query();
        assert_eq!(query.count(), 4);
        let itags: Vec<u32> = query.iter().map(|s| s.itag).collect();
        assert_eq!(itags, vec![18, 22, 137, 140]);
    }

    #[test]
    fn test_index_last_write_wins() {
        let query = StreamQuery::from_descriptors(vec![
            StreamDescriptor::new(18, "video/mp4").with_resolution("360p"),
            StreamDescriptor::new(18, "video/webm").with_resolution("480p"),
        ]);
        // Sequence keeps both, index keeps the later entry
        assert_eq!(query.count(), 2);
        let found = query.get_by_itag(18).unwrap();
        assert_eq!(found.mime_type, "video/webm");
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let query = sample_query();
        let filtered = query.filter(&FilterCriteria::new().with_resolution("720p"));
        assert_eq!(filtered.count(), 1);
        assert_eq!(query.count(), 4);
        assert!(query.get_by_itag(140).is_some());
    }

    #[test]
    fn test_filtered_query_has_fresh_index() {
        let query = sample_query();
        let video_only = query.filter(&FilterCriteria::new().only_video());
        assert_eq!(video_only.count(), 1);
        // Streams excluded by the filter are absent from the derived index
        assert!(video_only.get_by_itag(22).is_none());
        assert!(video_only.get_by_itag(137).is_some());
    }

    #[test]
    fn test_desc_is_structural_reversal() {
        let query = sample_query();
        let reversed = query.desc();
        let itags: Vec<u32> = reversed.iter().map(|s| s.itag).collect();
        assert_eq!(itags, vec![140, 137, 22, 18]);
    }

    #[test]
    fn test_asc_is_identity() {
        let query = sample_query();
        let same = query.asc();
        assert_eq!(same.all(), query.all());
    }

    #[test]
    fn test_empty_query_accessors() {
        let query = StreamQuery::from_descriptors(Vec::new());
        assert_eq!(query.count(), 0);
        assert!(query.is_empty());
        assert!(query.first().is_none());
        assert!(query.last().is_none());
        assert!(query.get_by_itag(22).is_none());
        assert!(query.all().is_empty());
    }

    #[test]
    fn test_order_by_missing_attribute_names_offender() {
        let query = sample_query();
        // itag 140 is audio-only and has no resolution
        let err = query.order_by("resolution").unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingAttribute {
                itag: 140,
                attribute: "resolution",
            }
        );
    }

    #[test]
    fn test_order_by_unknown_attribute() {
        let query = sample_query();
        let err = query.order_by("codec_delay").unwrap_err();
        assert_eq!(err, QueryError::UnknownAttribute("codec_delay".to_string()));
    }

    #[test]
    fn test_order_by_bitrate_ascending() {
        let query = sample_query();
        let ordered = query.order_by("bitrate").unwrap();
        let bitrates: Vec<u32> = ordered.iter().map(|s| s.bitrate.unwrap()).collect();
        assert_eq!(bitrates, vec![128_000, 568_000, 1_152_000, 4_400_000]);
    }
}
