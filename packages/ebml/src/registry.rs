//! Static table of known element ids.
//!
//! Ids are stored marker-stripped, the way [`crate::vint::decode`] yields
//! them: Segment is `0x18538067` on the wire and `0x8538067` here.

use crate::element::ElementKind;

/// Segment, the top-level container of a WebM file.
pub const SEGMENT: u64 = 0x853_8067;
/// Segment information.
pub const INFO: u64 = 0x549_a966;
/// Nanoseconds per tick.
pub const TIMECODE_SCALE: u64 = 0xa_d7b1;
/// Segment duration, in ticks.
pub const DURATION: u64 = 0x489;

/// Name and kind of a registered element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementType {
    pub id: u64,
    pub name: &'static str,
    pub kind: ElementKind,
}

impl ElementType {
    const fn new(id: u64, name: &'static str, kind: ElementKind) -> Self {
        Self { id, name, kind }
    }
}

/// Fallback for ids absent from the table.
pub const UNKNOWN: ElementType = ElementType::new(0, "Unknown", ElementKind::Opaque);

static ELEMENT_TYPES: &[ElementType] = &[
    // EBML header
    ElementType::new(0xa45dfa3, "EBML", ElementKind::Container),
    ElementType::new(0x286, "EBMLVersion", ElementKind::UnsignedInt),
    ElementType::new(0x2f7, "EBMLReadVersion", ElementKind::UnsignedInt),
    ElementType::new(0x2f2, "EBMLMaxIDLength", ElementKind::UnsignedInt),
    ElementType::new(0x2f3, "EBMLMaxSizeLength", ElementKind::UnsignedInt),
    ElementType::new(0x282, "DocType", ElementKind::Opaque),
    ElementType::new(0x287, "DocTypeVersion", ElementKind::UnsignedInt),
    ElementType::new(0x285, "DocTypeReadVersion", ElementKind::UnsignedInt),

    // Global
    ElementType::new(0x6c, "Void", ElementKind::Opaque),
    ElementType::new(0x3f, "CRC-32", ElementKind::Opaque),

    // Signing
    ElementType::new(0xb538667, "SignatureSlot", ElementKind::Container),
    ElementType::new(0x3e8a, "SignatureAlgo", ElementKind::UnsignedInt),
    ElementType::new(0x3e9a, "SignatureHash", ElementKind::UnsignedInt),
    ElementType::new(0x3ea5, "SignaturePublicKey", ElementKind::Opaque),
    ElementType::new(0x3eb5, "Signature", ElementKind::Opaque),
    ElementType::new(0x3e5b, "SignatureElements", ElementKind::Container),
    ElementType::new(0x3e7b, "SignatureElementList", ElementKind::Container),
    ElementType::new(0x2532, "SignedElement", ElementKind::Opaque),

    // Segment and seeking
    ElementType::new(0x8538067, "Segment", ElementKind::Container),
    ElementType::new(0x14d9b74, "SeekHead", ElementKind::Container),
    ElementType::new(0xdbb, "Seek", ElementKind::Container),
    ElementType::new(0x13ab, "SeekID", ElementKind::Opaque),
    ElementType::new(0x13ac, "SeekPosition", ElementKind::UnsignedInt),

    // Segment information
    ElementType::new(0x549a966, "Info", ElementKind::Container),
    ElementType::new(0x33a4, "SegmentUID", ElementKind::Opaque),
    ElementType::new(0x3384, "SegmentFilename", ElementKind::Opaque),
    ElementType::new(0x1cb923, "PrevUID", ElementKind::Opaque),
    ElementType::new(0x1c83ab, "PrevFilename", ElementKind::Opaque),
    ElementType::new(0x1eb923, "NextUID", ElementKind::Opaque),
    ElementType::new(0x1e83bb, "NextFilename", ElementKind::Opaque),
    ElementType::new(0x444, "SegmentFamily", ElementKind::Opaque),
    ElementType::new(0x2924, "ChapterTranslate", ElementKind::Container),
    ElementType::new(0x29fc, "ChapterTranslateEditionUID", ElementKind::UnsignedInt),
    ElementType::new(0x29bf, "ChapterTranslateCodec", ElementKind::UnsignedInt),
    ElementType::new(0x29a5, "ChapterTranslateID", ElementKind::Opaque),
    ElementType::new(0xad7b1, "TimecodeScale", ElementKind::UnsignedInt),
    ElementType::new(0x489, "Duration", ElementKind::Float),
    ElementType::new(0x461, "DateUTC", ElementKind::Opaque),
    ElementType::new(0x3ba9, "Title", ElementKind::Opaque),
    ElementType::new(0xd80, "MuxingApp", ElementKind::Opaque),
    ElementType::new(0x1741, "WritingApp", ElementKind::Opaque),

    // Clusters
    ElementType::new(0xf43b675, "Cluster", ElementKind::Container),
    ElementType::new(0x67, "Timecode", ElementKind::UnsignedInt),
    ElementType::new(0x1854, "SilentTracks", ElementKind::Container),
    ElementType::new(0x18d7, "SilentTrackNumber", ElementKind::UnsignedInt),
    ElementType::new(0x27, "Position", ElementKind::UnsignedInt),
    ElementType::new(0x2b, "PrevSize", ElementKind::UnsignedInt),
    ElementType::new(0x23, "SimpleBlock", ElementKind::Opaque),
    ElementType::new(0x20, "BlockGroup", ElementKind::Container),
    ElementType::new(0x21, "Block", ElementKind::Opaque),
    ElementType::new(0x35a1, "BlockAdditions", ElementKind::Container),
    ElementType::new(0x26, "BlockMore", ElementKind::Container),
    ElementType::new(0x6e, "BlockAddID", ElementKind::UnsignedInt),
    ElementType::new(0x25, "BlockAdditional", ElementKind::Opaque),
    ElementType::new(0x1b, "BlockDuration", ElementKind::UnsignedInt),
    ElementType::new(0x7a, "ReferencePriority", ElementKind::UnsignedInt),
    ElementType::new(0x7b, "ReferenceBlock", ElementKind::Opaque),
    ElementType::new(0x24, "CodecState", ElementKind::Opaque),
    ElementType::new(0x35a2, "DiscardPadding", ElementKind::Opaque),

    // Tracks
    ElementType::new(0x654ae6b, "Tracks", ElementKind::Container),
    ElementType::new(0x2e, "TrackEntry", ElementKind::Container),
    ElementType::new(0x57, "TrackNumber", ElementKind::UnsignedInt),
    ElementType::new(0x33c5, "TrackUID", ElementKind::UnsignedInt),
    ElementType::new(0x3, "TrackType", ElementKind::UnsignedInt),
    ElementType::new(0x39, "FlagEnabled", ElementKind::UnsignedInt),
    ElementType::new(0x8, "FlagDefault", ElementKind::UnsignedInt),
    ElementType::new(0x15aa, "FlagForced", ElementKind::UnsignedInt),
    ElementType::new(0x1c, "FlagLacing", ElementKind::UnsignedInt),
    ElementType::new(0x2de7, "MinCache", ElementKind::UnsignedInt),
    ElementType::new(0x2df8, "MaxCache", ElementKind::UnsignedInt),
    ElementType::new(0x3e383, "DefaultDuration", ElementKind::UnsignedInt),
    ElementType::new(0x34e7a, "DefaultDecodedFieldDuration", ElementKind::UnsignedInt),
    ElementType::new(0x15ee, "MaxBlockAdditionID", ElementKind::UnsignedInt),
    ElementType::new(0x136e, "Name", ElementKind::Opaque),
    ElementType::new(0x2b59c, "Language", ElementKind::Opaque),
    ElementType::new(0x6, "CodecID", ElementKind::Opaque),
    ElementType::new(0x23a2, "CodecPrivate", ElementKind::Opaque),
    ElementType::new(0x58688, "CodecName", ElementKind::Opaque),
    ElementType::new(0x3446, "AttachmentLink", ElementKind::UnsignedInt),
    ElementType::new(0x2a, "CodecDecodeAll", ElementKind::UnsignedInt),
    ElementType::new(0x2fab, "TrackOverlay", ElementKind::UnsignedInt),
    ElementType::new(0x16aa, "CodecDelay", ElementKind::UnsignedInt),
    ElementType::new(0x16bb, "SeekPreRoll", ElementKind::UnsignedInt),
    ElementType::new(0x2624, "TrackTranslate", ElementKind::Container),
    ElementType::new(0x26fc, "TrackTranslateEditionUID", ElementKind::UnsignedInt),
    ElementType::new(0x26bf, "TrackTranslateCodec", ElementKind::UnsignedInt),
    ElementType::new(0x26a5, "TrackTranslateTrackID", ElementKind::Opaque),

    // Video
    ElementType::new(0x60, "Video", ElementKind::Container),
    ElementType::new(0x1a, "FlagInterlaced", ElementKind::UnsignedInt),
    ElementType::new(0x1d, "FieldOrder", ElementKind::UnsignedInt),
    ElementType::new(0x13b8, "StereoMode", ElementKind::UnsignedInt),
    ElementType::new(0x13c0, "AlphaMode", ElementKind::UnsignedInt),
    ElementType::new(0x30, "PixelWidth", ElementKind::UnsignedInt),
    ElementType::new(0x3a, "PixelHeight", ElementKind::UnsignedInt),
    ElementType::new(0x14aa, "PixelCropBottom", ElementKind::UnsignedInt),
    ElementType::new(0x14bb, "PixelCropTop", ElementKind::UnsignedInt),
    ElementType::new(0x14cc, "PixelCropLeft", ElementKind::UnsignedInt),
    ElementType::new(0x14dd, "PixelCropRight", ElementKind::UnsignedInt),
    ElementType::new(0x14b0, "DisplayWidth", ElementKind::UnsignedInt),
    ElementType::new(0x14ba, "DisplayHeight", ElementKind::UnsignedInt),
    ElementType::new(0x14b2, "DisplayUnit", ElementKind::UnsignedInt),
    ElementType::new(0x14b3, "AspectRatioType", ElementKind::UnsignedInt),
    ElementType::new(0xeb524, "ColourSpace", ElementKind::Opaque),
    ElementType::new(0x15b0, "Colour", ElementKind::Container),

    // Audio
    ElementType::new(0x61, "Audio", ElementKind::Container),
    ElementType::new(0x35, "SamplingFrequency", ElementKind::Float),
    ElementType::new(0x38b5, "OutputSamplingFrequency", ElementKind::Float),
    ElementType::new(0x1f, "Channels", ElementKind::UnsignedInt),
    ElementType::new(0x2264, "BitDepth", ElementKind::UnsignedInt),

    // Track operations
    ElementType::new(0x62, "TrackOperation", ElementKind::Container),
    ElementType::new(0x63, "TrackCombinePlanes", ElementKind::Container),
    ElementType::new(0x64, "TrackPlane", ElementKind::Container),
    ElementType::new(0x65, "TrackPlaneUID", ElementKind::UnsignedInt),
    ElementType::new(0x66, "TrackPlaneType", ElementKind::UnsignedInt),
    ElementType::new(0x69, "TrackJoinBlocks", ElementKind::Container),
    ElementType::new(0x6d, "TrackJoinUID", ElementKind::UnsignedInt),

    // Content encoding
    ElementType::new(0x2d80, "ContentEncodings", ElementKind::Container),
    ElementType::new(0x2240, "ContentEncoding", ElementKind::Container),
    ElementType::new(0x1031, "ContentEncodingOrder", ElementKind::UnsignedInt),
    ElementType::new(0x1032, "ContentEncodingScope", ElementKind::UnsignedInt),
    ElementType::new(0x1033, "ContentEncodingType", ElementKind::UnsignedInt),
    ElementType::new(0x1034, "ContentCompression", ElementKind::Container),
    ElementType::new(0x254, "ContentCompAlgo", ElementKind::UnsignedInt),
    ElementType::new(0x255, "ContentCompSettings", ElementKind::Opaque),
    ElementType::new(0x1035, "ContentEncryption", ElementKind::Container),

    // Cues
    ElementType::new(0xc53bb6b, "Cues", ElementKind::Container),
    ElementType::new(0x3b, "CuePoint", ElementKind::Container),
    ElementType::new(0x33, "CueTime", ElementKind::UnsignedInt),
    ElementType::new(0x37, "CueTrackPositions", ElementKind::Container),
    ElementType::new(0x77, "CueTrack", ElementKind::UnsignedInt),
    ElementType::new(0x71, "CueClusterPosition", ElementKind::UnsignedInt),
    ElementType::new(0x70, "CueRelativePosition", ElementKind::UnsignedInt),
    ElementType::new(0x32, "CueDuration", ElementKind::UnsignedInt),
    ElementType::new(0x1378, "CueBlockNumber", ElementKind::UnsignedInt),
    ElementType::new(0x6a, "CueCodecState", ElementKind::UnsignedInt),
    ElementType::new(0x5b, "CueReference", ElementKind::Container),
    ElementType::new(0x16, "CueRefTime", ElementKind::UnsignedInt),

    // Attachments
    ElementType::new(0x941a469, "Attachments", ElementKind::Container),
    ElementType::new(0x21a7, "AttachedFile", ElementKind::Container),
    ElementType::new(0x67e, "FileDescription", ElementKind::Opaque),
    ElementType::new(0x66e, "FileName", ElementKind::Opaque),
    ElementType::new(0x660, "FileMimeType", ElementKind::Opaque),
    ElementType::new(0x65c, "FileData", ElementKind::Opaque),
    ElementType::new(0x6ae, "FileUID", ElementKind::UnsignedInt),

    // Chapters
    ElementType::new(0x43a770, "Chapters", ElementKind::Container),
    ElementType::new(0x5b9, "EditionEntry", ElementKind::Container),
    ElementType::new(0x5bc, "EditionUID", ElementKind::UnsignedInt),
    ElementType::new(0x5bd, "EditionFlagHidden", ElementKind::UnsignedInt),
    ElementType::new(0x5db, "EditionFlagDefault", ElementKind::UnsignedInt),
    ElementType::new(0x5dd, "EditionFlagOrdered", ElementKind::UnsignedInt),
    ElementType::new(0x36, "ChapterAtom", ElementKind::Container),
    ElementType::new(0x33c4, "ChapterUID", ElementKind::UnsignedInt),
    ElementType::new(0x1654, "ChapterStringUID", ElementKind::Opaque),
    ElementType::new(0x11, "ChapterTimeStart", ElementKind::UnsignedInt),
    ElementType::new(0x12, "ChapterTimeEnd", ElementKind::UnsignedInt),
    ElementType::new(0x18, "ChapterFlagHidden", ElementKind::UnsignedInt),
    ElementType::new(0x598, "ChapterFlagEnabled", ElementKind::UnsignedInt),
    ElementType::new(0x2e67, "ChapterSegmentUID", ElementKind::Opaque),
    ElementType::new(0x2ebc, "ChapterSegmentEditionUID", ElementKind::UnsignedInt),
    ElementType::new(0x23c3, "ChapterPhysicalEquiv", ElementKind::UnsignedInt),
    ElementType::new(0xf, "ChapterTrack", ElementKind::Container),
    ElementType::new(0x9, "ChapterTrackNumber", ElementKind::UnsignedInt),
    ElementType::new(0x0, "ChapterDisplay", ElementKind::Container),
    ElementType::new(0x5, "ChapString", ElementKind::Opaque),
    ElementType::new(0x37c, "ChapLanguage", ElementKind::Opaque),
    ElementType::new(0x37e, "ChapCountry", ElementKind::Opaque),
    ElementType::new(0x2944, "ChapProcess", ElementKind::Container),
    ElementType::new(0x2955, "ChapProcessCodecID", ElementKind::UnsignedInt),
    ElementType::new(0x50d, "ChapProcessPrivate", ElementKind::Opaque),
    ElementType::new(0x2911, "ChapProcessCommand", ElementKind::Container),
    ElementType::new(0x2922, "ChapProcessTime", ElementKind::UnsignedInt),
    ElementType::new(0x2933, "ChapProcessData", ElementKind::Opaque),

    // Tags
    ElementType::new(0x254c367, "Tags", ElementKind::Container),
    ElementType::new(0x3373, "Tag", ElementKind::Container),
    ElementType::new(0x23c0, "Targets", ElementKind::Container),
    ElementType::new(0x28ca, "TargetTypeValue", ElementKind::UnsignedInt),
    ElementType::new(0x23ca, "TargetType", ElementKind::Opaque),
    ElementType::new(0x23c5, "TagTrackUID", ElementKind::UnsignedInt),
    ElementType::new(0x23c9, "TagEditionUID", ElementKind::UnsignedInt),
    ElementType::new(0x23c4, "TagChapterUID", ElementKind::UnsignedInt),
    ElementType::new(0x23c6, "TagAttachmentUID", ElementKind::UnsignedInt),
    ElementType::new(0x27c8, "SimpleTag", ElementKind::Container),
    ElementType::new(0x5a3, "TagName", ElementKind::Opaque),
    ElementType::new(0x47a, "TagLanguage", ElementKind::Opaque),
    ElementType::new(0x484, "TagDefault", ElementKind::UnsignedInt),
    ElementType::new(0x487, "TagString", ElementKind::Opaque),
    ElementType::new(0x485, "TagBinary", ElementKind::Opaque),
];

/// Resolve an id to its registered type, or [`UNKNOWN`].
pub fn lookup(id: u64) -> ElementType {
    ELEMENT_TYPES
        .iter()
        .find(|ty| ty.id == id)
        .copied()
        .unwrap_or(ElementType { id, ..UNKNOWN })
}

/// Kind used when parsing an element with this id.
pub fn kind_of(id: u64) -> ElementKind {
    lookup(id).kind
}

/// Human-readable name of an id.
pub fn name_of(id: u64) -> &'static str {
    lookup(id).name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_patch_path_ids() {
        assert_eq!(lookup(SEGMENT).name, "Segment");
        assert_eq!(lookup(SEGMENT).kind, ElementKind::Container);
        assert_eq!(lookup(INFO).kind, ElementKind::Container);
        assert_eq!(lookup(TIMECODE_SCALE).kind, ElementKind::UnsignedInt);
        assert_eq!(lookup(DURATION).kind, ElementKind::Float);
    }

    #[test]
    fn test_unknown_id_is_opaque() {
        let ty = lookup(0x1234_5678);
        assert_eq!(ty.id, 0x1234_5678);
        assert_eq!(ty.name, "Unknown");
        assert_eq!(ty.kind, ElementKind::Opaque);
    }

    #[test]
    fn test_cluster_is_container() {
        assert_eq!(name_of(0xf43_b675), "Cluster");
        assert_eq!(kind_of(0xf43_b675), ElementKind::Container);
        assert_eq!(kind_of(0x23), ElementKind::Opaque);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for ty in ELEMENT_TYPES {
            assert!(seen.insert(ty.id), "duplicate id {:#x} ({})", ty.id, ty.name);
        }
    }

    #[test]
    fn test_ids_are_marker_stripped() {
        // A stripped id re-encodes to a VINT whose width matches its wire form
        for ty in ELEMENT_TYPES {
            let wire = crate::vint::to_vec(ty.id).unwrap();
            assert!(wire.len() <= 4, "{} encodes to {} bytes", ty.name, wire.len());
            assert_eq!(crate::vint::decode(&wire, 0).unwrap().0, ty.id);
        }
    }
}
