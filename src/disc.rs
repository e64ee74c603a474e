//! The disc-reading collaborator interface.
//!
//! All of the hard work (UDF navigation, AACS, playlist resolution) lives in
//! libbluray. This module defines the narrow surface this crate consumes:
//! the [`DiscReader`] trait, the owned structures a backend hands back, and
//! the raw enum codes the lookup tables translate.

use thiserror::Error;

/// Stream / format / rate codes as defined by libbluray's `bluray.h`.
///
/// These are wire values of the external library, not values this crate
/// invents; the lookup tables in [`crate::tables`] are keyed on them.
pub mod codes {
    pub const STREAM_TYPE_VIDEO_MPEG1: u8 = 0x01;
    pub const STREAM_TYPE_VIDEO_MPEG2: u8 = 0x02;
    pub const STREAM_TYPE_AUDIO_MPEG1: u8 = 0x03;
    pub const STREAM_TYPE_AUDIO_MPEG2: u8 = 0x04;
    pub const STREAM_TYPE_VIDEO_H264: u8 = 0x1b;
    pub const STREAM_TYPE_VIDEO_HEVC: u8 = 0x24;
    pub const STREAM_TYPE_VIDEO_VC1: u8 = 0xea;
    pub const STREAM_TYPE_AUDIO_LPCM: u8 = 0x80;
    pub const STREAM_TYPE_AUDIO_AC3: u8 = 0x81;
    pub const STREAM_TYPE_AUDIO_DTS: u8 = 0x82;
    pub const STREAM_TYPE_AUDIO_TRUHD: u8 = 0x83;
    pub const STREAM_TYPE_AUDIO_AC3PLUS: u8 = 0x84;
    pub const STREAM_TYPE_AUDIO_DTSHD: u8 = 0x85;
    pub const STREAM_TYPE_AUDIO_DTSHD_MASTER: u8 = 0x86;
    pub const STREAM_TYPE_SUB_PG: u8 = 0x90;
    pub const STREAM_TYPE_SUB_IG: u8 = 0x91;
    pub const STREAM_TYPE_SUB_TEXT: u8 = 0x92;
    pub const STREAM_TYPE_AUDIO_AC3PLUS_SECONDARY: u8 = 0xa1;
    pub const STREAM_TYPE_AUDIO_DTSHD_SECONDARY: u8 = 0xa2;

    pub const VIDEO_FORMAT_480I: u8 = 1;
    pub const VIDEO_FORMAT_576I: u8 = 2;
    pub const VIDEO_FORMAT_480P: u8 = 3;
    pub const VIDEO_FORMAT_1080I: u8 = 4;
    pub const VIDEO_FORMAT_720P: u8 = 5;
    pub const VIDEO_FORMAT_1080P: u8 = 6;
    pub const VIDEO_FORMAT_576P: u8 = 7;
    pub const VIDEO_FORMAT_2160P: u8 = 8;

    pub const VIDEO_RATE_24000_1001: u8 = 1;
    pub const VIDEO_RATE_24: u8 = 2;
    pub const VIDEO_RATE_25: u8 = 3;
    pub const VIDEO_RATE_30000_1001: u8 = 4;
    pub const VIDEO_RATE_50: u8 = 6;
    pub const VIDEO_RATE_60000_1001: u8 = 7;

    pub const ASPECT_RATIO_4_3: u8 = 2;
    pub const ASPECT_RATIO_16_9: u8 = 3;

    pub const AUDIO_FORMAT_MONO: u8 = 1;
    pub const AUDIO_FORMAT_STEREO: u8 = 3;
    pub const AUDIO_FORMAT_MULTI_CHAN: u8 = 6;
    pub const AUDIO_FORMAT_COMBO: u8 = 12;

    pub const AUDIO_RATE_48: u8 = 1;
    pub const AUDIO_RATE_96: u8 = 4;
    pub const AUDIO_RATE_192: u8 = 5;
    pub const AUDIO_RATE_192_COMBO: u8 = 12;
    pub const AUDIO_RATE_96_COMBO: u8 = 14;
}

/// Disc-level facts reported by the library right after open.
#[derive(Debug, Clone, Default)]
pub struct DiscInfo {
    /// UDF volume label, when the disc (or image) carries one.
    pub udf_volume_id: Option<String>,
    /// 20-byte AACS disc id, present only when protection was detected.
    pub disc_id: Option<[u8; 20]>,
    pub num_hdmv_titles: u32,
    pub num_bdj_titles: u32,
    pub num_unsupported_titles: u32,
    pub num_titles: u32,
    pub first_play_supported: bool,
    pub top_menu_supported: bool,
    pub content_exist_3d: bool,
    /// Library preference for the initial output mode: true means 3D.
    pub initial_output_mode_3d: bool,
    pub provider_data: String,
}

/// One elementary stream inside a clip.
///
/// `lang` is the raw fixed-width field from the library: three language
/// bytes that are *not* guaranteed to be NUL-terminated. Convert it with
/// [`crate::util::lang_code`], never by trusting a terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamInfo {
    pub coding_type: u8,
    pub format: u8,
    pub rate: u8,
    pub aspect: u8,
    pub lang: [u8; 4],
    pub pid: u16,
}

/// One clip of a title's playlist, carrying its own stream sets.
#[derive(Debug, Clone, Default)]
pub struct ClipInfo {
    pub video_streams: Vec<StreamInfo>,
    pub audio_streams: Vec<StreamInfo>,
    pub pg_streams: Vec<StreamInfo>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterInfo {
    pub start: u64,
    /// Chapter length in 90kHz ticks.
    pub duration: u64,
}

/// Everything the library reports for one title, converted to owned data.
///
/// In the FFI backend the underlying `BLURAY_TITLE_INFO` handle is freed as
/// soon as this structure has been built, so release discipline is a
/// non-issue for callers.
#[derive(Debug, Clone, Default)]
pub struct TitleInfo {
    /// Library title index (0-based).
    pub idx: u32,
    pub playlist: u32,
    /// Title length in 90kHz ticks.
    pub duration: u64,
    pub angle_count: u8,
    pub chapters: Vec<ChapterInfo>,
    pub clips: Vec<ClipInfo>,
}

/// Failures surfaced to the user.
///
/// Everything here is terminal for the run except per-title info fetches,
/// which the scan recovers from by skipping the index.
#[derive(Error, Debug)]
pub enum DiscError {
    #[error("Could not open device {path}")]
    DeviceOpen { path: String },
    #[error("Could not open device {path} and key_db file {keydb}")]
    DeviceOpenWithKeydb { path: String, keydb: String },
    #[error("Could not get Blu-ray disc info")]
    DiscInfoUnavailable,
    #[error("Could not open title {requested}, choose from 1 to {relevant}")]
    InvalidTitleSelection { requested: u32, relevant: u32 },
    #[error("Could not open title {0}")]
    TitleSelection(u32),
    #[error("Could not open playlist {0}")]
    PlaylistSelection(u32),
    #[error("This build has no disc backend, rebuild with --features libbluray")]
    BackendUnavailable,
}

/// The calls this crate makes against the disc library.
///
/// `select_title` / `select_playlist` mirror the library's stateful
/// selection model: selecting positions the library on a title, after which
/// `title_size` reports the on-disk byte size of the current selection.
pub trait DiscReader {
    fn disc_info(&mut self) -> Result<DiscInfo, DiscError>;

    /// Number of relevant titles (duplicates filtered by the library).
    fn relevant_titles(&mut self) -> u32;

    /// Returns false when the library rejects the index.
    fn select_title(&mut self, index: u32) -> bool;

    /// Returns false when the library rejects the playlist number.
    fn select_playlist(&mut self, playlist: u32) -> bool;

    /// Title index the library is positioned on after a playlist selection.
    fn current_title(&mut self) -> u32;

    /// Main title index, or -1 when the library could not determine one.
    fn main_title(&mut self) -> i32;

    /// Full info for one title, or None when the fetch fails.
    fn title_info(&mut self, index: u32) -> Option<TitleInfo>;

    /// On-disk size in bytes of the currently selected title.
    fn title_size(&mut self) -> u64;
}
