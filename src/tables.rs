//! Code-to-string translation tables for libbluray enum values.
//!
//! All functions are pure and total. The fallback behavior differs between
//! the video and audio families and the difference is kept on purpose: video
//! tables return `""` for codes they do not know, audio tables return `None`
//! (the reference tool left its output buffer untouched for those). Callers
//! print nothing for `None`.

use crate::disc::codes::*;

/// Short video codec tag, `""` for unknown codes.
pub fn video_codec(coding_type: u8) -> &'static str {
    match coding_type {
        STREAM_TYPE_VIDEO_H264 => "h264",
        STREAM_TYPE_VIDEO_HEVC => "h265",
        STREAM_TYPE_VIDEO_MPEG1 => "mpeg1",
        STREAM_TYPE_VIDEO_MPEG2 => "mpeg2",
        STREAM_TYPE_VIDEO_VC1 => "vc1",
        _ => "",
    }
}

/// Long-form video codec name, `""` for unknown codes.
pub fn video_codec_name(coding_type: u8) -> &'static str {
    match coding_type {
        STREAM_TYPE_VIDEO_H264 => "AVC",
        STREAM_TYPE_VIDEO_HEVC => "HEVC",
        STREAM_TYPE_VIDEO_MPEG1 => "MPEG-1",
        STREAM_TYPE_VIDEO_MPEG2 => "MPEG-2",
        STREAM_TYPE_VIDEO_VC1 => "VC-1",
        _ => "",
    }
}

/// Display resolution tag, `""` for unknown codes.
pub fn video_format(format: u8) -> &'static str {
    match format {
        VIDEO_FORMAT_480I => "480i",
        VIDEO_FORMAT_480P => "480p",
        VIDEO_FORMAT_576I => "576i",
        VIDEO_FORMAT_576P => "576p",
        VIDEO_FORMAT_720P => "720p",
        VIDEO_FORMAT_1080I => "1080i",
        VIDEO_FORMAT_1080P => "1080p",
        VIDEO_FORMAT_2160P => "2160p",
        _ => "",
    }
}

/// Frames per second, 0 for unknown codes.
pub fn video_framerate(rate: u8) -> f64 {
    match rate {
        VIDEO_RATE_24000_1001 => 23.97,
        VIDEO_RATE_24 => 24.0,
        VIDEO_RATE_25 => 25.0,
        VIDEO_RATE_30000_1001 => 29.97,
        VIDEO_RATE_50 => 50.0,
        VIDEO_RATE_60000_1001 => 59.94,
        _ => 0.0,
    }
}

/// Aspect ratio tag, `""` for unknown codes.
pub fn video_aspect_ratio(aspect: u8) -> &'static str {
    match aspect {
        ASPECT_RATIO_4_3 => "4:3",
        ASPECT_RATIO_16_9 => "16:9",
        _ => "",
    }
}

/// Short audio codec tag. Secondary streams map to the same tags as their
/// primary counterparts.
pub fn audio_codec(coding_type: u8) -> Option<&'static str> {
    match coding_type {
        STREAM_TYPE_AUDIO_MPEG1 => Some("mpeg1"),
        STREAM_TYPE_AUDIO_MPEG2 => Some("mpeg2"),
        STREAM_TYPE_AUDIO_LPCM => Some("lpcm"),
        STREAM_TYPE_AUDIO_AC3 => Some("ac3"),
        STREAM_TYPE_AUDIO_DTS => Some("dts"),
        STREAM_TYPE_AUDIO_TRUHD => Some("truhd"),
        STREAM_TYPE_AUDIO_AC3PLUS | STREAM_TYPE_AUDIO_AC3PLUS_SECONDARY => Some("ac3plus"),
        STREAM_TYPE_AUDIO_DTSHD | STREAM_TYPE_AUDIO_DTSHD_SECONDARY => Some("dtshd"),
        STREAM_TYPE_AUDIO_DTSHD_MASTER => Some("dtshd-ma"),
        _ => None,
    }
}

/// Long-form audio codec name.
pub fn audio_codec_name(coding_type: u8) -> Option<&'static str> {
    match coding_type {
        STREAM_TYPE_AUDIO_MPEG1 => Some("MPEG-1"),
        STREAM_TYPE_AUDIO_MPEG2 => Some("MPEG-2"),
        STREAM_TYPE_AUDIO_LPCM => Some("LPCM"),
        STREAM_TYPE_AUDIO_AC3 => Some("Dolby Digital"),
        STREAM_TYPE_AUDIO_DTS => Some("DTS"),
        STREAM_TYPE_AUDIO_TRUHD => Some("Dolby TrueHD"),
        STREAM_TYPE_AUDIO_AC3PLUS | STREAM_TYPE_AUDIO_AC3PLUS_SECONDARY => {
            Some("Dolby Digital Plus")
        }
        STREAM_TYPE_AUDIO_DTSHD | STREAM_TYPE_AUDIO_DTSHD_SECONDARY => Some("DTS-HD"),
        STREAM_TYPE_AUDIO_DTSHD_MASTER => Some("DTS-HD Master"),
        _ => None,
    }
}

/// Channel layout tag.
pub fn audio_format(format: u8) -> Option<&'static str> {
    match format {
        AUDIO_FORMAT_MONO => Some("mono"),
        AUDIO_FORMAT_STEREO => Some("stereo"),
        AUDIO_FORMAT_MULTI_CHAN => Some("multi_chan"),
        AUDIO_FORMAT_COMBO => Some("combo"),
        _ => None,
    }
}

/// Sample rate tag in kHz.
pub fn audio_rate(rate: u8) -> Option<&'static str> {
    match rate {
        AUDIO_RATE_48 => Some("48"),
        AUDIO_RATE_96 => Some("96"),
        AUDIO_RATE_192 => Some("192"),
        AUDIO_RATE_192_COMBO => Some("48/192"),
        AUDIO_RATE_96_COMBO => Some("48/96"),
        _ => None,
    }
}
