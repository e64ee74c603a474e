//! Safe wrapper over the system libbluray.
//!
//! Bindings are declared by hand against `libbluray/bluray.h` (1.x series);
//! only the calls and fields this crate consumes are mapped. Everything the
//! library returns is copied into owned structures immediately, and the
//! transient `BLURAY_TITLE_INFO` handle is freed before the call returns.

use crate::disc::{ChapterInfo, ClipInfo, DiscError, DiscInfo, DiscReader, StreamInfo, TitleInfo};
use crate::util::fixed_str;
use std::ffi::CString;
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;

#[allow(non_camel_case_types, non_snake_case)]
mod sys {
    use std::os::raw::{c_char, c_int, c_uint};

    #[repr(C)]
    pub struct BLURAY {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct BLURAY_STREAM_INFO {
        pub coding_type: u8,
        pub format: u8,
        pub rate: u8,
        pub char_code: u8,
        pub lang: [u8; 4],
        pub pid: u16,
        pub aspect: u8,
        pub subpath_id: u8,
    }

    #[repr(C)]
    pub struct BLURAY_CLIP_INFO {
        pub pkt_count: u32,
        pub still_mode: u8,
        pub still_time: u16,
        pub video_stream_count: u8,
        pub audio_stream_count: u8,
        pub pg_stream_count: u8,
        pub ig_stream_count: u8,
        pub sec_audio_stream_count: u8,
        pub sec_video_stream_count: u8,
        pub video_streams: *mut BLURAY_STREAM_INFO,
        pub audio_streams: *mut BLURAY_STREAM_INFO,
        pub pg_streams: *mut BLURAY_STREAM_INFO,
        pub ig_streams: *mut BLURAY_STREAM_INFO,
        pub sec_audio_streams: *mut BLURAY_STREAM_INFO,
        pub sec_video_streams: *mut BLURAY_STREAM_INFO,
        pub start_time: u64,
        pub in_time: u64,
        pub out_time: u64,
        pub clip_id: [c_char; 6],
    }

    #[repr(C)]
    pub struct BLURAY_TITLE_CHAPTER {
        pub idx: u32,
        pub start: u64,
        pub duration: u64,
        pub offset: u64,
        pub clip_ref: c_uint,
    }

    #[repr(C)]
    pub struct BLURAY_TITLE_MARK {
        pub idx: u32,
        pub mark_type: c_int,
        pub start: u64,
        pub duration: u64,
        pub offset: u64,
        pub clip_ref: c_uint,
    }

    #[repr(C)]
    pub struct BLURAY_TITLE_INFO {
        pub idx: u32,
        pub playlist: u32,
        pub duration: u64,
        pub clip_count: u32,
        pub angle_count: u8,
        pub chapter_count: u32,
        pub clips: *mut BLURAY_CLIP_INFO,
        pub chapters: *mut BLURAY_TITLE_CHAPTER,
        pub mark_count: u32,
        pub marks: *mut BLURAY_TITLE_MARK,
    }

    #[repr(C)]
    pub struct BLURAY_DISC_INFO {
        pub bluray_detected: u8,
        pub disc_name: *const c_char,
        pub udf_volume_id: *const c_char,
        pub disc_id: [u8; 20],
        pub no_menu_support: u8,
        pub first_play_supported: u8,
        pub top_menu_supported: u8,
        pub num_titles: u32,
        pub num_hdmv_titles: u32,
        pub num_bdj_titles: u32,
        pub num_unsupported_titles: u32,
        pub aacs_detected: u8,
        pub libaacs_detected: u8,
        pub aacs_handled: u8,
        pub bdplus_detected: u8,
        pub libbdplus_detected: u8,
        pub bdplus_handled: u8,
        pub aacs_error_code: u8,
        pub aacs_mkbv: c_int,
        pub bdj_detected: u8,
        pub bdj_supported: u8,
        pub libjvm_detected: u8,
        pub bdj_handled: u8,
        pub bdplus_gen: u8,
        pub bdplus_date: u32,
        pub initial_output_mode_preference: u8,
        pub content_exist_3D: u8,
        pub provider_data: [u8; 32],
    }

    // TITLES_FILTER_DUP_TITLE | TITLES_FILTER_DUP_CLIP
    pub const TITLES_RELEVANT: u8 = 0x01 | 0x02;

    #[link(name = "bluray")]
    unsafe extern "C" {
        pub fn bd_open(device_path: *const c_char, keyfile_path: *const c_char) -> *mut BLURAY;
        pub fn bd_close(bd: *mut BLURAY);
        pub fn bd_get_disc_info(bd: *mut BLURAY) -> *const BLURAY_DISC_INFO;
        pub fn bd_get_titles(bd: *mut BLURAY, flags: u8, min_title_length: u32) -> u32;
        pub fn bd_select_title(bd: *mut BLURAY, title: u32) -> c_int;
        pub fn bd_select_playlist(bd: *mut BLURAY, playlist: u32) -> c_int;
        pub fn bd_get_current_title(bd: *mut BLURAY) -> u32;
        pub fn bd_get_main_title(bd: *mut BLURAY) -> c_int;
        pub fn bd_get_title_info(bd: *mut BLURAY, title_idx: u32, angle: c_uint)
        -> *mut BLURAY_TITLE_INFO;
        pub fn bd_free_title_info(title_info: *mut BLURAY_TITLE_INFO);
        pub fn bd_get_title_size(bd: *mut BLURAY) -> u64;
    }
}

/// An open disc handle. Closed exactly once on drop.
pub struct BlurayDisc {
    bd: *mut sys::BLURAY,
}

impl BlurayDisc {
    /// Opens a device, image file, or directory, optionally with a
    /// `KEYDB.cfg` path for libaacs.
    pub fn open(path: &str, keydb: Option<&Path>) -> Result<BlurayDisc, DiscError> {
        let open_err = || match keydb {
            None => DiscError::DeviceOpen {
                path: path.to_string(),
            },
            Some(k) => DiscError::DeviceOpenWithKeydb {
                path: path.to_string(),
                keydb: k.display().to_string(),
            },
        };

        let c_path = CString::new(path).map_err(|_| open_err())?;
        let c_keydb = match keydb {
            Some(k) => Some(
                CString::new(k.display().to_string()).map_err(|_| open_err())?,
            ),
            None => None,
        };

        let bd = unsafe {
            sys::bd_open(
                c_path.as_ptr(),
                c_keydb.as_ref().map_or(ptr::null(), |k| k.as_ptr()),
            )
        };
        if bd.is_null() {
            return Err(open_err());
        }
        Ok(BlurayDisc { bd })
    }
}

impl Drop for BlurayDisc {
    fn drop(&mut self) {
        unsafe { sys::bd_close(self.bd) };
    }
}

fn c_str_opt(p: *const c_char) -> Option<String> {
    if p.is_null() {
        return None;
    }
    let s = unsafe { std::ffi::CStr::from_ptr(p) };
    Some(s.to_string_lossy().into_owned())
}

unsafe fn streams(p: *mut sys::BLURAY_STREAM_INFO, count: u8) -> Vec<StreamInfo> {
    if p.is_null() {
        return Vec::new();
    }
    let raw = unsafe { std::slice::from_raw_parts(p, count as usize) };
    raw.iter()
        .map(|s| StreamInfo {
            coding_type: s.coding_type,
            format: s.format,
            rate: s.rate,
            aspect: s.aspect,
            lang: s.lang,
            pid: s.pid,
        })
        .collect()
}

impl DiscReader for BlurayDisc {
    fn disc_info(&mut self) -> Result<DiscInfo, DiscError> {
        let info = unsafe { sys::bd_get_disc_info(self.bd) };
        if info.is_null() {
            return Err(DiscError::DiscInfoUnavailable);
        }
        let info = unsafe { &*info };
        Ok(DiscInfo {
            udf_volume_id: c_str_opt(info.udf_volume_id),
            disc_id: (info.libaacs_detected != 0).then_some(info.disc_id),
            num_hdmv_titles: info.num_hdmv_titles,
            num_bdj_titles: info.num_bdj_titles,
            num_unsupported_titles: info.num_unsupported_titles,
            num_titles: info.num_titles,
            first_play_supported: info.first_play_supported != 0,
            top_menu_supported: info.top_menu_supported != 0,
            content_exist_3d: info.content_exist_3D != 0,
            initial_output_mode_3d: info.initial_output_mode_preference != 0,
            provider_data: fixed_str(&info.provider_data),
        })
    }

    fn relevant_titles(&mut self) -> u32 {
        unsafe { sys::bd_get_titles(self.bd, sys::TITLES_RELEVANT, 0) }
    }

    fn select_title(&mut self, index: u32) -> bool {
        unsafe { sys::bd_select_title(self.bd, index) != 0 }
    }

    fn select_playlist(&mut self, playlist: u32) -> bool {
        unsafe { sys::bd_select_playlist(self.bd, playlist) != 0 }
    }

    fn current_title(&mut self) -> u32 {
        unsafe { sys::bd_get_current_title(self.bd) }
    }

    fn main_title(&mut self) -> i32 {
        unsafe { sys::bd_get_main_title(self.bd) }
    }

    fn title_info(&mut self, index: u32) -> Option<TitleInfo> {
        let raw = unsafe { sys::bd_get_title_info(self.bd, index, 0) };
        if raw.is_null() {
            return None;
        }

        let info = unsafe {
            let t = &*raw;
            let clips = if t.clips.is_null() {
                Vec::new()
            } else {
                std::slice::from_raw_parts(t.clips, t.clip_count as usize)
                    .iter()
                    .map(|c| ClipInfo {
                        video_streams: streams(c.video_streams, c.video_stream_count),
                        audio_streams: streams(c.audio_streams, c.audio_stream_count),
                        pg_streams: streams(c.pg_streams, c.pg_stream_count),
                    })
                    .collect()
            };
            let chapters = if t.chapters.is_null() {
                Vec::new()
            } else {
                std::slice::from_raw_parts(t.chapters, t.chapter_count as usize)
                    .iter()
                    .map(|c| ChapterInfo {
                        start: c.start,
                        duration: c.duration,
                    })
                    .collect()
            };
            TitleInfo {
                idx: t.idx,
                playlist: t.playlist,
                duration: t.duration,
                angle_count: t.angle_count,
                chapters,
                clips,
            }
        };

        unsafe { sys::bd_free_title_info(raw) };
        Some(info)
    }

    fn title_size(&mut self) -> u64 {
        unsafe { sys::bd_get_title_size(self.bd) }
    }
}
