//! Report assembly: copies library structures into flat display records.
//!
//! All indices stored here are 0-based; renderers add 1 at the edge. All
//! durations stay in 90kHz ticks; the formatted strings carried alongside
//! are derived, never the source of truth.

use crate::disc::{DiscError, DiscInfo, DiscReader, TitleInfo};
use crate::duration::format_duration;
use crate::tables;
use crate::util::lang_code;
use serde::Serialize;

/// Disc-level facts, built once after open and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DiscSummary {
    /// 40-char uppercase hex AACS disc id, empty when no protection was
    /// detected.
    pub id: String,
    /// UDF volume title, empty when the disc has none.
    pub volume_title: String,
    pub hdmv_titles: u32,
    pub bdj_titles: u32,
    pub unsupported_titles: u32,
    pub titles: u32,
    pub relevant_titles: u32,
    /// 0-based main title index, -1 when the library reported none.
    pub main_title: i32,
    pub first_play_supported: bool,
    pub top_menu_supported: bool,
    pub content_3d: bool,
    pub initial_mode_3d: bool,
    pub provider: String,
}

impl DiscSummary {
    pub fn new(info: &DiscInfo, relevant_titles: u32, main_title: i32) -> Self {
        DiscSummary {
            id: info.disc_id.map(hex::encode_upper).unwrap_or_default(),
            volume_title: info.udf_volume_id.clone().unwrap_or_default(),
            hdmv_titles: info.num_hdmv_titles,
            bdj_titles: info.num_bdj_titles,
            unsupported_titles: info.num_unsupported_titles,
            titles: info.num_titles,
            relevant_titles,
            main_title,
            first_play_supported: info.first_play_supported,
            top_menu_supported: info.top_menu_supported,
            content_3d: info.content_exist_3d,
            initial_mode_3d: info.initial_output_mode_3d,
            provider: info.provider_data.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleRecord {
    /// 0-based title index.
    pub ix: u32,
    pub playlist: u32,
    /// Length in 90kHz ticks.
    pub duration: u64,
    pub length: String,
    /// On-disk size in bytes.
    pub size: u64,
    /// Integer floor of size in mebibytes.
    pub size_mbs: u64,
    pub chapters: u32,
    pub clips: u32,
    pub angles: u8,
    pub video_streams: u8,
    pub audio_streams: u8,
    pub pg_streams: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoStreamRecord {
    pub pid: u16,
    pub codec: String,
    pub format: String,
    pub framerate: f64,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioStreamRecord {
    pub pid: u16,
    pub lang: String,
    pub codec: String,
    pub format: String,
    pub rate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtitleStreamRecord {
    pub pid: u16,
    pub lang: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterRecord {
    /// 0-based chapter index.
    pub ix: u32,
    /// Length in 90kHz ticks.
    pub duration: u64,
    pub length: String,
}

/// Display records for one title: the title line plus its stream and
/// chapter details.
#[derive(Debug, Clone, Serialize)]
pub struct TitleReport {
    pub title: TitleRecord,
    pub video: Vec<VideoStreamRecord>,
    pub audio: Vec<AudioStreamRecord>,
    pub subtitles: Vec<SubtitleStreamRecord>,
    pub chapters: Vec<ChapterRecord>,
}

impl TitleReport {
    /// Flattens one resolved title into display records.
    ///
    /// Stream sets are taken from the first clip only; titles with several
    /// clips are deliberately not merged, matching how players index them.
    /// A title with zero clips reports zero streams.
    pub fn from_info(info: &TitleInfo, size: u64) -> Self {
        let first_clip = info.clips.first();

        let title = TitleRecord {
            ix: info.idx,
            playlist: info.playlist,
            duration: info.duration,
            length: format_duration(info.duration),
            size,
            size_mbs: size / 1024 / 1024,
            chapters: info.chapters.len() as u32,
            clips: info.clips.len() as u32,
            angles: info.angle_count,
            video_streams: first_clip.map_or(0, |c| c.video_streams.len() as u8),
            audio_streams: first_clip.map_or(0, |c| c.audio_streams.len() as u8),
            pg_streams: first_clip.map_or(0, |c| c.pg_streams.len() as u8),
        };

        let mut video = Vec::new();
        let mut audio = Vec::new();
        let mut subtitles = Vec::new();
        if let Some(clip) = first_clip {
            for s in &clip.video_streams {
                video.push(VideoStreamRecord {
                    pid: s.pid,
                    codec: tables::video_codec(s.coding_type).to_string(),
                    format: tables::video_format(s.format).to_string(),
                    framerate: tables::video_framerate(s.rate),
                    aspect_ratio: tables::video_aspect_ratio(s.aspect).to_string(),
                });
            }
            for s in &clip.audio_streams {
                audio.push(AudioStreamRecord {
                    pid: s.pid,
                    lang: lang_code(&s.lang),
                    codec: tables::audio_codec(s.coding_type).unwrap_or_default().to_string(),
                    format: tables::audio_format(s.format).unwrap_or_default().to_string(),
                    rate: tables::audio_rate(s.rate).unwrap_or_default().to_string(),
                });
            }
            for s in &clip.pg_streams {
                subtitles.push(SubtitleStreamRecord {
                    pid: s.pid,
                    lang: lang_code(&s.lang),
                });
            }
        }

        let chapters = info
            .chapters
            .iter()
            .enumerate()
            .map(|(i, c)| ChapterRecord {
                ix: i as u32,
                duration: c.duration,
                length: format_duration(c.duration),
            })
            .collect();

        TitleReport {
            title,
            video,
            audio,
            subtitles,
            chapters,
        }
    }
}

/// Which titles a run covers. Mutually exclusive, resolved once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// All relevant titles.
    All,
    /// One title by its 1-based display number.
    Title(u32),
    /// One playlist by its on-disc number.
    Playlist(u32),
    /// The main title only.
    Main,
}

/// Resolves a scope to `(first_index, count)` over 0-based title indices.
///
/// Explicit title and playlist selections are validated against the library
/// here; a rejection is terminal for the run.
pub fn resolve_scope<D: DiscReader>(
    disc: &mut D,
    scope: Scope,
    relevant_titles: u32,
    main_title: i32,
) -> Result<(u32, u32), DiscError> {
    match scope {
        Scope::All => Ok((0, relevant_titles)),
        Scope::Title(number) => {
            if number == 0 || number > relevant_titles {
                return Err(DiscError::InvalidTitleSelection {
                    requested: number,
                    relevant: relevant_titles,
                });
            }
            if !disc.select_title(number - 1) {
                return Err(DiscError::TitleSelection(number));
            }
            Ok((number - 1, 1))
        }
        Scope::Playlist(number) => {
            if !disc.select_playlist(number) {
                return Err(DiscError::PlaylistSelection(number));
            }
            Ok((disc.current_title(), 1))
        }
        Scope::Main => Ok((main_title.max(0) as u32, 1)),
    }
}

/// Iterator over assembled titles, starting at `first` and attempting
/// `count` consecutive indices.
///
/// A failed title selection or info fetch skips that index and moves on; a
/// skipped index still counts against `count`, so the iterator never probes
/// past the scoped range.
pub struct TitleScan<'a, D: DiscReader> {
    disc: &'a mut D,
    next: u32,
    remaining: u32,
}

impl<'a, D: DiscReader> TitleScan<'a, D> {
    pub fn new(disc: &'a mut D, first: u32, count: u32) -> Self {
        TitleScan {
            disc,
            next: first,
            remaining: count,
        }
    }
}

impl<D: DiscReader> Iterator for TitleScan<'_, D> {
    type Item = TitleReport;

    fn next(&mut self) -> Option<TitleReport> {
        while self.remaining > 0 {
            let ix = self.next;
            self.next += 1;
            self.remaining -= 1;

            if !self.disc.select_title(ix) {
                continue;
            }
            let Some(info) = self.disc.title_info(ix) else {
                continue;
            };
            let size = self.disc.title_size();
            return Some(TitleReport::from_info(&info, size));
        }
        None
    }
}

/// Figures the JSON rendering needs beyond the per-title records.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TitleSurvey {
    /// Playlist of the title matching the main-title index.
    pub main_playlist: u32,
    /// 0-based index of the longest title seen.
    pub longest_title: u32,
    pub longest_playlist: u32,
}

/// One linear pass over all relevant titles, tracking the maximum duration
/// and the main title's playlist. Fetch failures are skipped.
pub fn survey_titles<D: DiscReader>(
    disc: &mut D,
    relevant_titles: u32,
    main_title: i32,
) -> TitleSurvey {
    let mut survey = TitleSurvey::default();
    let mut max_duration = 0u64;

    for ix in 0..relevant_titles {
        let Some(info) = disc.title_info(ix) else {
            continue;
        };
        if main_title >= 0 && info.idx == main_title as u32 {
            survey.main_playlist = info.playlist;
        }
        if info.duration > max_duration {
            survey.longest_title = ix;
            survey.longest_playlist = info.playlist;
            max_duration = info.duration;
        }
    }

    survey
}
