#![allow(dead_code)]

use bdinfo::disc::{
    ChapterInfo, ClipInfo, DiscError, DiscInfo, DiscReader, StreamInfo, TitleInfo,
};

/// In-memory disc for driving the assembler and renderers in tests.
///
/// Titles are stored by index; `None` entries simulate a failing info
/// fetch, `unselectable` indices simulate a rejected selection.
pub struct FakeDisc {
    pub info: DiscInfo,
    pub titles: Vec<Option<TitleInfo>>,
    pub sizes: Vec<u64>,
    pub unselectable: Vec<u32>,
    /// playlist number -> title index
    pub playlists: Vec<(u32, u32)>,
    pub main: i32,
    current: u32,
}

impl FakeDisc {
    pub fn new(info: DiscInfo) -> Self {
        FakeDisc {
            info,
            titles: Vec::new(),
            sizes: Vec::new(),
            unselectable: Vec::new(),
            playlists: Vec::new(),
            main: 0,
            current: 0,
        }
    }

    pub fn push_title(&mut self, title: TitleInfo, size: u64) {
        self.titles.push(Some(title));
        self.sizes.push(size);
    }

    pub fn push_failing_title(&mut self) {
        self.titles.push(None);
        self.sizes.push(0);
    }
}

impl DiscReader for FakeDisc {
    fn disc_info(&mut self) -> Result<DiscInfo, DiscError> {
        Ok(self.info.clone())
    }

    fn relevant_titles(&mut self) -> u32 {
        self.titles.len() as u32
    }

    fn select_title(&mut self, index: u32) -> bool {
        if index as usize >= self.titles.len() || self.unselectable.contains(&index) {
            return false;
        }
        self.current = index;
        true
    }

    fn select_playlist(&mut self, playlist: u32) -> bool {
        match self.playlists.iter().find(|(p, _)| *p == playlist) {
            Some(&(_, title)) => {
                self.current = title;
                true
            }
            None => false,
        }
    }

    fn current_title(&mut self) -> u32 {
        self.current
    }

    fn main_title(&mut self) -> i32 {
        self.main
    }

    fn title_info(&mut self, index: u32) -> Option<TitleInfo> {
        self.titles.get(index as usize)?.clone()
    }

    fn title_size(&mut self) -> u64 {
        self.sizes.get(self.current as usize).copied().unwrap_or(0)
    }
}

pub fn video_stream(pid: u16, coding_type: u8, format: u8, rate: u8, aspect: u8) -> StreamInfo {
    StreamInfo {
        coding_type,
        format,
        rate,
        aspect,
        lang: [0; 4],
        pid,
    }
}

pub fn audio_stream(pid: u16, lang: &[u8; 4], coding_type: u8, format: u8, rate: u8) -> StreamInfo {
    StreamInfo {
        coding_type,
        format,
        rate,
        aspect: 0,
        lang: *lang,
        pid,
    }
}

pub fn pg_stream(pid: u16, lang: &[u8; 4]) -> StreamInfo {
    StreamInfo {
        coding_type: 0x90,
        format: 0,
        rate: 0,
        aspect: 0,
        lang: *lang,
        pid,
    }
}

pub fn chapter(duration: u64) -> ChapterInfo {
    ChapterInfo { start: 0, duration }
}

pub fn title(idx: u32, playlist: u32, duration: u64) -> TitleInfo {
    TitleInfo {
        idx,
        playlist,
        duration,
        angle_count: 1,
        chapters: Vec::new(),
        clips: Vec::new(),
    }
}

/// One clip holding the given stream sets.
pub fn clip(
    video: Vec<StreamInfo>,
    audio: Vec<StreamInfo>,
    pg: Vec<StreamInfo>,
) -> ClipInfo {
    ClipInfo {
        video_streams: video,
        audio_streams: audio,
        pg_streams: pg,
    }
}
