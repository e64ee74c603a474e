pub mod disc;
pub mod duration;
pub mod render;
pub mod report;
pub mod tables;
pub mod util;

#[cfg(feature = "libbluray")]
pub mod ffi;

pub use disc::{ChapterInfo, ClipInfo, DiscError, DiscInfo, DiscReader, StreamInfo, TitleInfo};
pub use duration::{format_duration, ticks_to_msecs};
pub use render::{Detail, render_json, render_text};
pub use report::{
    DiscSummary, Scope, TitleReport, TitleScan, TitleSurvey, resolve_scope, survey_titles,
};
