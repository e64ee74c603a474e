//! Text and JSON output for assembled reports.
//!
//! The JSON document is emitted by hand rather than through a serializer:
//! the output is an interface other tools already parse, with 1/2/3-space
//! indentation per nesting level, keys containing spaces, and PIDs as
//! lowercase `0x` hex strings. A generic pretty-printer would not reproduce
//! it byte for byte.

use crate::report::{DiscSummary, TitleReport, TitleSurvey};
use std::io::{self, Write};

/// Which per-title details text mode prints. JSON mode ignores this and
/// always emits everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detail {
    pub video: bool,
    pub audio: bool,
    pub subtitles: bool,
    pub chapters: bool,
}

impl Detail {
    pub fn all() -> Self {
        Detail {
            video: true,
            audio: true,
            subtitles: true,
            chapters: true,
        }
    }
}

/// Framerate rendered the way the tables document it: whole rates without a
/// fraction, fractional rates as-is, unknown as "0".
fn fps_str(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as u64)
    } else {
        format!("{rate}")
    }
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Line-oriented human-readable report.
///
/// `show_main` appends the trailing main-title line; runs scoped to a
/// single title leave it off.
pub fn render_text<W: Write>(
    w: &mut W,
    summary: &DiscSummary,
    reports: &[TitleReport],
    detail: Detail,
    show_main: bool,
) -> io::Result<()> {
    if !summary.volume_title.is_empty() {
        writeln!(w, "Disc Title: {}", summary.volume_title)?;
    }

    for report in reports {
        let t = &report.title;
        writeln!(
            w,
            "Title: {:03}, Playlist: {:04}, Length: {}, Chapters: {:03}, Video streams: {:02}, Audio streams: {:02}, Subtitles: {:02}, Filesize: {:05} MB",
            t.ix + 1,
            t.playlist,
            t.length,
            t.chapters,
            t.video_streams,
            t.audio_streams,
            t.pg_streams,
            t.size_mbs
        )?;

        if detail.video {
            for (i, v) in report.video.iter().enumerate() {
                writeln!(
                    w,
                    "\tVideo: {:02}, Format: {}, Aspect ratio: {}, FPS: {}, Codec: {}",
                    i + 1,
                    v.format,
                    v.aspect_ratio,
                    fps_str(v.framerate),
                    v.codec
                )?;
            }
        }

        if detail.audio {
            for (i, a) in report.audio.iter().enumerate() {
                writeln!(
                    w,
                    "\tAudio: {:02}, Language: {}, Codec: {}, Format: {}, Rate: {}",
                    i + 1,
                    a.lang,
                    a.codec,
                    a.format,
                    a.rate
                )?;
            }
        }

        if detail.subtitles {
            for (i, s) in report.subtitles.iter().enumerate() {
                writeln!(w, "\tSubtitle: {:02}, Language: {}", i + 1, s.lang)?;
            }
        }

        if detail.chapters {
            for c in &report.chapters {
                writeln!(w, "\tChapter: {:03}, Length: {}", c.ix + 1, c.length)?;
            }
        }
    }

    if show_main {
        writeln!(w, "Main title: {}", summary.main_title + 1)?;
    }

    Ok(())
}

/// Complete JSON report: a `bluray` object of disc facts and a `titles`
/// array with all stream and chapter detail.
pub fn render_json<W: Write>(
    w: &mut W,
    summary: &DiscSummary,
    survey: &TitleSurvey,
    reports: &[TitleReport],
) -> io::Result<()> {
    writeln!(w, "{{")?;
    writeln!(w, " \"bluray\": {{")?;
    writeln!(w, "  \"disc title\": \"{}\",", esc(&summary.volume_title))?;
    writeln!(w, "  \"disc id\": \"{}\",", summary.id)?;
    writeln!(
        w,
        "  \"first play supported\": {},",
        summary.first_play_supported
    )?;
    writeln!(
        w,
        "  \"top menu supported\": {},",
        summary.top_menu_supported
    )?;
    writeln!(w, "  \"provider data\": \"{}\",", esc(&summary.provider))?;
    writeln!(w, "  \"3D content\": {},", summary.content_3d)?;
    writeln!(
        w,
        "  \"initial mode\": \"{}\",",
        if summary.initial_mode_3d { "3D" } else { "2D" }
    )?;
    writeln!(w, "  \"hdmv titles\": {},", summary.hdmv_titles)?;
    writeln!(w, "  \"bdj titles\": {},", summary.bdj_titles)?;
    writeln!(w, "  \"relevant titles\": {},", summary.relevant_titles)?;
    writeln!(w, "  \"main title\": {},", summary.main_title + 1)?;
    writeln!(w, "  \"main playlist\": {},", survey.main_playlist)?;
    writeln!(w, "  \"longest title\": {},", survey.longest_title + 1)?;
    writeln!(w, "  \"longest playlist\": {}", survey.longest_playlist)?;
    writeln!(w, " }},")?;

    writeln!(w, " \"titles\": [")?;
    for (title_ix, report) in reports.iter().enumerate() {
        let t = &report.title;
        writeln!(w, "  {{")?;
        writeln!(w, "   \"title\": {},", t.ix + 1)?;
        writeln!(w, "   \"playlist\": {},", t.playlist)?;
        writeln!(w, "   \"length\": \"{}\",", t.length)?;
        writeln!(w, "   \"msecs\": {},", crate::duration::ticks_to_msecs(t.duration))?;
        writeln!(w, "   \"filesize\": {},", t.size)?;

        writeln!(w, "   \"video\": [")?;
        for (i, v) in report.video.iter().enumerate() {
            writeln!(w, "    {{")?;
            writeln!(w, "     \"track\": {},", i + 1)?;
            writeln!(w, "     \"stream\": \"0x{:x}\",", v.pid)?;
            writeln!(w, "     \"format\": \"{}\",", v.format)?;
            writeln!(w, "     \"aspect ratio\": \"{}\",", v.aspect_ratio)?;
            writeln!(w, "     \"framerate\": \"{}\",", fps_str(v.framerate))?;
            writeln!(w, "     \"codec\": \"{}\"", v.codec)?;
            writeln!(w, "    }}{}", comma(i, report.video.len()))?;
        }
        writeln!(w, "   ],")?;

        writeln!(w, "   \"audio\": [")?;
        for (i, a) in report.audio.iter().enumerate() {
            writeln!(w, "    {{")?;
            writeln!(w, "     \"track\": {},", i + 1)?;
            writeln!(w, "     \"stream\": \"0x{:x}\",", a.pid)?;
            writeln!(w, "     \"language\": \"{}\",", esc(&a.lang))?;
            writeln!(w, "     \"codec\": \"{}\",", a.codec)?;
            writeln!(w, "     \"format\": \"{}\",", a.format)?;
            writeln!(w, "     \"rate\": \"{}\"", a.rate)?;
            writeln!(w, "    }}{}", comma(i, report.audio.len()))?;
        }
        writeln!(w, "   ],")?;

        writeln!(w, "   \"subtitles\": [")?;
        for (i, s) in report.subtitles.iter().enumerate() {
            writeln!(w, "    {{")?;
            writeln!(w, "     \"track\": {},", i + 1)?;
            writeln!(w, "     \"stream\": \"0x{:x}\",", s.pid)?;
            writeln!(w, "     \"language\": \"{}\"", esc(&s.lang))?;
            writeln!(w, "    }}{}", comma(i, report.subtitles.len()))?;
        }
        writeln!(w, "   ],")?;

        writeln!(w, "   \"chapters\": [")?;
        for (i, c) in report.chapters.iter().enumerate() {
            writeln!(w, "    {{")?;
            writeln!(w, "     \"chapter\": {},", c.ix + 1)?;
            writeln!(w, "     \"length\": \"{}\",", c.length)?;
            writeln!(w, "     \"msecs\": {}", crate::duration::ticks_to_msecs(c.duration))?;
            writeln!(w, "    }}{}", comma(i, report.chapters.len()))?;
        }
        writeln!(w, "   ]")?;

        writeln!(w, "  }}{}", comma(title_ix, reports.len()))?;
    }
    writeln!(w, " ]")?;
    writeln!(w, "}}")?;

    Ok(())
}

fn comma(ix: usize, len: usize) -> &'static str {
    if ix + 1 < len { "," } else { "" }
}
