use bdinfo::disc::{DiscError, DiscReader};
use bdinfo::render::{Detail, render_json, render_text};
use bdinfo::report::{DiscSummary, Scope, TitleScan, resolve_scope, survey_titles};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DEVICE: &str = "/dev/sr0";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Display information about a Blu-ray disc",
    after_help = "Blu-ray path can be a device filename, a file, or a directory.\n\n\
        Examples:\n  bdinfo /dev/sr0\n  bdinfo movie.iso\n  bdinfo bluray/"
)]
struct Args {
    /// Blu-ray device, image file, or directory
    path: Option<String>,

    /// Limit to one title track
    #[arg(short, long, overrides_with_all = ["playlist", "main"])]
    title: Option<u32>,

    /// Limit to one playlist
    #[arg(short, long, overrides_with_all = ["title", "main"])]
    playlist: Option<u32>,

    /// Limit to the main title
    #[arg(short, long, overrides_with_all = ["title", "playlist"])]
    main: bool,

    /// Location of KEYDB.cfg (default: let libaacs look it up)
    #[arg(short, long)]
    keydb: Option<PathBuf>,

    /// Display video stream details
    #[arg(short, long)]
    video: bool,

    /// Display audio stream details
    #[arg(short, long)]
    audio: bool,

    /// Display subtitle details
    #[arg(short, long)]
    subtitles: bool,

    /// Display chapter details
    #[arg(short, long)]
    chapters: bool,

    /// Display all details
    #[arg(short = 'x', long)]
    all: bool,

    /// Display output in JSON format
    #[arg(short, long, overrides_with_all = ["id", "volname"])]
    json: bool,

    /// Display the disc ID only
    #[arg(short, long, overrides_with_all = ["json", "volname"])]
    id: bool,

    /// Display the UDF volume name only (iso or device only)
    #[arg(short = 'u', long, overrides_with_all = ["json", "id"])]
    volname: bool,
}

impl Args {
    fn scope(&self) -> Scope {
        if let Some(number) = self.title {
            Scope::Title(number)
        } else if let Some(number) = self.playlist {
            Scope::Playlist(number)
        } else if self.main {
            Scope::Main
        } else {
            Scope::All
        }
    }

    fn detail(&self) -> Detail {
        if self.all {
            return Detail::all();
        }
        Detail {
            video: self.video,
            audio: self.audio,
            subtitles: self.subtitles,
            chapters: self.chapters,
        }
    }
}

#[cfg(feature = "libbluray")]
fn open_disc(path: &str, keydb: Option<&Path>) -> Result<bdinfo::ffi::BlurayDisc, DiscError> {
    bdinfo::ffi::BlurayDisc::open(path, keydb)
}

#[cfg(not(feature = "libbluray"))]
fn open_disc(_path: &str, _keydb: Option<&Path>) -> Result<NoBackend, DiscError> {
    Err(DiscError::BackendUnavailable)
}

/// Stand-in reader for builds without the libbluray feature. Never
/// constructed; `open_disc` fails first.
#[cfg(not(feature = "libbluray"))]
struct NoBackend;

#[cfg(not(feature = "libbluray"))]
impl DiscReader for NoBackend {
    fn disc_info(&mut self) -> Result<bdinfo::disc::DiscInfo, DiscError> {
        Err(DiscError::BackendUnavailable)
    }
    fn relevant_titles(&mut self) -> u32 {
        0
    }
    fn select_title(&mut self, _index: u32) -> bool {
        false
    }
    fn select_playlist(&mut self, _playlist: u32) -> bool {
        false
    }
    fn current_title(&mut self) -> u32 {
        0
    }
    fn main_title(&mut self) -> i32 {
        -1
    }
    fn title_info(&mut self, _index: u32) -> Option<bdinfo::disc::TitleInfo> {
        None
    }
    fn title_size(&mut self) -> u64 {
        0
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let path = args.path.as_deref().unwrap_or(DEFAULT_DEVICE);
    let mut disc = open_disc(path, args.keydb.as_deref())?;
    let info = disc.disc_info()?;

    let mut stdout = io::stdout().lock();

    // Single-value modes answer before any title enumeration.
    if args.volname {
        writeln!(stdout, "{}", info.udf_volume_id.as_deref().unwrap_or(""))?;
        return Ok(());
    }
    if args.id {
        writeln!(
            stdout,
            "{}",
            info.disc_id.map(hex::encode_upper).unwrap_or_default()
        )?;
        return Ok(());
    }

    let relevant_titles = disc.relevant_titles();
    let main_title = disc.main_title();

    let scope = args.scope();
    let (first, count) = resolve_scope(&mut disc, scope, relevant_titles, main_title)?;
    let summary = DiscSummary::new(&info, relevant_titles, main_title);

    if args.json {
        let survey = survey_titles(&mut disc, relevant_titles, main_title);
        let reports: Vec<_> = TitleScan::new(&mut disc, first, count).collect();
        render_json(&mut stdout, &summary, &survey, &reports)?;
    } else {
        let reports: Vec<_> = TitleScan::new(&mut disc, first, count).collect();
        let show_main = scope == Scope::All && count != 1;
        render_text(&mut stdout, &summary, &reports, args.detail(), show_main)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Diagnostics go to stdout, matching what wrappers parse.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
