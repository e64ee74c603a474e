mod common;

use bdinfo::disc::{DiscInfo, DiscReader, codes};
use bdinfo::render::render_json;
use bdinfo::report::{DiscSummary, TitleScan, survey_titles};
use common::{FakeDisc, audio_stream, chapter, clip, pg_stream, title, video_stream};
use serde_json::Value;

fn sample_disc() -> FakeDisc {
    let info = DiscInfo {
        udf_volume_id: Some("MOVIE_DISC".to_string()),
        disc_id: Some([0xAB; 20]),
        num_hdmv_titles: 10,
        num_bdj_titles: 0,
        num_unsupported_titles: 1,
        num_titles: 11,
        first_play_supported: true,
        top_menu_supported: false,
        content_exist_3d: false,
        initial_output_mode_3d: false,
        provider_data: "PROVIDER".to_string(),
    };
    let mut disc = FakeDisc::new(info);

    let mut t0 = title(0, 1, 8_100_000); // 90 seconds
    t0.chapters = vec![chapter(8_100_000)];
    t0.clips = vec![clip(
        vec![video_stream(
            0x1011,
            codes::STREAM_TYPE_VIDEO_H264,
            codes::VIDEO_FORMAT_1080P,
            codes::VIDEO_RATE_24000_1001,
            codes::ASPECT_RATIO_16_9,
        )],
        vec![audio_stream(
            0x1100,
            b"eng\0",
            codes::STREAM_TYPE_AUDIO_AC3,
            codes::AUDIO_FORMAT_STEREO,
            codes::AUDIO_RATE_48,
        )],
        vec![pg_stream(0x1200, b"fra\0")],
    )];
    disc.push_title(t0, 1024 * 1024 * 100);

    let t1 = title(1, 20, 900_000_000); // 10000 seconds
    disc.push_title(t1, 1024 * 1024 * 200);

    disc
}

fn render_to_value(disc: &mut FakeDisc) -> (String, Value) {
    let info = disc.disc_info().unwrap();
    let relevant = disc.relevant_titles();
    let main_title = disc.main_title();

    let summary = DiscSummary::new(&info, relevant, main_title);
    let survey = survey_titles(disc, relevant, main_title);
    let reports: Vec<_> = TitleScan::new(disc, 0, relevant).collect();

    let mut out = Vec::new();
    render_json(&mut out, &summary, &survey, &reports).unwrap();
    let text = String::from_utf8(out).unwrap();
    let value = serde_json::from_str(&text).expect("emitted JSON must parse");
    (text, value)
}

#[test]
fn emits_well_formed_json() {
    let mut disc = sample_disc();
    let (_, v) = render_to_value(&mut disc);
    assert!(v.is_object());
    assert!(v["bluray"].is_object());
    assert!(v["titles"].is_array());
}

#[test]
fn disc_facts_are_reported() {
    let mut disc = sample_disc();
    let (_, v) = render_to_value(&mut disc);
    let bluray = &v["bluray"];
    assert_eq!(bluray["disc title"], "MOVIE_DISC");
    assert_eq!(
        bluray["disc id"],
        "ABABABABABABABABABABABABABABABABABABABAB"
    );
    assert_eq!(bluray["first play supported"], true);
    assert_eq!(bluray["top menu supported"], false);
    assert_eq!(bluray["provider data"], "PROVIDER");
    assert_eq!(bluray["3D content"], false);
    assert_eq!(bluray["initial mode"], "2D");
    assert_eq!(bluray["hdmv titles"], 10);
    assert_eq!(bluray["bdj titles"], 0);
    assert_eq!(bluray["relevant titles"], 2);
}

#[test]
fn longest_title_survey_feeds_disc_object() {
    // title 1 (0-based) is far longer, so it must win the survey
    let mut disc = sample_disc();
    let (_, v) = render_to_value(&mut disc);
    let bluray = &v["bluray"];
    assert_eq!(bluray["main title"], 1);
    assert_eq!(bluray["main playlist"], 1);
    assert_eq!(bluray["longest title"], 2);
    assert_eq!(bluray["longest playlist"], 20);
}

#[test]
fn titles_carry_display_indices_and_derived_durations() {
    let mut disc = sample_disc();
    let (_, v) = render_to_value(&mut disc);
    let titles = v["titles"].as_array().unwrap();
    assert_eq!(titles.len(), 2);

    assert_eq!(titles[0]["title"], 1);
    assert_eq!(titles[0]["playlist"], 1);
    assert_eq!(titles[0]["length"], "00:01:30");
    assert_eq!(titles[0]["msecs"], 90_000);
    assert_eq!(titles[0]["filesize"], 1024u64 * 1024 * 100);

    assert_eq!(titles[1]["title"], 2);
    assert_eq!(titles[1]["length"], "02:46:40");
}

#[test]
fn stream_detail_is_always_emitted() {
    let mut disc = sample_disc();
    let (_, v) = render_to_value(&mut disc);
    let t0 = &v["titles"][0];

    let video = t0["video"].as_array().unwrap();
    assert_eq!(video.len(), 1);
    assert_eq!(video[0]["track"], 1);
    assert_eq!(video[0]["stream"], "0x1011");
    assert_eq!(video[0]["format"], "1080p");
    assert_eq!(video[0]["aspect ratio"], "16:9");
    assert_eq!(video[0]["framerate"], "23.97");
    assert_eq!(video[0]["codec"], "h264");

    let audio = t0["audio"].as_array().unwrap();
    assert_eq!(audio[0]["language"], "eng");
    assert_eq!(audio[0]["codec"], "ac3");
    assert_eq!(audio[0]["format"], "stereo");
    assert_eq!(audio[0]["rate"], "48");

    let subs = t0["subtitles"].as_array().unwrap();
    assert_eq!(subs[0]["language"], "fra");
    assert_eq!(subs[0]["stream"], "0x1200");

    let chapters = t0["chapters"].as_array().unwrap();
    assert_eq!(chapters[0]["chapter"], 1);
    assert_eq!(chapters[0]["length"], "00:01:30");
    assert_eq!(chapters[0]["msecs"], 90_000);

    // a clipless title still carries all four arrays, just empty
    let t1 = &v["titles"][1];
    assert_eq!(t1["video"].as_array().unwrap().len(), 0);
    assert_eq!(t1["audio"].as_array().unwrap().len(), 0);
    assert_eq!(t1["subtitles"].as_array().unwrap().len(), 0);
    assert_eq!(t1["chapters"].as_array().unwrap().len(), 0);
}

#[test]
fn empty_title_list_is_still_valid_json() {
    let mut disc = FakeDisc::new(DiscInfo::default());
    let (_, v) = render_to_value(&mut disc);
    assert_eq!(v["titles"].as_array().unwrap().len(), 0);
    assert_eq!(v["bluray"]["disc title"], "");
    assert_eq!(v["bluray"]["disc id"], "");
}

#[test]
fn volume_titles_with_quotes_are_escaped() {
    let mut disc = FakeDisc::new(DiscInfo {
        udf_volume_id: Some(r#"MY "SPECIAL" DISC\2"#.to_string()),
        ..DiscInfo::default()
    });
    let (_, v) = render_to_value(&mut disc);
    assert_eq!(v["bluray"]["disc title"], r#"MY "SPECIAL" DISC\2"#);
}

#[test]
fn indentation_follows_nesting_depth() {
    let mut disc = sample_disc();
    let (text, _) = render_to_value(&mut disc);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], " \"bluray\": {");
    assert!(lines[2].starts_with("  \"disc title\":"));
    assert!(text.contains("\n \"titles\": [\n"));
    assert!(text.contains("\n   \"video\": [\n"));
    assert!(text.contains("\n     \"track\": 1,\n"));
    assert_eq!(*lines.last().unwrap(), "}");
}
