use frametime::prelude::*;
use pretty_assertions::assert_eq;

fn timecode(frame: i64, fps: Fps) -> String {
    SmpteTime::new(Time::from_frame(frame, fps)).to_string()
}

#[test]
fn drop_frame_conversion_round_trips() {
    let dropped = SmpteTime::convert_drop_frame(86496, Fps::FPS_23_976, false);
    assert_eq!(dropped, 86388);
    assert_eq!(
        SmpteTime::convert_drop_frame(dropped, Fps::FPS_23_976, true),
        86496
    );
}

#[test]
fn drop_frame_conversion_is_identity_for_non_drop_rates() {
    assert_eq!(SmpteTime::convert_drop_frame(86496, Fps::FPS_24, false), 86496);
    assert_eq!(SmpteTime::convert_drop_frame(86496, Fps::FPS_24, true), 86496);
}

#[test]
fn one_hour_four_seconds_at_24_fps() {
    let time = Time::from_frame(86496, Fps::FPS_24);
    assert_eq!(time.seconds(), 3604.0);
    assert_eq!(timecode(86496, Fps::FPS_24), "01:00:04:00");
}

#[test]
fn the_same_instant_relabels_across_rates() {
    // 01:00:04:00 at 24 fps, carried around the rate wheel and back
    let mut frame = 86496;

    frame = SmpteTime::convert(frame, Fps::FPS_24, Fps::FPS_50);
    assert_eq!(frame, 180200);
    assert_eq!(timecode(frame, Fps::FPS_50), "01:00:04:00");

    frame = SmpteTime::convert(frame, Fps::FPS_50, Fps::FPS_25);
    assert_eq!(timecode(frame, Fps::FPS_25), "01:00:04:00");

    frame = SmpteTime::convert(frame, Fps::FPS_25, Fps::FPS_50);
    assert_eq!(timecode(frame, Fps::FPS_50), "01:00:04:00");

    frame = SmpteTime::convert(frame, Fps::FPS_50, Fps::FPS_23_976);
    assert_eq!(frame, 86388);
    assert_eq!(timecode(frame, Fps::FPS_23_976), "01:00:04.00");

    frame = SmpteTime::convert(frame, Fps::FPS_23_976, Fps::FPS_50);
    assert_eq!(timecode(frame, Fps::FPS_50), "01:00:04:00");

    frame = SmpteTime::convert(frame, Fps::FPS_50, Fps::FPS_24);
    assert_eq!(frame, 86496);
    assert_eq!(timecode(frame, Fps::FPS_24), "01:00:04:00");
}

#[test]
fn thirty_fps_shares_the_24_fps_label() {
    let frame = Fps::convert(86496, Fps::FPS_24, Fps::FPS_30);
    assert_eq!(frame, 108120);
    assert_eq!(timecode(frame, Fps::FPS_30), "01:00:04:00");
}

#[test]
fn ntsc_reference_timecodes() {
    assert_eq!(timecode(440658, Fps::FPS_29_97), "04:05:03.10");
    assert_eq!(timecode(442698, Fps::FPS_29_97), "04:06:11.12");
}

#[test]
fn drop_frame_skips_the_first_two_labels_of_a_minute() {
    // the label after 00:00:59.29 is 00:01:00.02
    assert_eq!(timecode(1799, Fps::FPS_29_97), "00:00:59.29");
    assert_eq!(timecode(1800, Fps::FPS_29_97), "00:01:00.02");
    // high-rate NTSC drops the same two labels
    assert_eq!(timecode(3600, Fps::FPS_59_94), "00:01:00.02");
    // tenth minutes are not skipped
    assert_eq!(timecode(17982, Fps::FPS_29_97), "00:10:00.00");
}

#[test]
fn quicktime_reference_case() {
    let time = Time::new(2544542, 24000, Fps::FPS_23_976);
    assert_eq!(time.frame(), 2542);
    assert_eq!(SmpteTime::new(time).to_string(), "00:01:46.00");

    // a 2542-frame clip offset to the 01:00:04 drop-frame timecode
    let last_frame = 2541;
    let offset = SmpteTime::convert(86496, Fps::FPS_24, Fps::FPS_23_976);
    assert_eq!(offset, 86388);
    assert_eq!(timecode(last_frame + offset, Fps::FPS_23_976), "01:01:49.23");
}

#[test]
fn ffmpeg_reference_case() {
    // time_base=1/24000, duration_ts=187903716, 7829.344 seconds:
    // the frame digit comes from round-half-up on ticks to frames
    let time = Time::new(187903716, 24000, Fps::FPS_24);
    assert_eq!(SmpteTime::new(time).to_string(), "02:10:29:08");
}

#[test]
fn resolve_reference_case() {
    let time = Time::from_frame(87040, Fps::FPS_23_976);
    assert_eq!(time.to_string(), "01:00:30");
    assert_eq!(SmpteTime::new(time).to_string(), "01:00:31.04");
}

#[test]
fn fields_recompose_to_the_source_frame() {
    let smpte = SmpteTime::new(Time::from_frame(86496, Fps::FPS_24));
    assert_eq!(smpte.hours(), 1);
    assert_eq!(smpte.minutes(), 0);
    assert_eq!(smpte.seconds(), 4);
    assert_eq!(smpte.frames(), 0);
    assert_eq!(smpte.sign(), Sign::Positive);
    assert_eq!(smpte.frame(), 86496);
    assert_eq!(smpte.to_time(), Time::from_frame(86496, Fps::FPS_24));

    let smpte = SmpteTime::new(Time::from_frame(86388, Fps::FPS_23_976));
    assert_eq!(smpte.frame(), 86388);
}

#[test]
fn negative_times_carry_a_sign() {
    let smpte = SmpteTime::new(Time::from_frame(-86496, Fps::FPS_24));
    assert_eq!(smpte.sign(), Sign::Negative);
    assert_eq!(smpte.to_string(), "-01:00:04:00");
    assert_eq!(smpte.frame(), -86496);
}

#[test]
fn disallowed_negatives_wrap_into_the_positive_day() {
    let smpte = SmpteTime::new(Time::from_frame(-86496, Fps::FPS_24))
        .with_allow_negatives(false);
    assert_eq!(smpte.sign(), Sign::Positive);
    assert_eq!(smpte.to_string(), "22:00:04:00");
}

#[test]
fn hours_wrap_at_24_unless_disabled() {
    let day = 24 * 3600 * 24; // one day of 24 fps frames
    let smpte = SmpteTime::new(Time::from_frame(day + 86496, Fps::FPS_24));
    assert_eq!(smpte.to_string(), "01:00:04:00");
    assert!(smpte.valid());

    let smpte = smpte.with_wrap_24h(false);
    assert_eq!(smpte.hours(), 25);
    assert_eq!(smpte.to_string(), "25:00:04:00");
    assert!(!smpte.valid());
    assert_eq!(smpte.validate(), Err(TimeError::InvalidTimecode));
}

#[test]
fn arithmetic_and_ordering_use_frame_ordinals() {
    let hour = SmpteTime::new(Time::from_frame(86400, Fps::FPS_24));
    let four_seconds = SmpteTime::new(Time::from_frame(96, Fps::FPS_24));

    assert_eq!((hour + four_seconds).to_string(), "01:00:04:00");
    assert_eq!((hour - four_seconds).to_string(), "00:59:56:00");
    assert!(four_seconds < hour);
    assert!(hour + four_seconds > hour);
}

#[test]
fn equality_compares_display_fields() {
    let a = SmpteTime::new(Time::from_frame(86496, Fps::FPS_24));
    let b = SmpteTime::new(Time::new(86496000, 24000, Fps::FPS_24));
    assert_eq!(a, b);
}
