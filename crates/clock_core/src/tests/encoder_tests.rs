use super::*;
use crate::words::WordKey::*;

fn encode(hour: u32, minute: u32) -> Encoding {
    TimeEncoder::default()
        .encode(hour, minute)
        .expect("valid time")
}

#[test]
fn ten_o_clock_is_exact() {
    let encoding = encode(10, 0);
    assert_eq!(encoding.words, vec![Es, Ist, Uhr, Zehn]);
    assert_eq!(encoding.corners, 0);
}

#[test]
fn five_past_ten() {
    let encoding = encode(10, 5);
    assert_eq!(encoding.minute_words(), &[FunfMinuten, Nach]);
    assert_eq!(encoding.hour_word(), Some(Zehn));
    assert_eq!(encoding.corners, 0);
}

#[test]
fn twenty_seven_past_ten_names_eleven() {
    let encoding = encode(10, 27);
    assert_eq!(encoding.minute_words(), &[FunfMinuten, Vor, Halb]);
    assert_eq!(encoding.hour_word(), Some(Elf));
    assert_eq!(encoding.corners, 2);
}

#[test]
fn thirty_five_past_ten() {
    let encoding = encode(10, 35);
    assert_eq!(encoding.minute_words(), &[FunfMinuten, Nach, Halb]);
    assert_eq!(encoding.hour_word(), Some(Elf));
    assert_eq!(encoding.corners, 0);
}

#[test]
fn ten_fifty_nine() {
    let encoding = encode(10, 59);
    assert_eq!(encoding.minute_words(), &[FunfMinuten, Vor]);
    assert_eq!(encoding.hour_word(), Some(Elf));
    assert_eq!(encoding.corners, 4);
}

#[test]
fn midnight_wraps_to_twelve() {
    let encoding = encode(0, 5);
    assert_eq!(encoding.minute_words(), &[FunfMinuten, Nach]);
    assert_eq!(encoding.hour_word(), Some(Zwolf));
}

#[test]
fn half_past_eleven_at_night_names_twelve() {
    for minute in 25..60 {
        assert_eq!(encode(23, minute).hour_word(), Some(Zwolf), "23:{minute}");
    }
    assert_eq!(encode(23, 40).hour_word(), encode(0, 10).hour_word());
}

#[test]
fn half_hour_is_a_single_word() {
    let encoding = encode(7, 30);
    assert_eq!(encoding.minute_words(), &[Halb]);
    assert_eq!(encoding.hour_word(), Some(Acht));
    assert_eq!(encoding.phrase(), "ES IST HALB ACHT");
}

#[test]
fn rejects_out_of_range_inputs() {
    let encoder = TimeEncoder::default();
    assert_eq!(
        encoder.encode(24, 0),
        Err(ClockError::HourOutOfRange { hour: 24 })
    );
    assert_eq!(
        encoder.encode(0, 60),
        Err(ClockError::MinuteOutOfRange { minute: 60 })
    );
}

#[test]
fn regional_quarters_name_the_coming_hour() {
    let encoder = TimeEncoder::new(PhrasingKind::Regional);
    let quarter = encoder.encode(3, 15).expect("time");
    assert_eq!(quarter.minute_words(), &[Viertel]);
    assert_eq!(quarter.hour_word(), Some(Vier));

    let three_quarters = encoder.encode(3, 47).expect("time");
    assert_eq!(three_quarters.minute_words(), &[Dreiviertel]);
    assert_eq!(three_quarters.hour_word(), Some(Vier));
    assert_eq!(three_quarters.corners, 2);
}

#[test]
fn every_minute_of_the_day_is_well_formed() {
    let encoder = TimeEncoder::default();
    for time in ClockTime::all_day() {
        let first = encoder.encode_time(time);
        let second = encoder.encode_time(time);
        assert_eq!(first, second, "{time}");

        assert_eq!(first.corners, time.minute() % 5, "{time}");
        assert!(first.corners <= 4);
        assert_eq!(&first.words[..2], &[Es, Ist], "{time}");
        assert!(first.words.len() >= 3, "{time}");

        if time.bucket_base() == 0 {
            assert!(
                !first.minute_words().iter().any(|word| word.is_direction()),
                "{time}"
            );
            assert_eq!(first.minute_words(), &[Uhr]);
        }
    }
}
