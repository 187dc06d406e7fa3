use chrono::{DateTime, Duration, TimeZone, Utc};
use sgp4::{Constants, Elements};

// AIAA 2006-6753 Appendix C verification TLE for the ISS.
const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

pub(crate) fn iss() -> (Elements, Constants) {
    let elements = Elements::from_tle(
        Some("ISS (ZARYA)".to_string()),
        ISS_LINE1.as_bytes(),
        ISS_LINE2.as_bytes(),
    )
    .expect("ISS TLE parses");
    let constants = Constants::from_elements(&elements).expect("ISS constants build");
    (elements, constants)
}

/// TLE epoch: day 264.51782528 of 2008.
pub(crate) fn iss_epoch() -> DateTime<Utc> {
    let day_ms = (263.51782528_f64 * 86_400_000.0).round() as i64;
    Utc.with_ymd_and_hms(2008, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(day_ms)
}
