//! Property-based tests for cost and status derivation.

use super::{Reservation, ReservationRequest};
use crate::room::RoomType;
use crate::status::{derive_status, ManualStatus, Status};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn room_strategy() -> impl Strategy<Value = RoomType> {
    prop_oneof![
        Just(RoomType::Single),
        Just(RoomType::Double),
        Just(RoomType::Suite),
    ]
}

fn request(room_type: RoomType, offset: i64, length: i64) -> ReservationRequest {
    let check_in = base_date() + Duration::days(offset);
    ReservationRequest {
        id: "P1".to_string(),
        guest_name: "Guest".to_string(),
        address: String::new(),
        contact_number: "555".to_string(),
        room_type,
        check_in,
        check_out: check_in + Duration::days(length),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // nights equals the day difference for every valid stay
    #[test]
    fn nights_match_day_difference(room in room_strategy(), offset in 0i64..3650, length in 1i64..400) {
        let r = Reservation::create(request(room, offset, length)).unwrap();
        prop_assert_eq!(r.nights(), length);
    }

    // cost is nights times the nightly rate, exactly
    #[test]
    fn cost_is_nights_times_rate(room in room_strategy(), offset in 0i64..3650, length in 1i64..400) {
        let r = Reservation::create(request(room, offset, length)).unwrap();
        prop_assert_eq!(r.total_cost(), length * room.nightly_rate());
        prop_assert_eq!(r.rate_per_night(), room.nightly_rate());
    }

    // zero or negative stays never pass creation
    #[test]
    fn non_positive_stays_rejected(room in room_strategy(), length in -30i64..=0) {
        prop_assert!(Reservation::create(request(room, 0, length)).is_err());
    }

    // derived status partitions the timeline around the stay
    #[test]
    fn derived_status_partitions_timeline(length in 1i64..60, probe in -100i64..200) {
        let check_in = base_date();
        let check_out = check_in + Duration::days(length);
        let today = check_in + Duration::days(probe);
        let status = derive_status(check_in, check_out, None, today);

        let expected = if probe < 0 {
            Status::Upcoming
        } else if probe >= length {
            Status::Completed
        } else {
            Status::Active
        };
        prop_assert_eq!(status, expected);
    }

    // a manual override ignores the date entirely
    #[test]
    fn manual_override_is_date_independent(length in 1i64..60, probe in -1000i64..1000, cancelled in any::<bool>()) {
        let check_in = base_date();
        let check_out = check_in + Duration::days(length);
        let manual = if cancelled { ManualStatus::Cancelled } else { ManualStatus::CheckedOut };
        let today = check_in + Duration::days(probe);
        prop_assert_eq!(derive_status(check_in, check_out, Some(manual), today), Status::from(manual));
    }
}
