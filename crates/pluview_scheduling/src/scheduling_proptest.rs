#[cfg(test)]
mod tests {
    use crate::availability::{is_weekend, AvailabilityFilter};
    use crate::calendar::{CalendarNavigator, YearMonth};
    use crate::draft::BookingDraft;
    use crate::invite::sanitize_input;
    use crate::slots::all_slots;
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    // Helper: a local "now" somewhere between 2024 and 2034
    fn make_now(day_offset: i64, hour: u32, minute: u32) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (base + Duration::days(day_offset))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    proptest! {
        // Future weekdays are always selectable, whatever the time of day
        #[test]
        fn test_future_weekdays_are_selectable(
            day_offset in 0..3650i64,
            hour in 0..24u32,
            minute in 0..60u32,
            ahead in 1..400i64,
        ) {
            let now = make_now(day_offset, hour, minute);
            let date = now.date() + Duration::days(ahead);
            let filter = AvailabilityFilter::default();
            prop_assert_eq!(filter.is_selectable(date, now), !is_weekend(date));
        }

        // Weekends are never selectable, today included
        #[test]
        fn test_weekends_never_selectable(
            day_offset in 0..3650i64,
            hour in 0..24u32,
            minute in 0..60u32,
            ahead in 0..400i64,
            sunday in any::<bool>(),
        ) {
            let now = make_now(day_offset, hour, minute);
            let from = now.date() + Duration::days(ahead);
            let to_saturday = (12 - from.weekday().num_days_from_monday()) % 7;
            let date = from + Duration::days(i64::from(to_saturday) + i64::from(sunday));
            prop_assert!(is_weekend(date));
            prop_assert!(!AvailabilityFilter::default().is_selectable(date, now));
        }

        // Today's slots are an ordered subsequence of the catalog past the cutoff
        #[test]
        fn test_today_slots_respect_cutoff(
            hour in 0..24u32,
            minute in 0..60u32,
            lead in 0..240u32,
        ) {
            let now = make_now(100, hour, minute);
            let filter = AvailabilityFilter::new(lead);
            let slots = filter.available_slots(now.date(), now);
            let cutoff = hour * 60 + minute + lead;

            let expected: Vec<_> = all_slots()
                .filter(|slot| slot.minutes_since_midnight() > cutoff)
                .collect();
            prop_assert_eq!(&slots, &expected);
            prop_assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
            // a selectable today always offers at least one slot
            if filter.is_selectable(now.date(), now) {
                prop_assert!(!slots.is_empty());
            }
        }

        // No sequence of navigation moves shows a month before the current one
        #[test]
        fn test_navigation_never_crosses_floor(
            day_offset in 0..3650i64,
            moves in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let today = make_now(day_offset, 12, 0).date();
            let floor = YearMonth::from_date(today);
            let mut nav = CalendarNavigator::new(today, AvailabilityFilter::default());
            for forward in moves {
                if forward {
                    nav.go_to_next_month();
                } else {
                    let before = nav.cursor();
                    let allowed = nav.can_go_to_previous_month(today);
                    let moved = nav.go_to_previous_month(today);
                    prop_assert_eq!(allowed, moved);
                    if !moved {
                        prop_assert_eq!(nav.cursor(), before);
                    }
                }
                prop_assert!(nav.cursor() >= floor);
            }
        }

        // Rejected dates leave the draft exactly as it was
        #[test]
        fn test_rejected_select_date_is_idempotent(
            day_offset in 0..3650i64,
            back in 1..60i64,
        ) {
            let now = make_now(day_offset, 10, 0);
            let filter = AvailabilityFilter::default();
            let mut draft = BookingDraft::new();
            let before = draft.clone();
            let past = now.date() - Duration::days(back);
            prop_assert!(!draft.select_date(past, now, &filter));
            prop_assert!(!draft.select_date(past, now, &filter));
            prop_assert_eq!(draft, before);
        }

        // Sanitized text never carries brackets, schemes or handlers, and respects the limit
        #[test]
        fn test_sanitized_text_is_clean(
            input in "(<|>|javascript:|JaVaScRiPt:|onload=|on|java|script:|[a-z ]{0,8}){0,40}",
            max_length in 1..600usize,
        ) {
            let clean = sanitize_input(&input, max_length);
            let lower = clean.to_lowercase();
            prop_assert!(!clean.contains('<') && !clean.contains('>'));
            prop_assert!(!lower.contains("javascript:"));
            prop_assert!(!lower.contains("onload="));
            prop_assert!(clean.chars().count() <= max_length);
        }
    }
}
