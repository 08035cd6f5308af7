use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use hourly_plan::error::PlanError;
use hourly_plan::{TaskForm, TaskRequest, plan, plan_event};
use hourly_rfc::rfc::ical::core::{Weekday, WeekdaySet};

struct PlanCase {
    name: &'static str,
    hours: u32,
    start_date: &'static str,
    end_date: &'static str,
    start_time: &'static str,
    days: &'static [&'static str],
    occurrences: u32,
    block: (u32, u32),
    start: &'static str,
    end: &'static str,
    rrule: &'static str,
}

fn cases() -> Vec<PlanCase> {
    vec![
        PlanCase {
            name: "two_weeks_mon_wed_fri",
            hours: 10,
            start_date: "2026-10-19",
            end_date: "2026-10-30",
            start_time: "10:00",
            days: &["MO", "WE", "FR"],
            occurrences: 6,
            block: (1, 40),
            start: "2026-10-19T10:00:00",
            end: "2026-10-19T11:40:00",
            rrule: "RRULE:FREQ=WEEKLY;INTERVAL=1;UNTIL=20261031T000000Z;BYDAY=MO,WE,FR",
        },
        PlanCase {
            name: "late_start_crosses_midnight",
            hours: 12,
            start_date: "2026-10-19",
            end_date: "2026-10-30",
            start_time: "11:00 PM",
            days: &["FR", "MO", "WE"],
            occurrences: 6,
            block: (2, 0),
            start: "2026-10-19T23:00:00",
            end: "2026-10-20T01:00:00",
            rrule: "RRULE:FREQ=WEEKLY;INTERVAL=1;UNTIL=20261031T000000Z;BYDAY=MO,WE,FR",
        },
        PlanCase {
            name: "new_years_eve_rolls_year",
            hours: 6,
            start_date: "2026-12-31",
            end_date: "2027-01-14",
            start_time: "23:00",
            days: &["TH"],
            occurrences: 3,
            block: (2, 0),
            start: "2026-12-31T23:00:00",
            end: "2027-01-01T01:00:00",
            rrule: "RRULE:FREQ=WEEKLY;INTERVAL=1;UNTIL=20270115T000000Z;BYDAY=TH",
        },
        PlanCase {
            name: "window_ends_on_month_end",
            hours: 3,
            start_date: "2027-01-25",
            end_date: "2027-01-31",
            start_time: "7:15 am",
            days: &["SU", "MO", "TU", "WE", "TH", "FR", "SA"],
            occurrences: 7,
            block: (0, 25),
            start: "2027-01-25T07:15:00",
            end: "2027-01-25T07:40:00",
            rrule: "RRULE:FREQ=WEEKLY;INTERVAL=1;UNTIL=20270201T000000Z;BYDAY=MO,TU,WE,TH,FR,SA,SU",
        },
        PlanCase {
            name: "minutes_carry_into_next_hour",
            hours: 5,
            start_date: "2026-11-02",
            end_date: "2026-11-04",
            start_time: "09:45",
            days: &["MO", "TU", "WE"],
            occurrences: 3,
            block: (1, 40),
            start: "2026-11-02T09:45:00",
            end: "2026-11-02T11:25:00",
            rrule: "RRULE:FREQ=WEEKLY;INTERVAL=1;UNTIL=20261105T000000Z;BYDAY=MO,TU,WE",
        },
    ]
}

fn request(case: &PlanCase) -> TaskRequest {
    TaskForm {
        name: case.name.to_string(),
        start_date: case.start_date.to_string(),
        end_date: case.end_date.to_string(),
        start_time: case.start_time.to_string(),
        hours: case.hours.to_string(),
        days: case.days.iter().map(ToString::to_string).collect(),
        time_zone: "UTC".to_string(),
        ..TaskForm::default()
    }
    .into_request(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    .unwrap()
}

#[test_log::test]
fn plan_cases() {
    for case in cases() {
        tracing::debug!(case = case.name, "Running plan case");
        let plan = plan(&request(&case)).unwrap();

        assert_eq!(plan.window.effective_occurrences, case.occurrences, "{}", case.name);
        assert_eq!(
            (
                plan.allocation.block.hours_per_day,
                plan.allocation.block.minutes_per_day
            ),
            case.block,
            "{}",
            case.name
        );

        let body = plan.event.body();
        assert_eq!(body.start.date_time, case.start, "{}", case.name);
        assert_eq!(body.end.date_time, case.end, "{}", case.name);
        assert_eq!(body.start.time_zone, "UTC", "{}", case.name);
        assert_eq!(body.recurrence, vec![case.rrule.to_string()], "{}", case.name);
    }
}

#[test]
fn two_week_scenario_expands_to_every_occurrence() {
    let cases = cases();
    let case = &cases[0];
    let event = plan_event(&request(case)).unwrap();

    let occurrences = event.occurrences(100).unwrap();
    let expected: Vec<NaiveDateTime> = [19, 21, 23, 26, 28, 30]
        .into_iter()
        .map(|day| {
            NaiveDate::from_ymd_opt(2026, 10, day)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        })
        .collect();

    assert_eq!(occurrences, expected);
}

#[test]
fn remainder_reconstructs_hours() {
    for case in cases() {
        let plan = plan(&request(&case)).unwrap();
        assert_eq!(
            plan.allocation.block.hours_per_day * plan.window.effective_occurrences
                + plan.allocation.remainder_hours,
            case.hours
        );
    }
}

#[test]
fn evening_blocks_west_of_utc_keep_the_last_day() {
    for (zone, start_time, until) in [
        ("America/Los_Angeles", "6:00 PM", "20261031T070000Z"),
        ("America/Chicago", "20:00", "20261031T050000Z"),
    ] {
        let cases = cases();
        let mut form_request = request(&cases[0]);
        form_request.time_zone = zone.to_string();
        form_request.start_time = hourly_plan::request::parse_start_time(start_time).unwrap();

        let plan = plan(&form_request).unwrap();
        let occurrences = plan.event.occurrences(100).unwrap();

        assert_eq!(plan.window.effective_occurrences, 6, "{zone}");
        assert_eq!(occurrences.len(), 6, "{zone}");
        assert_eq!(
            occurrences.last().map(NaiveDateTime::date),
            NaiveDate::from_ymd_opt(2026, 10, 30),
            "{zone}"
        );
        assert!(
            plan.event.body().recurrence[0].contains(&format!("UNTIL={until};")),
            "{zone}"
        );
    }
}

#[test]
fn recurrence_covers_the_window_in_every_zone() {
    let zones = [
        "UTC",
        "America/Los_Angeles",
        "Pacific/Honolulu",
        "Europe/Berlin",
        "Pacific/Kiritimati",
    ];
    let days_sets: [&[&str]; 4] = [&["MO"], &["TU", "TH"], &["MO", "WE", "FR"], &["SA", "SU"]];
    let first = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    for zone in zones {
        for start_hour in [8, 20] {
            for start_offset in 0..7 {
                let start_date = first + TimeDelta::days(start_offset);
                for length in 1..=20 {
                    for days in days_sets {
                        let available_days = WeekdaySet::from_codes(days).unwrap();
                        let request = TaskRequest {
                            summary: "Property".to_string(),
                            location: String::new(),
                            description: String::new(),
                            hours_needed: 15,
                            start_date,
                            end_date: start_date + TimeDelta::days(length),
                            start_time: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
                            available_days: available_days.clone(),
                            time_zone: zone.to_string(),
                        };

                        let plan = match plan(&request) {
                            Ok(plan) => plan,
                            Err(PlanError::NoAvailableOccurrences { .. }) => continue,
                            Err(other) => panic!("unexpected error: {other}"),
                        };

                        let permitted: Vec<NaiveDate> = request
                            .start_date
                            .iter_days()
                            .take_while(|day| *day <= request.end_date)
                            .filter(|day| {
                                available_days.iter().any(|d| d == Weekday::from(day.weekday()))
                            })
                            .collect();
                        let expanded: Vec<NaiveDate> = plan
                            .event
                            .occurrences(1000)
                            .unwrap()
                            .iter()
                            .map(NaiveDateTime::date)
                            .collect();
                        let label = format!("{zone} {start_date} +{length} {days:?}");
                        assert!(
                            permitted.iter().all(|day| expanded.contains(day)),
                            "{label}: {expanded:?} misses part of {permitted:?}"
                        );
                        assert!(
                            expanded
                                .iter()
                                .all(|day| (request.start_date..=request.end_date).contains(day)),
                            "{label}: {expanded:?} leaves the window"
                        );

                        let until = plan.event.until_date.and_time(NaiveTime::MIN);
                        let block = plan.event.end - plan.event.start;
                        if let Some(last) = expanded.last() {
                            let last = last.and_time(request.start_time);
                            assert!(last < until, "{last} not before {until}");
                            if start_hour == 8 {
                                assert!(last + block < until, "{last} + {block} not before {until}");
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn empty_window_fails_without_event() {
    // Saturday to Monday, Tuesdays only.
    let request = TaskRequest {
        summary: "Nothing fits".to_string(),
        location: String::new(),
        description: String::new(),
        hours_needed: 4,
        start_date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 10, 26).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        available_days: WeekdaySet::from_codes(["TU"]).unwrap(),
        time_zone: "UTC".to_string(),
    };

    let err = plan_event(&request).unwrap_err();
    assert!(matches!(err, PlanError::NoAvailableOccurrences { .. }));
    assert!(err.to_string().contains("2026-10-24"));
}

#[test]
fn invalid_request_is_rejected_before_planning() {
    let mut request = request(&cases()[0]);
    request.time_zone = "Not/AZone".to_string();

    assert!(matches!(plan(&request), Err(PlanError::InvalidRequest(_))));
}
