use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use waste_core::{
    DateRange, Period, PeriodSelector, ReportingOffset, WasteEntry, aggregate, cost_for_amount,
    daily_buckets, filter_entries, period_totals, vial_usage,
};

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("timestamp")
        .with_timezone(&Utc)
}

fn entry(id: i64, created_at: DateTime<Utc>, amount_ml: f64) -> WasteEntry {
    WasteEntry {
        id,
        amount_ml,
        cost_dollars: cost_for_amount(amount_ml),
        created_at,
    }
}

fn ids(entries: &[WasteEntry]) -> Vec<i64> {
    entries.iter().map(|entry| entry.id).collect()
}

fn toronto() -> ReportingOffset {
    "-04:00".parse().expect("offset")
}

#[test]
fn daily_keeps_only_entries_from_the_local_today() {
    let now = ts("2025-07-15T18:00:00Z");
    let entries = vec![
        entry(1, ts("2025-07-15T04:30:00Z"), 1.0),
        // 03:30Z is still the 14th at -04:00.
        entry(2, ts("2025-07-15T03:30:00Z"), 1.0),
        entry(3, ts("2025-07-15T17:59:00Z"), 2.0),
        entry(4, ts("2025-07-16T05:00:00Z"), 2.0),
    ];

    let filtered = filter_entries(&entries, &Period::Daily.into(), now, toronto());

    assert_eq!(ids(&filtered), vec![3, 1]);
}

#[test]
fn weekly_is_a_rolling_window_with_inclusive_boundary() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        entry(1, now - Duration::days(7), 1.0),
        entry(2, now - Duration::days(7) - Duration::seconds(1), 1.0),
        entry(3, now - Duration::days(2), 1.0),
    ];

    let filtered = filter_entries(&entries, &Period::Weekly.into(), now, toronto());

    assert_eq!(ids(&filtered), vec![3, 1]);
}

#[test]
fn monthly_starts_at_the_first_local_day_of_the_month() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        // 2025-07-01T00:30 at -04:00.
        entry(1, ts("2025-07-01T04:30:00Z"), 1.0),
        // 2025-06-30T23:30 at -04:00.
        entry(2, ts("2025-07-01T03:30:00Z"), 1.0),
        entry(3, ts("2025-07-10T12:00:00Z"), 1.0),
    ];

    let filtered = filter_entries(&entries, &Period::Monthly.into(), now, toronto());

    assert_eq!(ids(&filtered), vec![3, 1]);
}

#[test]
fn explicit_range_is_inclusive_on_both_ends() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        entry(1, ts("2025-07-01T12:00:00Z"), 1.0),
        entry(2, ts("2025-07-03T12:00:00Z"), 1.0),
        entry(3, ts("2025-07-05T12:00:00Z"), 1.0),
        entry(4, ts("2025-07-06T12:00:00Z"), 1.0),
    ];
    let range = DateRange::new(
        "2025-07-03".parse().expect("start"),
        "2025-07-05".parse().expect("end"),
    )
    .expect("range");

    let filtered = filter_entries(&entries, &range.into(), now, toronto());

    assert_eq!(ids(&filtered), vec![3, 2]);
}

#[test]
fn all_returns_everything_most_recent_first() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        entry(1, ts("2024-01-01T12:00:00Z"), 1.0),
        entry(2, ts("2025-07-03T12:00:00Z"), 0.0),
        entry(3, ts("2025-01-05T12:00:00Z"), 1.0),
    ];

    let filtered = filter_entries(&entries, &PeriodSelector::default(), now, toronto());

    assert_eq!(ids(&filtered), vec![2, 3, 1]);
}

#[test]
fn zero_amount_entry_is_counted_everywhere() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![entry(1, ts("2025-07-15T11:00:00Z"), 0.0)];

    let report = aggregate(&entries, &Period::All.into(), now, toronto());

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.totals.total_ml, 0.0);
    assert_eq!(report.totals.total_cost, 0.0);
    assert_eq!(report.daily.len(), 1);
    assert_eq!(report.daily[0].entry_count, 1);
    assert_eq!(report.vials.used, 0);
    assert_eq!(report.vials.total_entries, 1);
    assert_eq!(report.period, "all");
}

#[test]
fn four_entries_make_one_vial() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries: Vec<WasteEntry> = (1..=4)
        .map(|id| entry(id, now - Duration::minutes(id * 10), 2.0))
        .collect();

    let report = aggregate(&entries, &Period::All.into(), now, toronto());

    assert_eq!(report.totals.total_ml, 8.0);
    assert_eq!(report.totals.total_cost, 80.0);
    assert_eq!(report.vials.used, 1);
    assert_eq!(report.vials.cost, 200.0);
    assert_eq!(report.vials.total_entries, 4);
    assert_eq!(report.billed_total, 280.0);
}

#[test]
fn totals_are_scoped_to_the_period() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        entry(1, ts("2025-07-15T11:00:00Z"), 3.0),
        entry(2, ts("2025-06-01T11:00:00Z"), 5.0),
    ];

    let daily = aggregate(&entries, &Period::Daily.into(), now, toronto());
    let all = aggregate(&entries, &Period::All.into(), now, toronto());

    assert_eq!(daily.totals.total_ml, 3.0);
    assert_eq!(all.totals.total_ml, 8.0);
}

#[test]
fn aggregation_is_idempotent() {
    let now = ts("2025-07-15T12:00:00Z");
    let entries = vec![
        entry(1, ts("2025-07-15T11:00:00Z"), 0.1),
        entry(2, ts("2025-07-14T11:00:00Z"), 0.2),
        entry(3, ts("2025-07-10T11:00:00Z"), 0.7),
    ];

    let first = aggregate(&entries, &Period::Weekly.into(), now, toronto());
    let second = aggregate(&entries, &Period::Weekly.into(), now, toronto());

    assert_eq!(first, second);
    assert_eq!(
        first.totals.total_ml.to_bits(),
        second.totals.total_ml.to_bits()
    );
}

fn arb_entries() -> impl Strategy<Value = Vec<WasteEntry>> {
    let base = ts("2025-07-15T12:00:00Z");
    prop::collection::vec((0i64..60 * 86_400, 0u32..200), 0..64).prop_map(move |rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (age_secs, quarters))| {
                // Quarter-mL amounts keep every partial sum exact.
                entry(
                    index as i64 + 1,
                    base - Duration::seconds(age_secs),
                    f64::from(quarters) * 0.25,
                )
            })
            .collect()
    })
}

fn arb_period() -> impl Strategy<Value = Period> {
    prop_oneof![
        Just(Period::Daily),
        Just(Period::Weekly),
        Just(Period::Monthly),
        Just(Period::All),
    ]
}

proptest! {
    #[test]
    fn buckets_partition_the_filtered_entries(
        entries in arb_entries(),
        period in arb_period(),
        offset_minutes in -720i32..=840,
    ) {
        let now = ts("2025-07-15T12:00:00Z");
        let offset = ReportingOffset::from_minutes(offset_minutes).expect("offset");
        let filtered = filter_entries(&entries, &period.into(), now, offset);
        let totals = period_totals(&filtered);
        let buckets = daily_buckets(&filtered, offset);

        let bucket_ml: f64 = buckets.iter().map(|bucket| bucket.total_ml).sum();
        let bucket_cost: f64 = buckets.iter().map(|bucket| bucket.total_cost).sum();
        let bucket_count: u64 = buckets.iter().map(|bucket| bucket.entry_count).sum();
        prop_assert_eq!(bucket_ml, totals.total_ml);
        prop_assert_eq!(bucket_cost, totals.total_cost);
        prop_assert_eq!(bucket_count, filtered.len() as u64);

        let mut bucket_ids: Vec<i64> = buckets
            .iter()
            .flat_map(|bucket| bucket.entries.iter().map(|entry| entry.id))
            .collect();
        bucket_ids.sort_unstable();
        let mut filtered_ids = ids(&filtered);
        filtered_ids.sort_unstable();
        prop_assert_eq!(bucket_ids, filtered_ids);

        for bucket in &buckets {
            prop_assert_eq!(bucket.entry_count, bucket.entries.len() as u64);
            for entry in &bucket.entries {
                prop_assert_eq!(entry.local_date(offset), bucket.date);
            }
        }
    }

    #[test]
    fn vials_are_floor_of_count_over_four(count in 0usize..10_000) {
        let usage = vial_usage(count);
        prop_assert_eq!(usage.used, (count / 4) as u64);
        prop_assert_eq!(usage.total_entries, count as u64);
        prop_assert_eq!(usage.cost, usage.used as f64 * 200.0);
        prop_assert_eq!(usage.progress(), (count % 4) as u64);
        if count < 4 {
            prop_assert_eq!(usage.used, 0);
        }
    }
}
