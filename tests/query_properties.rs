//! Property tests for the pure query pipeline: filter membership and order,
//! sort duality, pagination bounds, and idempotence.

use proptest::prelude::*;

use lexidash::prelude::*;

fn arb_record() -> impl Strategy<Value = Record> {
    ("[a-zA-Z]{1,12}", 0u64..=1_000_000).prop_map(|(word, count)| Record::new(word, count))
}

fn arb_dataset() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(arb_record(), 0..200)
}

proptest! {
    #[test]
    fn filter_members_all_match_term(raw in arb_dataset(), term in "[a-zA-Z]{0,4}") {
        let filtered = filter_records(&raw, &term);
        let needle = term.to_lowercase();
        for record in &filtered {
            prop_assert!(
                record.word.to_lowercase().contains(&needle),
                "{:?} does not contain {:?}", record.word, term
            );
        }
    }

    #[test]
    fn filter_with_empty_term_is_identity(raw in arb_dataset()) {
        prop_assert_eq!(filter_records(&raw, ""), raw);
    }

    #[test]
    fn filter_preserves_relative_order(raw in arb_dataset(), term in "[a-z]{1,3}") {
        let filtered = filter_records(&raw, &term);
        // Every filtered record appears in raw, in the same relative order.
        let mut cursor = raw.iter();
        for record in &filtered {
            prop_assert!(
                cursor.any(|r| r == record),
                "{:?} missing or out of order", record
            );
        }
    }

    #[test]
    fn sort_desc_is_reverse_of_asc_in_count_order(raw in arb_dataset()) {
        let mut asc = raw.clone();
        sort_records(&mut asc, SortKey::new(SortField::Count, SortDirection::Asc));
        let mut desc = raw.clone();
        sort_records(&mut desc, SortKey::new(SortField::Count, SortDirection::Desc));
        let asc_counts: Vec<u64> = asc.iter().map(|r| r.count).collect();
        let mut reversed: Vec<u64> = desc.iter().map(|r| r.count).collect();
        reversed.reverse();
        prop_assert_eq!(asc_counts, reversed);
    }

    #[test]
    fn sort_preserves_membership(raw in arb_dataset(), direction in prop_oneof![
        Just(SortDirection::Asc), Just(SortDirection::Desc)
    ]) {
        let mut sorted = raw.clone();
        sort_records(&mut sorted, SortKey::new(SortField::Word, direction));
        let mut a = raw.clone();
        let mut b = sorted;
        a.sort_by(|x, y| x.word.cmp(&y.word).then(x.count.cmp(&y.count)));
        b.sort_by(|x, y| x.word.cmp(&y.word).then(x.count.cmp(&y.count)));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn paginate_never_leaves_bounds(
        raw in arb_dataset(),
        page in 0usize..1000,
        page_size in 1usize..100,
    ) {
        let result = paginate(&raw, page, page_size);
        prop_assert!(result.page >= 1);
        prop_assert!(result.page <= result.total_pages);
        prop_assert!(result.items.len() <= page_size);
        prop_assert!(result.total_pages >= 1);
    }

    #[test]
    fn paginate_empty_view_is_single_empty_page(page in 0usize..1000) {
        let result = paginate(&[], page, 50);
        prop_assert!(result.items.is_empty());
        prop_assert_eq!(result.page, 1);
        prop_assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn pages_tile_the_view_without_overlap(raw in arb_dataset(), page_size in 1usize..40) {
        let total = paginate(&raw, 1, page_size).total_pages;
        let mut reassembled = Vec::new();
        for page in 1..=total {
            reassembled.extend(paginate(&raw, page, page_size).items);
        }
        prop_assert_eq!(reassembled, raw);
    }

    #[test]
    fn filter_then_sort_is_idempotent(raw in arb_dataset(), term in "[a-z]{0,3}") {
        let key = SortKey::new(SortField::Count, SortDirection::Desc);
        let run = |input: &[Record]| {
            let mut view = filter_records(input, &term);
            sort_records(&mut view, key);
            view
        };
        let first = run(&raw);
        let second = run(&raw);
        prop_assert_eq!(&first, &second);
        // And no hidden mutation of the input.
        let again = run(&raw);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn summarize_totals_are_consistent(raw in arb_dataset()) {
        let summary = summarize(&raw);
        prop_assert_eq!(summary.total_records, raw.len());
        prop_assert!(summary.unique_words <= summary.total_records);
        let expected: u128 = raw.iter().map(|r| u128::from(r.count)).sum();
        prop_assert_eq!(summary.total_occurrences, expected);
    }

    #[test]
    fn series_reflects_raw_prefix(raw in arb_dataset()) {
        let series = build_series(&raw, 20, ChartMode::RankedBar);
        let expected_len = raw.len().min(20);
        prop_assert_eq!(series.len(), expected_len);
        for (i, record) in raw.iter().take(expected_len).enumerate() {
            // Reversed layout: raw[i] lands at the mirrored index.
            let mirrored = expected_len - 1 - i;
            prop_assert_eq!(&series.categories[mirrored], &record.word);
            prop_assert_eq!(series.values[mirrored], record.count);
        }
    }

    #[test]
    fn cloud_mode_always_degrades_to_capped_bar(raw in arb_dataset(), limit in prop_oneof![
        Just(20usize), Just(50usize)
    ]) {
        let cloud = build_series(&raw, limit, ChartMode::RankedCloud);
        let bar = build_series(&raw, limit.min(20), ChartMode::RankedBar);
        prop_assert!(cloud.degraded);
        prop_assert_eq!(cloud.display, ChartMode::RankedBar);
        prop_assert_eq!(cloud.categories, bar.categories);
        prop_assert_eq!(cloud.values, bar.values);
    }
}
