use genoguide_core::*;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

fn chromosome_name() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..40).prop_map(|n| format!("chr{}", n)),
        prop::sample::select(vec!["chrX", "chrY", "chrM", "chrUn"]).prop_map(String::from),
        ((1u32..23), "[A-Z]{2}[0-9]{4}").prop_map(|(n, tag)| format!("chr{}_{}_random", n, tag)),
        "[a-zA-Z0-9_]{1,8}",
    ]
}

fn chromosome_set() -> impl Strategy<Value = Vec<Chromosome>> {
    prop::collection::btree_map(chromosome_name(), 1u64..300_000_000, 0..30).prop_map(
        |by_name: BTreeMap<String, u64>| {
            by_name
                .into_iter()
                .enumerate()
                .map(|(i, (name, length))| Chromosome::new(i as i64, name, length))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn filtering_keeps_only_primary_input_entries(chromosomes in chromosome_set()) {
        let ordered = primary_ordered(&chromosomes);
        for c in &ordered {
            prop_assert!(!c.name.contains('_'));
            prop_assert!(chromosomes.contains(c));
        }
        let expected = chromosomes.iter().filter(|c| is_primary(&c.name)).count();
        prop_assert_eq!(ordered.len(), expected);
    }

    #[test]
    fn ordering_is_sorted_and_numeric_first(chromosomes in chromosome_set()) {
        let ordered = primary_ordered(&chromosomes);
        for pair in ordered.windows(2) {
            prop_assert_eq!(
                compare_chromosome_names(&pair[0].name, &pair[1].name),
                Ordering::Less
            );
        }

        let numeric: Vec<bool> = ordered
            .iter()
            .map(|c| numeric_label(chromosome_label(&c.name)).is_some())
            .collect();
        // once a non-numeric name shows up, no numeric one follows
        if let Some(first_text) = numeric.iter().position(|n| !n) {
            prop_assert!(numeric[first_text..].iter().all(|n| !n));
        }
    }

    #[test]
    fn scaling_is_bounded_and_peaks_at_100(chromosomes in chromosome_set()) {
        match karyotype_layout(&chromosomes) {
            Ok(layout) => {
                prop_assert!(layout.iter().all(|r| (0.0..=100.0).contains(&r.scale)));
                prop_assert!(layout.iter().any(|r| r.scale == 100.0));
                let names: HashSet<&str> = layout.iter().map(|r| r.name.as_str()).collect();
                prop_assert_eq!(names.len(), layout.len());
            }
            Err(e) => {
                prop_assert_eq!(e, LayoutError::EmptyInputSet);
                prop_assert!(primary_ordered(&chromosomes).is_empty());
            }
        }
    }

    #[test]
    fn layout_is_idempotent(chromosomes in chromosome_set()) {
        if let Ok(first) = karyotype_layout(&chromosomes) {
            let again: Vec<Chromosome> = first.iter().map(Chromosome::from).collect();
            prop_assert_eq!(primary_ordered(&again), again.clone());
            prop_assert_eq!(karyotype_layout(&again).unwrap(), first);
        }
    }

    #[test]
    fn markers_stay_on_the_bar(
        length in 1u64..300_000_000,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let start = ((a.min(b)) * length as f64) as u64;
        let end = (((a.max(b)) * length as f64) as u64).max(start);
        let marker = map_span(start, end, length, &MarkerParams::default()).unwrap();

        prop_assert!(marker.start_percent >= 0.0 && marker.start_percent <= 100.0);
        prop_assert!(marker.width_percent >= DEFAULT_MIN_MARKER_WIDTH_PERCENT);
        prop_assert!(marker.width_percent >= marker.raw_width_percent);
        prop_assert!(marker.center_percent >= marker.start_percent);
        prop_assert!(marker.center_percent <= marker.start_percent + marker.raw_width_percent);
    }

    #[test]
    fn out_of_range_spans_are_rejected(length in 1u64..1_000_000, over in 1u64..1_000) {
        let result = map_span(0, length + over, length, &MarkerParams::default());
        let is_invalid = matches!(result, Err(LayoutError::InvalidCoordinate { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn composition_percentages_never_nan(counts in prop::collection::vec(0u64..1_000_000, 5)) {
        let composition = BaseComposition::from_counts(
            ["A", "C", "G", "T", "N"].iter().copied().zip(counts.iter().copied()),
        );
        prop_assert_eq!(composition.total, counts.iter().sum::<u64>());
        for share in composition.shares() {
            prop_assert!(!share.percent.is_nan());
            prop_assert!((0.0..=100.0).contains(&share.percent));
        }
        if composition.total == 0 {
            prop_assert!(composition.shares().iter().all(|s| s.percent == 0.0));
        }
    }
}
