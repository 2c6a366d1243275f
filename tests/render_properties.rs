//! Behavioral properties of the pure engine, exercised through the public API.

use raffle_press::core::grouping::ordered_entries;
use raffle_press::core::paginate::{paginate, PAGE_CAPACITY};
use raffle_press::core::render::render;
use raffle_press::core::roster::parse_roster;
use raffle_press::domain::model::{
    DisplayMode, IssuedTicket, MediaToggles, RenderedUnit, Serial,
};

fn ticket(serial: &str, name: &str, grade: &str) -> IssuedTicket {
    IssuedTicket {
        serial: serial.to_string(),
        name: name.to_string(),
        grade: grade.to_string(),
        region: "SK".to_string(),
    }
}

#[test]
fn conservation_units_equal_sum_of_requested_counts() {
    let roster = parse_roster(&[
        "Ana,G1,2", "Bo,G2,0", "Cy,G1,5", "Di,G3,not-a-number", "Ana,G1,1",
    ]);
    let expected: u32 = roster.iter().map(|e| e.requested).sum();

    for mode in [DisplayMode::Flat, DisplayMode::ByGrade] {
        let pass = render(&roster, &[], mode, "SK", &MediaToggles::default());
        assert_eq!(pass.units.len(), expected as usize);
    }
}

#[test]
fn determinism_identical_inputs_give_identical_output() {
    let roster = parse_roster(&["Ana,G1,2", "Bo,G2,3"]);
    let issued = vec![ticket("SK-002", "Bo", "G2"), ticket("SK-001", "Ana", "G1")];
    let toggles = MediaToggles {
        emblem_image: Some("logo.png".to_string()),
        background_image: None,
    };

    let first = render(&roster, &issued, DisplayMode::ByGrade, "SK", &toggles);
    let second = render(&roster, &issued, DisplayMode::ByGrade, "SK", &toggles);
    assert_eq!(first, second);

    assert_eq!(
        paginate(&first.units, PAGE_CAPACITY),
        paginate(&second.units, PAGE_CAPACITY)
    );
}

#[test]
fn grouping_is_a_stable_partition_sorted_by_grade() {
    let roster = parse_roster(&[
        "Ana,G2,1", "Bo,G1,1", "Cy,G2,1", "Di,G1,1", "Ed,G3,1",
    ]);
    let ordered = ordered_entries(&roster, DisplayMode::ByGrade);

    // Grades appear in lexicographic order.
    let grades: Vec<&str> = ordered.iter().map(|e| e.grade.as_str()).collect();
    let mut sorted = grades.clone();
    sorted.sort();
    assert_eq!(grades, sorted);

    // Stable within each grade, and a permutation of the original.
    let names: Vec<&str> = ordered.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Di", "Ana", "Cy", "Ed"]);
    assert_eq!(ordered.len(), roster.len());
    for entry in &roster {
        assert!(ordered.contains(entry));
    }
}

#[test]
fn matching_is_first_match_not_per_slot() {
    let roster = parse_roster(&["Ana,G1,3"]);
    let issued = vec![
        ticket("SK-001", "Ana", "G1"),
        ticket("SK-002", "Ana", "G1"),
        ticket("SK-003", "Ana", "G1"),
    ];

    let pass = render(&roster, &issued, DisplayMode::Flat, "SK", &MediaToggles::default());
    assert_eq!(pass.units.len(), 3);
    // Duplicates are never consumed: every slot carries the first serial.
    for unit in &pass.units {
        assert_eq!(unit.serial, Serial::Issued("SK-001".to_string()));
    }
}

#[test]
fn pagination_is_exact_for_all_lengths() {
    let make_units = |len: usize| -> Vec<RenderedUnit> {
        (0..len)
            .map(|i| RenderedUnit {
                name: format!("P{i}"),
                grade: "G1".to_string(),
                region: "SK".to_string(),
                serial: Serial::Placeholder,
            })
            .collect()
    };

    for len in 0..40usize {
        let units = make_units(len);
        let pages = paginate(&units, PAGE_CAPACITY);
        assert_eq!(pages.len(), len.div_ceil(PAGE_CAPACITY));
        if let Some((last, full)) = pages.split_last() {
            for page in full {
                assert_eq!(page.units.len(), PAGE_CAPACITY);
            }
            assert!(last.units.len() <= PAGE_CAPACITY);
            assert!(!last.units.is_empty());
        }
        let recovered: Vec<RenderedUnit> = pages.into_iter().flat_map(|p| p.units).collect();
        assert_eq!(recovered, units);
    }
}

#[test]
fn scenario_unissued_roster_renders_placeholders() {
    let roster = parse_roster(&["Ana,G1,2"]);
    let pass = render(&roster, &[], DisplayMode::Flat, "SK", &MediaToggles::default());
    assert_eq!(pass.units.len(), 2);
    assert!(pass.units.iter().all(|u| u.serial == Serial::Placeholder));
}

#[test]
fn scenario_single_issued_serial_repeats_across_slots() {
    let roster = parse_roster(&["Ana,G1,2"]);
    let issued = vec![ticket("SK-001", "Ana", "G1")];
    let pass = render(&roster, &issued, DisplayMode::Flat, "SK", &MediaToggles::default());
    assert!(pass
        .units
        .iter()
        .all(|u| u.serial == Serial::Issued("SK-001".to_string())));
}

#[test]
fn scenario_grouped_emission_order() {
    let roster = parse_roster(&["Ana,G2,1", "Bo,G1,1"]);
    let ordered = ordered_entries(&roster, DisplayMode::ByGrade);
    assert_eq!(ordered[0].name, "Bo");
    assert_eq!(ordered[1].name, "Ana");
}

#[test]
fn scenario_empty_roster_yields_nothing() {
    let pass = render(&[], &[], DisplayMode::Flat, "SK", &MediaToggles::default());
    assert!(pass.units.is_empty());
    assert!(paginate(&pass.units, PAGE_CAPACITY).is_empty());
}
