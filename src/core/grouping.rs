use crate::domain::model::{DisplayMode, RosterEntry};

/// Entries in emission order for the chosen display mode. Flat keeps the
/// roster order untouched; ByGrade concatenates the grade sections.
pub fn ordered_entries(roster: &[RosterEntry], mode: DisplayMode) -> Vec<RosterEntry> {
    match mode {
        DisplayMode::Flat => roster.to_vec(),
        DisplayMode::ByGrade => grade_sections(roster)
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect(),
    }
}

/// Stable partition of the roster by grade: distinct grades in lexicographic
/// string order (not numeric, not custom rank), each section keeping the
/// original relative order of its entries.
pub fn grade_sections(roster: &[RosterEntry]) -> Vec<(String, Vec<RosterEntry>)> {
    let mut grades: Vec<String> = Vec::new();
    for entry in roster {
        if !grades.contains(&entry.grade) {
            grades.push(entry.grade.clone());
        }
    }
    grades.sort();

    grades
        .into_iter()
        .map(|grade| {
            let entries = roster
                .iter()
                .filter(|entry| entry.grade == grade)
                .cloned()
                .collect();
            (grade, entries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, grade: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            grade: grade.to_string(),
            requested: 1,
        }
    }

    #[test]
    fn flat_mode_keeps_roster_order() {
        let roster = vec![entry("Ana", "G2"), entry("Bo", "G1")];
        let ordered = ordered_entries(&roster, DisplayMode::Flat);
        assert_eq!(ordered, roster);
    }

    #[test]
    fn by_grade_sorts_grades_lexicographically() {
        let roster = vec![entry("Ana", "G2"), entry("Bo", "G1")];
        let ordered = ordered_entries(&roster, DisplayMode::ByGrade);
        assert_eq!(ordered[0].name, "Bo");
        assert_eq!(ordered[1].name, "Ana");
    }

    #[test]
    fn grade_order_is_string_order_not_numeric() {
        let roster = vec![entry("a", "Y10"), entry("b", "Y2")];
        let sections = grade_sections(&roster);
        // "Y10" < "Y2" as strings.
        assert_eq!(sections[0].0, "Y10");
        assert_eq!(sections[1].0, "Y2");
    }

    #[test]
    fn partition_is_stable_within_each_grade() {
        let roster = vec![
            entry("Ana", "G1"),
            entry("Bo", "G2"),
            entry("Cy", "G1"),
            entry("Di", "G2"),
        ];
        let ordered = ordered_entries(&roster, DisplayMode::ByGrade);
        let names: Vec<&str> = ordered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Cy", "Bo", "Di"]);
    }

    #[test]
    fn partition_recovers_a_permutation_of_the_roster() {
        let roster = vec![
            entry("Ana", "G2"),
            entry("Bo", "G1"),
            entry("Ana", "G2"),
            entry("Cy", "G3"),
        ];
        let ordered = ordered_entries(&roster, DisplayMode::ByGrade);
        assert_eq!(ordered.len(), roster.len());
        for original in &roster {
            let in_roster = roster.iter().filter(|e| *e == original).count();
            let in_ordered = ordered.iter().filter(|e| *e == original).count();
            assert_eq!(in_roster, in_ordered);
        }
    }

    #[test]
    fn empty_roster_yields_no_sections() {
        assert!(grade_sections(&[]).is_empty());
        assert!(ordered_entries(&[], DisplayMode::ByGrade).is_empty());
    }
}
