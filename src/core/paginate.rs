use crate::domain::model::{Page, RenderedUnit};

/// Cards per printable page in the A4 layout.
pub const PAGE_CAPACITY: usize = 12;

/// Slice the ordered card sequence into consecutive pages of at most
/// `capacity` cards; the last page may be short. Zero cards (or a zero
/// capacity) yields zero pages. Never reorders or drops cards.
pub fn paginate(units: &[RenderedUnit], capacity: usize) -> Vec<Page> {
    if capacity == 0 {
        return Vec::new();
    }
    units
        .chunks(capacity)
        .map(|chunk| Page {
            units: chunk.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Serial;

    fn unit(n: usize) -> RenderedUnit {
        RenderedUnit {
            name: format!("Person {n}"),
            grade: "G1".to_string(),
            region: "SK".to_string(),
            serial: Serial::Placeholder,
        }
    }

    fn units(count: usize) -> Vec<RenderedUnit> {
        (0..count).map(unit).collect()
    }

    #[test]
    fn thirteen_units_make_two_pages() {
        let pages = paginate(&units(13), PAGE_CAPACITY);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].units.len(), 12);
        assert_eq!(pages[1].units.len(), 1);
    }

    #[test]
    fn page_count_is_ceiling_division() {
        for len in [0usize, 1, 11, 12, 24, 25, 100] {
            let pages = paginate(&units(len), PAGE_CAPACITY);
            assert_eq!(pages.len(), len.div_ceil(PAGE_CAPACITY));
        }
    }

    #[test]
    fn concatenated_pages_recover_the_original_sequence() {
        let all = units(29);
        let pages = paginate(&all, PAGE_CAPACITY);
        let recovered: Vec<RenderedUnit> =
            pages.into_iter().flat_map(|page| page.units).collect();
        assert_eq!(recovered, all);
    }

    #[test]
    fn all_pages_except_the_last_are_full() {
        let pages = paginate(&units(30), PAGE_CAPACITY);
        for page in &pages[..pages.len() - 1] {
            assert_eq!(page.units.len(), PAGE_CAPACITY);
        }
        assert_eq!(pages.last().unwrap().units.len(), 6);
    }

    #[test]
    fn zero_units_yield_zero_pages() {
        assert!(paginate(&[], PAGE_CAPACITY).is_empty());
    }

    #[test]
    fn zero_capacity_degrades_to_zero_pages() {
        assert!(paginate(&units(5), 0).is_empty());
    }
}
