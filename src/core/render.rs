use crate::core::grouping::ordered_entries;
use crate::core::matching::match_serial;
use crate::domain::model::{
    Branding, DisplayMode, IssuedTicket, MediaToggles, RenderPass, RenderedUnit, RosterEntry,
};

/// Expand every roster entry into its requested slots, one card per slot, in
/// the emission order of the chosen display mode. The region and the
/// resolved branding are uniform across the pass.
///
/// Pure: identical inputs (including issued-ticket order) produce an
/// identical card sequence. The number of cards always equals the sum of
/// requested counts; a shortfall of issued tickets yields placeholders,
/// never an error.
pub fn render(
    roster: &[RosterEntry],
    issued: &[IssuedTicket],
    mode: DisplayMode,
    region: &str,
    toggles: &MediaToggles,
) -> RenderPass {
    let mut units = Vec::with_capacity(
        roster
            .iter()
            .map(|entry| entry.requested as usize)
            .sum(),
    );

    for entry in ordered_entries(roster, mode) {
        let serial = match_serial(&entry, issued);
        for _slot in 0..entry.requested {
            units.push(RenderedUnit {
                name: entry.name.clone(),
                grade: entry.grade.clone(),
                region: region.to_string(),
                serial: serial.clone(),
            });
        }
    }

    RenderPass {
        units,
        branding: Branding::from(toggles),
    }
}
