use crate::domain::model::{IssuedTicket, RosterEntry, Serial};

/// Resolve the serial shown on every slot of `entry`: the first issued
/// ticket whose (name, grade) equals the entry's, in insertion order.
///
/// The slot index does not advance through duplicate records, so an entry
/// requesting several tickets repeats one serial on all of its slots. This
/// reproduces the deployed system's matching exactly and must stay that way
/// for compatibility; see DESIGN.md for the consume-per-slot alternative
/// that was deliberately not adopted.
pub fn match_serial(entry: &RosterEntry, issued: &[IssuedTicket]) -> Serial {
    issued
        .iter()
        .find(|ticket| ticket.name == entry.name && ticket.grade == entry.grade)
        .map(|ticket| Serial::Issued(ticket.serial.clone()))
        .unwrap_or(Serial::Placeholder)
}
