//! Aggregation engine
//!
//! Pure transforms from the full RSVP collection to the organizer view
//! models. Nothing here touches a store; callers fetch `all_by_name` first
//! and bail out on a store error before any aggregate is built.

mod food;

pub use food::{FoodTally, tally_food};

use shared::models::Rsvp;

/// Attendees and declines, each in input order
#[derive(Debug, Default)]
pub struct Attendance<'a> {
    pub attendees: Vec<&'a Rsvp>,
    pub declines: Vec<&'a Rsvp>,
}

/// Split records into attendees and declines.
///
/// A record is a decline iff `person.isAttending` is exactly `false`; a
/// missing `person` or a missing flag counts as attending. The two halves
/// are disjoint and together hold every input record.
pub fn partition_attendance(rsvps: &[Rsvp]) -> Attendance<'_> {
    let (attendees, declines): (Vec<&Rsvp>, Vec<&Rsvp>) =
        rsvps.iter().partition(|r| r.is_attending());
    Attendance {
        attendees,
        declines,
    }
}

/// Records with `volunteer.before` or `volunteer.during` set
pub fn filter_volunteers(rsvps: &[Rsvp]) -> Vec<&Rsvp> {
    rsvps.iter().filter(|r| r.is_volunteer()).collect()
}
