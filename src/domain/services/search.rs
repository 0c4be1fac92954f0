use crate::domain::models::booking::BookingWithConcert;
use crate::domain::models::status::BookingStatus;

/// Admin list-view filter. The three dimensions combine with AND
/// semantics; within the substring query, a hit on any one field passes.
#[derive(Debug, Default, Clone)]
pub struct BookingFilter {
    pub query: Option<String>,
    pub status: Option<BookingStatus>,
    pub concert_id: Option<String>,
}

impl BookingFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.status.is_none() && self.concert_id.is_none()
    }

    pub fn matches(&self, item: &BookingWithConcert) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = contains(&item.booking.phone, &needle)
                || opt_contains(item.booking.ticket_name.as_deref(), &needle)
                || contains(&item.concert.title, &needle)
                || opt_contains(item.booking.tracking_number.as_deref(), &needle);
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.booking.status != status {
                return false;
            }
        }

        if let Some(concert_id) = &self.concert_id {
            if item.booking.concert_id != *concert_id {
                return false;
            }
        }

        true
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn opt_contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains(h, needle))
}
