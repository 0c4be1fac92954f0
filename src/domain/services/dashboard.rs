use crate::domain::models::booking::BookingWithConcert;
use crate::domain::models::concert::Concert;
use crate::domain::models::status::{BookingStatus, ConcertStatus};
use serde::Serialize;

/// How many entries the dashboard shows per "recent" list.
pub const RECENT_LIMIT: usize = 5;

/// Counters recomputed on every dashboard request, never cached.
/// Field names follow the original API contract.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_concerts: usize,
    pub total_customers: usize,
    pub upcoming_concerts: usize,
    pub completed_bookings: usize,
}

pub fn compute_stats(concerts: &[Concert], bookings: &[BookingWithConcert]) -> DashboardStats {
    DashboardStats {
        total_concerts: concerts.len(),
        total_customers: bookings.len(),
        upcoming_concerts: concerts
            .iter()
            .filter(|c| c.status == ConcertStatus::Upcoming)
            .count(),
        completed_bookings: bookings
            .iter()
            .filter(|b| b.booking.status == BookingStatus::Completed)
            .count(),
    }
}

/// First RECENT_LIMIT items of an already-ordered list; no independent
/// recency sort beyond the list's own ordering.
pub fn recent_slice<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().take(RECENT_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{Booking, NewBookingParams};
    use crate::domain::models::concert::NewConcertParams;
    use chrono::Utc;

    fn concert(status: ConcertStatus) -> Concert {
        Concert::new(NewConcertParams {
            title: "Show".to_string(),
            event_date: Utc::now(),
            event_url: None,
            description: None,
            service_fee: None,
            image_url: None,
            status: Some(status),
        })
    }

    fn booking(status: BookingStatus, concert: &Concert) -> BookingWithConcert {
        let mut b = Booking::new(NewBookingParams {
            concert_id: concert.id.clone(),
            phone: "0812345678".to_string(),
            x: None,
            round: None,
            ticket_count: None,
            main_zone: None,
            backup_zone: None,
            use_customer_account: None,
            username: None,
            password: None,
            kplus_number: None,
            delivery_type: None,
            ticket_name: None,
            price: None,
            status: None,
            notes: None,
        });
        b.status = status;
        BookingWithConcert { booking: b, concert: concert.clone() }
    }

    #[test]
    fn counts_upcoming_and_completed() {
        let concerts = vec![
            concert(ConcertStatus::Upcoming),
            concert(ConcertStatus::Upcoming),
            concert(ConcertStatus::Cancelled),
        ];
        let bookings = vec![
            booking(BookingStatus::Completed, &concerts[0]),
            booking(BookingStatus::Pending, &concerts[0]),
            booking(BookingStatus::Failed, &concerts[1]),
        ];

        let stats = compute_stats(&concerts, &bookings);
        assert_eq!(
            stats,
            DashboardStats {
                total_concerts: 3,
                total_customers: 3,
                upcoming_concerts: 2,
                completed_bookings: 1,
            }
        );
    }

    #[test]
    fn recent_slice_preserves_order_and_caps_at_limit() {
        let items: Vec<i32> = (0..8).collect();
        assert_eq!(recent_slice(&items), vec![0, 1, 2, 3, 4]);

        let short = vec![1, 2];
        assert_eq!(recent_slice(&short), vec![1, 2]);
    }
}
