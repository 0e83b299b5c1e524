//! Pure filtering and sorting over a collection snapshot.
//!
//! Nothing here touches storage: the store hands a full snapshot to
//! [`select`] and renders what comes back. The filter is a conjunction of
//! three independent sub-filters (status, free-text, date range); the sort is
//! stable, so ties keep the order the filtered sequence presented them in.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::ticket::{Status, Ticket};

/// Status sub-filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only records with exactly this status pass.
    Only(Status),
}

/// The field a view is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Performance date; unparseable dates sort as if infinitely far away.
    #[default]
    EventDate,
    /// Record creation time.
    CreatedAt,
    /// Lifecycle status, by its total order.
    Status,
    /// Agreed amount; absent compares as zero.
    Price,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Options for one list view. The defaults are the UI's initial view:
/// everything, sorted by performance date ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Status sub-filter.
    pub status: StatusFilter,
    /// Case-insensitive substring query; empty matches everything.
    pub search: String,
    /// Inclusive lower bound on `eventDate` (`YYYY-MM-DD`); empty means
    /// unbounded.
    pub date_from: String,
    /// Inclusive upper bound on `eventDate`; empty means unbounded.
    pub date_to: String,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

/// Whether a record passes every active sub-filter.
#[must_use]
pub fn matches(ticket: &Ticket, options: &ListOptions) -> bool {
    status_matches(ticket, options.status)
        && text_matches(ticket, &options.search)
        && date_matches(ticket, &options.date_from, &options.date_to)
}

fn status_matches(ticket: &Ticket, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => ticket.status == status,
    }
}

fn text_matches(ticket: &Ticket, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    searchable_fields(ticket)
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

/// The fixed field set the free-text filter searches.
fn searchable_fields(ticket: &Ticket) -> [Option<&str>; 7] {
    [
        Some(ticket.tour_name.as_str()),
        ticket.performer_name.as_deref(),
        Some(ticket.venue.as_str()),
        ticket.partner.as_deref(),
        ticket.name_holder.as_deref(),
        ticket.memo.as_deref(),
        ticket.seat_info.as_deref(),
    ]
}

// Lexical comparison is sound because event dates are `YYYY-MM-DD`.
fn date_matches(ticket: &Ticket, from: &str, to: &str) -> bool {
    let date = ticket.event_date.as_str();
    (from.is_empty() || date >= from) && (to.is_empty() || date <= to)
}

/// Stable-sort records by one key.
pub fn sort_tickets(tickets: &mut [Ticket], key: SortKey, order: SortOrder) {
    tickets.sort_by(|a, b| {
        let ordering = match key {
            SortKey::EventDate => cmp_event_date(&a.event_date, &b.event_date),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::Price => a.price.unwrap_or(0.0).total_cmp(&b.price.unwrap_or(0.0)),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// The filtered, sorted view of a snapshot.
#[must_use]
pub fn select(tickets: &[Ticket], options: &ListOptions) -> Vec<Ticket> {
    let mut view: Vec<Ticket> = tickets
        .iter()
        .filter(|ticket| matches(ticket, options))
        .cloned()
        .collect();
    sort_tickets(&mut view, options.sort_by, options.sort_order);
    view
}

/// Parse an event date for sorting: plain `YYYY-MM-DD` first, full RFC 3339
/// second. `None` means unparseable.
fn event_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

// Unparseable dates compare as +infinity: last ascending, first descending.
fn cmp_event_date(a: &str, b: &str) -> Ordering {
    match (event_timestamp(a), event_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Count records per status across a snapshot.
#[must_use]
pub fn status_counts(tickets: &[Ticket]) -> BTreeMap<Status, usize> {
    let mut counts = BTreeMap::new();
    for ticket in tickets {
        *counts.entry(ticket.status).or_insert(0) += 1;
    }
    counts
}

/// Distinct tour names, first-seen order. Feeds the form's suggestions.
#[must_use]
pub fn tour_names(tickets: &[Ticket]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for ticket in tickets {
        if !ticket.tour_name.is_empty() && !names.contains(&ticket.tour_name) {
            names.push(ticket.tour_name.clone());
        }
    }
    names
}

/// Distinct name holders, first-seen order. Feeds the form's suggestions.
#[must_use]
pub fn name_holders(tickets: &[Ticket]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for ticket in tickets {
        if let Some(holder) = &ticket.name_holder {
            if !holder.is_empty() && !names.contains(holder) {
                names.push(holder.clone());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketDraft;

    fn ticket(tour: &str, date: &str, status: Status) -> Ticket {
        Ticket::new(TicketDraft {
            status,
            ..TicketDraft::new(tour, date, "Dome")
        })
    }

    #[test]
    fn status_filter_in_isolation() {
        let t = ticket("Tour", "2026-05-10", Status::Confirmed);
        let mut options = ListOptions::default();
        assert!(matches(&t, &options));
        options.status = StatusFilter::Only(Status::Confirmed);
        assert!(matches(&t, &options));
        options.status = StatusFilter::Only(Status::Paid);
        assert!(!matches(&t, &options));
    }

    #[test]
    fn text_filter_searches_the_fixed_field_set() {
        let t = Ticket::new(TicketDraft {
            partner: Some("Tanaka".into()),
            memo: Some("meet at gate 20".into()),
            seat_info: Some("Arena B5".into()),
            ..TicketDraft::new("VVS Tour", "2026-05-10", "Tokyo Dome")
        });
        let by = |search: &str| ListOptions {
            search: search.into(),
            ..ListOptions::default()
        };
        assert!(matches(&t, &by("vvs")));
        assert!(matches(&t, &by("TANAKA")));
        assert!(matches(&t, &by("gate 20")));
        assert!(matches(&t, &by("arena")));
        assert!(matches(&t, &by("tokyo")));
        assert!(!matches(&t, &by("nagoya")));
        // empty query matches everything
        assert!(matches(&t, &by("")));
    }

    #[test]
    fn date_range_boundaries_are_inclusive() {
        let t = ticket("Tour", "2026-05-10", Status::Recruiting);
        let options = ListOptions {
            date_from: "2026-05-10".into(),
            date_to: "2026-05-10".into(),
            ..ListOptions::default()
        };
        assert!(matches(&t, &options));

        let before = ListOptions {
            date_from: "2026-05-11".into(),
            ..ListOptions::default()
        };
        assert!(!matches(&t, &before));

        let after = ListOptions {
            date_to: "2026-05-09".into(),
            ..ListOptions::default()
        };
        assert!(!matches(&t, &after));
    }

    #[test]
    fn filters_conjoin() {
        let t = Ticket::new(TicketDraft {
            status: Status::Confirmed,
            ..TicketDraft::new("VVS Tour", "2026-05-10", "Tokyo Dome")
        });
        let options = ListOptions {
            status: StatusFilter::Only(Status::Confirmed),
            search: "vvs".into(),
            date_from: "2026-05-01".into(),
            date_to: "2026-05-31".into(),
            ..ListOptions::default()
        };
        assert!(matches(&t, &options));

        // one failing sub-filter fails the conjunction
        let wrong_status = ListOptions {
            status: StatusFilter::Only(Status::Paid),
            ..options.clone()
        };
        assert!(!matches(&t, &wrong_status));
        let wrong_text = ListOptions {
            search: "rays".into(),
            ..options
        };
        assert!(!matches(&t, &wrong_text));
    }

    #[test]
    fn sorts_status_by_total_order() {
        let mut tickets = vec![
            ticket("a", "2026-01-01", Status::Completed),
            ticket("b", "2026-01-01", Status::Unpaid),
            ticket("c", "2026-01-01", Status::Pending),
        ];
        sort_tickets(&mut tickets, SortKey::Status, SortOrder::Asc);
        let statuses: Vec<Status> = tickets.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![Status::Unpaid, Status::Pending, Status::Completed]
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut tickets = vec![
            ticket("first", "2026-05-10", Status::Recruiting),
            ticket("second", "2026-05-10", Status::Recruiting),
            ticket("third", "2026-05-10", Status::Recruiting),
        ];
        sort_tickets(&mut tickets, SortKey::EventDate, SortOrder::Asc);
        let tours: Vec<&str> = tickets.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(tours, vec!["first", "second", "third"]);

        sort_tickets(&mut tickets, SortKey::EventDate, SortOrder::Desc);
        let tours: Vec<&str> = tickets.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(tours, vec!["first", "second", "third"]);
    }

    #[test]
    fn unparseable_event_date_sorts_last_ascending_first_descending() {
        let mut tickets = vec![
            ticket("bad", "not-a-date", Status::Recruiting),
            ticket("early", "2026-01-01", Status::Recruiting),
            ticket("late", "2026-12-31", Status::Recruiting),
        ];
        sort_tickets(&mut tickets, SortKey::EventDate, SortOrder::Asc);
        let tours: Vec<&str> = tickets.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(tours, vec!["early", "late", "bad"]);

        sort_tickets(&mut tickets, SortKey::EventDate, SortOrder::Desc);
        let tours: Vec<&str> = tickets.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(tours, vec!["bad", "late", "early"]);
    }

    #[test]
    fn absent_price_sorts_as_zero() {
        let mut tickets = vec![
            Ticket::new(TicketDraft {
                price: Some(9800.0),
                ..TicketDraft::new("priced", "2026-01-01", "Dome")
            }),
            Ticket::new(TicketDraft::new("free", "2026-01-01", "Dome")),
        ];
        sort_tickets(&mut tickets, SortKey::Price, SortOrder::Asc);
        assert_eq!(tickets[0].tour_name, "free");
        assert_eq!(tickets[1].tour_name, "priced");
    }

    #[test]
    fn select_filters_then_sorts() {
        let tickets = vec![
            ticket("late", "2026-12-01", Status::Recruiting),
            ticket("early", "2026-02-01", Status::Recruiting),
            ticket("other-status", "2026-01-01", Status::Completed),
        ];
        let view = select(
            &tickets,
            &ListOptions {
                status: StatusFilter::Only(Status::Recruiting),
                ..ListOptions::default()
            },
        );
        let tours: Vec<&str> = view.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(tours, vec!["early", "late"]);
    }

    #[test]
    fn snapshot_helpers() {
        let tickets = vec![
            Ticket::new(TicketDraft {
                name_holder: Some("self".into()),
                status: Status::Recruiting,
                ..TicketDraft::new("Tour A", "2026-01-01", "Dome")
            }),
            Ticket::new(TicketDraft {
                name_holder: Some("self".into()),
                status: Status::Recruiting,
                ..TicketDraft::new("Tour A", "2026-01-02", "Dome")
            }),
            Ticket::new(TicketDraft {
                name_holder: Some("friend".into()),
                status: Status::Completed,
                ..TicketDraft::new("Tour B", "2026-01-03", "Dome")
            }),
        ];
        let counts = status_counts(&tickets);
        assert_eq!(counts[&Status::Recruiting], 2);
        assert_eq!(counts[&Status::Completed], 1);
        assert_eq!(tour_names(&tickets), vec!["Tour A", "Tour B"]);
        assert_eq!(name_holders(&tickets), vec!["self", "friend"]);
    }
}
