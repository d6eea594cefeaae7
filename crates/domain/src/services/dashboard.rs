//! Dashboard statistics and activity feed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::commission;
use crate::models::{Lead, LeadStatus, Sale};

/// Headline numbers for a rep's dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub leads_contacted: usize,
    pub bookings_made: usize,
    pub commission_earned: f64,
    pub commission_pending: f64,
    /// Capped at 100: two points per contacted lead, ten per booking.
    pub performance_score: u32,
}

/// Computes the dashboard stats from a rep's leads and sales.
pub fn compute_stats(leads: &[Lead], sales: &[Sale]) -> DashboardStats {
    let leads_contacted = leads.iter().filter(|l| l.status.is_contacted()).count();
    let bookings_made = leads
        .iter()
        .filter(|l| l.status == LeadStatus::Booked)
        .count();
    let commission_earned: f64 = sales.iter().map(|s| s.commission_amount).sum();
    let commission_pending = commission::unpaid_total(sales);
    let performance_score = (leads_contacted * 2 + bookings_made * 10).min(100) as u32;

    DashboardStats {
        leads_contacted,
        bookings_made,
        commission_earned,
        commission_pending,
        performance_score,
    }
}

/// Kind of a recent-activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Lead,
    Sale,
}

/// One row in the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub subtitle: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

/// Merges recently contacted leads and recent sales into a five-entry
/// feed, newest first.
pub fn recent_activity(leads: &[Lead], sales: &[Sale]) -> Vec<ActivityItem> {
    let mut recent_leads: Vec<&Lead> = leads.iter().filter(|l| l.last_contacted.is_some()).collect();
    recent_leads.sort_by(|a, b| b.last_contacted.cmp(&a.last_contacted));

    let mut items: Vec<ActivityItem> = recent_leads
        .into_iter()
        .take(3)
        .filter_map(|lead| {
            lead.last_contacted.map(|date| ActivityItem {
                kind: ActivityKind::Lead,
                title: format!("Contacted {}", lead.company_name),
                subtitle: format!("Status: {}", lead.status),
                date,
                status: lead.status.to_string(),
            })
        })
        .collect();

    let mut recent_sales: Vec<&Sale> = sales.iter().collect();
    recent_sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.extend(recent_sales.into_iter().take(3).map(|sale| ActivityItem {
        kind: ActivityKind::Sale,
        title: format!("Sale: {}", sale.client_name),
        subtitle: format!("£{}", sale.sale_amount),
        date: sale.created_at,
        status: sale.payment_status.to_string(),
    }));

    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(5);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use chrono::Duration;
    use uuid::Uuid;

    fn lead(status: LeadStatus, last_contacted: Option<DateTime<Utc>>) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            contact_name: "Jo".to_string(),
            email: None,
            phone: None,
            industry: None,
            region: None,
            status,
            assigned_to: Some("rep@byteblitz.co.uk".to_string()),
            estimated_value: None,
            notes: None,
            last_contacted,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sale(commission_amount: f64, paid: bool, created_at: DateTime<Utc>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            client_name: "Globex".to_string(),
            rep_email: "rep@byteblitz.co.uk".to_string(),
            sale_amount: 500.0,
            commission_amount,
            commission_paid: paid,
            payment_status: PaymentStatus::Pending,
            sale_date: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_stats_counts_and_totals() {
        let leads = vec![
            lead(LeadStatus::Assigned, None),
            lead(LeadStatus::Contacted, None),
            lead(LeadStatus::Booked, None),
            lead(LeadStatus::Closed, None),
        ];
        let sales = vec![
            sale(50.0, false, Utc::now()),
            sale(30.0, true, Utc::now()),
        ];
        let stats = compute_stats(&leads, &sales);
        assert_eq!(stats.leads_contacted, 3);
        assert_eq!(stats.bookings_made, 1);
        assert_eq!(stats.commission_earned, 80.0);
        assert_eq!(stats.commission_pending, 50.0);
        // 3 * 2 + 1 * 10
        assert_eq!(stats.performance_score, 16);
    }

    #[test]
    fn test_performance_score_caps_at_100() {
        let leads: Vec<Lead> = (0..60).map(|_| lead(LeadStatus::Contacted, None)).collect();
        let stats = compute_stats(&leads, &[]);
        assert_eq!(stats.performance_score, 100);
    }

    #[test]
    fn test_recent_activity_merges_newest_first_capped_at_five() {
        let now = Utc::now();
        let leads: Vec<Lead> = (0..4)
            .map(|i| lead(LeadStatus::Contacted, Some(now - Duration::hours(i))))
            .collect();
        let sales: Vec<Sale> = (0..4)
            .map(|i| sale(10.0, false, now - Duration::minutes(30 + i)))
            .collect();
        let feed = recent_activity(&leads, &sales);
        assert_eq!(feed.len(), 5);
        // Three lead entries and three sale entries are candidates; the
        // newest overall entry is the lead contacted at `now`.
        assert_eq!(feed[0].kind, ActivityKind::Lead);
        for pair in feed.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_recent_activity_skips_uncontacted_leads() {
        let leads = vec![lead(LeadStatus::Assigned, None)];
        let feed = recent_activity(&leads, &[]);
        assert!(feed.is_empty());
    }
}
