//! Per-rep performance rollup for the admin panel.
//!
//! Lead and sale ownership is recorded as bare emails, so the rollup
//! builds one index per load instead of rescanning the full collections
//! for every member.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Lead, Sale, User, UserRole};

/// One row of the admin team-performance table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamMemberStats {
    pub email: String,
    pub full_name: Option<String>,
    pub leads_assigned: usize,
    pub sales_count: usize,
    pub revenue: f64,
    pub commission_owed: f64,
}

/// Rolls up leads and sales per `role = user` member.
pub fn rollup(users: &[User], leads: &[Lead], sales: &[Sale]) -> Vec<TeamMemberStats> {
    let mut leads_by_rep: HashMap<&str, usize> = HashMap::new();
    for lead in leads {
        if let Some(email) = lead.assigned_to.as_deref() {
            *leads_by_rep.entry(email).or_default() += 1;
        }
    }

    let mut sales_by_rep: HashMap<&str, Vec<&Sale>> = HashMap::new();
    for sale in sales {
        sales_by_rep.entry(sale.rep_email.as_str()).or_default().push(sale);
    }

    users
        .iter()
        .filter(|user| user.role == UserRole::User)
        .map(|user| {
            let rep_sales = sales_by_rep.get(user.email.as_str());
            let sales_count = rep_sales.map(Vec::len).unwrap_or(0);
            let revenue = rep_sales
                .map(|s| s.iter().map(|sale| sale.sale_amount).sum())
                .unwrap_or(0.0);
            let commission_owed = rep_sales
                .map(|s| {
                    s.iter()
                        .filter(|sale| !sale.commission_paid)
                        .map(|sale| sale.commission_amount)
                        .sum()
                })
                .unwrap_or(0.0);
            TeamMemberStats {
                email: user.email.clone(),
                full_name: user.full_name.clone(),
                leads_assigned: leads_by_rep.get(user.email.as_str()).copied().unwrap_or(0),
                sales_count,
                revenue,
                commission_owed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadStatus, PaymentStatus};
    use chrono::Utc;
    use uuid::Uuid;

    fn user(email: &str, role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: None,
            role,
            phone: None,
            avatar_url: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn lead(assigned_to: Option<&str>) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            contact_name: "Jo".to_string(),
            email: None,
            phone: None,
            industry: None,
            region: None,
            status: LeadStatus::Assigned,
            assigned_to: assigned_to.map(String::from),
            estimated_value: None,
            notes: None,
            last_contacted: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sale(rep: &str, sale_amount: f64, commission_amount: f64, paid: bool) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            client_name: "Globex".to_string(),
            rep_email: rep.to_string(),
            sale_amount,
            commission_amount,
            commission_paid: paid,
            payment_status: PaymentStatus::Pending,
            sale_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_rollup_counts_per_member() {
        let users = vec![
            user("a@byteblitz.co.uk", UserRole::User),
            user("b@byteblitz.co.uk", UserRole::User),
            user("boss@byteblitz.co.uk", UserRole::Admin),
        ];
        let leads = vec![
            lead(Some("a@byteblitz.co.uk")),
            lead(Some("a@byteblitz.co.uk")),
            lead(Some("b@byteblitz.co.uk")),
            lead(None),
        ];
        let sales = vec![
            sale("a@byteblitz.co.uk", 1000.0, 100.0, false),
            sale("a@byteblitz.co.uk", 500.0, 50.0, true),
        ];

        let stats = rollup(&users, &leads, &sales);
        // Admins are not listed.
        assert_eq!(stats.len(), 2);

        let a = stats.iter().find(|s| s.email == "a@byteblitz.co.uk").unwrap();
        assert_eq!(a.leads_assigned, 2);
        assert_eq!(a.sales_count, 2);
        assert_eq!(a.revenue, 1500.0);
        assert_eq!(a.commission_owed, 100.0);

        let b = stats.iter().find(|s| s.email == "b@byteblitz.co.uk").unwrap();
        assert_eq!(b.leads_assigned, 1);
        assert_eq!(b.sales_count, 0);
        assert_eq!(b.revenue, 0.0);
    }

    #[test]
    fn test_rollup_with_no_members_is_empty() {
        let users = vec![user("boss@byteblitz.co.uk", UserRole::Admin)];
        assert!(rollup(&users, &[], &[]).is_empty());
    }
}
