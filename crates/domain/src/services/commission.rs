//! Commission aggregation.

use serde::Serialize;

use crate::models::Sale;

/// Totals shown on the commissions view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommissionSummary {
    pub total_earned: f64,
    pub pending_payout: f64,
    pub paid_out: f64,
    pub total_sales: usize,
}

/// Sum of commission amounts over sales not yet paid out. Paid rows are
/// excluded regardless of amount.
pub fn unpaid_total(sales: &[Sale]) -> f64 {
    sales
        .iter()
        .filter(|sale| !sale.commission_paid)
        .map(|sale| sale.commission_amount)
        .sum()
}

/// Builds the commission totals for a set of sales.
pub fn summarize(sales: &[Sale]) -> CommissionSummary {
    let total_earned: f64 = sales.iter().map(|sale| sale.commission_amount).sum();
    let pending_payout = unpaid_total(sales);
    CommissionSummary {
        total_earned,
        pending_payout,
        paid_out: total_earned - pending_payout,
        total_sales: sales.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn sale(commission_amount: f64, commission_paid: bool) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            client_name: "Acme".to_string(),
            rep_email: "rep@byteblitz.co.uk".to_string(),
            sale_amount: commission_amount * 10.0,
            commission_amount,
            commission_paid,
            payment_status: if commission_paid {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            sale_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_unpaid_total_excludes_paid_rows() {
        let sales = vec![sale(50.0, false), sale(30.0, true)];
        assert_eq!(unpaid_total(&sales), 50.0);
    }

    #[test]
    fn test_summary_totals() {
        let sales = vec![sale(50.0, false), sale(30.0, true), sale(20.0, false)];
        let summary = summarize(&sales);
        assert_eq!(summary.total_earned, 100.0);
        assert_eq!(summary.pending_payout, 70.0);
        assert_eq!(summary.paid_out, 30.0);
        assert_eq!(summary.total_sales, 3);
    }

    #[test]
    fn test_summary_of_empty_set_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_earned, 0.0);
        assert_eq!(summary.pending_payout, 0.0);
        assert_eq!(summary.paid_out, 0.0);
        assert_eq!(summary.total_sales, 0);
    }
}
