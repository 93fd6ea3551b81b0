//! Billing page datasets

use serde::Serialize;

/// Billing summary for the overview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStats {
    /// Outstanding balance, formatted
    pub current_balance: &'static str,
    /// Amount of the next invoice, formatted
    pub next_invoice: &'static str,
    /// Date of the next invoice, formatted
    pub next_invoice_date: &'static str,
    /// Default payment method summary
    pub payment_method: &'static str,
}

/// Billing summary
pub fn stats() -> BillingStats {
    BillingStats {
        current_balance: "$0.00",
        next_invoice: "$79.00",
        next_invoice_date: "Nov 15, 2025",
        payment_method: "Visa ending in 4242",
    }
}

/// Invoice settlement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvoiceStatus {
    /// Settled
    Paid,
    /// Returned to the customer
    Refunded,
}

/// One invoice row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice number
    pub id: &'static str,
    /// Issue date, formatted
    pub date: &'static str,
    /// Amount, formatted
    pub amount: &'static str,
    /// Settlement state
    pub status: InvoiceStatus,
    /// Download link
    pub download_url: &'static str,
}

/// Invoice history, newest first
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-00124",
            date: "Oct 15, 2025",
            amount: "$79.00",
            status: InvoiceStatus::Paid,
            download_url: "#",
        },
        Invoice {
            id: "INV-00123",
            date: "Sep 15, 2025",
            amount: "$79.00",
            status: InvoiceStatus::Paid,
            download_url: "#",
        },
        Invoice {
            id: "INV-00122",
            date: "Aug 15, 2025",
            amount: "$79.00",
            status: InvoiceStatus::Paid,
            download_url: "#",
        },
        Invoice {
            id: "INV-00121",
            date: "Jul 15, 2025",
            amount: "$29.00",
            status: InvoiceStatus::Paid,
            download_url: "#",
        },
        Invoice {
            id: "INV-00120",
            date: "Jun 15, 2025",
            amount: "$29.00",
            status: InvoiceStatus::Refunded,
            download_url: "#",
        },
    ]
}

/// How a payment method is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PaymentMethodKind {
    /// Card on file
    Card {
        /// Card network
        brand: &'static str,
        /// Last four digits
        last4: &'static str,
        /// Expiry, MM/YY
        expiry: &'static str,
    },
    /// PayPal account
    PayPal {
        /// Account email
        email: &'static str,
    },
}

/// A stored payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Row id
    pub id: u32,
    /// Charge mechanism
    pub kind: PaymentMethodKind,
    /// Whether this method is charged by default
    pub is_default: bool,
    /// Icon identifier
    pub icon: &'static str,
}

/// Stored payment methods
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: 1,
            kind: PaymentMethodKind::Card { brand: "Visa", last4: "4242", expiry: "12/28" },
            is_default: true,
            icon: "heroicons:credit-card",
        },
        PaymentMethod {
            id: 2,
            kind: PaymentMethodKind::Card { brand: "Mastercard", last4: "8888", expiry: "09/26" },
            is_default: false,
            icon: "heroicons:credit-card",
        },
        PaymentMethod {
            id: 3,
            kind: PaymentMethodKind::PayPal { email: "john@example.com" },
            is_default: false,
            icon: "logos:paypal",
        },
    ]
}

/// One month of spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySpend {
    /// Month label
    pub month: &'static str,
    /// Amount in dollars
    pub amount: u32,
}

/// Spend for the last five months
pub fn monthly_spend() -> Vec<MonthlySpend> {
    vec![
        MonthlySpend { month: "Jun", amount: 29 },
        MonthlySpend { month: "Jul", amount: 29 },
        MonthlySpend { month: "Aug", amount: 79 },
        MonthlySpend { month: "Sep", amount: 79 },
        MonthlySpend { month: "Oct", amount: 79 },
    ]
}

/// Spend attributed to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendBreakdown {
    /// Category label
    pub category: &'static str,
    /// Amount in dollars; negative for credits
    pub amount: i32,
}

/// Current-month spend by category
pub fn spend_breakdown() -> Vec<SpendBreakdown> {
    vec![
        SpendBreakdown { category: "Subscriptions", amount: 79 },
        SpendBreakdown { category: "Usage", amount: 0 },
        SpendBreakdown { category: "Refunds", amount: -29 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_ids_descending() {
        let invoices = invoices();
        let ids: Vec<_> = invoices.iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_exactly_one_default_payment_method() {
        let defaults = payment_methods().iter().filter(|m| m.is_default).count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_payment_method_serialization_tags_kind() {
        let methods = payment_methods();
        let json = serde_json::to_string(&methods[2]).unwrap();
        assert!(json.contains("\"type\":\"PayPal\""));
        assert!(json.contains("john@example.com"));
    }

    #[test]
    fn test_spend_breakdown_allows_credits() {
        assert!(spend_breakdown().iter().any(|s| s.amount < 0));
    }
}
