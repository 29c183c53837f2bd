use std::fmt;

use chrono::NaiveDate;

/// Direction of a supplier transaction.
#[derive(sqlx::Type, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Raises the amount owed to the supplier
    Invoice,
    /// Lowers the amount owed to the supplier
    Payment,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Invoice => "invoice",
            TransactionKind::Payment => "payment",
        }
    }

    /// Contribution of `amount` to the supplier balance.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Invoice => amount,
            TransactionKind::Payment => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct SupplierTransaction {
    pub id: i64,
    pub supplier_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    #[sqlx(rename = "type")]
    pub kind: TransactionKind,
}

#[derive(Debug, Clone)]
pub struct NewSupplierTransaction {
    pub supplier_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    pub kind: TransactionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_count_against_the_balance() {
        assert_eq!(TransactionKind::Invoice.signed(100.0), 100.0);
        assert_eq!(TransactionKind::Payment.signed(40.0), -40.0);
    }
}
