//! Typed fee queries over a tenant's tuition table.
//!
//! Lookups are checked: an unknown grade band or fee category is an
//! error, never a silent zero, so a fee page cannot render a missing
//! amount as free.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TredumoError};
use crate::models::school::TuitionTable;

/// Terms in a school year
pub const TERMS_PER_YEAR: u64 = 3;

/// Attendance mode selecting which rate of a band applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Day,
    Boarding,
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Day => "day",
            Attendance::Boarding => "boarding",
        }
    }
}

/// One itemized one-off fee on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub category: String,
    pub amount: u64,
}

/// Itemized enrollment quote for one grade band and attendance mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub band: String,
    pub attendance: Attendance,
    pub tuition_per_term: u64,
    pub annual_tuition: u64,

    /// One-off fees included in the quote
    pub extras: Vec<QuoteLine>,

    /// First-term payable: one term's tuition plus all extras
    pub total_first_term: u64,
}

/// Termly tuition for a grade band and attendance mode.
pub fn termly_rate(table: &TuitionTable, band: &str, attendance: Attendance) -> Result<u64> {
    let rate = table
        .bands
        .get(band)
        .ok_or_else(|| TredumoError::UnknownGradeBand {
            band: band.to_string(),
        })?;

    Ok(match attendance {
        Attendance::Day => rate.day,
        Attendance::Boarding => rate.boarding,
    })
}

/// Amount of a one-off fee category.
pub fn fee(table: &TuitionTable, category: &str) -> Result<u64> {
    table
        .fees
        .get(category)
        .copied()
        .ok_or_else(|| TredumoError::UnknownFeeCategory {
            category: category.to_string(),
        })
}

/// Build an itemized quote: termly and annual tuition for the band plus
/// the requested one-off fee categories, in the order given.
pub fn enrollment_quote(
    table: &TuitionTable,
    band: &str,
    attendance: Attendance,
    categories: &[&str],
) -> Result<FeeQuote> {
    let tuition_per_term = termly_rate(table, band, attendance)?;

    let mut extras = Vec::with_capacity(categories.len());
    for category in categories {
        extras.push(QuoteLine {
            category: category.to_string(),
            amount: fee(table, category)?,
        });
    }

    let extras_total: u64 = extras.iter().map(|line| line.amount).sum();

    Ok(FeeQuote {
        band: band.to_string(),
        attendance,
        tuition_per_term,
        annual_tuition: tuition_per_term * TERMS_PER_YEAR,
        extras,
        total_first_term: tuition_per_term + extras_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_school_config;

    #[test]
    fn rates_resolve_by_band_and_attendance() {
        let table = default_school_config().tuition;

        assert_eq!(termly_rate(&table, "S1-S4", Attendance::Day).unwrap(), 1_200_000);
        assert_eq!(
            termly_rate(&table, "S5-S6", Attendance::Boarding).unwrap(),
            2_800_000
        );
    }

    #[test]
    fn unknown_band_is_an_error() {
        let table = default_school_config().tuition;
        let err = termly_rate(&table, "P7", Attendance::Day).unwrap_err();
        assert!(matches!(err, TredumoError::UnknownGradeBand { band } if band == "P7"));
    }

    #[test]
    fn unknown_category_is_an_error() {
        let table = default_school_config().tuition;
        let err = fee(&table, "helicopter").unwrap_err();
        assert!(matches!(err, TredumoError::UnknownFeeCategory { .. }));
    }

    #[test]
    fn quote_itemizes_and_totals() {
        let table = default_school_config().tuition;
        let quote = enrollment_quote(
            &table,
            "S1-S4",
            Attendance::Boarding,
            &["registration", "uniform"],
        )
        .unwrap();

        assert_eq!(quote.tuition_per_term, 2_500_000);
        assert_eq!(quote.annual_tuition, 7_500_000);
        assert_eq!(quote.extras.len(), 2);
        assert_eq!(quote.extras[0].category, "registration");
        assert_eq!(quote.total_first_term, 2_500_000 + 50_000 + 350_000);
    }

    #[test]
    fn quote_fails_on_any_unknown_category() {
        let table = default_school_config().tuition;
        let result = enrollment_quote(&table, "S1-S4", Attendance::Day, &["registration", "nope"]);
        assert!(result.is_err());
    }
}
