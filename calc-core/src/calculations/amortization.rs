//! Fixed-rate amortization shared by the loan calculators.

/// Upper bound on simulated periods. Keeps pathological inputs (a payment
/// that barely covers interest, a thousand-year term) from spinning.
pub const MAX_PERIODS: usize = 1000;

/// Level payment that retires `principal` over `periods` at `monthly_rate`.
///
/// A zero rate degrades to straight division instead of `0 / 0`.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::amortization::level_payment;
///
/// assert_eq!(level_payment(1200.0, 0.0, 12.0), 100.0);
/// assert!((level_payment(30_000.0, 0.005, 60.0) - 579.98).abs() < 0.01);
/// ```
pub fn level_payment(
    principal: f64,
    monthly_rate: f64,
    periods: f64,
) -> f64 {
    if monthly_rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + monthly_rate).powf(periods);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Whole number of payments in a possibly fractional term. Negative and NaN
/// terms have none.
pub fn period_count(months: f64) -> usize {
    months.max(0.0).ceil() as usize
}

/// One simulated payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    /// 1-based period number.
    pub number: usize,
    pub interest: f64,
    pub principal: f64,
    /// Balance after this payment.
    pub balance: f64,
}

/// Month-by-month payment simulation.
#[derive(Debug, Clone)]
pub struct Schedule {
    balance: f64,
    monthly_rate: f64,
    payment: f64,
    limit: usize,
    until_paid: bool,
    number: usize,
}

impl Schedule {
    /// Exactly `periods` payments (capped at [`MAX_PERIODS`]), whatever the
    /// balance does.
    pub fn fixed_term(
        principal: f64,
        monthly_rate: f64,
        payment: f64,
        periods: usize,
    ) -> Self {
        Self {
            balance: principal,
            monthly_rate,
            payment,
            limit: periods.min(MAX_PERIODS),
            until_paid: false,
            number: 0,
        }
    }

    /// Payments until the balance reaches zero or [`MAX_PERIODS`] is hit.
    pub fn until_paid(
        principal: f64,
        monthly_rate: f64,
        payment: f64,
    ) -> Self {
        Self {
            balance: principal,
            monthly_rate,
            payment,
            limit: MAX_PERIODS,
            until_paid: true,
            number: 0,
        }
    }
}

impl Iterator for Schedule {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let paid_off = self.balance.is_nan() || self.balance <= 0.0;
        if self.number >= self.limit || (self.until_paid && paid_off) {
            return None;
        }
        let interest = self.balance * self.monthly_rate;
        let principal = self.payment - interest;
        self.balance -= principal;
        self.number += 1;
        Some(Period {
            number: self.number,
            interest,
            principal,
            balance: self.balance,
        })
    }
}

/// Principal and interest paid within one 12-period block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearTotals {
    /// 1-based year number.
    pub year: usize,
    pub principal: f64,
    pub interest: f64,
}

/// Sums a schedule into consecutive 12-period blocks. A trailing partial
/// year is kept.
pub fn yearly_totals(periods: impl IntoIterator<Item = Period>) -> Vec<YearTotals> {
    let mut years: Vec<YearTotals> = Vec::new();
    for period in periods {
        let year = (period.number - 1) / 12 + 1;
        match years.last_mut() {
            Some(totals) if totals.year == year => {
                totals.principal += period.principal;
                totals.interest += period.interest;
            }
            _ => years.push(YearTotals {
                year,
                principal: period.principal,
                interest: period.interest,
            }),
        }
    }
    years
}
