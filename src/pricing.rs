//! Monthly/yearly billing toggle.
//!
//! The yearly figure is cosmetic: non-zero monthly prices are multiplied by a
//! flat factor (10 on the stock page, advertised as roughly 17% off twelve
//! months). Free plans stay at zero in both modes.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::consts::YEARLY_LABEL;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Pick the period a billing button label stands for.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains(YEARLY_LABEL) { Self::Yearly } else { Self::Monthly }
    }

    /// Whether the "save" blurb is shown in this period.
    #[must_use]
    pub fn shows_savings(self) -> bool {
        self == Self::Yearly
    }
}

/// Displayed amount for one plan.
#[must_use]
pub fn display_amount(base: u64, period: BillingPeriod, yearly_multiplier: u64) -> u64 {
    match period {
        BillingPeriod::Yearly if base > 0 => base.saturating_mul(yearly_multiplier),
        _ => base,
    }
}

#[derive(Debug, Clone)]
pub struct PricingToggle {
    base_prices: Vec<u64>,
    yearly_multiplier: u64,
    period: BillingPeriod,
    active_button: Option<usize>,
}

impl PricingToggle {
    #[must_use]
    pub fn new(base_prices: Vec<u64>, yearly_multiplier: u64) -> Self {
        Self { base_prices, yearly_multiplier, period: BillingPeriod::Monthly, active_button: None }
    }

    #[must_use]
    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Index of the button last clicked, if any.
    #[must_use]
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    /// Record a click on billing button `index` with the given label.
    pub fn select(&mut self, index: usize, label: &str) -> BillingPeriod {
        self.active_button = Some(index);
        self.period = BillingPeriod::from_label(label);
        self.period
    }

    /// Amounts for the current period, one per configured plan.
    #[must_use]
    pub fn amounts(&self) -> Vec<u64> {
        self.base_prices
            .iter()
            .map(|&base| display_amount(base, self.period, self.yearly_multiplier))
            .collect()
    }
}
