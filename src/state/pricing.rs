/// Billing period selected by the pricing switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn toggled(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Annual,
            BillingPeriod::Annual => BillingPeriod::Monthly,
        }
    }

    pub fn is_annual(self) -> bool {
        self == BillingPeriod::Annual
    }
}

/// Purchasable plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Starter,
    Professional,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Starter, Plan::Professional, Plan::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            Plan::Starter => "Starter",
            Plan::Professional => "Professional",
            Plan::Enterprise => "Enterprise",
        }
    }

    /// Price in whole dollars for the given billing period. Annual is billed
    /// monthly at a discount.
    pub fn price(self, period: BillingPeriod) -> u32 {
        match (self, period) {
            (Plan::Starter, BillingPeriod::Monthly) => 9,
            (Plan::Starter, BillingPeriod::Annual) => 7,
            (Plan::Professional, BillingPeriod::Monthly) => 19,
            (Plan::Professional, BillingPeriod::Annual) => 15,
            (Plan::Enterprise, BillingPeriod::Monthly) => 49,
            (Plan::Enterprise, BillingPeriod::Annual) => 39,
        }
    }

    pub fn is_featured(self) -> bool {
        self == Plan::Professional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_periods() {
        assert_eq!(BillingPeriod::Monthly.toggled(), BillingPeriod::Annual);
        assert_eq!(BillingPeriod::Annual.toggled(), BillingPeriod::Monthly);
    }

    #[test]
    fn annual_billing_is_always_cheaper() {
        for plan in Plan::ALL {
            assert!(plan.price(BillingPeriod::Annual) < plan.price(BillingPeriod::Monthly));
        }
    }
}
