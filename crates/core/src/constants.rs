/// Collection key for investor transactions
pub const TRANSACTIONS_KEY: &str = "investor_transactions";

/// Collection key for property investment ledger entries
pub const INVESTMENTS_KEY: &str = "property_investments";

/// Collection key for profit distributions
pub const DISTRIBUTIONS_KEY: &str = "profit_distributions";

/// Collection key for properties
pub const PROPERTIES_KEY: &str = "properties";

/// Collection key for investors
pub const INVESTORS_KEY: &str = "investors";

/// Decimal precision for attributed and distributed amounts.
/// Fixed-scale posting keeps ledger addition exact, so reversal is exact.
pub const DECIMAL_PRECISION: u32 = 8;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
