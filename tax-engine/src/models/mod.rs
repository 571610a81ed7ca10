mod income_source;
mod pay_period;
mod regime;
mod tax_bracket;
mod tax_input;
mod tax_result;

pub use income_source::IncomeSource;
pub use pay_period::PayPeriod;
pub use regime::TaxRegime;
pub use tax_bracket::TaxBracket;
pub use tax_input::TaxInput;
pub use tax_result::{TaxBreakdownLine, TaxCalculationResult};
