//! Opportunity module - the catalogue side of the domain.

mod currency;
#[allow(clippy::module_inception)]
mod opportunity;
mod stage;

pub use currency::format_compact_currency;
pub use opportunity::Opportunity;
pub use stage::FundingStage;

#[cfg(test)]
pub(crate) use opportunity::test_support;
