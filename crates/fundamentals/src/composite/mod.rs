//! Composite scores built on top of the financials and ratios tables.
//!
//! - [`altman_z`]: bankruptcy risk per quarterly period
//! - [`valuation`]: latest-period multiples that need market data
//! - [`dupont`]: ROE decomposition, read back from the ratios table
//! - [`piotroski`]: annual 9-point fundamental strength score

pub mod altman_z;
pub mod dupont;
pub mod piotroski;
pub mod valuation;

pub use altman_z::{ALTMAN_Z, AltmanInputs, AltmanZone, altman_z};
pub use dupont::{DuPontRow, dupont};
pub use piotroski::{PiotroskiRow, PiotroskiSignals, PiotroskiTable};
pub use valuation::{Valuation, enterprise_value};
