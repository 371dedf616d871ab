pub mod error;
pub mod loan;
pub mod types;

pub use error::CarLoanError;
pub use types::*;

/// Standard result type for all carloan operations
pub type CarLoanResult<T> = Result<T, CarLoanError>;
