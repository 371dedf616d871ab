pub mod breakdown;
pub mod emi;
pub mod inputs;
pub mod quote;
pub mod schedule;
