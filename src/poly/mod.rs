pub mod monomial;
pub mod order;
pub mod polynomial;
pub mod set;
