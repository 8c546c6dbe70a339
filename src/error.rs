use std::collections::TryReserveError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("block storage could not be grown: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigitString { position: usize, found: char },
    #[error("division by zero")]
    DivisionByZero,
    #[error("subtraction would produce a negative value")]
    NegativeResult,
    #[error("block count or bit offset exceeds the addressable range")]
    CapacityOverflow,
}

pub type Result<T, E = ArithmeticError> = std::result::Result<T, E>;
