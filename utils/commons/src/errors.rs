use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Unknown token (Error code: -4).
    UnknownToken,
    /// Token is already listed for sale (Error code: -5).
    TokenAlreadyListedForSale,
    /// Token is not listed for sale (Error code: -6).
    TokenNotListedForSale,
    /// Only account addresses can perform this action (Error code: -7).
    OnlyAccountAddress,
    /// This function must only be called by a contract (Error code: -8).
    ContractOnly,
    /// Unauthorized (Error code: -9).
    Unauthorized,
    /// Seller is not allowed to bid on his own listing (Error code: -10).
    OwnerForbidden,
    // Raised if bid does not exceed the required minimum (Error code: -11)
    BidTooLow,
    /// Sale window must open strictly in the future (Error code: -12).
    InvalidStartTime,
    /// Sale window must close strictly after it opens (Error code: -13).
    InvalidEndTime,
    // Raised if bid is placed before the sale window opens (Error code: -14)
    AuctionNotStarted,
    // Raised if bid is placed after the sale window closed (Error code: -15)
    AuctionFinished,
    // Raised if there is an attempt to finish the auction before its expiry
    // (Error code: -16)
    AuctionStillActive,
    /// Auction must settle before the asset can leave custody (Error code: -17).
    AuctionNotFinished,
    // Raised if there is a mistake in the escrow bookkeeping (Error code: -18)
    BidMapError,
    /// Failed to invoke a contract (Error code: -19).
    InvokeContractError,
    /// Incompatible contract (Error code: -20).
    Incompatible,
    /// Unsupported (Error code: -21).
    Unsupported,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}
