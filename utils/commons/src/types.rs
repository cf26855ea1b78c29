use super::*;

/// Contract token ID type. Token identifiers of any CIS-1 contract can be
/// represented, at the cost of a length prefix.
pub type ContractTokenId = TokenIdVec;
