use commons::Token;
use concordium_cis1::TokenAmount;
use concordium_std::*;

/// Parameter for the `listOnAuction` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct ListParams {
    /// Custodied asset to put up for sale.
    pub token: Token,
    /// Fungible token accepted as payment for this listing.
    pub settlement: Token,
    /// Minimum acceptable first bid. Bids must exceed it strictly.
    pub min_bid: TokenAmount,
    /// Time the sale window opens.
    pub start: Timestamp,
    /// Time the sale window closes.
    pub end: Timestamp,
}

/// Parameter for the `placeBid` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct BidParams {
    /// Asset the bid is placed on.
    pub token: Token,
    /// Escrowed bid amount in the listing's settlement token.
    pub amount: TokenAmount,
}
