use commons::{
    ContractTokenId, Token, BID_TAG, DEPOSIT_TAG, FINISH_TAG, LISTING_TAG, WITHDRAW_TAG,
};
use concordium_cis1::TokenAmount;
use concordium_std::*;

/// Custody receipt event data.
#[derive(Debug, Serial)]
pub struct DepositEvent<'a> {
    /// NFT contract address.
    pub contract: &'a ContractAddress,
    /// NFT token identifier.
    pub id: &'a ContractTokenId,
    /// Account the asset was received from.
    pub from: &'a AccountAddress,
}

/// Listing event data.
#[derive(Debug, Serial)]
pub struct ListEvent<'a> {
    /// NFT contract address.
    pub contract: &'a ContractAddress,
    /// NFT token identifier.
    pub id: &'a ContractTokenId,
    /// Account selling the asset this cycle.
    pub seller: &'a AccountAddress,
    /// Fungible token bids are denominated in.
    pub settlement: &'a Token,
    /// Minimum acceptable first bid.
    pub min_bid: TokenAmount,
    /// Sale window opening time.
    pub start: Timestamp,
    /// Sale window closing time.
    pub end: Timestamp,
}

/// Bid event data.
#[derive(Debug, Serial)]
pub struct BidEvent<'a> {
    /// NFT contract address.
    pub contract: &'a ContractAddress,
    /// NFT token identifier.
    pub id: &'a ContractTokenId,
    /// Bidder account address.
    pub bidder: &'a AccountAddress,
    /// Bid amount.
    pub amount: TokenAmount,
}

/// Settlement event data.
#[derive(Debug, Serial)]
pub struct FinishEvent<'a> {
    /// NFT contract address.
    pub contract: &'a ContractAddress,
    /// NFT token identifier.
    pub id: &'a ContractTokenId,
    /// Account paid out this cycle.
    pub seller: &'a AccountAddress,
    /// Account entitled to withdraw the asset after settlement.
    pub claimant: &'a AccountAddress,
}

/// Asset release event data.
#[derive(Debug, Serial)]
pub struct WithdrawEvent<'a> {
    /// NFT contract address.
    pub contract: &'a ContractAddress,
    /// NFT token identifier.
    pub id: &'a ContractTokenId,
    /// Account the asset was released to.
    pub claimant: &'a AccountAddress,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum AuctionEvents<'a> {
    Deposit(DepositEvent<'a>),
    List(ListEvent<'a>),
    Bid(BidEvent<'a>),
    Finish(FinishEvent<'a>),
    Withdraw(WithdrawEvent<'a>),
}

impl<'a> AuctionEvents<'a> {
    pub fn deposit(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        from: &'a AccountAddress,
    ) -> Self {
        Self::Deposit(DepositEvent { contract, id, from })
    }

    pub fn list(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        settlement: &'a Token,
        min_bid: TokenAmount,
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self::List(ListEvent {
            contract,
            id,
            seller,
            settlement,
            min_bid,
            start,
            end,
        })
    }

    pub fn bid(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        bidder: &'a AccountAddress,
        amount: TokenAmount,
    ) -> Self {
        Self::Bid(BidEvent {
            contract,
            id,
            bidder,
            amount,
        })
    }

    pub fn finish(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        claimant: &'a AccountAddress,
    ) -> Self {
        Self::Finish(FinishEvent {
            contract,
            id,
            seller,
            claimant,
        })
    }

    pub fn withdraw(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        claimant: &'a AccountAddress,
    ) -> Self {
        Self::Withdraw(WithdrawEvent {
            contract,
            id,
            claimant,
        })
    }
}

impl<'a> Serial for AuctionEvents<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvents::Deposit(event) => {
                out.write_u8(DEPOSIT_TAG)?;
                event.serial(out)
            }
            AuctionEvents::List(event) => {
                out.write_u8(LISTING_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Bid(event) => {
                out.write_u8(BID_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Finish(event) => {
                out.write_u8(FINISH_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
        }
    }
}
