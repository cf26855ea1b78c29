use commons::{CustomContractError, Token};
use concordium_cis1::TokenAmount;
use concordium_std::*;

use crate::external::ListParams;

/// Listing phase of a custodied asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum ListingStatus {
    /// In custody without an open sale window.
    Unlisted,
    /// Open for bids within the sale window.
    Listed,
}

/// Highest escrowed bid. On overbid it must be refunded, on settlement the
/// amount must be transferred to the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct Bid {
    pub account: AccountAddress,
    pub amount: TokenAmount,
}

/// Per-asset auction record. One exists for every custodied asset; it is
/// erased only when the asset leaves custody again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionRecord {
    /// Account that listed the asset for the current sale cycle.
    pub seller: AccountAddress,
    /// Account entitled to withdraw the custodied asset.
    pub claimant: AccountAddress,
    /// Fungible token bids are denominated in. Set when listed.
    pub settlement: Option<Token>,
    /// Minimum acceptable first bid.
    pub min_bid: TokenAmount,
    /// Current highest escrowed bid.
    pub highest_bid: Option<Bid>,
    /// Sale window opening time.
    pub start: Timestamp,
    /// Sale window closing time.
    pub end: Timestamp,
    /// Listing phase.
    pub status: ListingStatus,
}

impl AuctionRecord {
    /// Record for a freshly deposited asset. The depositor holds both the
    /// seller and the claimant role until a sale settles.
    pub fn fresh(owner: AccountAddress) -> Self {
        Self {
            seller: owner,
            claimant: owner,
            settlement: None,
            min_bid: 0,
            highest_bid: None,
            start: Timestamp::from_timestamp_millis(0),
            end: Timestamp::from_timestamp_millis(0),
            status: ListingStatus::Unlisted,
        }
    }

    /// Record reported for assets that were never custodied or whose record
    /// was erased on withdrawal.
    pub fn empty() -> Self {
        Self::fresh(AccountAddress([0u8; 32]))
    }
}

/// Payment owed to the seller on settlement.
#[must_use]
pub struct Payout {
    pub settlement: Token,
    pub amount: TokenAmount,
}

/// Settlement outcome. The payout, if any, must be transferred after the
/// record is updated.
#[must_use]
pub struct FinishOutcome {
    pub seller: AccountAddress,
    pub claimant: AccountAddress,
    pub payout: Option<Payout>,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Auction records, keyed by asset identity.
    records: StateMap<Token, AuctionRecord, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a new state with no custodied assets.
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            records: state_builder.new_map(),
        }
    }

    /// Take an asset into custody for `owner`. A record that still has an
    /// open sale window is never overwritten.
    pub fn deposit(
        &mut self,
        token: &Token,
        owner: AccountAddress,
    ) -> Result<(), CustomContractError> {
        if let Some(record) = self.records.get(token) {
            ensure!(
                record.status == ListingStatus::Unlisted,
                CustomContractError::TokenAlreadyListedForSale
            );
        }
        self.records.insert(token.clone(), AuctionRecord::fresh(owner));
        Ok(())
    }

    /// Open a sale window over a custodied asset. Only the current claimant
    /// may list, and the window must lie strictly in the future.
    pub fn list(
        &mut self,
        sender: AccountAddress,
        params: &ListParams,
        slot_time: Timestamp,
    ) -> Result<(), CustomContractError> {
        let mut entry = self
            .records
            .get_mut(&params.token)
            .ok_or_else(|| CustomContractError::UnknownToken)?;
        let record = entry.get_mut();

        ensure!(
            record.status == ListingStatus::Unlisted,
            CustomContractError::TokenAlreadyListedForSale
        );
        ensure_eq!(sender, record.claimant, CustomContractError::Unauthorized);
        // A record coming from Unlisted never holds escrow. Enforced rather
        // than assumed, since listing with residual escrow would break the
        // refund bookkeeping.
        ensure!(
            record.highest_bid.is_none(),
            CustomContractError::BidMapError
        );
        ensure!(
            params.start > slot_time,
            CustomContractError::InvalidStartTime
        );
        ensure!(params.end > params.start, CustomContractError::InvalidEndTime);

        record.seller = sender;
        record.settlement = Some(params.settlement.clone());
        record.min_bid = params.min_bid;
        record.start = params.start;
        record.end = params.end;
        record.status = ListingStatus::Listed;

        Ok(())
    }

    /// Place a bid on a listed asset. Returns the settlement token to pull
    /// the bid in, and the displaced bid that MUST be refunded.
    pub fn bid(
        &mut self,
        token: &Token,
        slot_time: Timestamp,
        bidder: AccountAddress,
        amount: TokenAmount,
    ) -> Result<(Token, Option<Bid>), CustomContractError> {
        let mut entry = self
            .records
            .get_mut(token)
            .ok_or_else(|| CustomContractError::UnknownToken)?;
        let record = entry.get_mut();

        // Seller is not allowed to raise bids on his own listing
        ensure_ne!(bidder, record.seller, CustomContractError::OwnerForbidden);
        ensure!(
            record.status == ListingStatus::Listed,
            CustomContractError::TokenNotListedForSale
        );
        ensure!(
            slot_time >= record.start,
            CustomContractError::AuctionNotStarted
        );
        ensure!(slot_time < record.end, CustomContractError::AuctionFinished);
        match &record.highest_bid {
            None => ensure!(amount > record.min_bid, CustomContractError::BidTooLow),
            Some(bid) => ensure!(amount > bid.amount, CustomContractError::BidTooLow),
        }

        let settlement = record
            .settlement
            .clone()
            .ok_or_else(|| CustomContractError::TokenNotListedForSale)?;

        // Update the highest bid after all checks, return the displaced bid
        let displaced = record.highest_bid.replace(Bid {
            account: bidder,
            amount,
        });

        Ok((settlement, displaced))
    }

    /// Close an expired sale window. With a held bid the claim moves to the
    /// winner and the escrow becomes payable to the seller; without one the
    /// record just returns to Unlisted. The asset stays in custody.
    pub fn finish(
        &mut self,
        token: &Token,
        slot_time: Timestamp,
    ) -> Result<FinishOutcome, CustomContractError> {
        let mut entry = self
            .records
            .get_mut(token)
            .ok_or_else(|| CustomContractError::UnknownToken)?;
        let record = entry.get_mut();

        ensure!(
            record.status == ListingStatus::Listed,
            CustomContractError::TokenNotListedForSale
        );
        ensure!(
            slot_time >= record.end,
            CustomContractError::AuctionStillActive
        );

        let settlement = record
            .settlement
            .clone()
            .ok_or_else(|| CustomContractError::BidMapError)?;
        let payout = if let Some(bid) = record.highest_bid.take() {
            record.claimant = bid.account;
            Some(Payout {
                settlement,
                amount: bid.amount,
            })
        } else {
            None
        };
        record.status = ListingStatus::Unlisted;

        Ok(FinishOutcome {
            seller: record.seller,
            claimant: record.claimant,
            payout,
        })
    }

    /// Release a settled asset to its claimant, erasing the record. The
    /// freed slot can be reused by a fresh deposit.
    pub fn withdraw(
        &mut self,
        token: &Token,
        sender: AccountAddress,
    ) -> Result<(), CustomContractError> {
        {
            let record = self
                .records
                .get(token)
                .ok_or_else(|| CustomContractError::UnknownToken)?;
            ensure!(
                record.status == ListingStatus::Unlisted,
                CustomContractError::AuctionNotFinished
            );
            ensure_eq!(sender, record.claimant, CustomContractError::Unauthorized);
        }
        self.records.remove(token);
        Ok(())
    }

    /// Current record for an asset, or the empty record if none exists.
    pub fn info(&self, token: &Token) -> AuctionRecord {
        match self.records.get(token) {
            Some(record) => (*record).clone(),
            None => AuctionRecord::empty(),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_cis1::TokenIdVec;
    use concordium_std::test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([1; 32]);
    const BIDDER_1: AccountAddress = AccountAddress([2; 32]);
    const BIDDER_2: AccountAddress = AccountAddress([3; 32]);

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };
    const SETTLEMENT_CONTRACT: ContractAddress = ContractAddress {
        index: 20,
        subindex: 0,
    };

    fn asset() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![0, 1]),
        }
    }

    fn settlement() -> Token {
        Token {
            contract: SETTLEMENT_CONTRACT,
            id: TokenIdVec(vec![]),
        }
    }

    fn deposit_time() -> Timestamp {
        Timestamp::from_timestamp_millis(1_000)
    }

    /// Sale window from the listing scenario: opens a day after deposit,
    /// closes an hour later.
    fn window() -> (Timestamp, Timestamp) {
        let start = deposit_time().checked_add(Duration::from_days(1)).unwrap();
        let end = deposit_time().checked_add(Duration::from_hours(25)).unwrap();
        (start, end)
    }

    fn open_time() -> Timestamp {
        window().0.checked_add(Duration::from_millis(1)).unwrap()
    }

    fn list_params(min_bid: TokenAmount) -> ListParams {
        let (start, end) = window();
        ListParams {
            token: asset(),
            settlement: settlement(),
            min_bid,
            start,
            end,
        }
    }

    fn custodied_state() -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder);
        state
            .deposit(&asset(), SELLER)
            .expect_report("Deposit should succeed");
        state
    }

    fn listed_state() -> State<TestStateApi> {
        let mut state = custodied_state();
        state
            .list(SELLER, &list_params(1), deposit_time())
            .expect_report("Listing should succeed");
        state
    }

    #[concordium_test]
    fn test_deposit_creates_record() {
        let state = custodied_state();
        let record = state.info(&asset());

        claim_eq!(record.seller, SELLER);
        claim_eq!(record.claimant, SELLER);
        claim_eq!(record.settlement, None);
        claim_eq!(record.highest_bid, None);
        claim_eq!(record.status, ListingStatus::Unlisted);
    }

    #[concordium_test]
    fn test_deposit_rejected_while_listed() {
        let mut state = listed_state();

        let result = state.deposit(&asset(), BIDDER_1);

        claim_eq!(
            result,
            Err(CustomContractError::TokenAlreadyListedForSale)
        );
        claim_eq!(state.info(&asset()).seller, SELLER);
    }

    #[concordium_test]
    fn test_list_success() {
        let state = listed_state();
        let record = state.info(&asset());
        let (start, end) = window();

        claim_eq!(record.seller, SELLER);
        claim_eq!(record.settlement, Some(settlement()));
        claim_eq!(record.min_bid, 1);
        claim_eq!(record.start, start);
        claim_eq!(record.end, end);
        claim_eq!(record.status, ListingStatus::Listed);
    }

    #[concordium_test]
    fn test_list_unknown_token() {
        let mut state_builder = TestStateBuilder::new();
        let mut state: State<TestStateApi> = State::new(&mut state_builder);

        let result = state.list(SELLER, &list_params(1), deposit_time());

        claim_eq!(result, Err(CustomContractError::UnknownToken));
    }

    #[concordium_test]
    fn test_list_rejected_when_already_listed() {
        let mut state = listed_state();

        let result = state.list(SELLER, &list_params(1), deposit_time());

        claim_eq!(result, Err(CustomContractError::TokenAlreadyListedForSale));
    }

    #[concordium_test]
    fn test_list_rejected_for_non_claimant() {
        let mut state = custodied_state();

        let result = state.list(BIDDER_1, &list_params(1), deposit_time());

        claim_eq!(result, Err(CustomContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_list_rejected_when_start_not_in_future() {
        let mut state = custodied_state();
        let mut params = list_params(1);
        params.start = deposit_time();

        let result = state.list(SELLER, &params, deposit_time());

        claim_eq!(result, Err(CustomContractError::InvalidStartTime));
        claim_eq!(state.info(&asset()).status, ListingStatus::Unlisted);
    }

    #[concordium_test]
    fn test_list_rejected_when_end_not_after_start() {
        let mut state = custodied_state();
        let mut params = list_params(1);
        params.end = params.start;

        let result = state.list(SELLER, &params, deposit_time());

        claim_eq!(result, Err(CustomContractError::InvalidEndTime));
        claim_eq!(state.info(&asset()).status, ListingStatus::Unlisted);
    }

    #[concordium_test]
    fn test_first_bid_must_exceed_minimum() {
        let mut state = listed_state();

        let result = state.bid(&asset(), open_time(), BIDDER_1, 1);
        claim_eq!(result.err(), Some(CustomContractError::BidTooLow));

        let (_, displaced) = state
            .bid(&asset(), open_time(), BIDDER_1, 2)
            .expect_report("Bid above minimum should succeed");
        claim_eq!(displaced, None);

        let record = state.info(&asset());
        claim_eq!(
            record.highest_bid,
            Some(Bid {
                account: BIDDER_1,
                amount: 2,
            })
        );
    }

    #[concordium_test]
    fn test_overbid_refunds_displaced_bidder() {
        let mut state = listed_state();
        state
            .bid(&asset(), open_time(), BIDDER_1, 2)
            .expect_report("First bid should succeed");

        // Matching the held amount is not enough
        let result = state.bid(&asset(), open_time(), BIDDER_2, 2);
        claim_eq!(result.err(), Some(CustomContractError::BidTooLow));

        let (token, displaced) = state
            .bid(&asset(), open_time(), BIDDER_2, 3)
            .expect_report("Higher bid should succeed");

        claim_eq!(token, settlement());
        claim_eq!(
            displaced,
            Some(Bid {
                account: BIDDER_1,
                amount: 2,
            })
        );
        claim_eq!(
            state.info(&asset()).highest_bid,
            Some(Bid {
                account: BIDDER_2,
                amount: 3,
            })
        );
    }

    #[concordium_test]
    fn test_bid_rejected_for_seller() {
        let mut state = listed_state();

        let result = state.bid(&asset(), open_time(), SELLER, 2);

        claim_eq!(result.err(), Some(CustomContractError::OwnerForbidden));
    }

    #[concordium_test]
    fn test_bid_rejected_outside_window() {
        let mut state = listed_state();
        let (start, end) = window();

        let early = state.bid(&asset(), deposit_time(), BIDDER_1, 2);
        claim_eq!(early.err(), Some(CustomContractError::AuctionNotStarted));

        // The window is inclusive at start and exclusive at end
        claim!(state.bid(&asset(), start, BIDDER_1, 2).is_ok());

        let late = state.bid(&asset(), end, BIDDER_2, 3);
        claim_eq!(late.err(), Some(CustomContractError::AuctionFinished));
    }

    #[concordium_test]
    fn test_bid_rejected_when_not_listed() {
        let mut state = custodied_state();

        let result = state.bid(&asset(), open_time(), BIDDER_1, 2);

        claim_eq!(result.err(), Some(CustomContractError::TokenNotListedForSale));
    }

    #[concordium_test]
    fn test_finish_rejected_before_expiry() {
        let mut state = listed_state();
        let before = state.info(&asset());

        let result = state.finish(&asset(), open_time());

        claim_eq!(result.err(), Some(CustomContractError::AuctionStillActive));
        claim_eq!(state.info(&asset()), before);
    }

    #[concordium_test]
    fn test_finish_rejected_when_not_listed() {
        let mut state = custodied_state();

        let result = state.finish(&asset(), open_time());

        claim_eq!(result.err(), Some(CustomContractError::TokenNotListedForSale));
    }

    #[concordium_test]
    fn test_finish_without_bids() {
        let mut state = listed_state();
        let (_, end) = window();

        let outcome = state
            .finish(&asset(), end)
            .expect_report("Finishing expired auction should succeed");

        claim_eq!(outcome.seller, SELLER);
        claim_eq!(outcome.claimant, SELLER);
        claim!(outcome.payout.is_none());

        let record = state.info(&asset());
        claim_eq!(record.claimant, SELLER);
        claim_eq!(record.highest_bid, None);
        claim_eq!(record.status, ListingStatus::Unlisted);
    }

    #[concordium_test]
    fn test_finish_pays_seller_and_moves_claim() {
        let mut state = listed_state();
        let (_, end) = window();
        state
            .bid(&asset(), open_time(), BIDDER_1, 2)
            .expect_report("First bid should succeed");
        state
            .bid(&asset(), open_time(), BIDDER_2, 3)
            .expect_report("Second bid should succeed");

        let outcome = state
            .finish(&asset(), end)
            .expect_report("Finishing expired auction should succeed");

        claim_eq!(outcome.seller, SELLER);
        claim_eq!(outcome.claimant, BIDDER_2);
        let payout = outcome.payout.expect_report("Payout should be owed");
        claim_eq!(payout.settlement, settlement());
        claim_eq!(payout.amount, 3);

        let record = state.info(&asset());
        claim_eq!(record.claimant, BIDDER_2);
        claim_eq!(record.highest_bid, None);
        claim_eq!(record.status, ListingStatus::Unlisted);

        // A second settlement of the same cycle must not pay twice
        let again = state.finish(&asset(), end);
        claim_eq!(again.err(), Some(CustomContractError::TokenNotListedForSale));
    }

    #[concordium_test]
    fn test_winner_can_relist() {
        let mut state = listed_state();
        let (_, end) = window();
        state
            .bid(&asset(), open_time(), BIDDER_1, 2)
            .expect_report("Bid should succeed");
        let _ = state
            .finish(&asset(), end)
            .expect_report("Finish should succeed");

        // The previous seller no longer holds the claim
        let mut params = list_params(5);
        params.start = end.checked_add(Duration::from_days(1)).unwrap();
        params.end = params.start.checked_add(Duration::from_hours(1)).unwrap();
        let result = state.list(SELLER, &params, end);
        claim_eq!(result, Err(CustomContractError::Unauthorized));

        state
            .list(BIDDER_1, &params, end)
            .expect_report("Winner should be able to re-list");

        let record = state.info(&asset());
        claim_eq!(record.seller, BIDDER_1);
        claim_eq!(record.min_bid, 5);
        claim_eq!(record.status, ListingStatus::Listed);
    }

    #[concordium_test]
    fn test_withdraw_rejected_while_listed() {
        let mut state = listed_state();

        let result = state.withdraw(&asset(), SELLER);

        claim_eq!(result, Err(CustomContractError::AuctionNotFinished));
    }

    #[concordium_test]
    fn test_withdraw_rejected_for_non_claimant() {
        let mut state = custodied_state();

        let result = state.withdraw(&asset(), BIDDER_1);

        claim_eq!(result, Err(CustomContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_withdraw_erases_record() {
        let mut state = custodied_state();

        state
            .withdraw(&asset(), SELLER)
            .expect_report("Withdraw should succeed");

        claim_eq!(state.info(&asset()), AuctionRecord::empty());

        let again = state.withdraw(&asset(), SELLER);
        claim_eq!(again, Err(CustomContractError::UnknownToken));

        // The freed slot behaves like a brand new asset
        state
            .deposit(&asset(), BIDDER_1)
            .expect_report("Re-deposit should succeed");
        claim_eq!(state.info(&asset()).claimant, BIDDER_1);
    }

    #[concordium_test]
    fn test_full_cycle() {
        let mut state = custodied_state();
        let (_, end) = window();

        state
            .list(SELLER, &list_params(1), deposit_time())
            .expect_report("Listing should succeed");
        state
            .bid(&asset(), open_time(), BIDDER_1, 2)
            .expect_report("First bid should succeed");
        let (_, displaced) = state
            .bid(&asset(), open_time(), BIDDER_2, 3)
            .expect_report("Second bid should succeed");
        claim_eq!(
            displaced,
            Some(Bid {
                account: BIDDER_1,
                amount: 2,
            })
        );

        let outcome = state
            .finish(&asset(), end)
            .expect_report("Finish should succeed");
        claim_eq!(outcome.payout.expect_report("Payout should be owed").amount, 3);

        state
            .withdraw(&asset(), BIDDER_2)
            .expect_report("Winner withdraw should succeed");
        claim_eq!(state.info(&asset()), AuctionRecord::empty());
    }
}
