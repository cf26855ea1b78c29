use commons::{CustomContractError, Token};
use concordium_cis1::{OnReceivingCis1Params, TokenIdVec};
use concordium_std::*;

use crate::events::AuctionEvents;
use crate::external::*;
use crate::nft;
use crate::state::{AuctionRecord, State};
use crate::token;

/// Initialize the auction contract with no custodied assets.
#[init(contract = "EnglishAuction")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder))
}

/// Take an incoming asset into custody. This function is intended to be
/// passed as a callback to the CIS-1 transfer function of the NFT contract.
///
/// The sender is the NFT contract itself and becomes part of the record key,
/// so a notification can only ever create records for assets of the contract
/// that sent it. The depositor holds the claim on the asset until a sale
/// settles; listing happens in a separate call.
#[receive(
    mutable,
    contract = "EnglishAuction",
    name = "deposit",
    parameter = "OnReceivingCis1Params<TokenIdVec>",
    enable_logger
)]
fn contract_deposit<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let transfer_info = OnReceivingCis1Params::<TokenIdVec>::deserial(&mut ctx.parameter_cursor())?;
    // Do not take anything into custody if no tokens were transfered
    if transfer_info.amount == 0 {
        return Ok(());
    }
    // Amount of tokens over 1 is not currently supported
    ensure!(
        transfer_info.amount == 1,
        CustomContractError::Unsupported.into()
    );

    let owner = if let Address::Account(owner) = transfer_info.from {
        owner
    } else {
        bail!(CustomContractError::Unsupported.into());
    };

    let contract = if let Address::Contract(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::ContractOnly.into());
    };

    let token = Token {
        contract,
        id: transfer_info.token_id,
    };
    host.state_mut().deposit(&token, owner)?;

    logger.log(&AuctionEvents::deposit(&token.contract, &token.id, &owner))?;

    Ok(())
}

/// Acknowledge a settlement token credit. This function is named as the
/// receiving hook of the transfers that pull bids into custody.
#[receive(
    contract = "EnglishAuction",
    name = "acceptFunds",
    parameter = "OnReceivingCis1Params<TokenIdVec>"
)]
fn contract_accept_funds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    OnReceivingCis1Params::<TokenIdVec>::deserial(&mut ctx.parameter_cursor())?;

    // Credits are only ever sent by token contracts
    if let Address::Contract(_) = ctx.sender() {
        Ok(())
    } else {
        bail!(CustomContractError::ContractOnly.into())
    }
}

/// List a custodied asset for sale. Only the current claimant may open a
/// sale window, and the window must lie strictly in the future.
#[receive(
    mutable,
    contract = "EnglishAuction",
    name = "listOnAuction",
    parameter = "ListParams",
    enable_logger
)]
fn contract_list<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = ListParams::deserial(&mut ctx.parameter_cursor())?;

    let sender = if let Address::Account(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    host.state_mut()
        .list(sender, &params, ctx.metadata().slot_time())?;

    logger.log(&AuctionEvents::list(
        &params.token.contract,
        &params.token.id,
        &sender,
        &params.settlement,
        params.min_bid,
        params.start,
        params.end,
    ))?;

    Ok(())
}

/// Place a bid on a listed asset. The bid amount is pulled into custody from
/// the bidder, who must have made this contract an operator on the
/// settlement token beforehand; the displaced bid is refunded within the
/// same operation. The record is committed before either transfer, so a
/// re-entrant call observes the new highest bid.
#[receive(
    mutable,
    contract = "EnglishAuction",
    name = "placeBid",
    parameter = "BidParams",
    enable_logger
)]
fn contract_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = BidParams::deserial(&mut ctx.parameter_cursor())?;

    let bidder = if let Address::Account(bidder) = ctx.sender() {
        bidder
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let (settlement, displaced) = host.state_mut().bid(
        &params.token,
        ctx.metadata().slot_time(),
        bidder,
        params.amount,
    )?;

    logger.log(&AuctionEvents::bid(
        &params.token.contract,
        &params.token.id,
        &bidder,
        params.amount,
    ))?;

    // Pull the new bid into custody
    token::pull(
        host,
        &settlement,
        bidder,
        ctx.self_address(),
        params.amount,
    )?;

    // Refund the displaced bid
    if let Some(bid) = displaced {
        token::push(
            host,
            &settlement,
            ctx.self_address(),
            bid.account,
            bid.amount,
        )?;
    }

    Ok(())
}

/// Close an expired sale window. Anyone may settle: the escrow, if any, is
/// paid to the seller and the claim on the asset moves to the winner. The
/// asset itself stays in custody until withdrawn.
#[receive(
    mutable,
    contract = "EnglishAuction",
    name = "finishAuction",
    parameter = "Token",
    enable_logger
)]
fn contract_finish<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let outcome = host
        .state_mut()
        .finish(&token, ctx.metadata().slot_time())?;

    logger.log(&AuctionEvents::finish(
        &token.contract,
        &token.id,
        &outcome.seller,
        &outcome.claimant,
    ))?;

    // Pay the seller after the record is updated
    if let Some(payout) = outcome.payout {
        token::push(
            host,
            &payout.settlement,
            ctx.self_address(),
            outcome.seller,
            payout.amount,
        )?;
    }

    Ok(())
}

/// Release a settled asset to its claimant. The record is erased before the
/// asset transfer is invoked, so a re-entrant call cannot withdraw twice.
#[receive(
    mutable,
    contract = "EnglishAuction",
    name = "withdrawAsset",
    parameter = "Token",
    enable_logger
)]
fn contract_withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let sender = if let Address::Account(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    host.state_mut().withdraw(&token, sender)?;

    logger.log(&AuctionEvents::withdraw(&token.contract, &token.id, &sender))?;

    // Return the asset to the claimant
    nft::transfer(host, token, Address::Contract(ctx.self_address()), sender)?;

    Ok(())
}

/// View the full auction record of an asset. Assets that were never
/// custodied, or whose record was erased on withdrawal, report the empty
/// record.
#[receive(
    contract = "EnglishAuction",
    name = "auctionInfo",
    parameter = "Token",
    return_value = "AuctionRecord"
)]
fn auction_info<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AuctionRecord> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().info(&token))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use crate::state::{Bid, ListingStatus};
    use commons::test::*;
    use concordium_cis1::{AdditionalData, Receiver, TokenAmount, TransferParams};
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
    const SELF_ADDRESS: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    fn asset_id() -> TokenIdVec {
        TokenIdVec(vec![0, 1])
    }

    fn asset() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: asset_id(),
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

    /// Sale window of the listing scenario: opens a day after deposit,
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

    fn deposit_params() -> OnReceivingCis1Params<TokenIdVec> {
        OnReceivingCis1Params {
            token_id: asset_id(),
            amount: 1,
            from: Address::Account(SELLER),
            contract_name: OwnedContractName::new_unchecked("init_NFT".into()),
            data: AdditionalData::empty(),
        }
    }

    fn receive_ctx<'a>(
        sender: Address,
        parameter: &'a [u8],
        slot_time: Timestamp,
    ) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender)
            .set_parameter(parameter)
            .set_metadata_slot_time(slot_time)
            .set_self_address(SELF_ADDRESS);
        ctx
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state = contract_init(&ctx, &mut state_builder)
            .expect_report("Failed during init_EnglishAuction");
        TestHost::new(state, state_builder)
    }

    fn custodied_host() -> TestHost<State<TestStateApi>> {
        let mut host = default_host();
        let bytes = to_bytes(&deposit_params());
        let ctx = receive_ctx(Address::Contract(NFT_CONTRACT), &bytes, deposit_time());
        let mut logger = TestLogger::init();
        contract_deposit(&ctx, &mut host, &mut logger).expect_report("Deposit should succeed");
        host
    }

    fn listed_host() -> TestHost<State<TestStateApi>> {
        let mut host = custodied_host();
        let bytes = to_bytes(&list_params(1));
        let ctx = receive_ctx(Address::Account(SELLER), &bytes, deposit_time());
        let mut logger = TestLogger::init();
        contract_list(&ctx, &mut host, &mut logger).expect_report("Listing should succeed");
        host
    }

    /// Place a bid through the entrypoint with a settlement mock that
    /// accepts any transfer.
    fn place_bid(
        host: &mut TestHost<State<TestStateApi>>,
        bidder: AccountAddress,
        amount: TokenAmount,
    ) {
        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_ok_mock::<TransferParams<TokenIdVec>, _>(()),
        );
        let bytes = to_bytes(&BidParams {
            token: asset(),
            amount,
        });
        let ctx = receive_ctx(Address::Account(bidder), &bytes, open_time());
        let mut logger = TestLogger::init();
        contract_bid(&ctx, host, &mut logger).expect_report("Bid should succeed");
    }

    fn info(host: &TestHost<State<TestStateApi>>) -> AuctionRecord {
        let bytes = to_bytes(&asset());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        auction_info(&ctx, host).expect_report("auctionInfo should not fail")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();

        claim_eq!(info(&host), AuctionRecord::empty());
    }

    #[concordium_test]
    fn test_deposit_takes_custody() {
        let mut host = default_host();
        let bytes = to_bytes(&deposit_params());
        let ctx = receive_ctx(Address::Contract(NFT_CONTRACT), &bytes, deposit_time());
        let mut logger = TestLogger::init();

        let result = contract_deposit(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        let record = info(&host);
        claim_eq!(record.seller, SELLER);
        claim_eq!(record.claimant, SELLER);
        claim_eq!(record.status, ListingStatus::Unlisted);

        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::deposit(&NFT_CONTRACT, &asset_id(), &SELLER))
        );
    }

    #[concordium_test]
    fn test_deposit_rejects_direct_calls() {
        let mut host = default_host();
        let bytes = to_bytes(&deposit_params());
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, deposit_time());
        let mut logger = TestLogger::init();

        let result = contract_deposit(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::ContractOnly.into()));
        claim_eq!(info(&host), AuctionRecord::empty());
    }

    #[concordium_test]
    fn test_accept_funds_rejects_accounts() {
        let host = default_host();
        let params = OnReceivingCis1Params {
            token_id: TokenIdVec(vec![]),
            amount: 2,
            from: Address::Account(BIDDER_1),
            contract_name: OwnedContractName::new_unchecked("init_Settlement".into()),
            data: AdditionalData::empty(),
        };
        let bytes = to_bytes(&params);

        let ctx = receive_ctx(Address::Contract(SETTLEMENT_CONTRACT), &bytes, deposit_time());
        claim_eq!(contract_accept_funds(&ctx, &host), Ok(()));

        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, deposit_time());
        claim_eq!(
            contract_accept_funds(&ctx, &host),
            Err(CustomContractError::ContractOnly.into())
        );
    }

    #[concordium_test]
    fn test_list_opens_sale_window() {
        let mut host = custodied_host();
        let bytes = to_bytes(&list_params(1));
        let ctx = receive_ctx(Address::Account(SELLER), &bytes, deposit_time());
        let mut logger = TestLogger::init();

        let result = contract_list(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        let record = info(&host);
        let (start, end) = window();
        claim_eq!(record.settlement, Some(settlement()));
        claim_eq!(record.min_bid, 1);
        claim_eq!(record.start, start);
        claim_eq!(record.end, end);
        claim_eq!(record.status, ListingStatus::Listed);

        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::list(
                &NFT_CONTRACT,
                &asset_id(),
                &SELLER,
                &settlement(),
                1,
                start,
                end,
            ))
        );
    }

    #[concordium_test]
    fn test_bid_pulls_escrow() {
        let mut host = listed_host();

        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 2
                        && transfer.from == Address::Account(BIDDER_1)
                        && matches!(
                            &transfer.to,
                            Receiver::Contract(address, _) if *address == SELF_ADDRESS
                        )
                },
                (),
            ),
        );

        let bytes = to_bytes(&BidParams {
            token: asset(),
            amount: 2,
        });
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, open_time());
        let mut logger = TestLogger::init();

        let result = contract_bid(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            info(&host).highest_bid,
            Some(Bid {
                account: BIDDER_1,
                amount: 2,
            })
        );
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::bid(&NFT_CONTRACT, &asset_id(), &BIDDER_1, 2))
        );
    }

    #[concordium_test]
    fn test_overbid_refunds_displaced_bidder() {
        let mut host = listed_host();
        place_bid(&mut host, BIDDER_1, 2);

        // Every transfer of the second bid must be either the pull of the
        // new bid or the refund of the displaced one
        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    let pull = transfer.amount == 3
                        && transfer.from == Address::Account(BIDDER_2)
                        && matches!(
                            &transfer.to,
                            Receiver::Contract(address, _) if *address == SELF_ADDRESS
                        );
                    let refund = transfer.amount == 2
                        && transfer.from == Address::Contract(SELF_ADDRESS)
                        && matches!(
                            &transfer.to,
                            Receiver::Account(account) if *account == BIDDER_1
                        );
                    pull || refund
                },
                (),
            ),
        );

        let bytes = to_bytes(&BidParams {
            token: asset(),
            amount: 3,
        });
        let ctx = receive_ctx(Address::Account(BIDDER_2), &bytes, open_time());
        let mut logger = TestLogger::init();

        let result = contract_bid(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            info(&host).highest_bid,
            Some(Bid {
                account: BIDDER_2,
                amount: 3,
            })
        );
    }

    #[concordium_test]
    fn test_bid_rejected_when_pull_fails() {
        let mut host = listed_host();

        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(|_| false, ()),
        );

        let bytes = to_bytes(&BidParams {
            token: asset(),
            amount: 2,
        });
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, open_time());
        let mut logger = TestLogger::init();

        let result = contract_bid(&ctx, &mut host, &mut logger);

        claim!(result.is_err());
    }

    #[concordium_test]
    fn test_finish_rejected_before_expiry() {
        let mut host = listed_host();
        let bytes = to_bytes(&asset());
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, open_time());
        let mut logger = TestLogger::init();

        let result = contract_finish(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::AuctionStillActive.into()));
    }

    #[concordium_test]
    fn test_finish_pays_seller() {
        let mut host = listed_host();
        place_bid(&mut host, BIDDER_1, 2);
        place_bid(&mut host, BIDDER_2, 3);

        // Settlement must push exactly the winning escrow to the seller
        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 3
                        && transfer.from == Address::Contract(SELF_ADDRESS)
                        && matches!(
                            &transfer.to,
                            Receiver::Account(account) if *account == SELLER
                        )
                },
                (),
            ),
        );

        let (_, end) = window();
        let bytes = to_bytes(&asset());
        // Anyone may settle an expired auction
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, end);
        let mut logger = TestLogger::init();

        let result = contract_finish(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        let record = info(&host);
        claim_eq!(record.claimant, BIDDER_2);
        claim_eq!(record.highest_bid, None);
        claim_eq!(record.status, ListingStatus::Unlisted);

        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::finish(
                &NFT_CONTRACT,
                &asset_id(),
                &SELLER,
                &BIDDER_2,
            ))
        );
    }

    #[concordium_test]
    fn test_finish_without_bids_moves_no_funds() {
        let mut host = listed_host();

        // No settlement mock is set up: any attempted transfer would fail
        let (_, end) = window();
        let bytes = to_bytes(&asset());
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, end);
        let mut logger = TestLogger::init();

        let result = contract_finish(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        let record = info(&host);
        claim_eq!(record.claimant, SELLER);
        claim_eq!(record.status, ListingStatus::Unlisted);

        // The depositor takes the unsold asset back immediately
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 1
                        && transfer.from == Address::Contract(SELF_ADDRESS)
                        && matches!(
                            &transfer.to,
                            Receiver::Account(account) if *account == SELLER
                        )
                },
                (),
            ),
        );
        let ctx = receive_ctx(Address::Account(SELLER), &bytes, end);
        let result = contract_withdraw(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(info(&host), AuctionRecord::empty());
    }

    #[concordium_test]
    fn test_withdraw_releases_asset_to_winner() {
        let mut host = listed_host();
        place_bid(&mut host, BIDDER_1, 2);
        place_bid(&mut host, BIDDER_2, 3);

        let (_, end) = window();
        let bytes = to_bytes(&asset());
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, end);
        let mut logger = TestLogger::init();
        contract_finish(&ctx, &mut host, &mut logger).expect_report("Finish should succeed");

        // The displaced bidder holds no claim on the asset
        let ctx = receive_ctx(Address::Account(BIDDER_1), &bytes, end);
        let result = contract_withdraw(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 1
                        && transfer.from == Address::Contract(SELF_ADDRESS)
                        && matches!(
                            &transfer.to,
                            Receiver::Account(account) if *account == BIDDER_2
                        )
                },
                (),
            ),
        );
        let ctx = receive_ctx(Address::Account(BIDDER_2), &bytes, end);
        let mut logger = TestLogger::init();

        let result = contract_withdraw(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(info(&host), AuctionRecord::empty());
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::withdraw(&NFT_CONTRACT, &asset_id(), &BIDDER_2))
        );
    }
}
