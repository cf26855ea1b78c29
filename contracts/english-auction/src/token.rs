use commons::{CustomContractError, Token};
use concordium_cis1::{AdditionalData, Receiver, TokenAmount, Transfer};
use concordium_std::*;

/// Receive hook on this contract that acknowledges settlement credits.
const CREDIT_HOOK: &str = "EnglishAuction.acceptFunds";

/// Pull `amount` of the settlement token from `from` into custody. The
/// contract must have been made an operator of `from` on the settlement
/// contract beforehand.
pub fn pull<T>(
    host: &mut impl HasHost<T>,
    settlement: &Token,
    from: AccountAddress,
    custodian: ContractAddress,
    amount: TokenAmount,
) -> ReceiveResult<()> {
    transfer(
        host,
        settlement,
        Address::Account(from),
        Receiver::Contract(
            custodian,
            OwnedReceiveName::new_unchecked(CREDIT_HOOK.into()),
        ),
        amount,
    )
}

/// Push `amount` of the settlement token held in custody to `to`.
pub fn push<T>(
    host: &mut impl HasHost<T>,
    settlement: &Token,
    custodian: ContractAddress,
    to: AccountAddress,
    amount: TokenAmount,
) -> ReceiveResult<()> {
    transfer(
        host,
        settlement,
        Address::Contract(custodian),
        Receiver::Account(to),
        amount,
    )
}

fn transfer<T>(
    host: &mut impl HasHost<T>,
    settlement: &Token,
    from: Address,
    to: Receiver,
    amount: TokenAmount,
) -> ReceiveResult<()> {
    host.invoke_contract(
        &settlement.contract,
        &(
            1u16,
            Transfer {
                token_id: settlement.id.clone(),
                amount,
                from,
                to,
                data: AdditionalData::empty(),
            },
        ),
        EntrypointName::new_unchecked("transfer"),
        Amount::zero(),
    )
    .map_err(handle_call_error)?;

    Ok(())
}

fn handle_call_error<R>(error: CallContractError<R>) -> Reject {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible.into()
        }
        CallContractError::LogicReject { .. } => CustomContractError::InvokeContractError.into(),
        e => e.into(),
    }
}

#[concordium_cfg_test]
mod tests {
    use commons::test::*;
    use concordium_cis1::{TokenIdVec, TransferParams};
    use concordium_std::test_infrastructure::*;

    use super::*;

    const SETTLEMENT_CONTRACT: ContractAddress = ContractAddress {
        index: 20,
        subindex: 0,
    };

    const SELF_ADDRESS: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const USER_1: AccountAddress = AccountAddress([1; 32]);

    fn settlement() -> Token {
        Token {
            contract: SETTLEMENT_CONTRACT,
            id: TokenIdVec(vec![]),
        }
    }

    #[concordium_test]
    fn test_pull() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 50
                        && transfer.from == Address::Account(USER_1)
                        && matches!(
                            &transfer.to,
                            Receiver::Contract(address, _) if *address == SELF_ADDRESS
                        )
                },
                (),
            ),
        );

        let response = pull(&mut host, &settlement(), USER_1, SELF_ADDRESS, 50);

        claim_eq!(response, Ok(()))
    }

    #[concordium_test]
    fn test_push() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(
                |params| {
                    let transfer = &params.0[0];
                    transfer.amount == 50
                        && transfer.from == Address::Contract(SELF_ADDRESS)
                        && matches!(
                            &transfer.to,
                            Receiver::Account(account) if *account == USER_1
                        )
                },
                (),
            ),
        );

        let response = push(&mut host, &settlement(), SELF_ADDRESS, USER_1, 50);

        claim_eq!(response, Ok(()))
    }

    #[concordium_test]
    fn test_failed_transfer_is_rejected() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            SETTLEMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_check_mock::<TransferParams<TokenIdVec>, _>(|_| false, ()),
        );

        let response = pull(&mut host, &settlement(), USER_1, SELF_ADDRESS, 50);

        claim!(response.is_err())
    }
}
