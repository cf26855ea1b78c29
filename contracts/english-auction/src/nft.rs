use commons::{CustomContractError, Token};
use concordium_cis1::{AdditionalData, Receiver, Transfer};
use concordium_std::*;

/// Transfer a custodied asset to `to` through its registry contract.
pub fn transfer<T>(
    host: &mut impl HasHost<T>,
    token: Token,
    from: Address,
    to: AccountAddress,
) -> ReceiveResult<()> {
    host.invoke_contract(
        &token.contract,
        &(
            1u16,
            Transfer {
                token_id: token.id,
                amount: 1,
                from,
                to: Receiver::Account(to),
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

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };

    const SELF_ADDRESS: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const USER_1: AccountAddress = AccountAddress([1; 32]);

    #[concordium_test]
    fn test_transfer() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

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
                            Receiver::Account(account) if *account == USER_1
                        )
                },
                (),
            ),
        );

        let response = transfer(
            &mut host,
            Token {
                contract: NFT_CONTRACT,
                id: TokenIdVec(vec![0, 1]),
            },
            Address::Contract(SELF_ADDRESS),
            USER_1,
        );

        claim_eq!(response, Ok(()))
    }
}
