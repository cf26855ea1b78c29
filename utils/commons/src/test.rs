//! Mock entrypoints shared between the contract test suites.
#[cfg(not(target_arch = "wasm32"))]
pub use inner::*;

#[cfg(not(target_arch = "wasm32"))]
mod inner {
    use concordium_std::test_infrastructure::MockFn;
    use concordium_std::*;

    /// Mock that only requires the parameter to parse as `D`.
    pub fn parse_and_ok_mock<D: Deserial, S>(
        return_value: impl Clone + Serial + 'static,
    ) -> MockFn<S> {
        MockFn::new_v1(move |parameter, _amount, _balance, _state| {
            D::deserial(&mut Cursor::new(parameter.as_ref())).map_err(|_| CallContractError::Trap)?;
            Ok((false, return_value.clone()))
        })
    }

    /// Mock that requires the parameter to parse as `D` and pass `check`.
    pub fn parse_and_check_mock<D: Deserial, S>(
        check: impl Fn(&D) -> bool + 'static,
        return_value: impl Clone + Serial + 'static,
    ) -> MockFn<S> {
        MockFn::new_v1(move |parameter, _amount, _balance, _state| {
            let value = D::deserial(&mut Cursor::new(parameter.as_ref()))
                .map_err(|_| CallContractError::Trap)?;
            if !check(&value) {
                return Err(CallContractError::Trap);
            }
            Ok((false, return_value.clone()))
        })
    }
}
