//! ABI bindings for the pair and token contracts

use alloy::{
    primitives::Address,
    sol,
    sol_types::SolCall,
};
use crate::{
    errors::{TrackerError, TrackerResult},
    network::ChainClient,
};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IERC20Metadata {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}

/// Encodes `call`, runs it as `eth_call` against `contract` and decodes the typed return.
pub async fn call_contract<C, T>(client: &T, contract: Address, call: C) -> TrackerResult<C::Return>
where
    C: SolCall,
    T: ChainClient,
{
    let raw = client
        .call(contract, call.abi_encode().into())
        .await
        .map_err(|source| TrackerError::Call {
            contract,
            function: C::SIGNATURE,
            source,
        })?;

    C::abi_decode_returns(&raw, true).map_err(|source| TrackerError::Decode {
        function: C::SIGNATURE,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockChainClient;
    use alloy::primitives::{address, aliases::U112};

    const TOKEN: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

    #[tokio::test]
    async fn decodes_typed_return() {
        let client = MockChainClient::new()
            .on_call(TOKEN, IERC20Metadata::decimalsCall::SELECTOR, Ok(MockChainClient::encode_decimals(6)));

        let ret = call_contract(&client, TOKEN, IERC20Metadata::decimalsCall {})
            .await
            .unwrap();
        assert_eq!(ret._0, 6);
    }

    #[tokio::test]
    async fn decodes_named_reserve_fields() {
        let client = MockChainClient::new().on_call(
            TOKEN,
            IUniswapV2Pair::getReservesCall::SELECTOR,
            Ok(MockChainClient::encode_reserves(5, 7, 1_700_000_000)),
        );

        let ret = call_contract(&client, TOKEN, IUniswapV2Pair::getReservesCall {})
            .await
            .unwrap();
        assert_eq!(
            ret,
            IUniswapV2Pair::getReservesReturn {
                reserve0: U112::from(5u64),
                reserve1: U112::from(7u64),
                blockTimestampLast: 1_700_000_000,
            }
        );
    }

    #[tokio::test]
    async fn garbage_return_is_a_decode_error() {
        let client = MockChainClient::new()
            .on_call(TOKEN, IERC20Metadata::symbolCall::SELECTOR, Ok(vec![0xde, 0xad].into()));

        let err = call_contract(&client, TOKEN, IERC20Metadata::symbolCall {})
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Decode { function: "symbol()", .. }));
    }

    #[tokio::test]
    async fn transport_failure_names_the_function() {
        let client = MockChainClient::new();

        let err = call_contract(&client, TOKEN, IERC20Metadata::symbolCall {})
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Call { function: "symbol()", .. }));
    }
}
