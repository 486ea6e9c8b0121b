//! Tests for operations relayed through the gateway.

use alloy_primitives::{Address, Bytes, U256};
use token_gateway::{test_utils::*, *};

fn ids(ids: &[u64]) -> Vec<U256> {
    ids.iter().copied().map(U256::from).collect()
}

fn setup_nft() -> (TestEnv, Address, Address) {
    let mut env = TestEnv::new().with_manager();
    let factory = env.nft_factory();
    let nft = env
        .deploy_basic_erc721(ALICE, factory, "U2-contract", "U2T", "baseURI/", Salt::from(1u64))
        .unwrap();
    let gateway = env.deployment.gateway;
    (env, gateway, nft)
}

#[test]
fn test_erc721_auto_increment() {
    let (mut env, gateway, nft) = setup_nft();
    for (requested, expected) in [(0, 1), (2, 2), (0, 3)] {
        let call = RelayCall::Erc721Mint { recipient: BOB, token_id: U256::from(requested) };
        assert_eq!(
            env.relay(MANAGER, gateway, nft, &call).unwrap(),
            RelayOutcome::Minted { token_ids: ids(&[expected]) }
        );
    }
    let collection = env.asset(nft).unwrap().as_erc721().unwrap();
    assert_eq!(collection.balance_of(BOB), U256::from(3));
    assert_eq!(collection.token_uri(U256::from(3)).as_deref(), Some("baseURI/3"));
}

#[test]
fn test_batch_is_atomic() {
    let (mut env, gateway, nft) = setup_nft();
    let single = RelayCall::Erc721Mint { recipient: ALICE, token_id: U256::from(222) };
    env.relay(MANAGER, gateway, nft, &single).unwrap();
    let before = env.asset(nft).unwrap().clone();

    // The duplicate id comes last, after two ids that would otherwise succeed.
    let batch = RelayCall::Erc721MintBatch { recipient: BOB, token_ids: ids(&[0, 224, 222]) };
    assert_eq!(
        env.relay(MANAGER, gateway, nft, &batch),
        Err(GatewayError::Asset(AssetError::TokenAlreadyMinted(U256::from(222))))
    );
    assert_eq!(env.asset(nft), Some(&before));

    let batch = RelayCall::Erc721MintBatch { recipient: BOB, token_ids: ids(&[0, 224, 223]) };
    assert_eq!(
        env.relay(MANAGER, gateway, nft, &batch).unwrap(),
        RelayOutcome::Minted { token_ids: ids(&[1, 224, 223]) }
    );
    assert_eq!(env.asset(nft).unwrap().as_erc721().unwrap().total_supply(), 4);
}

#[test]
fn test_erc1155_mints() {
    let mut env = TestEnv::new().with_manager();
    let gateway = env.deployment.gateway;
    let factory = env.nft_factory();
    let multi = env.deploy_basic_erc1155(ALICE, factory, "uri/", Salt::from(2u64)).unwrap();

    let call = RelayCall::Erc1155Mint {
        to: BOB,
        id: U256::from(7),
        amount: U256::from(10),
        data: Bytes::new(),
    };
    env.relay(MANAGER, gateway, multi, &call).unwrap();

    let before = env.asset(multi).unwrap().clone();
    let mismatched = RelayCall::Erc1155MintBatch {
        to: BOB,
        ids: ids(&[1, 2]),
        amounts: ids(&[5]),
        data: Bytes::new(),
    };
    assert_eq!(
        env.relay(MANAGER, gateway, multi, &mismatched),
        Err(GatewayError::Asset(AssetError::LengthMismatch { ids: 2, amounts: 1 }))
    );
    assert_eq!(env.asset(multi), Some(&before));

    let batch = RelayCall::Erc1155MintBatch {
        to: BOB,
        ids: ids(&[7, 8]),
        amounts: ids(&[1, 2]),
        data: Bytes::new(),
    };
    env.relay(MANAGER, gateway, multi, &batch).unwrap();
    let collection = env.asset(multi).unwrap().as_erc1155().unwrap();
    assert_eq!(collection.balance_of(BOB, U256::from(7)), U256::from(11));
    assert_eq!(collection.balance_of(BOB, U256::from(8)), U256::from(2));
}

#[test]
fn test_cap_error_propagates_unchanged() {
    let mut env = TestEnv::new().with_manager();
    let gateway = env.deployment.gateway;
    let factory = env.erc20_factory();
    let capped = env
        .deploy_basic_erc20_capped(
            ALICE,
            factory,
            "Capped",
            "CAP",
            18,
            U256::from(100),
            Salt::default(),
        )
        .unwrap();

    let mint = |amount: u64| RelayCall::Erc20Mint { recipient: BOB, amount: U256::from(amount) };
    env.relay(MANAGER, gateway, capped, &mint(60)).unwrap();
    assert_eq!(
        env.relay(MANAGER, gateway, capped, &mint(41)),
        Err(GatewayError::Asset(AssetError::CapExceeded {
            cap: U256::from(100),
            supply: U256::from(60),
            amount: U256::from(41),
        }))
    );
    env.relay(MANAGER, gateway, capped, &mint(40)).unwrap();
    assert_eq!(env.asset(capped).unwrap().as_erc20().unwrap().total_supply(), U256::from(100));
}

#[test]
fn test_reset_owner() {
    let (mut env, gateway, nft) = setup_nft();
    assert_eq!(
        env.relay(MANAGER, gateway, nft, &RelayCall::ResetOwner { new_owner: BOB }).unwrap(),
        RelayOutcome::OwnerReset { previous: ALICE, new_owner: BOB }
    );
    assert_eq!(env.asset(nft).unwrap().owner(), BOB);
}

#[test]
fn test_asset_accepts_only_its_own_gateway() {
    let (mut env, _, nft) = setup_nft();
    // A second gateway where MANAGER is also a manager.
    let other = env.deploy_gateway(DEPLOYER, ADMIN).unwrap();
    env.add_manager(ADMIN, other, MANAGER).unwrap();

    let before = env.asset(nft).unwrap().clone();
    let call = RelayCall::Erc721Mint { recipient: BOB, token_id: U256::ZERO };
    assert_eq!(
        env.relay(MANAGER, other, nft, &call),
        Err(GatewayError::Asset(AssetError::NotGateway { caller: other }))
    );
    assert_eq!(env.asset(nft), Some(&before));
}

#[test]
fn test_operation_not_supported_by_template() {
    let (mut env, gateway, nft) = setup_nft();
    let call = RelayCall::Erc20Mint { recipient: BOB, amount: U256::from(1) };
    assert_eq!(
        env.relay(MANAGER, gateway, nft, &call),
        Err(GatewayError::Asset(AssetError::UnsupportedOperation {
            operation: "ERC20_mint",
            template: TemplateKind::BasicErc721,
        }))
    );
}
