//! Tests for factory deployments.

use alloy_primitives::U256;
use token_gateway::{test_utils::*, *};

#[test]
fn test_salt_collision() {
    let mut env = TestEnv::new();
    let factory = env.erc20_factory();
    let salt = Salt::from(233u64);

    let first = env.deploy_basic_erc20(ALICE, factory, "Token", "TKN", 9, salt).unwrap();
    let before = env.asset(first).unwrap().clone();

    // Same template, arguments and salt, even from another caller.
    assert_eq!(
        env.deploy_basic_erc20(BOB, factory, "Token", "TKN", 9, salt),
        Err(DeployError::SaltCollision { address: first, salt })
    );
    assert_eq!(env.asset(first), Some(&before));

    let second =
        env.deploy_basic_erc20(ALICE, factory, "Token", "TKN", 9, Salt::from(234u64)).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_unknown_template() {
    let mut env = TestEnv::new();
    let factory = env.nft_factory();
    // The NFT factory does not host the fungible templates.
    assert_eq!(
        env.deploy_basic_erc20(ALICE, factory, "Token", "TKN", 9, Salt::default()),
        Err(DeployError::UnknownTemplate("BasicERC20".to_string()))
    );
    assert_eq!(
        env.deploy(ALICE, factory, "BasicERC777", &[], Salt::default()),
        Err(DeployError::UnknownTemplate("BasicERC777".to_string()))
    );
}

#[test]
fn test_unknown_factory() {
    let mut env = TestEnv::new();
    let gateway = env.deployment.gateway;
    assert_eq!(
        env.deploy_basic_erc20(ALICE, gateway, "Token", "TKN", 9, Salt::default()),
        Err(DeployError::UnknownFactory(gateway))
    );
}

#[test]
fn test_arity_mismatch_is_encoding_error() {
    let mut env = TestEnv::new();
    let factory = env.erc20_factory();
    let values = vec![AbiValue::from("Token"), AbiValue::from("TKN"), AbiValue::from(9u8)];
    assert_eq!(
        env.deploy(ALICE, factory, "BasicERC20", &values, Salt::default()),
        Err(DeployError::Encoding {
            template: "BasicERC20".to_string(),
            source: EncodingError::ArityMismatch { expected: 4, actual: 3 },
        })
    );
}

#[test]
fn test_constructor_failure_deploys_nothing() {
    let mut env = TestEnv::new();
    let factory = env.erc20_factory();
    let salt = Salt::from(7u64);
    let values = env
        .factory(factory)
        .unwrap()
        .basic_erc20_capped_args("Capped", "CAP", 18, U256::ZERO)
        .to_values();
    let address = env.predict(factory, "BasicERC20Capped", &values, salt).unwrap();

    assert_eq!(
        env.deploy(ALICE, factory, "BasicERC20Capped", &values, salt),
        Err(DeployError::Constructor {
            template: "BasicERC20Capped".to_string(),
            source: AssetError::ZeroCap,
        })
    );
    assert!(!env.is_occupied(address));
}

#[test]
fn test_typed_entry_points_inject_owner_and_gateway() {
    let mut env = TestEnv::new();
    let gateway = env.deployment.gateway;
    let nft_factory = env.nft_factory();
    let erc20_factory = env.erc20_factory();

    let nft = env
        .deploy_basic_erc721(ALICE, nft_factory, "U2-contract", "U2T", "baseURI/", Salt::from(1u64))
        .unwrap();
    let multi = env.deploy_basic_erc1155(BOB, nft_factory, "uri/", Salt::from(1u64)).unwrap();
    let capped = env
        .deploy_basic_erc20_capped(
            BOB,
            erc20_factory,
            "Capped",
            "CAP",
            18,
            U256::from(1000),
            Salt::from(1u64),
        )
        .unwrap();

    let nft = env.asset(nft).unwrap();
    assert_eq!((nft.owner(), nft.gateway()), (ALICE, gateway));
    assert_eq!(nft.as_erc721().unwrap().operator_filter(), &OperatorFilter::default());

    let multi = env.asset(multi).unwrap();
    assert_eq!((multi.owner(), multi.gateway()), (BOB, gateway));
    assert_eq!(multi.as_erc1155().unwrap().uri(), "uri/");

    let capped = env.asset(capped).unwrap();
    assert_eq!((capped.owner(), capped.gateway()), (BOB, gateway));
    assert_eq!(capped.as_erc20().unwrap().cap(), Some(U256::from(1000)));
}

#[test]
fn test_factory_rejects_foreign_gateway() {
    let mut env = TestEnv::new();
    let factory = env.erc20_factory();
    let gateway = env.deployment.gateway;

    // BOB runs his own gateway and manages it.
    let rogue = env.deploy_gateway(BOB, BOB).unwrap();
    env.add_manager(BOB, rogue, BOB).unwrap();

    let args = BasicErc20Args {
        gateway: rogue,
        ..env.factory(factory).unwrap().basic_erc20_args("Token", "TKN", 9)
    };
    let salt = Salt::from(1u64);
    let address = env.predict(factory, "BasicERC20", &args.to_values(), salt).unwrap();

    assert_eq!(
        env.deploy(ALICE, factory, "BasicERC20", &args.to_values(), salt),
        Err(DeployError::GatewayMismatch { expected: gateway, found: rogue })
    );
    assert!(!env.is_occupied(address));
    assert_eq!(
        env.relay(
            BOB,
            rogue,
            address,
            &RelayCall::Erc20Mint { recipient: BOB, amount: U256::from(1000) }
        ),
        Err(GatewayError::NoContract(address))
    );
}
