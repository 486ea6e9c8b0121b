use alloy_primitives::{address, Address};

use super::full_registry;
use crate::{GatewayDeployment, World};

/// Deploys the gateway and both factories.
pub const DEPLOYER: Address = address!("d000000000000000000000000000000000000001");
/// Initial gateway admin.
pub const ADMIN: Address = address!("a000000000000000000000000000000000000001");
/// An account that is made a manager by [`TestEnv::with_manager`].
pub const MANAGER: Address = address!("b000000000000000000000000000000000000001");
/// An account with no role.
pub const ALICE: Address = address!("1000000000000000000000000000000000000001");
/// Another account with no role.
pub const BOB: Address = address!("1000000000000000000000000000000000000002");

/// A world with a gateway and both factories deployed from [`full_registry`].
#[derive(Debug, derive_more::Deref, derive_more::DerefMut)]
pub struct TestEnv {
    #[deref]
    #[deref_mut]
    world: World,
    /// Addresses of the gateway and factories.
    pub deployment: GatewayDeployment,
}

impl TestEnv {
    /// Deploys the gateway administered by [`ADMIN`] and its factories.
    pub fn new() -> Self {
        let mut world = World::new();
        let deployment =
            world.deploy_gateway_and_factories(DEPLOYER, ADMIN, &full_registry()).unwrap();
        Self { world, deployment }
    }

    /// Adds [`MANAGER`] to the manager set.
    pub fn with_manager(mut self) -> Self {
        let gateway = self.deployment.gateway;
        self.world.add_manager(ADMIN, gateway, MANAGER).unwrap();
        self
    }

    /// The NFT factory address.
    pub const fn nft_factory(&self) -> Address {
        self.deployment.nft_factory
    }

    /// The ERC20 factory address.
    pub const fn erc20_factory(&self) -> Address {
        self.deployment.erc20_factory
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
