//! The execution substrate hosting gateways, factories and their assets.
//!
//! Every mutating operation takes `&mut World`, so operations apply one at a time and each one
//! observes the effects of all earlier ones. Failed operations leave the world unchanged.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use alloy_primitives::{Address, Log, U256};
use tracing::{debug, info};

use crate::{
    constants::templates, relay, AbiValue, AuthorizationCheck, ConstructorArgs, DeployError,
    DeployedAsset, Factory, Gateway, GatewayError, GatewayEvent, RelayCall, RelayOutcome, Salt,
    TemplateKind, TemplateRegistry,
};

/// Addresses produced by [`World::deploy_gateway_and_factories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayDeployment {
    /// The gateway contract.
    pub gateway: Address,
    /// Factory for the `BasicERC721` and `BasicERC1155` templates.
    pub nft_factory: Address,
    /// Factory for the `BasicERC20` and `BasicERC20Capped` templates.
    pub erc20_factory: Address,
}

/// In-memory chain state.
#[derive(Debug, Default)]
pub struct World {
    gateways: HashMap<Address, Gateway>,
    factories: HashMap<Address, Factory>,
    assets: HashMap<Address, DeployedAsset>,
    nonces: HashMap<Address, u64>,
    logs: Vec<Log>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `address` hosts any contract.
    pub fn is_occupied(&self, address: Address) -> bool {
        self.gateways.contains_key(&address) ||
            self.factories.contains_key(&address) ||
            self.assets.contains_key(&address)
    }

    /// Number of CREATE deployments made by `deployer` so far.
    pub fn nonce(&self, deployer: Address) -> u64 {
        self.nonces.get(&deployer).copied().unwrap_or_default()
    }

    /// The address `deployer`'s next CREATE deployment lands at.
    pub fn predict_create(&self, deployer: Address) -> Address {
        deployer.create(self.nonce(deployer))
    }

    /// Gateway state at `address`.
    pub fn gateway(&self, address: Address) -> Option<&Gateway> {
        self.gateways.get(&address)
    }

    /// Factory at `address`.
    pub fn factory(&self, address: Address) -> Option<&Factory> {
        self.factories.get(&address)
    }

    /// Asset at `address`.
    pub fn asset(&self, address: Address) -> Option<&DeployedAsset> {
        self.assets.get(&address)
    }

    /// Logs emitted so far, oldest first.
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Deploys a gateway administered by `admin` at `deployer`'s next CREATE address.
    pub fn deploy_gateway(
        &mut self,
        deployer: Address,
        admin: Address,
    ) -> Result<Address, DeployError> {
        let address = self.next_create_address(deployer)?;
        let gateway = Gateway::new(address, admin)?;
        self.bump_nonce(deployer);
        self.gateways.insert(address, gateway);
        info!(target: "token_gateway::world", %address, %admin, "Deployed gateway");
        Ok(address)
    }

    /// Deploys a factory bound to `gateway` at `deployer`'s next CREATE address.
    pub fn deploy_factory(
        &mut self,
        deployer: Address,
        gateway: Address,
        templates: Arc<TemplateRegistry>,
    ) -> Result<Address, DeployError> {
        if !self.gateways.contains_key(&gateway) {
            return Err(GatewayError::UnknownGateway(gateway).into());
        }
        let address = self.next_create_address(deployer)?;
        self.bump_nonce(deployer);
        info!(target: "token_gateway::world", %address, %gateway, templates = templates.len(), "Deployed factory");
        self.factories.insert(address, Factory::new(address, gateway, templates));
        Ok(address)
    }

    /// Deploys a gateway, then an NFT factory and an ERC20 factory bound to it.
    ///
    /// The three contracts take `deployer`'s next three CREATE addresses, so the whole set is
    /// known in advance. Each factory sees only the templates of its own kinds from `templates`.
    pub fn deploy_gateway_and_factories(
        &mut self,
        deployer: Address,
        admin: Address,
        templates: &TemplateRegistry,
    ) -> Result<GatewayDeployment, DeployError> {
        let nft = templates.restricted_to(&[TemplateKind::BasicErc721, TemplateKind::BasicErc1155]);
        let erc20 =
            templates.restricted_to(&[TemplateKind::BasicErc20, TemplateKind::BasicErc20Capped]);

        let gateway = self.deploy_gateway(deployer, admin)?;
        let nft_factory = self.deploy_factory(deployer, gateway, Arc::new(nft))?;
        let erc20_factory = self.deploy_factory(deployer, gateway, Arc::new(erc20))?;
        Ok(GatewayDeployment { gateway, nft_factory, erc20_factory })
    }

    /// Predicts where `factory` would deploy `template_name` with `values` and `salt`.
    pub fn predict(
        &self,
        factory: Address,
        template_name: &str,
        values: &[AbiValue],
        salt: Salt,
    ) -> Result<Address, DeployError> {
        self.factory_at(factory)?.predict(template_name, values, salt)
    }

    /// Deploys `template_name` through `factory` on behalf of `caller`.
    pub fn deploy(
        &mut self,
        caller: Address,
        factory: Address,
        template_name: &str,
        values: &[AbiValue],
        salt: Salt,
    ) -> Result<Address, DeployError> {
        let asset = self
            .factory_at(factory)?
            .deploy(caller, template_name, values, salt, |address| self.is_occupied(address))?;
        let address = asset.address();
        self.assets.insert(address, asset);
        Ok(address)
    }

    /// Deploys a `BasicERC721` collection owned by `caller`.
    pub fn deploy_basic_erc721(
        &mut self,
        caller: Address,
        factory: Address,
        name: &str,
        symbol: &str,
        base_uri: &str,
        salt: Salt,
    ) -> Result<Address, DeployError> {
        let args = self.factory_at(factory)?.basic_erc721_args(caller, name, symbol, base_uri);
        self.deploy(caller, factory, templates::BASIC_ERC721, &args.to_values(), salt)
    }

    /// Deploys a `BasicERC1155` collection owned by `caller`.
    pub fn deploy_basic_erc1155(
        &mut self,
        caller: Address,
        factory: Address,
        uri: &str,
        salt: Salt,
    ) -> Result<Address, DeployError> {
        let args = self.factory_at(factory)?.basic_erc1155_args(caller, uri);
        self.deploy(caller, factory, templates::BASIC_ERC1155, &args.to_values(), salt)
    }

    /// Deploys a `BasicERC20` token owned by `caller`.
    pub fn deploy_basic_erc20(
        &mut self,
        caller: Address,
        factory: Address,
        name: &str,
        symbol: &str,
        decimals: u8,
        salt: Salt,
    ) -> Result<Address, DeployError> {
        let args = self.factory_at(factory)?.basic_erc20_args(name, symbol, decimals);
        self.deploy(caller, factory, templates::BASIC_ERC20, &args.to_values(), salt)
    }

    /// Deploys a `BasicERC20Capped` token owned by `caller`.
    #[allow(clippy::too_many_arguments)]
    pub fn deploy_basic_erc20_capped(
        &mut self,
        caller: Address,
        factory: Address,
        name: &str,
        symbol: &str,
        decimals: u8,
        cap: U256,
        salt: Salt,
    ) -> Result<Address, DeployError> {
        let args = self.factory_at(factory)?.basic_erc20_capped_args(name, symbol, decimals, cap);
        self.deploy(caller, factory, templates::BASIC_ERC20_CAPPED, &args.to_values(), salt)
    }

    /// Adds `manager` to `gateway`'s manager set. Returns whether the set changed.
    pub fn add_manager(
        &mut self,
        caller: Address,
        gateway: Address,
        manager: Address,
    ) -> Result<bool, GatewayError> {
        let event = self.gateway_mut(gateway)?.add_manager(caller, manager)?;
        Ok(self.record(gateway, event))
    }

    /// Removes `manager` from `gateway`'s manager set. Returns whether the set changed.
    pub fn remove_manager(
        &mut self,
        caller: Address,
        gateway: Address,
        manager: Address,
    ) -> Result<bool, GatewayError> {
        let event = self.gateway_mut(gateway)?.remove_manager(caller, manager)?;
        Ok(self.record(gateway, event))
    }

    /// Hands `gateway`'s admin role to `new_admin`.
    pub fn transfer_admin(
        &mut self,
        caller: Address,
        gateway: Address,
        new_admin: Address,
    ) -> Result<(), GatewayError> {
        let event = self.gateway_mut(gateway)?.transfer_admin(caller, new_admin)?;
        self.record(gateway, Some(event));
        Ok(())
    }

    /// Whether `identity` is currently a manager of `gateway`. Unknown gateways have no managers.
    pub fn is_manager(&self, gateway: Address, identity: Address) -> bool {
        self.gateways.get(&gateway).is_some_and(|g| g.is_manager(identity))
    }

    /// Every manager of `gateway`, if it exists.
    pub fn managers(&self, gateway: Address) -> Option<HashSet<Address>> {
        self.gateways.get(&gateway).map(|g| g.managers().collect())
    }

    /// Relays `call` from `caller` through `gateway` to the asset at `target`.
    pub fn relay(
        &mut self,
        caller: Address,
        gateway: Address,
        target: Address,
        call: &RelayCall,
    ) -> Result<RelayOutcome, GatewayError> {
        let auth = self.gateways.get(&gateway).ok_or(GatewayError::UnknownGateway(gateway))?;
        let asset = self.assets.get_mut(&target).ok_or(GatewayError::NoContract(target))?;
        let outcome = relay(auth, gateway, caller, asset, call)?;
        debug!(target: "token_gateway::world", %gateway, %target, operation = call.name(), ?outcome, "Relayed call");
        Ok(outcome)
    }

    fn factory_at(&self, address: Address) -> Result<&Factory, DeployError> {
        self.factories.get(&address).ok_or(DeployError::UnknownFactory(address))
    }

    fn gateway_mut(&mut self, address: Address) -> Result<&mut Gateway, GatewayError> {
        self.gateways.get_mut(&address).ok_or(GatewayError::UnknownGateway(address))
    }

    fn next_create_address(&self, deployer: Address) -> Result<Address, DeployError> {
        let address = self.predict_create(deployer);
        if self.is_occupied(address) {
            return Err(DeployError::AddressOccupied(address));
        }
        Ok(address)
    }

    fn bump_nonce(&mut self, deployer: Address) {
        *self.nonces.entry(deployer).or_default() += 1;
    }

    fn record(&mut self, gateway: Address, event: Option<GatewayEvent>) -> bool {
        let Some(event) = event else { return false };
        debug!(target: "token_gateway::world", %gateway, ?event, "Gateway event");
        self.logs.push(Log { address: gateway, data: event.to_log_data() });
        true
    }
}
