//! Factories deploy templates at CREATE2 addresses and bind them to one gateway.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::{
    AbiValue, BasicErc1155Args, BasicErc20Args, BasicErc20CappedArgs, BasicErc721Args,
    DeployError, DeployedAsset, DeploymentPlan, Salt, Template, TemplateArgs, TemplateRegistry,
};

/// A deployed factory contract.
///
/// The factory resolves templates by name from its registry, derives the deployment address with
/// the same pipeline as [`crate::predict`], and runs the asset constructor.
#[derive(Debug, Clone)]
pub struct Factory {
    address: Address,
    gateway: Address,
    templates: Arc<TemplateRegistry>,
}

impl Factory {
    /// Creates a factory at `address` whose typed entry points bind assets to `gateway`.
    pub const fn new(address: Address, gateway: Address, templates: Arc<TemplateRegistry>) -> Self {
        Self { address, gateway, templates }
    }

    /// The factory's own address, used as the CREATE2 deployer.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The gateway injected by the typed entry points.
    pub const fn gateway(&self) -> Address {
        self.gateway
    }

    /// The templates this factory can deploy.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Resolves `template_name` and computes where deploying it with `values` and `salt` lands.
    pub fn plan(
        &self,
        template_name: &str,
        values: &[AbiValue],
        salt: Salt,
    ) -> Result<(&Template, DeploymentPlan), DeployError> {
        let template = self
            .templates
            .get(template_name)
            .ok_or_else(|| DeployError::UnknownTemplate(template_name.to_string()))?;
        let plan = DeploymentPlan::new(self.address, template, values, salt).map_err(|source| {
            DeployError::Encoding { template: template_name.to_string(), source }
        })?;
        Ok((template, plan))
    }

    /// The address a deployment would occupy. Has no side effects.
    pub fn predict(
        &self,
        template_name: &str,
        values: &[AbiValue],
        salt: Salt,
    ) -> Result<Address, DeployError> {
        Ok(self.plan(template_name, values, salt)?.1.address)
    }

    /// Builds the asset a deployment by `caller` would create.
    ///
    /// The arguments must name this factory's gateway. `is_occupied` reports whether an address
    /// already hosts a contract; a collision fails before the constructor runs. The caller is
    /// responsible for storing the returned asset at its address.
    pub fn deploy(
        &self,
        caller: Address,
        template_name: &str,
        values: &[AbiValue],
        salt: Salt,
        is_occupied: impl Fn(Address) -> bool,
    ) -> Result<DeployedAsset, DeployError> {
        let (template, plan) = self.plan(template_name, values, salt)?;
        let args = TemplateArgs::from_values(template.kind(), values).map_err(|source| {
            DeployError::Encoding { template: template_name.to_string(), source }
        })?;
        if args.gateway() != self.gateway {
            return Err(DeployError::GatewayMismatch {
                expected: self.gateway,
                found: args.gateway(),
            });
        }
        if is_occupied(plan.address) {
            return Err(DeployError::SaltCollision { address: plan.address, salt });
        }

        let asset = DeployedAsset::construct(plan.address, template_name, caller, args)
            .map_err(|source| DeployError::Constructor {
                template: template_name.to_string(),
                source,
            })?;

        debug!(
            target: "token_gateway::factory",
            factory = %self.address,
            template = template_name,
            %salt,
            address = %plan.address,
            init_code_hash = %plan.init_code_hash,
            "Deployed asset"
        );
        Ok(asset)
    }

    /// `BasicERC721` arguments for a collection owned by `caller`.
    pub fn basic_erc721_args(
        &self,
        caller: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        base_uri: impl Into<String>,
    ) -> BasicErc721Args {
        BasicErc721Args {
            owner: caller,
            name: name.into(),
            symbol: symbol.into(),
            base_uri: base_uri.into(),
            operator_filter_registrant: Address::ZERO,
            subscribe: false,
            gateway: self.gateway,
        }
    }

    /// `BasicERC1155` arguments for a collection owned by `caller`.
    pub fn basic_erc1155_args(&self, caller: Address, uri: impl Into<String>) -> BasicErc1155Args {
        BasicErc1155Args {
            owner: caller,
            uri: uri.into(),
            operator_filter_registrant: Address::ZERO,
            subscribe: false,
            gateway: self.gateway,
        }
    }

    /// `BasicERC20` arguments bound to this factory's gateway.
    pub fn basic_erc20_args(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> BasicErc20Args {
        BasicErc20Args { name: name.into(), symbol: symbol.into(), decimals, gateway: self.gateway }
    }

    /// `BasicERC20Capped` arguments bound to this factory's gateway.
    pub fn basic_erc20_capped_args(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        cap: U256,
    ) -> BasicErc20CappedArgs {
        BasicErc20CappedArgs {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            cap,
            gateway: self.gateway,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::templates, predict, ConstructorArgs, EncodingError, TemplateKind};
    use alloy_primitives::{address, bytes};

    const FACTORY: Address = address!("f000000000000000000000000000000000000001");
    const GATEWAY: Address = address!("00000000000000000000000000000000000000aa");
    const CALLER: Address = address!("1000000000000000000000000000000000000001");

    fn factory() -> Factory {
        let registry = TemplateRegistry::new()
            .with_template(templates::BASIC_ERC20, TemplateKind::BasicErc20, bytes!("60806040"))
            .unwrap()
            .with_template(
                templates::BASIC_ERC20_CAPPED,
                TemplateKind::BasicErc20Capped,
                bytes!("60806041"),
            )
            .unwrap();
        Factory::new(FACTORY, GATEWAY, Arc::new(registry))
    }

    #[test]
    fn test_predict_matches_oracle() {
        let factory = factory();
        let args = factory.basic_erc20_args("Token", "TKN", 9);
        let salt = Salt::from(233u64);
        let expected = predict(FACTORY, &bytes!("60806040"), &args.encode().unwrap(), salt);
        assert_eq!(
            factory.predict(templates::BASIC_ERC20, &args.to_values(), salt).unwrap(),
            expected
        );

        let asset = factory
            .deploy(CALLER, templates::BASIC_ERC20, &args.to_values(), salt, |_| false)
            .unwrap();
        assert_eq!(asset.address(), expected);
        assert_eq!(asset.gateway(), GATEWAY);
        assert_eq!(asset.owner(), CALLER);
    }

    #[test]
    fn test_unknown_template() {
        assert_eq!(
            factory().predict("BasicERC777", &[], Salt::default()),
            Err(DeployError::UnknownTemplate("BasicERC777".to_string()))
        );
    }

    #[test]
    fn test_encoding_error_names_template() {
        let values = vec![AbiValue::from("Token"), AbiValue::from("TKN")];
        assert_eq!(
            factory().predict(templates::BASIC_ERC20, &values, Salt::default()),
            Err(DeployError::Encoding {
                template: templates::BASIC_ERC20.to_string(),
                source: EncodingError::ArityMismatch { expected: 4, actual: 2 },
            })
        );
    }

    #[test]
    fn test_collision_checked_before_constructor() {
        let factory = factory();
        // A zero cap would fail in the constructor, but the collision is reported first.
        let args = factory.basic_erc20_capped_args("Capped", "CAP", 18, U256::ZERO);
        let salt = Salt::from(1u64);
        let address =
            factory.predict(templates::BASIC_ERC20_CAPPED, &args.to_values(), salt).unwrap();
        assert_eq!(
            factory
                .deploy(CALLER, templates::BASIC_ERC20_CAPPED, &args.to_values(), salt, |a| {
                    a == address
                })
                .unwrap_err(),
            DeployError::SaltCollision { address, salt }
        );
        assert!(matches!(
            factory.deploy(CALLER, templates::BASIC_ERC20_CAPPED, &args.to_values(), salt, |_| {
                false
            }),
            Err(DeployError::Constructor { .. })
        ));
    }

    #[test]
    fn test_arguments_must_name_factory_gateway() {
        let factory = factory();
        let other = address!("00000000000000000000000000000000000000bb");
        let args = BasicErc20Args { gateway: other, ..factory.basic_erc20_args("Token", "TKN", 9) };
        assert_eq!(
            factory
                .deploy(CALLER, templates::BASIC_ERC20, &args.to_values(), Salt::default(), |_| {
                    false
                })
                .unwrap_err(),
            DeployError::GatewayMismatch { expected: GATEWAY, found: other }
        );
    }
}
