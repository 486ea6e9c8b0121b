//! The authorization registry: one admin and a set of managers.

use std::collections::HashSet;

use alloy_primitives::{Address, LogData};
use alloy_sol_types::SolEvent;
use auto_impl::auto_impl;
use tracing::info;

use crate::{interfaces::ITokenGateway, GatewayError, Role};

/// Answers whether an identity may use the relay surface.
///
/// Assets never copy the answer; the relay asks the live registry on every call.
#[auto_impl(&, Box, Arc)]
pub trait AuthorizationCheck {
    /// Returns `true` if `identity` is currently a manager.
    fn is_manager(&self, identity: Address) -> bool;

    /// Fails with [`GatewayError::Unauthorized`] unless `caller` is a manager.
    fn ensure_manager(&self, caller: Address) -> Result<(), GatewayError> {
        if !self.is_manager(caller) {
            return Err(GatewayError::Unauthorized { caller, required: Role::Manager });
        }
        Ok(())
    }
}

/// An observable change of the registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEvent {
    /// A manager joined the set.
    ManagerAdded(Address),
    /// A manager left the set.
    ManagerRemoved(Address),
    /// The admin role changed hands.
    AdminTransferred {
        /// The admin before the change
        previous: Address,
        /// The admin after the change
        new: Address,
    },
}

impl GatewayEvent {
    /// Encodes the event as an EVM log payload.
    pub fn to_log_data(&self) -> LogData {
        match *self {
            Self::ManagerAdded(manager) => {
                ITokenGateway::ManagerAdded { manager }.encode_log_data()
            }
            Self::ManagerRemoved(manager) => {
                ITokenGateway::ManagerRemoved { manager }.encode_log_data()
            }
            Self::AdminTransferred { previous, new } => {
                ITokenGateway::AdminTransferred { previousAdmin: previous, newAdmin: new }
                    .encode_log_data()
            }
        }
    }
}

/// Registry state of one gateway contract.
///
/// Only the admin can change the manager set or hand over the admin role. Every check reads the
/// current state; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    address: Address,
    admin: Address,
    managers: HashSet<Address>,
}

impl Gateway {
    /// Creates a gateway at `address` administered by `admin`.
    pub fn new(address: Address, admin: Address) -> Result<Self, GatewayError> {
        if admin.is_zero() {
            return Err(GatewayError::InvalidAdmin);
        }
        Ok(Self { address, admin, managers: HashSet::new() })
    }

    /// The gateway's own address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The current admin.
    pub const fn admin(&self) -> Address {
        self.admin
    }

    /// The current managers, in no particular order.
    pub fn managers(&self) -> impl Iterator<Item = Address> + '_ {
        self.managers.iter().copied()
    }

    /// Fails with [`GatewayError::Unauthorized`] unless `caller` is the admin.
    pub fn ensure_admin(&self, caller: Address) -> Result<(), GatewayError> {
        if caller != self.admin {
            return Err(GatewayError::Unauthorized { caller, required: Role::Admin });
        }
        Ok(())
    }

    /// Adds `manager`. Adding an existing manager changes nothing and emits nothing.
    pub fn add_manager(
        &mut self,
        caller: Address,
        manager: Address,
    ) -> Result<Option<GatewayEvent>, GatewayError> {
        self.ensure_admin(caller)?;
        Ok(self.managers.insert(manager).then_some(GatewayEvent::ManagerAdded(manager)))
    }

    /// Removes `manager`. Removing a non-member changes nothing and emits nothing.
    pub fn remove_manager(
        &mut self,
        caller: Address,
        manager: Address,
    ) -> Result<Option<GatewayEvent>, GatewayError> {
        self.ensure_admin(caller)?;
        Ok(self.managers.remove(&manager).then_some(GatewayEvent::ManagerRemoved(manager)))
    }

    /// Hands the admin role to `new_admin`.
    pub fn transfer_admin(
        &mut self,
        caller: Address,
        new_admin: Address,
    ) -> Result<GatewayEvent, GatewayError> {
        self.ensure_admin(caller)?;
        if new_admin.is_zero() {
            return Err(GatewayError::InvalidAdmin);
        }
        let previous = core::mem::replace(&mut self.admin, new_admin);
        info!(target: "token_gateway::gateway", gateway = %self.address, %previous, new = %new_admin, "Transferred gateway admin");
        Ok(GatewayEvent::AdminTransferred { previous, new: new_admin })
    }
}

impl AuthorizationCheck for Gateway {
    fn is_manager(&self, identity: Address) -> bool {
        self.managers.contains(&identity)
    }
}
