use alloy_primitives::{keccak256, Bytes};

use crate::{TemplateKind, TemplateRegistry};

/// Solidity's creation code preamble: `PUSH1 0x80 PUSH1 0x40 MSTORE`.
const PREAMBLE: [u8; 5] = [0x60, 0x80, 0x60, 0x40, 0x52];

/// Deterministic stand-in creation code for `kind`. Different kinds get different code.
pub fn template_code(kind: TemplateKind) -> Bytes {
    let tag = keccak256(kind.name());
    [PREAMBLE.as_slice(), &tag[..16]].concat().into()
}

/// A registry holding every template kind under its canonical name.
pub fn full_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for kind in TemplateKind::ALL {
        registry.register(kind.name(), kind, template_code(kind)).unwrap();
    }
    registry
}
