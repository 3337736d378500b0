//! Group elements whose group is only known at run time.
//!
//! Statically typed code should use [`G1Projective`], [`G2Projective`] and
//! [`Gt`] directly. [`GroupElement`] serves callers that hold elements of
//! several groups in one collection or decode them from tagged input, and
//! reports [`Error::TypeMismatch`] when an operation mixes groups.

use crate::{Bn, Error, G1Projective, G2Projective, Gt, Result, pairing::pairing};
use core::fmt;

/// Identifies one of the three groups.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    /// The group G1 over `Fp`.
    G1,
    /// The group G2 over `Fp2`.
    G2,
    /// The target group GT in `Fp12`.
    Gt,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupKind::G1 => "G1",
            GroupKind::G2 => "G2",
            GroupKind::Gt => "GT",
        })
    }
}

/// An element of G1, G2 or GT.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GroupElement {
    /// Element of G1.
    G1(G1Projective),
    /// Element of G2.
    G2(G2Projective),
    /// Element of GT.
    Gt(Gt),
}

impl GroupElement {
    /// The group this element belongs to.
    pub fn kind(&self) -> GroupKind {
        match self {
            GroupElement::G1(_) => GroupKind::G1,
            GroupElement::G2(_) => GroupKind::G2,
            GroupElement::Gt(_) => GroupKind::Gt,
        }
    }

    /// Identity of the given group.
    pub fn identity(kind: GroupKind) -> Self {
        match kind {
            GroupKind::G1 => GroupElement::G1(G1Projective::identity()),
            GroupKind::G2 => GroupElement::G2(G2Projective::identity()),
            GroupKind::Gt => GroupElement::Gt(Gt::identity()),
        }
    }

    /// Standard generator of the given group.
    pub fn generator(kind: GroupKind) -> Self {
        match kind {
            GroupKind::G1 => GroupElement::G1(G1Projective::generator()),
            GroupKind::G2 => GroupElement::G2(G2Projective::generator()),
            GroupKind::Gt => GroupElement::Gt(Gt::generator()),
        }
    }

    /// Computes `e(self, other)` for `self` in G1 and `other` in G2.
    pub fn pair(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (GroupElement::G1(p), GroupElement::G2(q)) => {
                Ok(GroupElement::Gt(pairing(&p.to_affine(), &q.to_affine())))
            }
            _ => Err(Error::TypeMismatch),
        }
    }

    /// Applies the group law: point addition in G1 and G2, multiplication
    /// in GT.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (GroupElement::G1(a), GroupElement::G1(b)) => Ok(GroupElement::G1(a + b)),
            (GroupElement::G2(a), GroupElement::G2(b)) => Ok(GroupElement::G2(a + b)),
            (GroupElement::Gt(a), GroupElement::Gt(b)) => Ok(GroupElement::Gt(a * b)),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// Scalar multiplication in G1 and G2, exponentiation in GT.
    pub fn scale(&self, k: &Bn) -> Self {
        match self {
            GroupElement::G1(p) => GroupElement::G1(p * k),
            GroupElement::G2(p) => GroupElement::G2(p * k),
            GroupElement::Gt(x) => GroupElement::Gt(x.pow(k)),
        }
    }

    /// Group inverse.
    pub fn inverse(&self) -> Self {
        match self {
            GroupElement::G1(p) => GroupElement::G1(-p),
            GroupElement::G2(p) => GroupElement::G2(-p),
            GroupElement::Gt(x) => GroupElement::Gt(x.invert()),
        }
    }

    /// Is this the identity of its group?
    pub fn is_identity(&self) -> bool {
        match self {
            GroupElement::G1(p) => p.is_identity().into(),
            GroupElement::G2(p) => p.is_identity().into(),
            GroupElement::Gt(x) => x.is_identity().into(),
        }
    }

    /// Is this a member of the prime order subgroup?
    pub fn is_valid(&self) -> bool {
        match self {
            GroupElement::G1(p) => p.is_valid().into(),
            GroupElement::G2(p) => p.is_valid().into(),
            GroupElement::Gt(x) => x.is_valid().into(),
        }
    }

    /// Encodes the element. `compressed` is ignored for GT.
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        match self {
            GroupElement::G1(p) => p.to_bytes(compressed),
            GroupElement::G2(p) => p.to_bytes(compressed),
            GroupElement::Gt(x) => x.to_bytes().to_vec(),
        }
    }

    /// Decodes and validates an element of the given group.
    pub fn from_bytes(kind: GroupKind, bytes: &[u8]) -> Result<Self> {
        match kind {
            GroupKind::G1 => G1Projective::from_bytes(bytes).map(GroupElement::G1),
            GroupKind::G2 => G2Projective::from_bytes(bytes).map(GroupElement::G2),
            GroupKind::Gt => Gt::from_bytes(bytes).map(GroupElement::Gt),
        }
    }
}

impl From<G1Projective> for GroupElement {
    fn from(p: G1Projective) -> Self {
        GroupElement::G1(p)
    }
}

impl From<G2Projective> for GroupElement {
    fn from(p: G2Projective) -> Self {
        GroupElement::G2(p)
    }
}

impl From<Gt> for GroupElement {
    fn from(x: Gt) -> Self {
        GroupElement::Gt(x)
    }
}

impl TryFrom<GroupElement> for G1Projective {
    type Error = Error;

    fn try_from(element: GroupElement) -> Result<Self> {
        match element {
            GroupElement::G1(p) => Ok(p),
            _ => Err(Error::TypeMismatch),
        }
    }
}

impl TryFrom<GroupElement> for G2Projective {
    type Error = Error;

    fn try_from(element: GroupElement) -> Result<Self> {
        match element {
            GroupElement::G2(p) => Ok(p),
            _ => Err(Error::TypeMismatch),
        }
    }
}

impl TryFrom<GroupElement> for Gt {
    type Error = Error;

    fn try_from(element: GroupElement) -> Result<Self> {
        match element {
            GroupElement::Gt(x) => Ok(x),
            _ => Err(Error::TypeMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupElement, GroupKind};
    use crate::{Bn, Error, G1Projective, Gt};

    #[test]
    fn pairing_requires_g1_then_g2() {
        let g1 = GroupElement::generator(GroupKind::G1);
        let g2 = GroupElement::generator(GroupKind::G2);
        assert_eq!(g1.pair(&g2).unwrap(), GroupElement::Gt(Gt::generator()));
        assert_eq!(g1.pair(&g1), Err(Error::TypeMismatch));
        assert_eq!(g2.pair(&g1), Err(Error::TypeMismatch));
    }

    #[test]
    fn combine_rejects_mixed_groups() {
        let g1 = GroupElement::generator(GroupKind::G1);
        let gt = GroupElement::identity(GroupKind::Gt);
        assert_eq!(g1.combine(&gt), Err(Error::TypeMismatch));
        assert_eq!(
            g1.combine(&g1).unwrap(),
            GroupElement::G1(G1Projective::generator().double())
        );
        assert_eq!(G1Projective::try_from(gt), Err(Error::TypeMismatch));
    }

    #[test]
    fn scale_and_inverse() {
        for kind in [GroupKind::G1, GroupKind::G2, GroupKind::Gt] {
            let g = GroupElement::generator(kind);
            let sum = g.scale(&Bn::from(5)).combine(&g.inverse()).unwrap();
            assert_eq!(sum, g.scale(&Bn::from(4)));
            assert!(g.scale(&Bn::zero()).is_identity());
            assert!(g.is_valid());
            assert_eq!(GroupElement::from_bytes(kind, &g.to_bytes(true)).unwrap(), g);
            assert_eq!(g.kind(), kind);
        }
    }
}
