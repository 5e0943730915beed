//! Operator vocabulary shared by the rigid and conformal algebras.
//!
//! Every product is a trait with an associated `Output` so that each pairing of
//! entity types can name its own result type. Implementations are closed-form
//! per pairing; nothing here evaluates a generic multivector product.

use num_traits::Float;

/// Exterior product. Joins lower-grade entities into the entity spanning them.
pub trait Wedge<Rhs> {
    type Output;
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// Exterior antiproduct. Meets higher-grade entities in their intersection.
pub trait Antiwedge<Rhs> {
    type Output;
    fn antiwedge(self, rhs: Rhs) -> Self::Output;
}

pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Geometric antiproduct, used to compose motors and flectors.
pub trait Antigeo<Rhs> {
    type Output;
    fn antigeo(self, rhs: Rhs) -> Self::Output;
}

/// Metric dual: the complement of the metric applied to the entity.
pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

/// Left complement, `under(a) ∧ a` is the unit antiscalar.
pub trait LeftComplement {
    type Output;
    fn left_comp(self) -> Self::Output;
}

/// Right complement, `a ∧ bar(a)` is the unit antiscalar.
pub trait RightComplement {
    type Output;
    fn right_comp(self) -> Self::Output;
}

pub trait Reverse {
    type Output;
    fn rev(self) -> Self::Output;
}

pub trait Antireverse {
    fn antirev(self) -> Self;
}

/// Squared and plain bulk norm.
pub trait BulkNorm: Sized {
    type Output: Float;

    fn squared_bulk_norm(self) -> Self::Output;

    fn bulk_norm(self) -> Self::Output {
        self.squared_bulk_norm().sqrt()
    }
}

/// Squared and plain weight norm.
pub trait WeightNorm: Sized {
    type Output: Float;

    fn squared_weight_norm(self) -> Self::Output;

    fn weight_norm(self) -> Self::Output {
        self.squared_weight_norm().sqrt()
    }
}

/// Scales an entity so that its weight norm is one.
///
/// A zero weight produces infinite or NaN components.
pub trait Unitize {
    type Output;
    fn unitize(self) -> Self::Output;
}

/// `op ⟇ x ⟇ antirev(op)`, the action of a motor or flector.
pub trait Antisandwich<Rhs> {
    type Output;
    fn antisandwich(self, rhs: Rhs) -> Self::Output;
}

/// Orthogonal projection onto a unitized target.
pub trait Project<Target> {
    type Output;
    fn project(self, target: Target) -> Self::Output;
}

/// Orthogonal antiprojection of `self` through a unitized target.
pub trait Antiproject<Target> {
    type Output;
    fn antiproject(self, target: Target) -> Self::Output;
}

/// Round point at the center of a round entity, carrying its radius.
pub trait Center {
    type Output;
    fn center(self) -> Self::Output;
}

/// Flat point at the center of a round entity.
pub trait FlatCenter {
    type Output;
    fn flat_center(self) -> Self::Output;
}

/// The flat containing a round entity.
pub trait Carrier {
    type Output;
    fn carrier(self) -> Self::Output;
}

/// The round entity with the same center and carrier and negated squared radius.
pub trait Partner {
    type Output;
    fn partner(self) -> Self::Output;
}

/// The sphere (circle in 2D) with the same center and radius.
pub trait Container {
    type Output;
    fn container(self) -> Self::Output;
}

/// Norms that recover the radius and center of a round entity.
pub trait RoundNorm: Copy {
    type Output: Float;

    fn squared_radius_norm(self) -> Self::Output;
    fn squared_center_norm(self) -> Self::Output;
    fn squared_flat_weight_norm(self) -> Self::Output;
    fn squared_flat_bulk_norm(self) -> Self::Output;

    /// Euclidean radius. Imaginary rounds give NaN.
    fn radius(self) -> Self::Output {
        (self.squared_radius_norm() / self.squared_flat_weight_norm()).sqrt()
    }

    /// Distance from the origin to the center.
    fn center_distance(self) -> Self::Output {
        (self.squared_center_norm() / self.squared_flat_weight_norm()).sqrt()
    }
}
