use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Surface tension, N/m (force per unit length) in SI.
///
/// [`uom`] has no built-in surface tension quantity, so this alias names the
/// dimension directly. It is what dividing a `Force` by a `Length` produces.
pub type SurfaceTension = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
