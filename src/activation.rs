//! Activation functions.
//!
//! The forward pass keeps both pre-activation (`v`) and post-activation (`y`)
//! matrices, so derivatives are taken from the pre-activation value directly.

/// Element-wise activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    ReLU,
    Identity,
}

impl Activation {
    #[inline]
    pub fn forward(self, z: f64) -> f64 {
        match self {
            Activation::ReLU => z.max(0.0),
            Activation::Identity => z,
        }
    }

    /// Derivative with respect to the pre-activation input `z`.
    ///
    /// ReLU's derivative at exactly 0 is defined as 0 (the comparison is `>`,
    /// not `>=`).
    #[inline]
    pub fn grad(self, z: f64) -> f64 {
        match self {
            Activation::ReLU => {
                if z > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(Activation::ReLU.forward(-2.0), 0.0);
        assert_eq!(Activation::ReLU.forward(0.0), 0.0);
        assert_eq!(Activation::ReLU.forward(3.0), 3.0);
    }

    #[test]
    fn relu_grad_is_zero_at_the_origin() {
        assert_eq!(Activation::ReLU.grad(-1.0), 0.0);
        assert_eq!(Activation::ReLU.grad(0.0), 0.0);
        assert_eq!(Activation::ReLU.grad(1e-9), 1.0);
    }

    #[test]
    fn identity_passes_through() {
        assert_eq!(Activation::Identity.forward(-4.5), -4.5);
        assert_eq!(Activation::Identity.grad(-4.5), 1.0);
        assert_eq!(Activation::Identity.grad(123.0), 1.0);
    }
}
