//! `core::ops` operator overloads for Gaussian values.
//!
//! Operators delegate to the `checked_*` methods and panic with the error
//! message when the operands are incompatible (mismatched dimensions, a
//! singular divisor). Use the `checked_*` forms to handle those cases.
//!
//! `^` is not overloaded for powers; use [`Mvar::pow`]. `&` blends.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::DMatrix;

use crate::engine::mvar::Mvar;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MvarError;

fn settle<V>(op: &str, result: Result<V, MvarError>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Mvar `{}` failed: {}", op, err),
    }
}

/// Implements an owned-operand form of a binary operator by borrowing both sides.
macro_rules! forward_owned {
    ($trait:ident, $method:ident, $rhs:ty, $out:ty) => {
        impl<T: FloatLinalg> $trait<$rhs> for Mvar<T> {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                (&self).$method(&rhs)
            }
        }
    };
}

// ============================================================================
// Sum and difference
// ============================================================================

impl<'b, T: FloatLinalg> Add<&'b Mvar<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn add(self, rhs: &'b Mvar<T>) -> Mvar<T> {
        settle("+", self.checked_add(rhs))
    }
}

impl<'b, T: FloatLinalg> Sub<&'b Mvar<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn sub(self, rhs: &'b Mvar<T>) -> Mvar<T> {
        settle("-", self.checked_sub(rhs))
    }
}

forward_owned!(Add, add, Mvar<T>, Mvar<T>);
forward_owned!(Sub, sub, Mvar<T>, Mvar<T>);

impl<T: FloatLinalg> Neg for &Mvar<T> {
    type Output = Mvar<T>;

    fn neg(self) -> Mvar<T> {
        self.scaled(-T::one())
    }
}

impl<T: FloatLinalg> Neg for Mvar<T> {
    type Output = Mvar<T>;

    fn neg(self) -> Mvar<T> {
        -&self
    }
}

// ============================================================================
// Products
// ============================================================================

impl<T: FloatLinalg> Mul<T> for &Mvar<T> {
    type Output = Mvar<T>;

    fn mul(self, k: T) -> Mvar<T> {
        self.scaled(k)
    }
}

impl<T: FloatLinalg> Mul<T> for Mvar<T> {
    type Output = Mvar<T>;

    fn mul(self, k: T) -> Mvar<T> {
        self.scaled(k)
    }
}

impl<'b, T: FloatLinalg> Mul<&'b DMatrix<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn mul(self, rhs: &'b DMatrix<T>) -> Mvar<T> {
        settle("*", self.transform(rhs))
    }
}

impl<'b, T: FloatLinalg> Mul<&'b Mvar<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn mul(self, rhs: &'b Mvar<T>) -> Mvar<T> {
        settle("*", self.transform(&rhs.sqrt_cov()))
    }
}

forward_owned!(Mul, mul, DMatrix<T>, Mvar<T>);
forward_owned!(Mul, mul, Mvar<T>, Mvar<T>);

impl<'a, 'b, T: FloatLinalg> Mul<&'b Mvar<T>> for &'a DMatrix<T> {
    type Output = DMatrix<T>;

    fn mul(self, rhs: &'b Mvar<T>) -> DMatrix<T> {
        settle("*", rhs.left_multiply(self))
    }
}

impl<T: FloatLinalg> Mul<Mvar<T>> for DMatrix<T> {
    type Output = DMatrix<T>;

    fn mul(self, rhs: Mvar<T>) -> DMatrix<T> {
        &self * &rhs
    }
}

macro_rules! scalar_left_mul {
    ($($t:ty),*) => {$(
        impl Mul<Mvar<$t>> for $t {
            type Output = Mvar<$t>;

            fn mul(self, rhs: Mvar<$t>) -> Mvar<$t> {
                rhs.scaled(self)
            }
        }

        impl<'b> Mul<&'b Mvar<$t>> for $t {
            type Output = Mvar<$t>;

            fn mul(self, rhs: &'b Mvar<$t>) -> Mvar<$t> {
                rhs.scaled(self)
            }
        }

        impl Div<Mvar<$t>> for $t {
            type Output = Mvar<$t>;

            fn div(self, rhs: Mvar<$t>) -> Mvar<$t> {
                rhs.inverse().scaled(self)
            }
        }

        impl<'b> Div<&'b Mvar<$t>> for $t {
            type Output = Mvar<$t>;

            fn div(self, rhs: &'b Mvar<$t>) -> Mvar<$t> {
                rhs.inverse().scaled(self)
            }
        }
    )*};
}

scalar_left_mul!(f32, f64);

// ============================================================================
// Quotients
// ============================================================================

impl<T: FloatLinalg> Div<T> for &Mvar<T> {
    type Output = Mvar<T>;

    fn div(self, k: T) -> Mvar<T> {
        settle("/", self.checked_div(k))
    }
}

impl<T: FloatLinalg> Div<T> for Mvar<T> {
    type Output = Mvar<T>;

    fn div(self, k: T) -> Mvar<T> {
        &self / k
    }
}

impl<'b, T: FloatLinalg> Div<&'b DMatrix<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn div(self, rhs: &'b DMatrix<T>) -> Mvar<T> {
        settle("/", self.checked_div(rhs))
    }
}

impl<'b, T: FloatLinalg> Div<&'b Mvar<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn div(self, rhs: &'b Mvar<T>) -> Mvar<T> {
        settle("/", self.checked_div(rhs))
    }
}

forward_owned!(Div, div, DMatrix<T>, Mvar<T>);
forward_owned!(Div, div, Mvar<T>, Mvar<T>);

impl<'a, 'b, T: FloatLinalg> Div<&'b Mvar<T>> for &'a DMatrix<T> {
    type Output = DMatrix<T>;

    fn div(self, rhs: &'b Mvar<T>) -> DMatrix<T> {
        settle("/", rhs.inverse().left_multiply(self))
    }
}

impl<T: FloatLinalg> Div<Mvar<T>> for DMatrix<T> {
    type Output = DMatrix<T>;

    fn div(self, rhs: Mvar<T>) -> DMatrix<T> {
        &self / &rhs
    }
}

// ============================================================================
// Blend
// ============================================================================

impl<'b, T: FloatLinalg> BitAnd<&'b Mvar<T>> for &Mvar<T> {
    type Output = Mvar<T>;

    fn bitand(self, rhs: &'b Mvar<T>) -> Mvar<T> {
        settle("&", self.checked_blend(rhs))
    }
}

forward_owned!(BitAnd, bitand, Mvar<T>, Mvar<T>);

// ============================================================================
// In-place forms
// ============================================================================

/// Implements an assigning operator as whole-value replacement.
macro_rules! assign_op {
    ($trait:ident, $method:ident, $op:tt, $rhs:ty) => {
        impl<'b, T: FloatLinalg> $trait<&'b $rhs> for Mvar<T> {
            fn $method(&mut self, rhs: &'b $rhs) {
                *self = &*self $op rhs;
            }
        }

        impl<T: FloatLinalg> $trait<$rhs> for Mvar<T> {
            fn $method(&mut self, rhs: $rhs) {
                *self = &*self $op &rhs;
            }
        }
    };
}

assign_op!(AddAssign, add_assign, +, Mvar<T>);
assign_op!(SubAssign, sub_assign, -, Mvar<T>);
assign_op!(MulAssign, mul_assign, *, Mvar<T>);
assign_op!(MulAssign, mul_assign, *, DMatrix<T>);
assign_op!(DivAssign, div_assign, /, Mvar<T>);
assign_op!(DivAssign, div_assign, /, DMatrix<T>);
assign_op!(BitAndAssign, bitand_assign, &, Mvar<T>);

impl<T: FloatLinalg> MulAssign<T> for Mvar<T> {
    fn mul_assign(&mut self, k: T) {
        *self = &*self * k;
    }
}

impl<T: FloatLinalg> DivAssign<T> for Mvar<T> {
    fn div_assign(&mut self, k: T) {
        *self = &*self / k;
    }
}
