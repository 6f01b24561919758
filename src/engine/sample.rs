//! Random draws from a Gaussian value.
//!
//! Draws are `z · vectors + mean` with `z` a `n x rank` block of
//! independent standard normals. Rank-reduced values produce samples that
//! lie exactly in their retained subspace. An axis with negative variance
//! is sampled by its magnitude.

use nalgebra::DMatrix;
use rand::Rng;

use crate::engine::mvar::Mvar;
use crate::math::linalg::FloatLinalg;

impl<T: FloatLinalg> Mvar<T> {
    /// Draw `n` samples, one per row of the returned `n x ndim` matrix.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DMatrix<T> {
        let z = DMatrix::from_fn(n, self.rank(), |_, _| T::standard_normal(rng));
        let mut out = z * self.vectors();
        for mut row in out.row_iter_mut() {
            row += &self.mean;
        }
        log::trace!("drew {} samples in {} dimensions", n, self.ndim());
        out
    }
}
