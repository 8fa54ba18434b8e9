//! A minimal dense matrix for policy inference.
use serde::{Deserialize, Serialize};

/// A row-major matrix of `f32` values.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mat {
    /// Row-major data.
    pub data: Vec<f32>,

    /// Shape as `[rows, cols]`.
    pub shape: Vec<i32>,
}

impl Mat {
    /// Matrix product `self * x`.
    pub fn matmul(&self, x: &Mat) -> Self {
        let (m, l, n) = (
            self.shape[0] as usize,
            self.shape[1] as usize,
            x.shape[1] as usize,
        );
        let mut data = vec![0.0f32; m * n];
        for i in 0..m {
            for j in 0..n {
                let kk = i * n + j;
                for k in 0..l {
                    data[kk] += self.data[i * l + k] * x.data[k * n + j];
                }
            }
        }

        Self {
            shape: vec![m as _, n as _],
            data,
        }
    }

    /// Element-wise sum.
    pub fn add(&self, x: &Mat) -> Self {
        if self.shape[0] != x.shape[0] || self.shape[1] != x.shape[1] {
            panic!(
                "Trying to add matrices of different sizes: {:?}",
                (&self.shape, &x.shape)
            );
        }

        let data = self
            .data
            .iter()
            .zip(x.data.iter())
            .map(|(a, b)| *a + *b)
            .collect();

        Mat {
            data,
            shape: self.shape.clone(),
        }
    }

    /// Element-wise rectified linear unit.
    pub fn relu(&self) -> Self {
        let data = self
            .data
            .iter()
            .map(|a| match *a < 0. {
                true => 0.,
                false => *a,
            })
            .collect();

        Self {
            data,
            shape: self.shape.clone(),
        }
    }

    /// Element-wise hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        let data = self.data.iter().map(|a| a.tanh()).collect();

        Self {
            data,
            shape: self.shape.clone(),
        }
    }
}

impl From<Vec<f32>> for Mat {
    /// Interprets the vector as a column vector.
    fn from(x: Vec<f32>) -> Self {
        let shape = vec![x.len() as i32, 1];
        Self { shape, data: x }
    }
}
