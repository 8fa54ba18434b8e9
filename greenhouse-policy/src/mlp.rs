//! Multilayer perceptron without a backend.
use crate::Mat;
use serde::{Deserialize, Serialize};

/// Multilayer perceptron with ReLU hidden layers and a tanh output head.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mlp {
    /// Weights of layers.
    ws: Vec<Mat>,

    /// Biases of layers.
    bs: Vec<Mat>,
}

impl Mlp {
    /// Constructs an MLP from per-layer weights and biases.
    pub fn new(ws: Vec<Mat>, bs: Vec<Mat>) -> Self {
        Self { ws, bs }
    }

    /// Forward pass.
    ///
    /// The output layer is squashed with tanh, matching the deterministic
    /// inference head of the trained actor.
    pub fn forward(&self, x: &Mat) -> Mat {
        let n_layers = self.ws.len();
        let mut x = x.clone();
        for i in 0..n_layers {
            x = self.ws[i].matmul(&x).add(&self.bs[i]);
            if i != n_layers - 1 {
                x = x.relu();
            }
        }
        x.tanh()
    }
}
