use serde::{Deserialize, Serialize};

use crate::core::body::Body;

/// How an accumulated force moves a body during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    /// `velocity += force; position += velocity`.
    #[default]
    SemiImplicitEuler,
    /// `position += force`; velocity is left as spawned.
    ForceToPosition,
}

/// Integrator responsible for stepping bodies forward once forces are known.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub scheme: IntegrationScheme,
    parallel: bool,
}

impl Integrator {
    pub fn new(scheme: IntegrationScheme) -> Self {
        Self {
            scheme,
            parallel: false,
        }
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Advances every body. Bodies do not read each other here, so the
    /// parallel path needs no synchronization.
    pub fn step(&self, bodies: &mut [Body]) {
        let scheme = self.scheme;

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                use rayon::prelude::*;
                bodies
                    .par_iter_mut()
                    .for_each(|body| body.integrate_with(scheme));
                return;
            }
        }

        for body in bodies.iter_mut() {
            body.integrate_with(scheme);
        }
    }
}
