// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Noise injection into polarisation spectra.
//!
//! No noise model is provided; callers supply their own by implementing
//! [`NoiseInjector`], or by passing a closure.

use crate::synth::PolSpectrum;

/// Something that perturbs a polarisation spectrum. `sigma` controls the
/// perturbation; what it means is up to the implementor. The returned spectrum
/// must be the same length as the input.
pub trait NoiseInjector {
    fn inject(&self, spectrum: &PolSpectrum, sigma: f64) -> PolSpectrum;
}

/// Adds no noise at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseInjector for NoNoise {
    fn inject(&self, spectrum: &PolSpectrum, _sigma: f64) -> PolSpectrum {
        spectrum.clone()
    }
}

impl<F> NoiseInjector for F
where
    F: Fn(&PolSpectrum, f64) -> PolSpectrum,
{
    fn inject(&self, spectrum: &PolSpectrum, sigma: f64) -> PolSpectrum {
        self(spectrum, sigma)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{c64, grid::FreqGrid, synth::synthesize};

    #[test]
    fn no_noise_is_the_identity() {
        let spectrum = synthesize(&FreqGrid::askap36(), &[1.0], &[12.0], &[0.1]).unwrap();
        assert_eq!(NoNoise.inject(&spectrum, 10.0), spectrum);
    }

    #[test]
    fn closures_are_injectors() {
        let spectrum = PolSpectrum::from(vec![c64::new(1.0, 0.0), c64::new(0.0, 1.0)]);
        let offset = |s: &PolSpectrum, sigma: f64| {
            PolSpectrum::new(s.view().mapv(|p| p + c64::new(sigma, -sigma)))
        };
        let noisy = offset.inject(&spectrum, 0.5);
        assert_eq!(noisy.len(), spectrum.len());
        assert_abs_diff_eq!(noisy.view()[0], c64::new(1.5, -0.5));
        assert_abs_diff_eq!(noisy.view()[1], c64::new(0.5, 0.5));
        // The input is untouched.
        assert_abs_diff_eq!(spectrum.view()[0], c64::new(1.0, 0.0));
    }

    #[test]
    fn injectors_can_be_trait_objects() {
        let injectors: Vec<Box<dyn NoiseInjector>> = vec![
            Box::new(NoNoise),
            Box::new(|s: &PolSpectrum, _: f64| s.clone()),
        ];
        let spectrum = PolSpectrum::from(vec![c64::new(2.0, 3.0)]);
        for injector in injectors {
            assert_eq!(injector.inject(&spectrum, 1.0), spectrum);
        }
    }
}
