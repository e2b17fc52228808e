/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::SimulationError;
use pxfm::f_pow;

const SRGB_ALPHA: f64 = 0.055;
const SRGB_GAMMA: f64 = 2.4;
const SRGB_SLOPE: f64 = 12.92;
const SRGB_ENCODED_THRESHOLD: f64 = 0.04045;
const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;

/// Linear transfer function for sRGB, from <http://www.w3.org/Graphics/Color/srgb>.
///
/// The input must be an encoded intensity in `[0, 1]`. Anything else, NaN
/// included, means an unnormalized channel reached gamma decoding and is
/// reported as [`SimulationError::InvalidGammaInput`].
#[inline]
pub fn srgb_to_linear_gamma(intensity: f64) -> Result<f64, SimulationError> {
    if !(0.0..=1.0).contains(&intensity) {
        return Err(SimulationError::InvalidGammaInput(intensity));
    }
    if intensity < SRGB_ENCODED_THRESHOLD {
        return Ok(intensity / SRGB_SLOPE);
    }
    Ok(f_pow(
        (intensity + SRGB_ALPHA) / (1. + SRGB_ALPHA),
        SRGB_GAMMA,
    ))
}

/// Gamma transfer function for sRGB.
///
/// Not clamped: out-of-gamut linear values produce out-of-range encoded
/// values so callers can see them.
#[inline]
pub fn linear_to_srgb_gamma(intensity: f64) -> f64 {
    if intensity <= SRGB_LINEAR_THRESHOLD {
        return intensity * SRGB_SLOPE;
    }
    (1. + SRGB_ALPHA) * f_pow(intensity, 1. / SRGB_GAMMA) - SRGB_ALPHA
}
