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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
//! Simulates how colors appear to a protanope.
//!
//! Colors are converted from sRGB to CIE xyY, projected along their
//! protanope confusion line onto the protanope vision curve, pulled back
//! inside the sRGB gamut if needed and converted back to sRGB.
//!
//! ```
//! use protansim::{Rgb, get_proto_color};
//!
//! let seen = get_proto_color(Rgb::new(255., 0., 0.)).unwrap();
//! assert!(seen.r < 128. && seen.g < 128.);
//! ```
mod convert;
mod curve;
mod err;
mod gamma;
mod matrix;
mod mlaf;
mod primaries;
mod protan;
mod rgb;

pub use convert::{rgb_to_xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};
pub use curve::{Line, QuadraticPolynomial};
pub use err::SimulationError;
pub use gamma::{linear_to_srgb_gamma, srgb_to_linear_gamma};
pub use matrix::{Chromaticity, Matrix3d, SRGB_TO_XYZ_D50, Vector3d, XYZ_D50_TO_SRGB, XyY, Xyz};
pub use primaries::{
    ChromaticityTriple, PROTAN_CONFUSION_POINT, SPECTRAL_470, SPECTRAL_575, SRGB_PRIMARIES,
    WHITE_D50,
};
pub use protan::{
    BufferSimulation, ProtanSimulation, ProtanopeModel, get_proto_color, protan_luminance,
    simulate_rgb8,
};
pub use rgb::Rgb;
