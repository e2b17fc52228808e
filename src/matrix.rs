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
use crate::mlaf::mlaf;
use std::ops::Sub;

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3d {
    pub v: [f64; 3],
}

/// Matrix math helper
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

/// Linear sRGB to CIE XYZ, Bradford-adapted from D65 to the D50 reference white.
///
/// Values from <http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html>.
pub const SRGB_TO_XYZ_D50: Matrix3d = Matrix3d {
    v: [
        [0.4360747, 0.3850649, 0.1430804],
        [0.2225045, 0.7168786, 0.0606169],
        [0.0139322, 0.0971045, 0.7141733],
    ],
};

/// CIE XYZ (D50) to linear sRGB, the published inverse of [`SRGB_TO_XYZ_D50`].
pub const XYZ_D50_TO_SRGB: Matrix3d = Matrix3d {
    v: [
        [3.1338561, -1.6168667, -0.4906146],
        [-0.9787684, 1.9161415, 0.0334540],
        [0.0719453, -0.2289914, 1.4052427],
    ],
};

impl Matrix3d {
    #[inline]
    pub fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let [x, y, z] = other.v;
        Vector3d {
            v: [
                mlaf(mlaf(x * self.v[0][0], y, self.v[0][1]), z, self.v[0][2]),
                mlaf(mlaf(x * self.v[1][0], y, self.v[1][1]), z, self.v[1][2]),
                mlaf(mlaf(x * self.v[2][0], y, self.v[2][1]), z, self.v[2][2]),
            ],
        }
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }

    #[inline]
    pub fn from_linear_rgb(rgb: crate::Rgb<f64>, rgb_to_xyz: Matrix3d) -> Self {
        let [x, y, z] = rgb_to_xyz
            .mul_vector(Vector3d {
                v: [rgb.r, rgb.g, rgb.b],
            })
            .v;
        Xyz::new(x, y, z)
    }

    #[inline]
    pub fn to_linear_rgb(self, xyz_to_rgb: Matrix3d) -> crate::Rgb<f64> {
        let [r, g, b] = xyz_to_rgb.mul_vector(self.to_vector()).v;
        crate::Rgb::new(r, g, b)
    }

    /// Projects to xyY.
    ///
    /// A color with `X + Y + Z = 0` has no chromaticity; it resolves to the
    /// D50 white chromaticity with zero luminance.
    #[inline]
    pub fn to_xyy(self) -> XyY {
        let sum = self.x + self.y + self.z;
        if sum == 0. {
            return XyY {
                yb: self.y,
                ..Chromaticity::D50.to_xyyb()
            };
        }
        let rec = 1. / sum;
        XyY {
            x: self.x * rec,
            y: self.y * rec,
            yb: self.y,
        }
    }

    pub fn euclidean_distance(&self, other: Xyz) -> f64 {
        let d = *self - other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}

impl Sub<Xyz> for Xyz {
    type Output = Xyz;

    #[inline]
    fn sub(self, rhs: Xyz) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Holds CIE xyY representation, `yb` is the luminance `Y`.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct XyY {
    pub x: f64,
    pub y: f64,
    pub yb: f64,
}

impl XyY {
    #[inline]
    pub const fn new(x: f64, y: f64, yb: f64) -> Self {
        Self { x, y, yb }
    }

    /// Converts back to XYZ. `y = 0` carries no information and yields black.
    #[inline]
    pub const fn to_xyz(self) -> Xyz {
        if self.y == 0. {
            return Xyz::new(0., 0., 0.);
        }
        Xyz {
            x: self.x * self.yb / self.y,
            y: self.yb,
            z: (1. - self.x - self.y) * self.yb / self.y,
        }
    }

    #[inline]
    pub const fn chromaticity(self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn to_xyyb(&self) -> XyY {
        XyY {
            x: self.x,
            y: self.y,
            yb: 1.,
        }
    }

    pub const D50: Chromaticity = Chromaticity {
        x: 0.3457,
        y: 0.3585,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_inverse_matches() {
        for (i, basis) in [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]].into_iter().enumerate() {
            let xyz = SRGB_TO_XYZ_D50.mul_vector(Vector3d { v: basis });
            let back = XYZ_D50_TO_SRGB.mul_vector(xyz).v;
            for (j, v) in back.into_iter().enumerate() {
                let expected = if i == j { 1. } else { 0. };
                assert!((v - expected).abs() < 1e-6, "column {i}, row {j}: {v}");
            }
        }
    }

    #[test]
    fn zero_xyz_resolves_to_white() {
        let xyy = Xyz::new(0., 0., 0.).to_xyy();
        assert_eq!(xyy, XyY::new(0.3457, 0.3585, 0.));
    }

    #[test]
    fn zero_y_resolves_to_black() {
        assert_eq!(XyY::new(0.3, 0., 0.5).to_xyz(), Xyz::new(0., 0., 0.));
    }

    #[test]
    fn xyy_round_trip() {
        let xyz = Xyz::new(0.2, 0.3, 0.4);
        let back = xyz.to_xyy().to_xyz();
        assert!(xyz.euclidean_distance(back) < 1e-12);
    }
}
