/// Stand-in for the reciprocal of an exactly-zero determinant.
pub(crate) const SINGULAR_EPSILON: f64 = 0.0001;

/// `1 / d`, or [`SINGULAR_EPSILON`] when `d` is exactly zero.
#[inline]
pub(crate) fn reciprocal_or_epsilon(d: f64) -> f64 {
    if d == 0.0 {
        tracing::trace!("singular system, substituting epsilon reciprocal");
        SINGULAR_EPSILON
    } else {
        1.0 / d
    }
}

/// Row-major 4x4 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Mat4(pub(crate) [[f64; 4]; 4]);

impl Mat4 {
    #[cfg(test)]
    pub(crate) const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub(crate) fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    pub(crate) fn determinant(&self) -> f64 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    // 2x2 minors of the top two rows (s) and bottom two rows (c).
    fn minors(&self) -> ([f64; 6], [f64; 6]) {
        let a = &self.0;
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        (s, c)
    }

    /// Closed-form cofactor inverse.
    ///
    /// Never fails: a zero determinant uses [`SINGULAR_EPSILON`] as its reciprocal, which
    /// yields a finite (if meaningless) matrix instead of infinities.
    pub(crate) fn inverse(&self) -> Self {
        let a = &self.0;
        let (s, c) = self.minors();
        let inv = reciprocal_or_epsilon(self.determinant());

        Self([
            [
                (a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * inv,
                (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * inv,
                (a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * inv,
                (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * inv,
            ],
            [
                (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * inv,
                (a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * inv,
                (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * inv,
                (a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * inv,
            ],
            [
                (a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * inv,
                (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * inv,
                (a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * inv,
                (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * inv,
            ],
            [
                (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * inv,
                (a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * inv,
                (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * inv,
                (a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * inv,
            ],
        ])
    }

    pub(crate) fn mul_vec(&self, v: [f64; 4]) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (o, row) in out.iter_mut().zip(self.0.iter()) {
            *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn mul(&self, other: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Self(out)
    }
}

/// Convert premultiplied RGBA8 bytes to straight alpha in place.
pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
