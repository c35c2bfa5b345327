use super::*;

fn assert_mat_close(a: &Mat4, b: &Mat4, tol: f64) {
    for i in 0..4 {
        for j in 0..4 {
            assert!(
                (a.0[i][j] - b.0[i][j]).abs() <= tol,
                "mismatch at ({i},{j}): {} vs {}",
                a.0[i][j],
                b.0[i][j]
            );
        }
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = Mat4::from_rows([
        [156.0, 96.0, 1.0, -24336.0],
        [356.0, 96.0, 1.0, -71200.0],
        [356.0, 416.0, 1.0, -126736.0],
        [156.0, 416.0, 1.0, -24336.0],
    ]);
    assert!(m.determinant() != 0.0);
    let inv = m.inverse();
    assert_mat_close(&m.mul(&inv), &Mat4::IDENTITY, 1e-8);
    assert_mat_close(&inv.mul(&m), &Mat4::IDENTITY, 1e-8);
}

#[test]
fn identity_inverts_to_itself() {
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    assert_mat_close(&Mat4::IDENTITY.inverse(), &Mat4::IDENTITY, 0.0);
}

#[test]
fn singular_matrix_inverse_stays_finite() {
    let m = Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 0.0],
    ]);
    assert_eq!(m.determinant(), 0.0);
    let inv = m.inverse();
    assert!(inv.0.iter().flatten().all(|v| v.is_finite()));
}

#[test]
fn reciprocal_falls_back_only_on_exact_zero() {
    assert_eq!(reciprocal_or_epsilon(0.0), SINGULAR_EPSILON);
    assert_eq!(reciprocal_or_epsilon(4.0), 0.25);
    assert_eq!(reciprocal_or_epsilon(-0.5), -2.0);
}

#[test]
fn mul_vec_matches_rows() {
    let v = Mat4::IDENTITY.mul_vec([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128, 10, 10, 10, 0, 255, 255, 255, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[255, 255, 255, 255]);
}
