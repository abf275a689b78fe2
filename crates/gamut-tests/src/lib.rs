//! Integration tests for gamut-rs crates.
//!
//! Properties that must hold for every supported matrix size, and the
//! interplay between the math layer, the runtime-sized wrappers and the
//! colorimetry built on top.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use gamut_core::Error;
    use gamut_math::{
        AnyMatrix, AnyVector, Dimension, Matrix, Matrix2x2, Matrix3x3, Matrix4x4, Vector,
    };

    const EPSILON: f64 = 5e-15;

    fn well_conditioned_2() -> Matrix2x2 {
        Matrix2x2::new([[3.0, 1.0], [1.0, 2.0]])
    }

    /// sRGB normalized primary matrix, rounded at 15 decimals.
    fn well_conditioned_3() -> Matrix3x3 {
        Matrix3x3::new([
            [0.412390799265959, 0.357584339383878, 0.180480788401834],
            [0.21263900587151, 0.715168678767756, 0.072192315360734],
            [0.019330818715592, 0.119194779794626, 0.950532152249661],
        ])
    }

    fn well_conditioned_4() -> Matrix4x4 {
        Matrix4x4::new([
            [4.0, 1.0, 0.5, 0.25],
            [1.0, 5.0, 1.0, 0.5],
            [0.5, 1.0, 6.0, 1.0],
            [0.25, 0.5, 1.0, 7.0],
        ])
    }

    fn assert_close<const N: usize>(a: &Matrix<N>, b: &Matrix<N>, epsilon: f64) {
        for i in 0..N {
            for j in 0..N {
                assert_abs_diff_eq!(a[i][j], b[i][j], epsilon = epsilon);
            }
        }
    }

    fn check_identity_neutral<const N: usize>(m: Matrix<N>) {
        let id = Matrix::<N>::identity();
        assert_eq!(id * m, m);
        assert_eq!(m * id, m);
        assert_eq!(id.determinant(), 1.0);
        assert_eq!(id.inverted().unwrap(), id);
    }

    fn check_double_inverse<const N: usize>(m: Matrix<N>) {
        let twice = m.inverted().unwrap().inverted().unwrap();
        assert_close(&twice, &m, EPSILON);
        assert!((m * m.inverted().unwrap()).approx_eq(&Matrix::identity(), 1e-14));
    }

    fn check_zeros_singular<const N: usize>() {
        let z = Matrix::<N>::zeros();
        assert_eq!(z.inverted(), Err(Error::SingularMatrix { column: 0 }));
        assert_eq!(z.determinant(), 0.0);

        let mut copy = z;
        assert!(copy.invert_in_place().is_err());
        assert_eq!(copy, z);
    }

    fn check_double_transpose<const N: usize>(m: Matrix<N>) {
        assert_eq!(m.transposed().transposed(), m);
        let mut t = m;
        t.transpose_in_place();
        assert_eq!(t, m.transposed());
    }

    fn check_vector_identity<const N: usize>() {
        let v = Vector::<N>::new(std::array::from_fn(|i| i as f64 + 0.5));
        assert_eq!(v * Matrix::<N>::identity(), v);
        assert_eq!(v.mul_elementwise(Vector::splat(1.0)), v);
    }

    #[test]
    fn test_identity_is_neutral() {
        check_identity_neutral(well_conditioned_2());
        check_identity_neutral(well_conditioned_3());
        check_identity_neutral(well_conditioned_4());
        check_vector_identity::<2>();
        check_vector_identity::<3>();
        check_vector_identity::<4>();
    }

    #[test]
    fn test_double_inverse() {
        check_double_inverse(well_conditioned_2());
        check_double_inverse(well_conditioned_3());
        check_double_inverse(well_conditioned_4());
    }

    #[test]
    fn test_zeros_are_singular() {
        check_zeros_singular::<2>();
        check_zeros_singular::<3>();
        check_zeros_singular::<4>();
    }

    #[test]
    fn test_double_transpose() {
        check_double_transpose(well_conditioned_2());
        check_double_transpose(well_conditioned_3());
        check_double_transpose(well_conditioned_4());
    }

    #[test]
    fn test_exact_inverse_of_integer_matrix() {
        let l = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [2.0, 1.0, 0.0, 0.0],
            [0.0, 3.0, 1.0, 0.0],
            [1.0, 0.0, 2.0, 1.0],
        ]);
        let expected = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [-2.0, 1.0, 0.0, 0.0],
            [6.0, -3.0, 1.0, 0.0],
            [-13.0, 6.0, -2.0, 1.0],
        ]);
        assert_eq!(l.inverted().unwrap(), expected);
    }

    #[test]
    fn test_construction_counts() {
        assert_eq!(
            Matrix3x3::from_slice(&[1.0; 8]),
            Err(Error::Construction { expected: 9, actual: 8 })
        );
        assert_eq!(
            Vector::<4>::from_slice(&[1.0; 3]),
            Err(Error::Construction { expected: 4, actual: 3 })
        );
        assert!(Matrix2x2::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(Matrix2x2::from_rows(&[[1.0, 2.0]]).is_err());
        assert!(AnyMatrix::from_flat(&[0.0; 5]).is_err());
    }

    #[test]
    fn test_unsupported_dimension() {
        assert_eq!(Dimension::from_size(5), Err(Error::UnsupportedDimension(5)));
        assert_eq!(Dimension::from_size(1), Err(Error::UnsupportedDimension(1)));
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_size(dim.size()), Ok(dim));
        }
    }

    #[test]
    fn test_runtime_sizes_reject_mixing() {
        let m3 = AnyMatrix::identity(Dimension::Three);
        let m4 = AnyMatrix::identity(Dimension::Four);
        let v3 = AnyVector::zeros(Dimension::Three);
        let v2 = AnyVector::zeros(Dimension::Two);

        assert!(matches!(m3.multiply(&m4), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(m3.multiply_vector(&v3), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(v2.mul_elementwise(&v3), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(v2.dot_matrix(&m3), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(m4.with_diagonal(&v3), Err(Error::DimensionMismatch { .. })));

        assert!(v3.dot_matrix(&m3).is_ok());
        assert!(m3.multiply(&m3).is_ok());
    }

    #[test]
    fn test_runtime_matches_typed() {
        let typed = well_conditioned_3();
        let dynamic = AnyMatrix::from(typed);
        assert_eq!(dynamic.dimension(), Dimension::Three);
        assert_eq!(dynamic.inverted().unwrap(), AnyMatrix::from(typed.inverted().unwrap()));
        assert_eq!(dynamic.determinant(), typed.determinant());
        assert_eq!(dynamic.to_flat(), typed.to_flat());
    }

    mod colorimetry {
        use super::*;
        use gamut_primaries::{
            compute_normalized_primary_matrix, get_conversion_matrix, Gamut, GamutId, ACES_AP0,
            SRGB,
        };

        #[test]
        fn test_self_conversion_identity() {
            for id in GamutId::ALL {
                let g = id.gamut();
                let m = get_conversion_matrix(&g, &g).unwrap();
                assert_close(&m, &Matrix3x3::identity(), 1e-13);
            }
            let srgb = get_conversion_matrix(&SRGB, &SRGB).unwrap();
            assert_close(&srgb, &Matrix3x3::identity(), EPSILON);
        }

        #[test]
        fn test_srgb_to_ap0() {
            let expected = Matrix3x3::new([
                [0.432930520128218, 0.375384359521582, 0.189378057920798],
                [0.089413137095003, 0.816533021069837, 0.103021992827329],
                [0.019161713065298, 0.118152066030387, 0.94221691428194],
            ]);
            let m = get_conversion_matrix(&SRGB, &ACES_AP0).unwrap();
            assert_close(&m, &expected, EPSILON);
        }

        #[test]
        fn test_npm_agrees_with_inverse_matrix() {
            let npm =
                compute_normalized_primary_matrix(&SRGB.chromaticities, SRGB.whitepoint)
                    .unwrap();
            let inv = npm.inverted().unwrap();
            assert_close(&inv, &well_conditioned_3().inverted().unwrap(), 1e-12);
        }

        #[test]
        fn test_conversions_compose() {
            let a = get_conversion_matrix(&SRGB, &ACES_AP0).unwrap();
            let b = get_conversion_matrix(&ACES_AP0, &Gamut::cie_xyz()).unwrap();
            let direct = get_conversion_matrix(&SRGB, &Gamut::cie_xyz()).unwrap();
            assert_close(&(b * a), &direct, 1e-14);
        }

        #[test]
        fn test_degenerate_gamut() {
            let line = Gamut::from_tuples(((0.2, 0.2), (0.3, 0.3), (0.4, 0.4)), (0.3127, 0.329));
            assert!(matches!(
                get_conversion_matrix(&line, &SRGB),
                Err(Error::DegenerateGamut { .. })
            ));

            // Off-grid collinear primaries as the destination
            let line = Gamut::from_tuples(((0.7, 0.3), (0.4, 0.35), (0.1, 0.4)), (0.3127, 0.329));
            assert_eq!(
                get_conversion_matrix(&ACES_AP0, &line),
                Err(Error::DegenerateGamut { column: 2 })
            );
        }

        #[test]
        fn test_new_presets_round_trip() {
            for id in [GamutId::DragonColor, GamutId::RedColor2, GamutId::VeniceSGamut3Cine] {
                let g = id.gamut();
                let there = get_conversion_matrix(&SRGB, &g).unwrap();
                let back = get_conversion_matrix(&g, &SRGB).unwrap();
                assert!((back * there).max_abs_diff(&Matrix3x3::identity()) < 1e-13, "{id}");
            }
        }
    }
}
