// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: cauchy
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_cauchy_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::cauchy::{
        cauchy_pdf, cauchy_cdf, cauchy_sf, cauchy_ppf,
    };

    #[test]
    fn cauchy_pdf_shifted() {
        let x = vec64![
            -300.0,
            -1.0,
            1.0,
            1.2,
            1000.0
        ];
        let expect = vec64![
            1.7566528396892464e-06,
            0.03744822190397537,
            0.6366197723675814,
            0.5488101485927426,
            1.594736911320455e-07
        ];
        let got = cauchy_pdf(&x, 1.0, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn cauchy_cdf_shifted() {
        let x = vec64![
            -300.0,
            -1.0,
            1.0,
            1.2,
            1000.0
        ];
        let expect = vec64![
            0.0005287534774219174,
            0.07797913037736932,
            0.5,
            0.6211189415908434,
            0.9998406857559535
        ];
        let got = cauchy_cdf(&x, 1.0, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn cauchy_sf_shifted() {
        let x = vec64![
            -300.0,
            -1.0,
            1.0,
            1.2,
            1000.0
        ];
        let expect = vec64![
            0.9994712465225781,
            0.9220208696226306,
            0.5,
            0.37888105840915665,
            0.00015931424404646622
        ];
        let got = cauchy_sf(&x, 1.0, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn cauchy_ppf_shifted() {
        let x = vec64![
            0.001,
            0.1,
            0.5,
            0.9,
            0.999
        ];
        let expect = vec64![
            -158.15441949277522,
            -0.5388417685876266,
            1.0,
            2.538841768587627,
            160.15441949277508
        ];
        let got = cauchy_ppf(&x, 1.0, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
