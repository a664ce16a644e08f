// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: geometric
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_geometric_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::geometric::{
        geometric_pmf, geometric_cdf, geometric_sf, geometric_ppf,
    };

    #[test]
    fn geometric_pmf_quarter() {
        let x = vec64![
            0.0,
            1.0,
            3.0,
            10.0,
            60.0
        ];
        let expect = vec64![
            0.25,
            0.1875,
            0.10546875,
            0.014078378677368164,
            7.972890732372818e-09
        ];
        let got = geometric_pmf(&x, 0.25, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn geometric_cdf_quarter() {
        let x = vec64![
            0.0,
            1.0,
            3.0,
            10.0,
            60.0
        ];
        let expect = vec64![
            0.25,
            0.4375,
            0.68359375,
            0.9577648639678955,
            0.9999999760813278
        ];
        let got = geometric_cdf(&x, 0.25, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn geometric_sf_quarter() {
        let x = vec64![
            0.0,
            1.0,
            3.0,
            10.0,
            60.0
        ];
        let expect = vec64![
            0.75,
            0.5625,
            0.31640625,
            0.04223513603210449,
            2.3918672197118452e-08
        ];
        let got = geometric_sf(&x, 0.25, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn geometric_ppf_quarter() {
        let x = vec64![
            0.001,
            0.13,
            0.47,
            0.83,
            0.999
        ];
        let expect = vec64![
            0.0,
            0.0,
            2.0,
            6.0,
            24.0
        ];
        let got = geometric_ppf(&x, 0.25, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
