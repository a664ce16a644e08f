// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: gumbel
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_gumbel_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::gumbel::{
        gumbel_pdf, gumbel_cdf, gumbel_sf, gumbel_ppf,
    };

    #[test]
    fn gumbel_pdf_shifted() {
        let x = vec64![
            -6.0,
            -1.0,
            0.5,
            3.0,
            40.0
        ];
        let expect = vec64![
            8.125025975387785e-11,
            0.12743521041151837,
            0.18393972058572117,
            0.10756585897012157,
            1.3232868159523825e-09
        ];
        let got = gumbel_pdf(&x, 0.5, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn gumbel_cdf_shifted() {
        let x = vec64![
            -6.0,
            -1.0,
            0.5,
            3.0,
            40.0
        ];
        let expect = vec64![
            6.300828916156516e-12,
            0.12039226207982959,
            0.36787944117144233,
            0.7508834766393948,
            0.9999999973534264
        ];
        let got = gumbel_cdf(&x, 0.5, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn gumbel_sf_shifted() {
        let x = vec64![
            -6.0,
            -1.0,
            0.5,
            3.0,
            40.0
        ];
        let expect = vec64![
            0.9999999999936992,
            0.8796077379201704,
            0.6321205588285577,
            0.24911652336060514,
            2.646573635406941e-09
        ];
        let got = gumbel_sf(&x, 0.5, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn gumbel_ppf_shifted() {
        let x = vec64![
            0.001,
            0.1,
            0.5,
            0.9,
            0.999
        ];
        let expect = vec64![
            -3.365289467832131,
            -1.1680648904959114,
            1.2330258411633286,
            5.000734654624891,
            14.314510141047432
        ];
        let got = gumbel_ppf(&x, 0.5, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
