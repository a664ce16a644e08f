// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: logarithmic
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_logarithmic_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::logarithmic::{
        logarithmic_pmf, logarithmic_cdf, logarithmic_sf, logarithmic_ppf,
    };

    #[test]
    fn logarithmic_pmf_light() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.8411019756171387,
            0.12616529634257082,
            0.0013625852004997647,
            4.887902080386869e-12,
            2.7189286667529576e-49
        ];
        let got = logarithmic_pmf(&x, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_cdf_light() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.8411019756171387,
            0.9672672719597095,
            0.9995403547641392,
            0.9999999999980425,
            1.0
        ];
        let got = logarithmic_cdf(&x, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_sf_light() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.1588980243828613,
            0.032732728040290475,
            0.0004596452358608635,
            1.957572935451071e-12,
            0.0
        ];
        let got = logarithmic_sf(&x, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_ppf_light() {
        let x = vec64![
            0.001,
            0.13,
            0.47,
            0.83,
            0.999
        ];
        let expect = vec64![
            1.0,
            1.0,
            1.0,
            1.0,
            5.0
        ];
        let got = logarithmic_ppf(&x, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }

    #[test]
    fn logarithmic_pmf_heavy() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.2766245498873294,
            0.13416290669535474,
            0.048978745016947794,
            0.007753962131102448,
            0.00020433020020325392
        ];
        let got = logarithmic_pmf(&x, 0.97, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_cdf_heavy() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.2766245498873294,
            0.4107874565826841,
            0.6096418207174575,
            0.8766117621137297,
            0.9949163973145129
        ];
        let got = logarithmic_cdf(&x, 0.97, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_sf_heavy() {
        let x = vec64![
            1.0,
            2.0,
            5.0,
            20.0,
            90.0
        ];
        let expect = vec64![
            0.7233754501126707,
            0.5892125434173159,
            0.3903581792825424,
            0.12338823788627026,
            0.005083602685487147
        ];
        let got = logarithmic_sf(&x, 0.97, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_ppf_heavy() {
        let x = vec64![
            0.001,
            0.13,
            0.47,
            0.83,
            0.999
        ];
        let expect = vec64![
            1.0,
            1.0,
            3.0,
            15.0,
            133.0
        ];
        let got = logarithmic_ppf(&x, 0.97, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }

    #[test]
    fn logarithmic_pmf_near_one() {
        let x = vec64![
            1.0,
            1000.0,
            1000000000.0,
            2000000000000.0
        ];
        let expect = vec64![
            0.03619117784983213,
            3.6191177813677946e-05,
            3.6155005561387914e-11,
            2.4490800058147355e-15
        ];
        let got = logarithmic_pmf(&x, 0.999999999999, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_cdf_near_one() {
        let x = vec64![
            1.0,
            1000.0,
            1000000000.0,
            2000000000000.0
        ];
        let expect = vec64![
            0.03619117784983213,
            0.270908007167994,
            0.7708533330074501,
            0.9982301245654924
        ];
        let got = logarithmic_cdf(&x, 0.999999999999, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_sf_near_one() {
        let x = vec64![
            1.0,
            1000.0,
            1000000000.0,
            2000000000000.0
        ];
        let expect = vec64![
            0.9638088221501678,
            0.729091992832006,
            0.2291466669925499,
            0.0017698754345075722
        ];
        let got = logarithmic_sf(&x, 0.999999999999, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn logarithmic_ppf_near_one() {
        let x = vec64![
            0.001,
            0.13,
            0.47,
            0.83,
            0.999
        ];
        let expect = vec64![
            1.0,
            20.0,
            245089.0,
            5147055026.0,
            2421792993321.0
        ];
        let got = logarithmic_ppf(&x, 0.999999999999, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
