// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: dagum
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_dagum_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::dagum::{
        dagum_pdf, dagum_cdf, dagum_sf, dagum_ppf,
    };

    #[test]
    fn dagum_pdf_income() {
        let x = vec64![
            0.05,
            0.8,
            2.0,
            4.5,
            60.0
        ];
        let expect = vec64![
            0.018151468768731614,
            0.3448692892585288,
            0.32317540850304055,
            0.03550844110852747,
            1.29621468172135e-06
        ];
        let got = dagum_pdf(&x, 0.7, 3.0, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn dagum_cdf_income() {
        let x = vec64![
            0.05,
            0.8,
            2.0,
            4.5,
            60.0
        ];
        let expect = vec64![
            0.00043218458060550303,
            0.139787018579457,
            0.6155722066724582,
            0.9427966673793177,
            0.9999740748902334
        ];
        let got = dagum_cdf(&x, 0.7, 3.0, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn dagum_sf_income() {
        let x = vec64![
            0.05,
            0.8,
            2.0,
            4.5,
            60.0
        ];
        let expect = vec64![
            0.9995678154193945,
            0.860212981420543,
            0.38442779332754184,
            0.05720333262068234,
            2.5925109766574285e-05
        ];
        let got = dagum_sf(&x, 0.7, 3.0, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn dagum_ppf_income() {
        let x = vec64![
            0.001,
            0.1,
            0.5,
            0.9,
            0.999
        ];
        let expect = vec64![
            0.0745531615825643,
            0.6766107763564017,
            1.6784701513619782,
            3.6655469042055975,
            17.7508898433296
        ];
        let got = dagum_ppf(&x, 0.7, 3.0, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
