// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by scripts/gen_reference_tests.py on 2026-10-16.
// Distribution: chi
//
// Expected values are 40-digit mpmath evaluations rounded to f64. Tolerances are relative
// above 1 and absolute below, see util::assert_slice_close.

mod util;

mod reference_chi_tests {
    use super::util::assert_slice_close;
    use minarrow::vec64;
    use rv_kernels::kernels::scientific::distributions::univariate::chi::{
        chi_pdf, chi_cdf, chi_sf, chi_ppf,
    };

    #[test]
    fn chi_pdf_two() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            0.049937539046229044,
            0.4412484512922977,
            0.584102707151966,
            0.10984233405851854,
            9.137987846827577e-08
        ];
        let got = chi_pdf(&x, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_cdf_two() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            0.0012492190754191336,
            0.1175030974154046,
            0.5132477440400284,
            0.9560630663765926,
            0.9999999847700203
        ];
        let got = chi_cdf(&x, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_sf_two() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            0.9987507809245809,
            0.8824969025845955,
            0.4867522559599717,
            0.04393693362340742,
            1.522997974471263e-08
        ];
        let got = chi_sf(&x, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_ppf_two() {
        let x = vec64![
            0.001,
            0.1,
            0.5,
            0.9,
            0.999
        ];
        let expect = vec64![
            0.04473254594997994,
            0.4590436050264208,
            1.1774100225154747,
            2.145966026289347,
            3.7169221888498383
        ];
        let got = chi_ppf(&x, 2.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }

    #[test]
    fn chi_pdf_half() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            2.0718750064368736,
            0.5789214074804598,
            0.20611460752756697,
            0.012889947883461601,
            2.8841319276508283e-09
        ];
        let got = chi_pdf(&x, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_cdf_half() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            0.20739480329278195,
            0.6401572060830841,
            0.8949372347824149,
            0.9956863817252779,
            0.9999999995376408
        ];
        let got = chi_cdf(&x, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_sf_half() {
        let x = vec64![
            0.05,
            0.5,
            1.2,
            2.5,
            6.0
        ];
        let expect = vec64![
            0.7926051967072181,
            0.35984279391691587,
            0.10506276521758508,
            0.0043136182747220515,
            4.623591630374159e-10
        ];
        let got = chi_sf(&x, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn chi_ppf_half() {
        let x = vec64![
            0.001,
            0.1,
            0.5,
            0.9,
            0.999
        ];
        let expect = vec64![
            1.1618690023505554e-06,
            0.011619003731502944,
            0.2955462818337372,
            1.2250656082323392,
            2.9585280995409478
        ];
        let got = chi_ppf(&x, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }
}
