// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Bulk kernel behaviour shared by every distribution: parameter rejection, null-mask
//! propagation and mask-length validation.

mod kernel_contract_tests {
    use minarrow::{Bitmask, vec64};
    use rv_kernels::errors::KernelError;
    use rv_kernels::kernels::scientific::distributions::univariate::{
        benford::benford_pmf, bernoulli::bernoulli_cdf, beta::beta_pdf,
        beta_binomial::beta_binomial_pmf, beta_prime::beta_prime_cdf, binomial::binomial_ppf,
        cauchy::cauchy_pdf, chi::chi_sf, chi_squared::chi_squared_cdf,
        continuous_bernoulli::continuous_bernoulli_pdf, dagum::dagum_ppf,
        discrete_uniform::discrete_uniform_pmf, exponential::exponential_pdf, fisher_f::f_cdf,
        gamma::gamma_ppf, geometric::geometric_pmf, gompertz::gompertz_sf, gumbel::gumbel_cdf,
        hypergeometric::hypergeometric_pmf, laplace::laplace_ppf, log_normal::log_normal_pdf,
        logarithmic::logarithmic_cdf, logistic::logistic_sf, negative_binomial::negative_binomial_pmf,
        normal::{normal_cdf, normal_pdf, normal_ppf, normal_sf}, pareto::pareto_pdf,
        poisson::poisson_pmf, rayleigh::rayleigh_ppf, student_t::t_cdf, uniform::uniform_pdf,
        weibull::weibull_cdf,
    };

    fn assert_invalid<T: std::fmt::Debug>(got: Result<T, KernelError>) {
        match got {
            Err(KernelError::InvalidArguments(_)) => {}
            other => panic!("expected InvalidArguments, got: {:?}", other),
        }
    }

    #[test]
    fn invalid_continuous_parameters_are_rejected() {
        let x = vec64![0.5];
        assert_invalid(beta_pdf(&x, -1.0, 2.0, None, None));
        assert_invalid(beta_pdf(&x, 2.0, 0.0, None, None));
        assert_invalid(beta_prime_cdf(&x, f64::NAN, 1.0, None, None));
        assert_invalid(cauchy_pdf(&x, f64::INFINITY, 1.0, None, None));
        assert_invalid(chi_sf(&x, 0.0, None, None));
        assert_invalid(chi_squared_cdf(&x, -3.0, None, None));
        assert_invalid(continuous_bernoulli_pdf(&x, 1.0, None, None));
        assert_invalid(continuous_bernoulli_pdf(&x, 0.0, None, None));
        assert_invalid(dagum_ppf(&x, 1.0, -2.0, 1.0, None, None));
        assert_invalid(exponential_pdf(&x, -2.0, None, None));
        assert_invalid(f_cdf(&x, 3.0, f64::INFINITY, None, None));
        assert_invalid(gamma_ppf(&x, 0.0, 1.0, None, None));
        assert_invalid(gompertz_sf(&x, 1.0, 0.0, None, None));
        assert_invalid(gumbel_cdf(&x, 0.0, -1.0, None, None));
        assert_invalid(laplace_ppf(&x, f64::NAN, 1.0, None, None));
        assert_invalid(log_normal_pdf(&x, 0.0, 0.0, None, None));
        assert_invalid(logistic_sf(&x, 0.0, -0.5, None, None));
        assert_invalid(normal_pdf(&x, 0.0, -1.0, None, None));
        assert_invalid(normal_pdf(&x, 0.0, 0.0, None, None));
        assert_invalid(pareto_pdf(&x, 2.0, -1.0, None, None));
        assert_invalid(rayleigh_ppf(&x, f64::NEG_INFINITY, None, None));
        assert_invalid(t_cdf(&x, -1.0, None, None));
        assert_invalid(uniform_pdf(&x, 2.0, 1.0, None, None));
        assert_invalid(uniform_pdf(&x, 0.0, f64::INFINITY, None, None));
        assert_invalid(weibull_cdf(&x, 0.0, 1.0, None, None));
    }

    #[test]
    fn invalid_discrete_parameters_are_rejected() {
        let x = vec64![1.0];
        assert_invalid(benford_pmf(&x, 1, None, None));
        assert_invalid(bernoulli_cdf(&x, 1.5, None, None));
        assert_invalid(beta_binomial_pmf(&x, 5, 0.0, 1.0, None, None));
        assert_invalid(binomial_ppf(&x, 10, -0.1, None, None));
        assert_invalid(discrete_uniform_pmf(&x, 4, 3, None, None));
        assert_invalid(geometric_pmf(&x, 0.0, None, None));
        assert_invalid(hypergeometric_pmf(&x, 10, 11, 2, None, None));
        assert_invalid(hypergeometric_pmf(&x, 10, 4, 12, None, None));
        assert_invalid(logarithmic_cdf(&x, 1.0, None, None));
        assert_invalid(negative_binomial_pmf(&x, 0, 0.5, None, None));
        assert_invalid(negative_binomial_pmf(&x, 3, 0.0, None, None));
        assert_invalid(poisson_pmf(&x, 0.0, None, None));
    }

    #[test]
    fn boundary_parameters_are_accepted() {
        let x = vec64![0.0, 1.0];
        assert!(bernoulli_cdf(&x, 0.0, None, None).is_ok());
        assert!(bernoulli_cdf(&x, 1.0, None, None).is_ok());
        assert!(binomial_ppf(&x, 0, 0.5, None, None).is_ok());
        assert!(geometric_pmf(&x, 1.0, None, None).is_ok());
        assert!(negative_binomial_pmf(&x, 1, 1.0, None, None).is_ok());
        assert!(discrete_uniform_pmf(&x, 3, 3, None, None).is_ok());
        assert!(benford_pmf(&x, 2, None, None).is_ok());
    }

    #[test]
    fn nulls_propagate_as_nan_with_cleared_validity() {
        let x = vec64![-1.0, 0.0, 0.5, 2.0];
        let mut mask = Bitmask::new_set_all(4, true);
        mask.set(2, false);

        for got in [
            normal_pdf(&x, 0.0, 1.0, Some(&mask), Some(1)).unwrap(),
            normal_cdf(&x, 0.0, 1.0, Some(&mask), Some(1)).unwrap(),
            normal_sf(&x, 0.0, 1.0, Some(&mask), Some(1)).unwrap(),
            poisson_pmf(&x, 3.0, Some(&mask), Some(1)).unwrap(),
        ] {
            let out_mask = got.null_mask.as_ref().expect("mask must be carried");
            assert!(out_mask.get(0));
            assert!(out_mask.get(1));
            assert!(!out_mask.get(2));
            assert!(out_mask.get(3));
            assert!(got.data[2].is_nan());
            assert!(got.data[0].is_finite());
        }
    }

    #[test]
    fn unknown_null_count_still_reads_the_mask() {
        let p = vec64![0.25, 0.5, 0.75];
        let mut mask = Bitmask::new_set_all(3, true);
        mask.set(0, false);
        let got = normal_ppf(&p, 0.0, 1.0, Some(&mask), None).unwrap();
        let out_mask = got.null_mask.as_ref().unwrap();
        assert!(!out_mask.get(0));
        assert!(got.data[0].is_nan());
        assert_eq!(got.data[1], 0.0);
    }

    #[test]
    fn zero_null_count_takes_the_dense_path() {
        let x = vec64![0.1, 0.2];
        let mask = Bitmask::new_set_all(2, true);
        let got = exponential_pdf(&x, 1.0, Some(&mask), Some(0)).unwrap();
        let out_mask = got.null_mask.as_ref().unwrap();
        assert!(out_mask.get(0) && out_mask.get(1));
        assert!(got.data.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn short_mask_is_a_length_mismatch() {
        let x = vec64![0.1, 0.2, 0.3];
        let mask = Bitmask::new_set_all(2, true);
        match normal_pdf(&x, 0.0, 1.0, Some(&mask), None) {
            Err(KernelError::LengthMismatch(msg)) => assert!(msg.contains("normal_pdf")),
            other => panic!("expected LengthMismatch, got: {:?}", other),
        }
    }

    #[test]
    fn parameters_are_validated_before_the_mask() {
        let x = vec64![0.1, 0.2, 0.3];
        let mask = Bitmask::new_set_all(1, true);
        assert_invalid(gamma_ppf(&x, -1.0, 1.0, Some(&mask), None));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let got = beta_pdf(&[], 2.0, 3.0, None, None).unwrap();
        assert!(got.data.is_empty());
        assert!(got.null_mask.is_none());
    }
}
