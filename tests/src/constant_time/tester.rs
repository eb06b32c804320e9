// src/constant_time/tester.rs
use super::config::TestConfig;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Results of comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

/// Collects per-call timings and compares two input classes with Welch's t-test
pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        (0..self.num_samples)
            .map(|_| self.measure_once(&mut f))
            .collect()
    }

    /// Interleave the two input classes so drift affects both equally
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.push(self.measure_once(&mut a));
            times_b.push(self.measure_once(&mut b));
        }
        (times_a, times_b)
    }

    fn measure_once<F: FnMut()>(&self, f: &mut F) -> u128 {
        let start = Instant::now();
        for _ in 0..self.num_iterations {
            f();
        }
        start.elapsed().as_nanos() / self.num_iterations as u128
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // Remove outliers using IQR method
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let lower_bound = q1 - 1.5 * iqr;
        let upper_bound = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower_bound && (t as f64) <= upper_bound)
            .copied()
            .collect()
    }

    // Welch's t-test
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        (mean_a - mean_b).abs() / ((var_a / n_a + var_b / n_b).sqrt())
    }

    // Welch-Satterthwaite equation
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let term_a = Self::variance(times_a, mean_a) / n_a;
        let term_b = Self::variance(times_b, mean_b) / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    /// Two-tailed p-value from Student's t-distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat.abs() < 2.0 { 0.5 } else { 0.01 };
        }

        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.5,
        }
    }

    // Cohen's d with pooled standard deviation
    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        (mean_a - mean_b).abs() / pooled
    }

    /// Weighted score of mean ratio, t-statistic and spread; 1.0 is ideal
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);

        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();

        let mean_ratio = if mean_a > mean_b {
            mean_a / mean_b
        } else {
            mean_b / mean_a
        };

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let rel_std_dev = f64::max(std_dev_a / mean_a, std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d: Self::cohens_d(&clean_a, &clean_b),
            combined_score,
            is_constant_time: mean_ratio <= config.mean_ratio_max
                && combined_score <= config.combined_score_threshold,
        })
    }
}

/// Human-readable summary of a timing comparison
pub fn generate_test_insights(analysis: &TimingAnalysis, operation: &str) -> String {
    let diff_percent = (analysis.mean_a - analysis.mean_b).abs()
        / f64::min(analysis.mean_a, analysis.mean_b)
        * 100.0;

    let mut insights = if analysis.is_constant_time {
        format!("PASS: {} shows no input-dependent timing.\n", operation)
    } else {
        format!("FAIL: {} timing depends on its input.\n", operation)
    };

    insights.push_str(&format!(
        "  Mean: {:.0} ns vs {:.0} ns (diff: {:.1}%)\n",
        analysis.mean_a, analysis.mean_b, diff_percent
    ));
    insights.push_str(&format!(
        "  Stats: t={:.2}, df={:.1}, p={:.3}, d={:.2}, score={:.3}\n",
        analysis.t_statistic,
        analysis.degrees_of_freedom,
        analysis.p_value,
        analysis.cohens_d,
        analysis.combined_score
    ));

    if !analysis.is_constant_time && diff_percent > 40.0 && analysis.cohens_d > 5.0 {
        insights.push_str("  Large gap: look for an early return on one input class\n");
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_samples_pass() {
        let times: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester
            .analyze_constant_time(&times, &times, &TestConfig::default())
            .unwrap();
        assert!(analysis.is_constant_time);
        assert!(analysis.t_statistic < 1e-9);
    }

    #[test]
    fn doubled_samples_fail() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 7)).collect();
        let b: Vec<u128> = a.iter().map(|t| t * 2).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester
            .analyze_constant_time(&a, &b, &TestConfig::default())
            .unwrap();
        assert!(!analysis.is_constant_time);
        assert!(generate_test_insights(&analysis, "doubled").starts_with("FAIL"));
    }

    #[test]
    fn outliers_are_dropped() {
        let mut times: Vec<u128> = vec![100; 20];
        times.push(100_000);
        assert_eq!(TimingTester::remove_outliers(&times).len(), 20);
    }
}
