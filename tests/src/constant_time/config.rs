// src/constant_time/config.rs

// Default configuration with thresholds
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_max: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            combined_score_threshold: 1.8,
            num_warmup: 20,
            num_samples: 25,
            num_iterations: 10,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Predefined configurations for the signature operations
impl TestConfig {
    /// Signing is dominated by two fixed-length ladders
    pub fn for_signing() -> Self {
        Self::default()
    }

    /// Verification compares accept and reject paths, which run the same
    /// ladders but touch different data
    pub fn for_verification() -> Self {
        Self::default()
            .with_mean_ratio_max(1.35)
            .with_combined_score_threshold(1.9)
    }
}
