pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the analytics
    //! dashboard, organized by functional area for clarity and maintainability.

    // =============================================================================
    // DATA CONFIGURATION
    // =============================================================================
    // Default file locations match the layout the upstream data-preparation
    // pipeline writes into the working directory.

    /// Default location of the cleaned transaction table.
    pub const DEFAULT_TRANSACTIONS_PATH: &str = "data/processed/online_retail_cleaned.csv";

    /// Default location of the customer RFM segmentation table.
    pub const DEFAULT_RFM_PATH: &str = "data/processed/rfm_customer_segmentation.csv";

    /// Shown whenever loading fails; the inputs are produced upstream.
    pub const LOAD_REMEDIATION: &str =
        "Run the upstream data-preparation pipeline (cleaning + RFM scoring) first, \
         or point --transactions/--rfm at existing files.";

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================
    // Ranking depths and the sampling scheme mirror the upstream reporting
    // conventions so numbers stay comparable across tools.

    /// Aggregation views configuration
    pub mod views {
        /// Ranking depth for country and product leaderboards.
        pub const TOP_N: usize = 10;

        /// Ranking depth for the customer leaderboard.
        pub const TOP_CUSTOMERS: usize = 20;

        /// Bucket count for the purchase-frequency histogram.
        pub const HISTOGRAM_BUCKETS: usize = 50;

        /// Upper bound on the RFM scatter sample size.
        pub const SCATTER_SAMPLE_SIZE: usize = 1000;

        /// Seed for the scatter sample; fixed so reruns plot the same points.
        pub const SCATTER_SAMPLE_SEED: u64 = 42;

        /// Product labels longer than this are truncated for display.
        pub const PRODUCT_LABEL_WIDTH: usize = 30;
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Terminal UI timing configuration
    pub mod ui_timing {
        use std::time::Duration;

        /// Input poll interval for the event loop (milliseconds).
        pub const TICK_INTERVAL_MS: u64 = 100;

        /// Helper function to get the poll interval
        pub const fn tick_interval() -> Duration {
            Duration::from_millis(TICK_INTERVAL_MS)
        }
    }
}
