pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Grouped by functional area.

    // =============================================================================
    // NOTIFICATION CONFIGURATION
    // =============================================================================

    /// The maximum number of notifications kept for display.
    pub const MAX_NOTIFICATIONS: usize = 100;

    // =============================================================================
    // BACKEND LAYOUT
    // =============================================================================

    /// Table and view names used by the data-access client
    pub mod tables {
        /// Read view with running totals per campaign.
        pub const CAMPAIGN_STATS: &str = "campaign_stats";
        /// Writable campaign table.
        pub const CAMPAIGNS: &str = "campaigns";
        pub const DONATIONS: &str = "donations";
        pub const GALLERY: &str = "gallery";
    }

    /// Object storage layout
    pub mod storage {
        /// Bucket used when the configuration does not name one.
        pub const DEFAULT_BUCKET: &str = "campaign-images";
        /// Folder inside the bucket that uploads land in.
        pub const UPLOAD_PREFIX: &str = "public";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        /// Uploads go through the same client, so this is generous.
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed.
        pub const fn splash_duration() -> Duration {
            Duration::from_secs(2)
        }

        /// Key polling interval of the event loop.
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(100)
        }
    }
}
