//! Random number providers.

pub mod random_org;

pub use random_org::{DEFAULT_TIMEOUT, RANDOM_ORG_URL, RandomOrgClient};
