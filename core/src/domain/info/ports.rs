use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Mode};

/// Repository trait for the static per-mode info documents.
#[cfg_attr(test, mockall::automock)]
pub trait InfoRepository: Send + Sync {
    fn load_info(
        &self,
        mode: Mode,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

/// Service trait exposing the mode-keyed info lookup.
#[cfg_attr(test, mockall::automock)]
pub trait InfoService: Send + Sync {
    fn get_info(
        &self,
        mode: Mode,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
