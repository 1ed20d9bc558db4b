use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetHairInfoParams {
    /// Info document mode; anything other than "women" or "men" falls back
    /// to the default.
    #[param(example = "women")]
    pub mode: Option<String>,
}
