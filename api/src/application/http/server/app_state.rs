use std::sync::Arc;

use hairhq_core::application::HairHqService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HairHqService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HairHqService) -> Self {
        Self { args, service }
    }
}
