use std::sync::Arc;

use nutriscope_core::application::NutriscopeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<NutriscopeService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriscopeService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
