// src/presentation/http/state.rs
use crate::application::greeting::GreetingService;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub greeter: Arc<GreetingService>,
}
