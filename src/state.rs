use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::http::HttpUserDirectory;
use crate::web::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<HttpUserDirectory>,
    pub sessions: Arc<SessionStore>,
    pub reset_delay: Duration,
}

impl AppState {
    pub fn new(directory: Arc<HttpUserDirectory>, reset_delay: Duration) -> Self {
        Self {
            directory,
            sessions: Arc::new(SessionStore::new()),
            reset_delay,
        }
    }
}
