use const_format::formatcp;

use crate::{errors::ApiError, objects::Health, Client, API_PREFIX, RUNTIME};

const API_HEALTH: &str = formatcp!("{API_PREFIX}/health");

pub struct HealthApi {
    client: Client,
}

impl HealthApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn get(&self) -> HealthGet {
        HealthGet {
            client: self.client.clone(),
        }
    }
}

pub struct HealthGet {
    client: Client,
}

impl HealthGet {
    pub async fn send(self) -> Result<Health, ApiError> {
        let request = self.client.request();
        let url = request.url(API_HEALTH)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Health, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
