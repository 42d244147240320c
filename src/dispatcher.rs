use crate::config::Config;
use crate::error::CheckError;
use crate::form::FormInputs;
use crate::renderer::{display_result, DisplayContainer};
use crate::types::{string_list, ParkingCheckRequest, ParkingCheckResult};
use chrono::{DateTime, SecondsFormat, Utc};
use futures::TryFutureExt;
use log::{debug, info, warn};
use serde_json::Value;
use url::Url;

pub struct Dispatcher {
    client: reqwest::Client,
    base_url: Url,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Result<Dispatcher, CheckError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Dispatcher {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Sends the form to `/check_parking` and renders the outcome into `display`.
    /// On error the display is left untouched.
    pub async fn check_parking<F, D>(
        &self,
        form: &F,
        display: &mut D,
    ) -> Result<ParkingCheckResult, CheckError>
    where
        F: FormInputs + ?Sized,
        D: DisplayContainer + ?Sized,
    {
        let result = self.dispatch(form).await?;
        display_result(&result, display);
        Ok(result)
    }

    pub async fn dispatch<F>(&self, form: &F) -> Result<ParkingCheckResult, CheckError>
    where
        F: FormInputs + ?Sized,
    {
        let request = build_request(form, Utc::now());
        let url = self.endpoint("check_parking")?;
        info!("Checking parking in lot {}", request.lot_name);
        debug!("Posting {:?} to {}", request, url);
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .map_err(CheckError::Transport)
            .await?;
        let value = read_json(response).await?;
        let result = ParkingCheckResult::from_json(&value)?;
        info!(
            "Parking check returned allowed={}: {}",
            result.is_allowed(),
            result.message()
        );
        Ok(result)
    }

    pub async fn fetch_lots(&self) -> Result<Vec<String>, CheckError> {
        self.fetch_list("lots").await
    }

    pub async fn fetch_permits(&self) -> Result<Vec<String>, CheckError> {
        self.fetch_list("permits").await
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<String>, CheckError> {
        let url = self.endpoint(path)?;
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(CheckError::Transport)
            .await?;
        let value = read_json(response).await?;
        string_list(&value)
    }

    fn endpoint(&self, path: &str) -> Result<Url, CheckError> {
        self.base_url
            .join(path)
            .map_err(|e| CheckError::Config(format!("Bad endpoint {}: {}", path, e)))
    }
}

/// Field values are copied verbatim; `now` is formatted the way browsers
/// format `Date.toISOString()`.
pub fn build_request<F>(form: &F, now: DateTime<Utc>) -> ParkingCheckRequest
where
    F: FormInputs + ?Sized,
{
    ParkingCheckRequest {
        license_plate: form.license_plate().to_string(),
        lot_name: form.lot_name().to_string(),
        user_type: form.user_type().to_string(),
        time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

// The status code is not consulted; the server reports refusals in the body.
async fn read_json(response: reqwest::Response) -> Result<Value, CheckError> {
    let status = response.status();
    if !status.is_success() {
        warn!("Parking server returned {} for {}", status, response.url());
    }
    let body = response.text().map_err(CheckError::Transport).await?;
    Ok(serde_json::from_str(&body)?)
}
