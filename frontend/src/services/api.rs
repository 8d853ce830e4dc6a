use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    Anomaly, Budget, BudgetRisk, CategoryReport, Expense, ExpensePayload, Insight, MonthlyDiff,
    SpendingProfile, Summary, UserPreferences, WrappedStory,
};

/// Backend base URL; overridable at build time for deployed
/// environments.
pub fn api_base_url() -> String {
    option_env!("API_URL")
        .unwrap_or("http://localhost:8000")
        .to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// API client for the expense tracker backend. Every request carries
/// the bearer token supplied by the auth session.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(api_base_url(), token)
    }

    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self { base_url, token }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, message })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::check(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // --- Reads ---

    pub async fn get_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get_json("/expenses/").await
    }

    pub async fn get_summary(&self, month: &str) -> Result<Summary, ApiError> {
        self.get_json(&format!("/summary/?month={}", month)).await
    }

    pub async fn get_category_report(&self, month: &str) -> Result<CategoryReport, ApiError> {
        self.get_json(&format!("/report_by_category/?month={}", month))
            .await
    }

    pub async fn get_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        self.get_json("/budgets_all/").await
    }

    pub async fn get_insights(&self) -> Result<Vec<Insight>, ApiError> {
        self.get_json("/insights").await
    }

    pub async fn get_budget_risk(&self) -> Result<BudgetRisk, ApiError> {
        self.get_json("/budget/risk").await
    }

    pub async fn get_monthly_diffs(&self) -> Result<Vec<MonthlyDiff>, ApiError> {
        self.get_json("/reports/monthly-diff").await
    }

    pub async fn get_anomalies(&self) -> Result<Vec<Anomaly>, ApiError> {
        self.get_json("/anomalies").await
    }

    pub async fn get_spending_profile(&self) -> Result<SpendingProfile, ApiError> {
        self.get_json("/spending-profile").await
    }

    pub async fn get_wrapped(&self) -> Result<WrappedStory, ApiError> {
        self.get_json("/wrapped").await
    }

    // --- Writes: fire-and-await, callers re-fetch afterwards ---

    pub async fn create_expense(&self, payload: &ExpensePayload) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/expenses/", self.base_url))
            .header("Authorization", &self.bearer())
            .json(payload)?
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn update_expense(&self, id: i64, payload: &ExpensePayload) -> Result<(), ApiError> {
        let response = Request::put(&format!("{}/expenses/{}", self.base_url, id))
            .header("Authorization", &self.bearer())
            .json(payload)?
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/expenses/{}", self.base_url, id))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    /// Creates or updates the budget for `budget.month`.
    pub async fn save_budget(&self, budget: &Budget) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/budgets/", self.base_url))
            .header("Authorization", &self.bearer())
            .json(budget)?
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn delete_budget(&self, month: &str) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/budgets/{}", self.base_url, month))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), ApiError> {
        let response = Request::put(&format!("{}/user/preferences", self.base_url))
            .header("Authorization", &self.bearer())
            .json(preferences)?
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    // --- Export ---

    /// Streams the CSV export for the given date range as raw bytes.
    /// Both bounds must be validated non-empty by the caller first.
    pub async fn export_expenses_csv(&self, from: &str, to: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/export/expenses?from_date={}&to_date={}",
            self.base_url, from, to
        );
        let response = Request::get(&url)
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::check(response).await?.binary().await.map_err(ApiError::Transport)
    }
}
