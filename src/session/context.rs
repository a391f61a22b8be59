use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    #[serde(alias = "是")]
    Listed,
    #[serde(alias = "否")]
    Unlisted,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Listed => "是",
            ListingStatus::Unlisted => "否",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisAngle {
    #[default]
    #[serde(alias = "债权投资")]
    Debt,
    #[serde(alias = "股权投资")]
    Equity,
    #[serde(alias = "债股双投")]
    Both,
}

impl AnalysisAngle {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisAngle::Debt => "债权投资",
            AnalysisAngle::Equity => "股权投资",
            AnalysisAngle::Both => "债股双投",
        }
    }
}

impl fmt::Display for AnalysisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form input. Every field is optional on the wire and missing text
/// fields become empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContextForm {
    pub company: String,
    pub industry: String,
    pub listing: ListingStatus,
    pub ticker: String,
    pub angle: AnalysisAngle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub company: String,
    pub industry: String,
    pub listing: ListingStatus,
    pub ticker: String,
    pub angle: AnalysisAngle,
}

impl SessionContext {
    /// Builds a context from form input as-is. Empty or odd values are
    /// kept verbatim and flow straight into prompts.
    pub fn collect(form: ContextForm) -> Self {
        Self {
            company: form.company,
            industry: form.industry,
            listing: form.listing,
            ticker: form.ticker,
            angle: form.angle,
        }
    }

    /// Labeled fields in prompt order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("公司", self.company.as_str()),
            ("行业", self.industry.as_str()),
            ("是否上市", self.listing.label()),
            ("股票代码", self.ticker.as_str()),
            ("分析角度", self.angle.label()),
        ]
    }
}
