use axum::Json;
use serde::Serialize;

use crate::catalog::{self, Section};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub sections: &'static [Section],
    pub modules: Vec<&'static str>,
}

pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        sections: catalog::sections(),
        modules: catalog::all_modules(),
    })
}
