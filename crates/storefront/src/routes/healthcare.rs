//! Healthcare catalog route handlers.
//!
//! The landing page shows the eight category cards plus a featured
//! product grid; category pages filter one category by group tag and
//! free-text search, all from the unified catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use omniworld_core::pricing::format_inr;

use crate::catalog::{Category, Product};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub group: String,
    pub description: String,
}

impl ProductCardView {
    fn from_product(product: &Product, rate: rust_decimal::Decimal) -> Self {
        Self {
            id: product.id.to_owned(),
            name: product.name.to_owned(),
            price: format_inr(product.price, rate),
            group: product.group.to_owned(),
            description: product.description.to_owned(),
        }
    }
}

/// A category card on the healthcare landing page.
#[derive(Clone)]
pub struct CategoryCardView {
    pub name: &'static str,
    pub href: String,
    pub count_label: &'static str,
}

/// A group filter chip on a category page.
#[derive(Clone)]
pub struct GroupView {
    pub name: String,
    pub count: usize,
    pub selected: bool,
}

/// Healthcare landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "healthcare/index.html")]
pub struct HealthcareTemplate {
    pub categories: Vec<CategoryCardView>,
    pub featured: Vec<ProductCardView>,
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "healthcare/category.html")]
pub struct CategoryTemplate {
    pub name: &'static str,
    pub slug: &'static str,
    pub groups: Vec<GroupView>,
    pub products: Vec<ProductCardView>,
    pub query: String,
    pub total: usize,
}

/// Display the healthcare landing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let rate = state.config().inr_rate;

    let categories = Category::ALL
        .into_iter()
        .map(|c| CategoryCardView {
            name: c.name(),
            href: format!("/healthcare/{}", c.slug()),
            count_label: c.count_label(),
        })
        .collect();

    let featured = state
        .catalog()
        .featured()
        .into_iter()
        .map(|p| ProductCardView::from_product(p, rate))
        .collect();

    HealthcareTemplate {
        categories,
        featured,
    }
}

/// Query parameters for category pages.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    /// Group tag filter; absent or "all" selects everything.
    pub group: Option<String>,
    /// Free-text search within the category.
    pub q: Option<String>,
}

/// Display one category page.
///
/// # Errors
///
/// Returns 404 for slugs outside the closed category set.
#[instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CategoryParams>,
) -> Result<impl IntoResponse> {
    let category =
        Category::from_slug(&slug).ok_or_else(|| AppError::NotFound(format!("category {slug}")))?;

    let rate = state.config().inr_rate;
    let group_filter = params.group.filter(|g| g != "all");
    let query = params.q.unwrap_or_default();
    let needle = query.trim().to_lowercase();

    let all = state.catalog().in_category(category);
    let total = all.len();

    let products: Vec<ProductCardView> = all
        .into_iter()
        .filter(|p| group_filter.as_deref().is_none_or(|g| p.group == g))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .map(|p| ProductCardView::from_product(p, rate))
        .collect();

    let groups = state
        .catalog()
        .groups(category)
        .into_iter()
        .map(|(name, count)| GroupView {
            name: name.to_owned(),
            count,
            selected: group_filter.as_deref() == Some(name),
        })
        .collect();

    Ok(CategoryTemplate {
        name: category.name(),
        slug: category.slug(),
        groups,
        products,
        query,
        total,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_landing_renders() {
        let response = index(State(test_state())).await.into_response();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_category_renders() {
        let response = category(
            State(test_state()),
            Path("medicines".to_owned()),
            Query(CategoryParams {
                group: Some("OTC".to_owned()),
                q: None,
            }),
        )
        .await
        .into_response();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let response = category(
            State(test_state()),
            Path("toys".to_owned()),
            Query(CategoryParams {
                group: None,
                q: None,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
