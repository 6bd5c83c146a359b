//! Static marketing page route handlers.
//!
//! About, help center, and the coming-soon page for divisions whose
//! storefronts are not live yet.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::filters;

/// A company value card on the about page.
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub values: Vec<ValueCard>,
}

/// Display the about page.
#[instrument]
pub async fn about() -> impl IntoResponse {
    AboutTemplate {
        values: vec![
            ValueCard {
                title: "Mission",
                description: "Solve real-world problems across healthcare, technology, and education.",
            },
            ValueCard {
                title: "Innovation",
                description: "Modern tooling and human-centered design in everything we ship.",
            },
            ValueCard {
                title: "Excellence",
                description: "Clinic-grade quality standards across every product line.",
            },
            ValueCard {
                title: "Global Impact",
                description: "Serving professionals and institutions worldwide.",
            },
        ],
    }
}

/// A help-center topic with its common questions.
pub struct HelpTopic {
    pub title: &'static str,
    pub entries: Vec<&'static str>,
}

/// A support contact channel.
pub struct SupportChannel {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Help center template.
#[derive(Template, WebTemplate)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub topics: Vec<HelpTopic>,
    pub channels: Vec<SupportChannel>,
}

/// Display the help center.
#[instrument]
pub async fn help() -> impl IntoResponse {
    HelpTemplate {
        topics: vec![
            HelpTopic {
                title: "Orders & Shipping",
                entries: vec![
                    "Track your order from the confirmation email",
                    "Standard delivery takes 3-5 business days",
                    "Free shipping on qualifying orders",
                ],
            },
            HelpTopic {
                title: "Products & Inventory",
                entries: vec![
                    "All products are sourced from certified manufacturers",
                    "Prescription items require a valid prescription",
                    "Report damaged items within 48 hours",
                ],
            },
            HelpTopic {
                title: "Payments & Billing",
                entries: vec![
                    "We accept cards, UPI, net banking, wallets, and cash on delivery",
                    "Invoices are emailed after every order",
                ],
            },
            HelpTopic {
                title: "Account Management",
                entries: vec![
                    "No account is required to place an order",
                    "Seller applications are reviewed within 48 hours",
                ],
            },
        ],
        channels: vec![
            SupportChannel {
                title: "Phone Support",
                detail: "+91 1800-000-000, Mon-Sat 9:00-18:00 IST",
            },
            SupportChannel {
                title: "Email Support",
                detail: "support@omniworld.example, replies within one business day",
            },
            SupportChannel {
                title: "Live Chat",
                detail: "Available on weekdays from the help center",
            },
        ],
    }
}

/// A division whose storefront is not live yet.
struct DivisionInfo {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
}

/// The closed set of divisions with coming-soon pages.
const DIVISIONS: [DivisionInfo; 2] = [
    DivisionInfo {
        slug: "it-solutions",
        name: "IT Solutions",
        description: "Enterprise software and technology consulting services",
    },
    DivisionInfo {
        slug: "education",
        name: "Education",
        description: "Educational platforms and learning management systems",
    },
];

/// Coming-soon page template.
#[derive(Template, WebTemplate)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// Unknown-division template.
#[derive(Template, WebTemplate)]
#[template(path = "division_not_found.html")]
pub struct DivisionNotFoundTemplate {
    pub slug: String,
}

/// Display the coming-soon page for a division, or a not-found page for
/// anything outside the closed set.
#[instrument]
pub async fn coming_soon(Path(division): Path<String>) -> Response {
    match DIVISIONS.iter().find(|d| d.slug == division) {
        Some(info) => ComingSoonTemplate {
            name: info.name,
            description: info.description,
        }
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            DivisionNotFoundTemplate { slug: division },
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_division_renders() {
        let response = coming_soon(Path("it-solutions".to_owned())).await;
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_unknown_division_is_404() {
        let response = coming_soon(Path("aerospace".to_owned())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
