//! Catalog queries: free-text search, dietary filters, recommendations and the
//! suggested starter menu.

use crate::catalog::Catalog;
use crate::model::{CateringSession, EventType, Product, ProductId};
use crate::pricing::{allocate, effective_budget};

/// Dietary filter chips, as `(tag, label)`.
pub const DIETARY_TAGS: [(&str, &str); 8] = [
    ("popular", "Popular"),
    ("vegan", "Vegan"),
    ("vegetarian", "Vegetarian"),
    ("gluten-free", "Gluten-Free"),
    ("dairy-free", "Dairy-Free"),
    ("halal", "Halal"),
    ("healthy", "Healthy"),
    ("southern", "Southern"),
];

/// Products carrying one of these tags are never recommended as add-ons.
const NOT_RECOMMENDED: [&str; 3] = ["package", "interactive", "beverage"];

/// Products carrying one of these tags stay out of the suggested menu.
const NOT_SUGGESTED: [&str; 2] = ["package", "interactive"];

/// Suggested menu recipes: `(any of these tags, how many products)`.
type MenuRecipe = &'static [(&'static [&'static str], usize)];

const BREAKFAST_MENU: MenuRecipe = &[
    (&["entree", "classic"], 1),
    (&["protein"], 1),
    (&["side"], 1),
    (&["beverage"], 1),
];
const LUNCH_MENU: MenuRecipe = &[(&["entree"], 1), (&["side"], 2), (&["beverage"], 1)];
const DESSERT_MENU: MenuRecipe = &[(&["dessert", "bakery"], 2), (&["beverage"], 1)];

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

/// A product listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub term: Option<String>,
    pub event_type: Option<EventType>,
    /// Every tag listed here must be present on a product.
    pub dietary: Vec<String>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn with_dietary<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.dietary = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive substring match over title, description and tags. An empty
    /// term matches everything.
    pub fn matches_term(&self, product: &Product) -> bool {
        let Some(term) = self.term.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        product.title.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term))
    }

    pub fn matches_dietary(&self, product: &Product) -> bool {
        self.dietary.iter().all(|tag| product.has_tag(tag))
    }
}

/// Keep products that carry every tag in `tags`.
pub fn filter_by_dietary<'a>(products: Vec<&'a Product>, tags: &[&str]) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| tags.iter().all(|tag| p.has_tag(tag)))
        .collect()
}

/// Stable sort grouping products by pricing model in display order.
pub fn sort_by_pricing_kind(products: &mut [&Product]) {
    products.sort_by_key(|p| p.pricing.kind());
}

fn has_any_tag(product: &Product, tags: &[&str]) -> bool {
    tags.iter().any(|tag| product.has_tag(tag))
}

impl Catalog {
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products_for(query.event_type)
            .into_iter()
            .filter(|p| query.matches_term(p) && query.matches_dietary(p))
            .collect();
        sort_by_pricing_kind(&mut products);
        products
    }

    /// Add-on suggestions for an event: products not in the cart, minus packages,
    /// interactive stations and beverages, popular ones first.
    pub fn recommended_products(
        &self,
        event_type: Option<EventType>,
        in_cart: &[ProductId],
        limit: usize,
    ) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products_for(event_type)
            .into_iter()
            .filter(|p| !in_cart.contains(&p.id) && !has_any_tag(p, &NOT_RECOMMENDED))
            .collect();
        products.sort_by_key(|p| !p.is_popular());
        products.truncate(limit);
        products
    }

    /// Popular products for the session's event that are not in its cart yet and, when
    /// a budget band is set, fit under its per-person max at the current headcount.
    pub fn recommended_for_session(&self, session: &CateringSession) -> Vec<&Product> {
        let Some(event_type) = session.event_type else {
            return Vec::new();
        };
        let max_per_person = session
            .budget_range
            .as_ref()
            .map(|range| effective_budget(range, session.custom_budget).1);
        let guests = session.headcount.as_f64();

        self.products_for(Some(event_type))
            .into_iter()
            .filter(|p| p.is_popular() && !session.is_item_in_cart(&p.id))
            .filter(|p| {
                max_per_person.map_or(true, |max| {
                    allocate(&p.pricing, session.headcount).total_price() / guests <= max
                })
            })
            .take(DEFAULT_RECOMMENDATION_LIMIT)
            .collect()
    }

    /// A balanced starter menu for an event type, lunch when none is given.
    pub fn suggested_menu(&self, event_type: Option<EventType>) -> Vec<&Product> {
        let event_type = event_type.unwrap_or(EventType::Lunch);
        let picks = match event_type {
            EventType::Breakfast => BREAKFAST_MENU,
            EventType::Lunch => LUNCH_MENU,
            EventType::Dessert => DESSERT_MENU,
        };

        let pool: Vec<&Product> = self
            .products_for(Some(event_type))
            .into_iter()
            .filter(|p| !has_any_tag(p, &NOT_SUGGESTED))
            .collect();

        let mut menu: Vec<&Product> = Vec::new();
        for (tags, count) in picks {
            let chosen = pool
                .iter()
                .copied()
                .filter(|p| has_any_tag(p, tags))
                .take(*count);
            for product in chosen {
                if !menu.iter().any(|m| m.id == product.id) {
                    menu.push(product);
                }
            }
        }
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BudgetRange, PricingKind, SessionId, Transition};
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn search_matches_title_description_and_tags() {
        let catalog = catalog();
        let by_title = catalog.search(&ProductQuery::new().with_term("SALMON"));
        assert!(!by_title.is_empty());
        assert!(by_title
            .iter()
            .all(|p| ProductQuery::new().with_term("salmon").matches_term(p)));

        let by_tag = catalog.search(&ProductQuery::new().with_term("seafood"));
        assert!(by_tag.iter().any(|p| p.has_tag("seafood")));

        let everything = catalog.search(&ProductQuery::new().with_term(""));
        assert_eq!(everything.len(), catalog.products.len());
    }

    #[test]
    fn search_groups_by_pricing_kind() {
        let catalog = catalog();
        let results = catalog.search(&ProductQuery::new().with_event_type(EventType::Lunch));
        let kinds: Vec<PricingKind> = results.iter().map(|p| p.pricing.kind()).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert!(results.iter().all(|p| p.is_offered_for(EventType::Lunch)));
    }

    #[test]
    fn dietary_filter_requires_every_tag() {
        let catalog = catalog();
        let both = catalog.search(&ProductQuery::new().with_dietary(["vegan", "gluten-free"]));
        assert!(both
            .iter()
            .all(|p| p.has_tag("vegan") && p.has_tag("gluten-free")));

        let vegan = filter_by_dietary(catalog.products_for(None), &["vegan"]);
        assert!(vegan.len() >= both.len());
        assert_eq!(
            filter_by_dietary(catalog.products_for(None), &[]).len(),
            catalog.products.len()
        );
    }

    #[test]
    fn recommendations_skip_cart_and_excluded_tags() {
        let catalog = catalog();
        let first = catalog.recommended_products(Some(EventType::Lunch), &[], 6);
        assert_eq!(first.len(), 6);

        let in_cart = vec![first[0].id.clone()];
        let recs = catalog.recommended_products(Some(EventType::Lunch), &in_cart, 6);
        assert!(recs.iter().all(|p| p.id != in_cart[0]));
        assert!(recs
            .iter()
            .all(|p| !p.has_tag("package") && !p.has_tag("interactive") && !p.has_tag("beverage")));

        // Popular products lead.
        let popular: Vec<bool> = recs.iter().map(|p| p.is_popular()).collect();
        let mut expected = popular.clone();
        expected.sort_by_key(|popular| !popular);
        assert_eq!(popular, expected);
    }

    #[test]
    fn session_recommendations_respect_budget() {
        let catalog = catalog();
        let session = CateringSession::new(SessionId(1));
        assert!(catalog.recommended_for_session(&session).is_empty());

        let session = session
            .apply(Transition::SelectEventType(EventType::Lunch))
            .apply(Transition::SetHeadcount(25));
        let open = catalog.recommended_for_session(&session);
        assert!(open.len() <= DEFAULT_RECOMMENDATION_LIMIT);
        assert!(open.iter().all(|p| p.is_popular()));

        let tight = session.apply(Transition::SetBudgetRange(BudgetRange::new("tight", 0.0, 1.0)));
        let affordable = catalog.recommended_for_session(&tight);
        assert!(affordable.iter().all(|p| {
            allocate(&p.pricing, tight.headcount).total_price() / 25.0 <= 1.0
        }));
    }

    #[test]
    fn suggested_menu_is_balanced_and_unique() {
        let catalog = catalog();
        for event_type in EventType::ALL {
            let menu = catalog.suggested_menu(Some(event_type));
            assert!(!menu.is_empty(), "no menu for {event_type}");
            let ids: HashSet<_> = menu.iter().map(|p| &p.id).collect();
            assert_eq!(ids.len(), menu.len());
            assert!(menu.iter().all(|p| p.is_offered_for(event_type)));
            assert!(menu.iter().all(|p| !p.has_tag("package")));
        }

        let lunch = catalog.suggested_menu(None);
        assert_eq!(lunch, catalog.suggested_menu(Some(EventType::Lunch)));
        assert!(lunch.len() <= 4);
        assert!(lunch.iter().filter(|p| p.has_tag("side")).count() >= 2);
    }

    #[test]
    fn dietary_tags_are_known_catalog_tags() {
        let catalog = catalog();
        for (tag, _) in DIETARY_TAGS {
            assert!(catalog.products.iter().any(|p| p.has_tag(tag)), "{tag}");
        }
    }
}
