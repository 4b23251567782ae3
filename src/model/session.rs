//! Catering session state and the transitions that move it.
//!
//! [`CateringSession::apply`] is a pure reducer: it consumes the current state and a
//! [`Transition`] and returns the next state. Nothing here caches derived totals. Quotes
//! are recomputed from the state on demand by [`crate::pricing`].

use crate::model::{BudgetRange, BuyerInfo, CateringPackage, EventType, Headcount, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    BuildYourOwn,
    Packages,
}

/// Position in the four-step ordering wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct WizardStep(u8);

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep(1);
    pub const LAST: WizardStep = WizardStep(4);

    pub fn new(step: i64) -> Self {
        Self(step.clamp(1, 4) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn back(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for WizardStep {
    fn from(step: i64) -> Self {
        Self::new(step)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.0
    }
}

/// A product in the cart and how many of it the buyer asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    pub product: Product,
    pub quantity: u32,
}

impl SelectedItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Picks the event type, defaults to build-your-own and advances to step 2.
    SelectEventType(EventType),
    /// Drops any custom amount unless the new range is the custom one.
    SetBudgetRange(BudgetRange),
    SetCustomBudget(f64),
    SetOrderType(OrderType),
    SetHeadcount(i64),
    /// Increments the quantity of a product already in the cart, otherwise adds it with 1.
    AddItem(Product),
    RemoveItem(ProductId),
    /// A quantity of zero or less removes the item.
    UpdateItemQuantity { product_id: ProductId, quantity: i64 },
    ClearItems,
    /// Selecting a package empties the item cart.
    SelectPackage(CateringPackage),
    ClearPackage,
    GoToStep(i64),
    GoBack,
    SetBuyerInfo(BuyerInfo),
    /// Replace the whole state with a previously saved one, keeping this session's id.
    Hydrate(Box<CateringSession>),
    Reset,
}

impl Transition {
    pub fn name(&self) -> &'static str {
        match self {
            Transition::SelectEventType(_) => "select_event_type",
            Transition::SetBudgetRange(_) => "set_budget_range",
            Transition::SetCustomBudget(_) => "set_custom_budget",
            Transition::SetOrderType(_) => "set_order_type",
            Transition::SetHeadcount(_) => "set_headcount",
            Transition::AddItem(_) => "add_item",
            Transition::RemoveItem(_) => "remove_item",
            Transition::UpdateItemQuantity { .. } => "update_item_quantity",
            Transition::ClearItems => "clear_items",
            Transition::SelectPackage(_) => "select_package",
            Transition::ClearPackage => "clear_package",
            Transition::GoToStep(_) => "go_to_step",
            Transition::GoBack => "go_back",
            Transition::SetBuyerInfo(_) => "set_buyer_info",
            Transition::Hydrate(_) => "hydrate",
            Transition::Reset => "reset",
        }
    }
}

/// Everything the buyer has chosen so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringSession {
    pub id: SessionId,
    pub step: WizardStep,
    pub event_type: Option<EventType>,
    pub budget_range: Option<BudgetRange>,
    pub custom_budget: Option<f64>,
    pub order_type: Option<OrderType>,
    pub headcount: Headcount,
    pub selected_items: Vec<SelectedItem>,
    pub selected_package: Option<CateringPackage>,
    pub buyer_info: Option<BuyerInfo>,
}

impl CateringSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            step: WizardStep::FIRST,
            event_type: None,
            budget_range: None,
            custom_budget: None,
            order_type: None,
            headcount: Headcount::DEFAULT,
            selected_items: Vec::new(),
            selected_package: None,
            buyer_info: None,
        }
    }

    pub fn apply(mut self, transition: Transition) -> Self {
        match transition {
            Transition::SelectEventType(event_type) => {
                self.event_type = Some(event_type);
                self.order_type = Some(OrderType::BuildYourOwn);
                self.step = WizardStep::new(2);
            }
            Transition::SetBudgetRange(range) => {
                if !range.is_custom {
                    self.custom_budget = None;
                }
                self.budget_range = Some(range);
            }
            Transition::SetCustomBudget(amount) => self.custom_budget = Some(amount),
            Transition::SetOrderType(order_type) => self.order_type = Some(order_type),
            Transition::SetHeadcount(guests) => self.headcount = Headcount::new(guests),
            Transition::AddItem(product) => {
                match self
                    .selected_items
                    .iter_mut()
                    .find(|item| item.product.id == product.id)
                {
                    Some(item) => item.quantity = item.quantity.saturating_add(1),
                    None => self.selected_items.push(SelectedItem::new(product, 1)),
                }
            }
            Transition::RemoveItem(product_id) => {
                self.selected_items.retain(|item| item.product.id != product_id);
            }
            Transition::UpdateItemQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    self.selected_items.retain(|item| item.product.id != product_id);
                } else if let Some(item) = self
                    .selected_items
                    .iter_mut()
                    .find(|item| item.product.id == product_id)
                {
                    item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                }
            }
            Transition::ClearItems => self.selected_items.clear(),
            Transition::SelectPackage(package) => {
                self.selected_package = Some(package);
                self.selected_items.clear();
            }
            Transition::ClearPackage => self.selected_package = None,
            Transition::GoToStep(step) => self.step = WizardStep::new(step),
            Transition::GoBack => self.step = self.step.back(),
            Transition::SetBuyerInfo(info) => self.buyer_info = Some(info),
            Transition::Hydrate(saved) => {
                let id = self.id;
                self = CateringSession { id, ..*saved };
            }
            Transition::Reset => self = CateringSession::new(self.id),
        }
        self
    }

    /// An event type is chosen, something is in the cart (package or items), and there
    /// are guests to feed.
    pub fn can_proceed_to_checkout(&self) -> bool {
        self.event_type.is_some()
            && (self.selected_package.is_some() || !self.selected_items.is_empty())
            && self.headcount.get() > 0
    }

    pub fn item_quantity(&self, product_id: &ProductId) -> u32 {
        self.selected_items
            .iter()
            .find(|item| &item.product.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    pub fn is_item_in_cart(&self, product_id: &ProductId) -> bool {
        self.selected_items
            .iter()
            .any(|item| &item.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PricingModel;

    fn cookie() -> Product {
        Product::new(
            "cookie-tray",
            "Cookie Tray",
            PricingModel::PerDozen {
                price_per_dozen: 30.0,
                serves_per_dozen: 12,
            },
        )
        .with_categories([EventType::Dessert])
    }

    fn session() -> CateringSession {
        CateringSession::new(SessionId(1))
    }

    #[test]
    fn new_session_defaults() {
        let s = session();
        assert_eq!(s.headcount.get(), 10);
        assert_eq!(s.step.get(), 1);
        assert!(s.event_type.is_none());
        assert!(s.selected_items.is_empty());
        assert!(!s.can_proceed_to_checkout());
    }

    #[test]
    fn select_event_type_defaults_order_type_and_advances() {
        let s = session().apply(Transition::SelectEventType(EventType::Lunch));
        assert_eq!(s.event_type, Some(EventType::Lunch));
        assert_eq!(s.order_type, Some(OrderType::BuildYourOwn));
        assert_eq!(s.step.get(), 2);
    }

    #[test]
    fn headcount_is_clamped() {
        let s = session().apply(Transition::SetHeadcount(-5));
        assert_eq!(s.headcount.get(), 1);
        let s = s.apply(Transition::SetHeadcount(0));
        assert_eq!(s.headcount.get(), 1);
    }

    #[test]
    fn add_item_increments_existing() {
        let s = session()
            .apply(Transition::AddItem(cookie()))
            .apply(Transition::AddItem(cookie()));
        assert_eq!(s.selected_items.len(), 1);
        assert_eq!(s.item_quantity(&ProductId::from("cookie-tray")), 2);
        assert!(s.is_item_in_cart(&ProductId::from("cookie-tray")));
    }

    #[test]
    fn update_quantity_to_zero_removes() {
        let id = ProductId::from("cookie-tray");
        let s = session()
            .apply(Transition::AddItem(cookie()))
            .apply(Transition::UpdateItemQuantity {
                product_id: id.clone(),
                quantity: 4,
            });
        assert_eq!(s.item_quantity(&id), 4);

        let s = s.apply(Transition::UpdateItemQuantity {
            product_id: id.clone(),
            quantity: 0,
        });
        assert!(!s.is_item_in_cart(&id));
        assert_eq!(s.item_quantity(&id), 0);
    }

    #[test]
    fn add_item_at_max_quantity_saturates() {
        let id = ProductId::from("cookie-tray");
        let s = session()
            .apply(Transition::AddItem(cookie()))
            .apply(Transition::UpdateItemQuantity {
                product_id: id.clone(),
                quantity: i64::MAX,
            })
            .apply(Transition::AddItem(cookie()));
        assert_eq!(s.item_quantity(&id), u32::MAX);
    }

    #[test]
    fn update_quantity_of_missing_item_is_noop() {
        let s = session().apply(Transition::UpdateItemQuantity {
            product_id: ProductId::from("ghost"),
            quantity: 3,
        });
        assert!(s.selected_items.is_empty());
    }

    #[test]
    fn selecting_package_clears_items() {
        let pkg = CateringPackage::new("dessert-bar", "Dessert Bar", 18.0);
        let s = session()
            .apply(Transition::AddItem(cookie()))
            .apply(Transition::SelectPackage(pkg.clone()));
        assert!(s.selected_items.is_empty());
        assert_eq!(s.selected_package, Some(pkg));

        let s = s.apply(Transition::ClearPackage);
        assert!(s.selected_package.is_none());
    }

    #[test]
    fn budget_range_change_drops_custom_amount() {
        let s = session()
            .apply(Transition::SetBudgetRange(BudgetRange::custom()))
            .apply(Transition::SetCustomBudget(30.0));
        assert_eq!(s.custom_budget, Some(30.0));

        // Re-selecting the custom band keeps the amount.
        let s = s.apply(Transition::SetBudgetRange(BudgetRange::custom()));
        assert_eq!(s.custom_budget, Some(30.0));

        let s = s.apply(Transition::SetBudgetRange(BudgetRange::new("budget-20-25", 20.0, 25.0)));
        assert_eq!(s.custom_budget, None);
    }

    #[test]
    fn steps_are_clamped() {
        let s = session().apply(Transition::GoBack);
        assert_eq!(s.step.get(), 1);
        let s = s.apply(Transition::GoToStep(3)).apply(Transition::GoBack);
        assert_eq!(s.step.get(), 2);
        let s = s.apply(Transition::GoToStep(9));
        assert_eq!(s.step, WizardStep::LAST);
    }

    #[test]
    fn can_proceed_requires_event_and_cart() {
        let s = session().apply(Transition::AddItem(cookie()));
        assert!(!s.can_proceed_to_checkout());

        let s = s.apply(Transition::SelectEventType(EventType::Dessert));
        assert!(s.can_proceed_to_checkout());

        let s = s
            .apply(Transition::ClearItems)
            .apply(Transition::SelectPackage(CateringPackage::new("p", "P", 20.0)));
        assert!(s.can_proceed_to_checkout());
    }

    #[test]
    fn reset_keeps_id_and_restores_defaults() {
        let s = CateringSession::new(SessionId(7))
            .apply(Transition::SelectEventType(EventType::Breakfast))
            .apply(Transition::SetHeadcount(40))
            .apply(Transition::AddItem(cookie()))
            .apply(Transition::Reset);
        assert_eq!(s, CateringSession::new(SessionId(7)));
    }

    #[test]
    fn hydrate_replaces_state_but_not_id() {
        let saved = CateringSession::new(SessionId(99))
            .apply(Transition::SelectEventType(EventType::Lunch))
            .apply(Transition::SetHeadcount(30));
        let s = session().apply(Transition::Hydrate(Box::new(saved)));
        assert_eq!(s.id, SessionId(1));
        assert_eq!(s.headcount.get(), 30);
        assert_eq!(s.event_type, Some(EventType::Lunch));
    }
}
