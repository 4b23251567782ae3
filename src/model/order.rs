//! Priced order lines and the checkout snapshot handed to the commerce collaborator.
//!
//! See [`impl ActorEntity for DraftOrder`](crate::order_actor) for how submitted snapshots
//! become stored draft orders.

use crate::model::{CateringPackage, EventType, Headcount, Product, SelectedSize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the customer actually gets for one cart entry at the current headcount.
///
/// Derived on demand from a [`SelectedItem`](crate::model::SelectedItem) and the
/// headcount. Never stored on the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub selected_size: Option<SelectedSize>,
    /// Units of the allocated size or pricing unit (trays, dozens, servings...).
    pub units: u32,
    pub unit_price: f64,
    /// How many of this product the buyer added.
    pub item_quantity: u32,
    /// `unit_price * units * item_quantity`.
    pub line_total: f64,
    pub serves_min: u32,
    pub serves_max: u32,
    pub display_text: String,
}

/// Aggregates over a cart (or a package) at one headcount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub per_person_cost: f64,
    pub total_servings: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub event_date: String,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BuyerInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_event_date(mut self, date: impl Into<String>) -> Self {
        self.event_date = date.into();
        self
    }

    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }
}

/// The finalized cart, frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub lines: Vec<OrderLine>,
    pub package: Option<CateringPackage>,
    pub headcount: Headcount,
    pub event_type: Option<EventType>,
    pub buyer: BuyerInfo,
    pub setup_required: bool,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub order_total: f64,
}

impl OrderSnapshot {
    pub fn per_person_with_delivery(&self) -> f64 {
        self.order_total / self.headcount.as_f64()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.package.is_none()
    }
}

/// What the commerce platform hands back for an accepted draft order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrderReceipt {
    pub draft_order_id: String,
    pub draft_order_number: String,
    pub invoice_url: String,
}

/// Type-safe identifier for submitted orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl OrderId {
    /// Customer-facing reference, e.g. `SD-1001`.
    pub fn order_number(self) -> String {
        format!("SD-{}", 1000 + self.0 % 9000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Submitted,
}

/// A checkout that has been (or is being) handed to the commerce platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrder {
    pub id: OrderId,
    pub order_number: String,
    pub snapshot: OrderSnapshot,
    pub receipt: Option<DraftOrderReceipt>,
    pub status: OrderStatus,
}

impl DraftOrder {
    pub fn new(id: OrderId, snapshot: OrderSnapshot) -> Self {
        Self {
            id,
            order_number: id.order_number(),
            snapshot,
            receipt: None,
            status: OrderStatus::Pending,
        }
    }
}

/// One row on the confirmation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationLine {
    pub title: String,
    pub display_text: String,
    pub total_price: f64,
}

/// Summary shown to the buyer after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub order_number: String,
    pub draft_order_number: Option<String>,
    pub invoice_url: Option<String>,
    pub lines: Vec<ConfirmationLine>,
    pub headcount: Headcount,
    pub event_type: Option<EventType>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub order_total: f64,
    pub per_person: f64,
    pub setup_required: bool,
}

impl From<&DraftOrder> for OrderConfirmation {
    fn from(order: &DraftOrder) -> Self {
        let snapshot = &order.snapshot;
        let mut lines: Vec<ConfirmationLine> = snapshot
            .lines
            .iter()
            .map(|line| ConfirmationLine {
                title: line.product.title.clone(),
                display_text: line.display_text.clone(),
                total_price: line.line_total,
            })
            .collect();
        if let Some(package) = &snapshot.package {
            lines.push(ConfirmationLine {
                title: package.title.clone(),
                display_text: format!("{} guests", snapshot.headcount),
                total_price: snapshot.subtotal,
            });
        }

        Self {
            order_id: order.id,
            order_number: order.order_number.clone(),
            draft_order_number: order.receipt.as_ref().map(|r| r.draft_order_number.clone()),
            invoice_url: order.receipt.as_ref().map(|r| r.invoice_url.clone()),
            lines,
            headcount: snapshot.headcount,
            event_type: snapshot.event_type,
            subtotal: snapshot.subtotal,
            delivery_fee: snapshot.delivery_fee,
            order_total: snapshot.order_total,
            per_person: snapshot.per_person_with_delivery(),
            setup_required: snapshot.setup_required,
        }
    }
}
