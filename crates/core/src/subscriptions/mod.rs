//! Subscriptions module - tracked recurring services.

mod subscriptions_model;

pub use subscriptions_model::{NewSubscription, Subscription};
