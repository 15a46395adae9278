//! Record kinds managed by the list controller.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use shared::domain::{
    Customer, CustomerId, CustomerUpdate, NewCustomer, NewOrder, Order, OrderId, OrderUpdate,
};

use crate::error::{ClientError, ClientResult};

/// A backend resource that can be listed, created, updated and deleted.
pub trait Record: Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Id: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static;
    type Draft: Serialize + fmt::Debug + Send + Sync;
    /// Update body, including the immutable id.
    type Update: Serialize + fmt::Debug + Send + Sync;
    type Form: FormFields;

    /// Path segment of the resource, e.g. `customer` for `/customer/{id}`.
    const RESOURCE: &'static str;

    fn id(&self) -> Self::Id;

    /// Fields the client-side refilter matches against.
    fn search_fields(&self) -> [&str; 2];

    fn to_form(&self) -> Self::Form;

    fn draft_from(form: &Self::Form) -> ClientResult<Self::Draft>;

    fn update_from(id: Self::Id, form: &Self::Form) -> ClientResult<Self::Update>;
}

/// Named text fields of a dialog form, in display order.
pub trait FormFields: Default + Clone + fmt::Debug + Send + Sync {
    fn fields(&self) -> Vec<(&'static str, &str)>;

    /// Returns false when `name` is not a field of this form.
    fn set_field(&mut self, name: &str, value: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
}

impl FormFields for CustomerForm {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str()), ("phone", self.phone.as_str())]
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "name" => self.name = value.to_string(),
            "phone" => self.phone = value.to_string(),
            _ => return false,
        }
        true
    }
}

impl Record for Customer {
    type Id = CustomerId;
    type Draft = NewCustomer;
    type Update = CustomerUpdate;
    type Form = CustomerForm;

    const RESOURCE: &'static str = "customer";

    fn id(&self) -> CustomerId {
        self.id
    }

    fn search_fields(&self) -> [&str; 2] {
        [self.name.as_str(), self.phone.as_str()]
    }

    fn to_form(&self) -> CustomerForm {
        CustomerForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }

    fn draft_from(form: &CustomerForm) -> ClientResult<NewCustomer> {
        Ok(NewCustomer {
            name: form.name.clone(),
            phone: form.phone.clone(),
        })
    }

    fn update_from(id: CustomerId, form: &CustomerForm) -> ClientResult<CustomerUpdate> {
        Ok(CustomerUpdate {
            id,
            name: form.name.clone(),
            phone: form.phone.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_id: String,
    pub service: String,
    pub amount: String,
    pub unit: String,
    pub price: String,
}

impl OrderForm {
    fn coerce(&self) -> ClientResult<(CustomerId, i64, i64)> {
        let customer_id = parse_number("customer_id", &self.customer_id)?;
        if customer_id <= 0 {
            return Err(ClientError::Validation("customer_id: pick a customer".into()));
        }
        let amount = parse_number("amount", &self.amount)?;
        let price = parse_number("price", &self.price)?;
        Ok((CustomerId(customer_id), amount, price))
    }
}

impl FormFields for OrderForm {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("customer_id", self.customer_id.as_str()),
            ("service", self.service.as_str()),
            ("amount", self.amount.as_str()),
            ("unit", self.unit.as_str()),
            ("price", self.price.as_str()),
        ]
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "customer_id" => &mut self.customer_id,
            "service" => &mut self.service,
            "amount" => &mut self.amount,
            "unit" => &mut self.unit,
            "price" => &mut self.price,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl Record for Order {
    type Id = OrderId;
    type Draft = NewOrder;
    type Update = OrderUpdate;
    type Form = OrderForm;

    const RESOURCE: &'static str = "order";

    fn id(&self) -> OrderId {
        self.id
    }

    fn search_fields(&self) -> [&str; 2] {
        [self.name.as_str(), self.service.as_str()]
    }

    fn to_form(&self) -> OrderForm {
        OrderForm {
            customer_id: self.customer_id.to_string(),
            service: self.service.clone(),
            amount: self.amount.to_string(),
            unit: self.unit.clone(),
            price: self.price.to_string(),
        }
    }

    fn draft_from(form: &OrderForm) -> ClientResult<NewOrder> {
        let (customer_id, amount, price) = form.coerce()?;
        Ok(NewOrder {
            customer_id,
            service: form.service.clone(),
            amount,
            unit: form.unit.clone(),
            price,
        })
    }

    fn update_from(id: OrderId, form: &OrderForm) -> ClientResult<OrderUpdate> {
        let (customer_id, amount, price) = form.coerce()?;
        Ok(OrderUpdate {
            id,
            customer_id,
            service: form.service.clone(),
            amount,
            unit: form.unit.clone(),
            price,
        })
    }
}

/// Empty input counts as zero, like a blank numeric input box.
fn parse_number(field: &str, raw: &str) -> ClientResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<i64>()
        .map_err(|_| ClientError::Validation(format!("{field}: '{raw}' is not a whole number")))
}
