//! Incoming form payloads and their validation.
//!
//! Fields arrive as strings from HTML forms. `validate` runs every check
//! before any SQL executes and returns either the parsed payload or the
//! user-facing message of the first failed check.

use chrono::NaiveDate;
use serde::Deserialize;

const EAN_MIN: i64 = 1_000_000_000_000;
const EAN_MAX: i64 = 9_999_999_999_999;

fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

fn max_len(value: &str, limit: usize, field: &str) -> Result<(), String> {
    if value.len() > limit {
        Err(format!("{field} cannot have more than {limit} characters."))
    } else {
        Ok(())
    }
}

fn parse_price(price: &str) -> Result<f64, String> {
    match price.trim().parse::<f64>() {
        Ok(p) if p >= 0.0 => Ok(p),
        _ => Err("Price is required to be numeric.".to_string()),
    }
}

fn parse_ean(ean: &str) -> Result<Option<i64>, String> {
    if ean.trim().is_empty() {
        return Ok(None);
    }
    let n: i64 = ean
        .trim()
        .parse()
        .map_err(|_| "EAN is required to be numeric.".to_string())?;
    if !(EAN_MIN..=EAN_MAX).contains(&n) {
        return Err("EAN is required to have 13 digits.".to_string());
    }
    Ok(Some(n))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ean: String,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ean: Option<i64>,
}

impl ProductForm {
    pub fn validate(&self) -> Result<NewProduct, String> {
        required(&self.sku, "Sku is required.")?;
        required(&self.name, "Name is required.")?;
        required(&self.price, "Price is required.")?;
        let price = parse_price(&self.price)?;
        let ean = parse_ean(&self.ean)?;
        Ok(NewProduct {
            sku: self.sku.trim().to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            ean,
        })
    }
}

/// Like [`ProductForm`] but without the sku, which is immutable once created.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdateForm {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ean: String,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ean: Option<i64>,
}

impl ProductUpdateForm {
    pub fn validate(&self) -> Result<ProductUpdate, String> {
        required(&self.name, "Name is required.")?;
        required(&self.price, "Price is required.")?;
        let price = parse_price(&self.price)?;
        let ean = parse_ean(&self.ean)?;
        Ok(ProductUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            ean,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerForm {
    pub fn validate(&self) -> Result<NewCustomer, String> {
        required(&self.name, "Name is required.")?;
        max_len(&self.name, 80, "Name")?;
        required(&self.email, "Email is required.")?;
        max_len(&self.email, 254, "Email")?;
        required(&self.phone, "Phone is required.")?;
        max_len(&self.phone, 15, "Phone")?;
        required(&self.address, "Address is required.")?;
        max_len(&self.address, 255, "Address")?;
        Ok(NewCustomer {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierForm {
    pub tin: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub sku: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub tin: String,
    pub name: String,
    pub address: String,
    pub sku: Option<String>,
    pub date: NaiveDate,
}

impl SupplierForm {
    pub fn validate(&self) -> Result<NewSupplier, String> {
        required(&self.tin, "TIN is required.")?;
        required(&self.name, "Name is required.")?;
        max_len(&self.name, 200, "Name")?;
        required(&self.address, "Address is required.")?;
        max_len(&self.address, 255, "Address")?;
        required(&self.date, "Date is required.")?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Date is required.".to_string())?;
        let sku = match self.sku.trim() {
            "" => None,
            sku => Some(sku.to_string()),
        };
        Ok(NewSupplier {
            tin: self.tin.trim().to_string(),
            name: self.name.clone(),
            address: self.address.clone(),
            sku,
            date,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeForm {
    pub ssn: String,
    pub tin: String,
    pub name: String,
    #[serde(default)]
    pub bdate: String,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub ssn: String,
    pub tin: String,
    pub bdate: Option<NaiveDate>,
    pub name: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<NewEmployee, String> {
        required(&self.ssn, "SSN is required.")?;
        max_len(&self.ssn, 20, "SSN")?;
        required(&self.tin, "TIN is required.")?;
        max_len(&self.tin, 20, "TIN")?;
        required(&self.name, "Name is required.")?;
        let bdate = match self.bdate.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| "Birth date is required to be a valid date.".to_string())?,
            ),
        };
        Ok(NewEmployee {
            ssn: self.ssn.trim().to_string(),
            tin: self.tin.trim().to_string(),
            bdate,
            name: self.name.clone(),
        })
    }
}

/// Quantity to add to an order line.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityForm {
    pub sku: String,
    pub qty: i64,
}

impl QuantityForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("Sku is required.".to_string());
        }
        if self.qty < 1 {
            return Err("Quantity is required to be positive.".to_string());
        }
        Ok(())
    }
}
