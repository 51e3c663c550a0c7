//! Plain-string HTML rendering for the form flows and listings. The
//! application predates any template engine and the pages are deliberately
//! minimal; handlers only need tables, forms, and redirect targets.

use store_core::model::{
    Customer, LineItem, OrderDetail, OrderSummary, Product, ProductChoice, Supplier,
};

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body></html>\n",
        title = esc(title),
    )
}

fn error_line(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", esc(message)),
        None => String::new(),
    }
}

pub fn home() -> String {
    layout(
        "Store",
        "<ul>\n\
         <li><a href=\"/products\">Products</a></li>\n\
         <li><a href=\"/customers\">Customers</a></li>\n\
         <li><a href=\"/suppliers\">Suppliers</a></li>\n\
         <li><a href=\"/employees/create\">New employee</a></li>\n\
         </ul>",
    )
}

pub fn products_index(products: &[Product]) -> String {
    let mut body = String::from(
        "<p><a href=\"/products/create\">New product</a></p>\n\
         <table>\n<tr><th>SKU</th><th>Name</th><th>Price</th><th>EAN</th><th></th></tr>\n",
    );
    for p in products {
        let ean = p.ean.map(|n| n.to_string()).unwrap_or_default();
        body.push_str(&format!(
            "<tr><td><a href=\"/products/{sku}\">{sku}</a></td>\
             <td>{name}</td><td>{price:.2}</td><td>{ean}</td>\
             <td><a href=\"/products/{sku}/update\">edit</a> \
             <form method=\"post\" action=\"/products/{sku}/delete\">\
             <button type=\"submit\">delete</button></form></td></tr>\n",
            sku = esc(&p.sku),
            name = esc(&p.name),
            price = p.price,
            ean = ean,
        ));
    }
    body.push_str("</table>");
    layout("Products", &body)
}

pub fn product_view(product: &Product) -> String {
    let body = format!(
        "<dl>\n<dt>SKU</dt><dd>{sku}</dd>\n<dt>Name</dt><dd>{name}</dd>\n\
         <dt>Description</dt><dd>{description}</dd>\n<dt>Price</dt><dd>{price:.2}</dd>\n\
         <dt>EAN</dt><dd>{ean}</dd>\n</dl>\n<p><a href=\"/products\">Back</a></p>",
        sku = esc(&product.sku),
        name = esc(&product.name),
        description = esc(&product.description),
        price = product.price,
        ean = product.ean.map(|n| n.to_string()).unwrap_or_default(),
    );
    layout(&product.name, &body)
}

/// The shared create/update product form. With a product the sku is
/// fixed and the form posts to the update route.
pub fn product_form(product: Option<&Product>, error: Option<&str>) -> String {
    let mut body = error_line(error);
    match product {
        Some(p) => {
            body.push_str(&format!(
                "<form method=\"post\" action=\"/products/{sku}/update\">\n\
                 <p>SKU: {sku}</p>\n\
                 <p>Name: <input name=\"name\" value=\"{name}\"></p>\n\
                 <p>Description: <input name=\"description\" value=\"{description}\"></p>\n\
                 <p>Price: <input name=\"price\" value=\"{price}\"></p>\n\
                 <p>EAN: <input name=\"ean\" value=\"{ean}\"></p>\n\
                 <button type=\"submit\">Save</button>\n</form>",
                sku = esc(&p.sku),
                name = esc(&p.name),
                description = esc(&p.description),
                price = p.price,
                ean = p.ean.map(|n| n.to_string()).unwrap_or_default(),
            ));
        }
        None => {
            body.push_str(
                "<form method=\"post\" action=\"/products/create\">\n\
                 <p>SKU: <input name=\"sku\"></p>\n\
                 <p>Name: <input name=\"name\"></p>\n\
                 <p>Description: <input name=\"description\"></p>\n\
                 <p>Price: <input name=\"price\"></p>\n\
                 <p>EAN: <input name=\"ean\"></p>\n\
                 <button type=\"submit\">Save</button>\n</form>",
            );
        }
    }
    layout("Product", &body)
}

pub fn customers_index(customers: &[Customer]) -> String {
    let mut body = String::from(
        "<p><a href=\"/customers/create\">New customer</a></p>\n\
         <table>\n<tr><th>No</th><th>Name</th><th>Email</th><th>Phone</th><th></th></tr>\n",
    );
    for c in customers {
        body.push_str(&format!(
            "<tr><td><a href=\"/customers/{no}\">{no}</a></td>\
             <td>{name}</td><td>{email}</td><td>{phone}</td>\
             <td><a href=\"/customers/{no}/update\">edit</a> \
             <form method=\"post\" action=\"/customers/{no}/delete\">\
             <button type=\"submit\">delete</button></form></td></tr>\n",
            no = c.cust_no,
            name = esc(&c.name),
            email = esc(&c.email),
            phone = esc(&c.phone),
        ));
    }
    body.push_str("</table>");
    layout("Customers", &body)
}

pub fn customer_form(customer: Option<&Customer>, error: Option<&str>) -> String {
    let mut body = error_line(error);
    let (action, name, email, phone, address) = match customer {
        Some(c) => (
            format!("/customers/{}/update", c.cust_no),
            esc(&c.name),
            esc(&c.email),
            esc(&c.phone),
            esc(&c.address),
        ),
        None => (
            "/customers/create".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ),
    };
    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p>Name: <input name=\"name\" value=\"{name}\"></p>\n\
         <p>Email: <input name=\"email\" value=\"{email}\"></p>\n\
         <p>Phone: <input name=\"phone\" value=\"{phone}\"></p>\n\
         <p>Address: <input name=\"address\" value=\"{address}\"></p>\n\
         <button type=\"submit\">Save</button>\n</form>",
    ));
    layout("Customer", &body)
}

pub fn customer_view(customer: &Customer, orders: &[OrderSummary]) -> String {
    let mut body = format!(
        "<dl>\n<dt>Name</dt><dd>{name}</dd>\n<dt>Email</dt><dd>{email}</dd>\n\
         <dt>Phone</dt><dd>{phone}</dd>\n<dt>Address</dt><dd>{address}</dd>\n</dl>\n\
         <h2>Orders</h2>\n\
         <table>\n<tr><th>Order</th><th>Date</th><th>Items</th><th>Total</th><th>Paid</th></tr>\n",
        name = esc(&customer.name),
        email = esc(&customer.email),
        phone = esc(&customer.phone),
        address = esc(&customer.address),
    );
    for o in orders {
        body.push_str(&format!(
            "<tr><td><a href=\"/orders/{no}\">{no}</a></td><td>{date}</td>\
             <td>{items}</td><td>{total:.2}</td><td>{paid}</td></tr>\n",
            no = o.order_no,
            date = o.date,
            items = o.num_items,
            total = o.total_price,
            paid = if o.paid { "yes" } else { "no" },
        ));
    }
    body.push_str("</table>\n<p><a href=\"/customers\">Back</a></p>");
    layout(&customer.name, &body)
}

pub fn suppliers_index(suppliers: &[Supplier]) -> String {
    let mut body = String::from(
        "<p><a href=\"/suppliers/create\">New supplier</a></p>\n\
         <table>\n<tr><th>TIN</th><th>Name</th><th>Address</th><th>SKU</th><th>Date</th><th></th></tr>\n",
    );
    for s in suppliers {
        body.push_str(&format!(
            "<tr><td>{tin}</td><td>{name}</td><td>{address}</td><td>{sku}</td><td>{date}</td>\
             <td><a href=\"/suppliers/{tin}/update\">edit</a> \
             <form method=\"post\" action=\"/suppliers/{tin}/delete\">\
             <button type=\"submit\">delete</button></form></td></tr>\n",
            tin = esc(&s.tin),
            name = esc(&s.name),
            address = esc(&s.address),
            sku = s.sku.as_deref().map(esc).unwrap_or_default(),
            date = s.date,
        ));
    }
    body.push_str("</table>");
    layout("Suppliers", &body)
}

/// The shared create/update supplier form; `choices` is the set of
/// products the supplier may be linked to.
pub fn supplier_form(
    supplier: Option<&Supplier>,
    choices: &[ProductChoice],
    error: Option<&str>,
) -> String {
    let mut body = error_line(error);
    let (action, tin_field, name, address, date, current_sku) = match supplier {
        Some(s) => (
            format!("/suppliers/{}/update", s.tin),
            format!("<p>TIN: {}</p>", esc(&s.tin)),
            esc(&s.name),
            esc(&s.address),
            s.date.to_string(),
            s.sku.clone(),
        ),
        None => (
            "/suppliers/create".to_string(),
            "<p>TIN: <input name=\"tin\"></p>".to_string(),
            String::new(),
            String::new(),
            String::new(),
            None,
        ),
    };
    let mut options = String::from("<option value=\"\"></option>");
    for choice in choices {
        let selected = if current_sku.as_deref() == Some(choice.sku.as_str()) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{sku}\"{selected}>{name}</option>",
            sku = esc(&choice.sku),
            name = esc(&choice.name),
        ));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n{tin_field}\n\
         <p>Name: <input name=\"name\" value=\"{name}\"></p>\n\
         <p>Address: <input name=\"address\" value=\"{address}\"></p>\n\
         <p>Product: <select name=\"sku\">{options}</select></p>\n\
         <p>Date: <input name=\"date\" type=\"date\" value=\"{date}\"></p>\n\
         <button type=\"submit\">Save</button>\n</form>",
    ));
    layout("Supplier", &body)
}

pub fn order_view(order: &OrderDetail, items: &[LineItem], total: f64) -> String {
    let mut body = format!(
        "<p>Order {no} for {name} on {date}, {paid}</p>\n\
         <table>\n<tr><th>SKU</th><th>Name</th><th>Price</th><th>Qty</th><th>Total</th><th></th></tr>\n",
        no = order.order_no,
        name = esc(&order.cust_name),
        date = order.date,
        paid = if order.paid { "paid" } else { "not paid" },
    );
    for item in items {
        body.push_str(&format!(
            "<tr><td>{sku}</td><td>{name}</td><td>{price:.2}</td><td>{qty}</td>\
             <td>{line_total:.2}</td>\
             <td><form method=\"post\" action=\"/orders/{no}/items/{sku}/delete\">\
             <button type=\"submit\">remove</button></form></td></tr>\n",
            sku = esc(&item.sku),
            name = esc(&item.name),
            price = item.price,
            qty = item.qty,
            line_total = item.line_total,
            no = order.order_no,
        ));
    }
    body.push_str(&format!(
        "</table>\n<p>Total: {total:.2}</p>\n\
         <form method=\"post\" action=\"/orders/{no}/items\">\n\
         <p>SKU: <input name=\"sku\"> Qty: <input name=\"qty\" type=\"number\" min=\"1\" value=\"1\">\n\
         <button type=\"submit\">Add item</button></p>\n</form>\n\
         <p><a href=\"/orders/{no}/payment\">Pay</a></p>",
        no = order.order_no,
    ));
    layout(&format!("Order {}", order.order_no), &body)
}

pub fn payment_page(
    order: &OrderDetail,
    customer: &Customer,
    items: &[LineItem],
    total: f64,
) -> String {
    let mut body = format!(
        "<p>Payment for order {no}, customer {name}</p>\n<ul>\n",
        no = order.order_no,
        name = esc(&customer.name),
    );
    for item in items {
        body.push_str(&format!(
            "<li>{qty} x {name}: {line_total:.2}</li>\n",
            qty = item.qty,
            name = esc(&item.name),
            line_total = item.line_total,
        ));
    }
    body.push_str(&format!(
        "</ul>\n<p>Total: {total:.2}</p>\n\
         <form method=\"post\" action=\"/orders/{no}/payment\">\
         <button type=\"submit\">Confirm payment</button></form>",
        no = order.order_no,
    ));
    layout("Payment", &body)
}

pub fn employee_form(error: Option<&str>) -> String {
    let mut body = error_line(error);
    body.push_str(
        "<form method=\"post\" action=\"/employees/create\">\n\
         <p>SSN: <input name=\"ssn\"></p>\n\
         <p>TIN: <input name=\"tin\"></p>\n\
         <p>Name: <input name=\"name\"></p>\n\
         <p>Birth date: <input name=\"bdate\" type=\"date\"></p>\n\
         <button type=\"submit\">Save</button>\n</form>",
    );
    layout("Employee", &body)
}
