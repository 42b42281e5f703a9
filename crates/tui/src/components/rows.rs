use ratatui::layout::Constraint;
use ratatui::widgets::{Cell, Row};
use stockr_api::Product;

/// Column headings for the product table.
pub const PRODUCT_HEADERS: [&str; 4] = ["ID", "Name", "Price", "Quantity"];

/// Column widths matching [`PRODUCT_HEADERS`].
#[must_use]
pub fn product_widths() -> Vec<Constraint> {
	vec![
		Constraint::Length(8),
		Constraint::Fill(1),
		Constraint::Length(14),
		Constraint::Length(10),
	]
}

/// Render a price with the currency symbol and two decimals.
#[must_use]
pub fn format_price(currency: &str, price: f64) -> String {
	format!("{currency}{price:.2}")
}

/// Build table rows for the product snapshot.
#[must_use]
pub fn build_product_rows<'a>(products: &'a [Product], currency: &str) -> Vec<Row<'a>> {
	products
		.iter()
		.map(|product| {
			Row::new([
				Cell::from(product.id.to_string()),
				Cell::from(product.name.as_str()),
				Cell::from(format_price(currency, product.price)),
				Cell::from(product.quantity.to_string()),
			])
		})
		.collect()
}
