use crate::abstract_trait::LowStockEmailItem;
use askama::{Error, Template};
use tracing::{error, info};

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

/// One rendered line of the cart overlay; prices arrive pre-formatted so
/// the template only interpolates.
#[derive(Debug, Clone)]
pub struct CartRow {
    pub name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Template, Debug)]
#[template(path = "cart_items.html")]
pub struct CartTemplate<'a> {
    pub items: &'a [CartRow],
    pub total: String,
}

/// Renders the cart overlay fragment. Askama escapes every interpolated
/// value, so product names cannot smuggle markup into the overlay.
pub fn render_cart(items: &[CartRow], total: f64) -> Result<String, Error> {
    let template = CartTemplate {
        items,
        total: format_money(total),
    };

    match template.render() {
        Ok(result) => Ok(result),
        Err(e) => {
            error!("❌ Failed to render cart fragment: {}", e);
            Err(e)
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "low_stock_email.html")]
pub struct LowStockEmailTemplate<'a> {
    pub company_name: &'a str,
    pub items: &'a [LowStockEmailItem],
}

pub fn render_low_stock_email(
    company_name: &str,
    items: &[LowStockEmailItem],
) -> Result<String, Error> {
    info!("📧 Rendering low-stock notice for {company_name}");

    let template = LowStockEmailTemplate {
        company_name,
        items,
    };

    match template.render() {
        Ok(result) => {
            info!("✅ Successfully rendered low-stock notice");
            Ok(result)
        }
        Err(e) => {
            error!("❌ Failed to render low-stock notice: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> CartRow {
        CartRow {
            name: name.to_string(),
            quantity: 2,
            unit_price: format_money(25.5),
            line_total: format_money(51.0),
        }
    }

    #[test]
    fn cart_fragment_lists_rows_and_total() {
        let rows = vec![row("Wildflower Honey")];
        let html = render_cart(&rows, 51.0).unwrap();
        assert!(html.contains("Wildflower Honey"));
        assert!(html.contains("51.00"));
        assert!(html.contains("25.50"));
    }

    #[test]
    fn cart_fragment_escapes_markup_in_names() {
        let rows = vec![row(r#"<script>alert('x')</script>&""#)];
        let html = render_cart(&rows, 51.0).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains(r#"alert('x')</script>&""#));
    }

    #[test]
    fn empty_cart_renders_empty_state() {
        let html = render_cart(&[], 0.0).unwrap();
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn low_stock_notice_escapes_company_and_products() {
        let items = vec![LowStockEmailItem {
            name: "<b>Soap</b>".into(),
            stock_amount: 2,
            level: "critical".into(),
        }];
        let html = render_low_stock_email("Acme & Sons", &items).unwrap();
        assert!(html.contains("Acme &amp; Sons"));
        assert!(html.contains("&lt;b&gt;Soap&lt;/b&gt;"));
        assert!(html.contains("critical"));
    }

    #[test]
    fn money_always_has_two_decimals() {
        assert_eq!(format_money(5.0), "5.00");
        assert_eq!(format_money(19.999), "20.00");
        assert_eq!(format_money(0.1), "0.10");
    }
}
