use business::domain::cart::model::Cart;
use business::domain::cart::summary::OrderSummary;
use business::domain::product::model::Product;

pub fn cart_lines(cart: Option<&Cart>) -> Vec<String> {
    match cart {
        Some(cart) if !cart.is_empty() => cart
            .items
            .iter()
            .map(|item| {
                format!(
                    "{:<10} {:<24} {:>3} x {:>8} = {:>9}",
                    item.product_id,
                    item.name,
                    item.quantity,
                    item.price,
                    item.line_total()
                )
            })
            .collect(),
        _ => vec!["Cart is empty".to_string()],
    }
}

pub fn summary_lines(summary: &OrderSummary) -> Vec<String> {
    vec![
        format!("Items ({}): {}", summary.item_count, summary.items_price),
        format!("Tax: {}", summary.tax_price),
        format!("Shipping: {}", summary.shipping_price),
        format!("Total: {}", summary.total_price),
    ]
}

pub fn product_line(product: &Product) -> String {
    let stock = if product.in_stock() {
        format!("{} in stock", product.count_in_stock)
    } else {
        "out of stock".to_string()
    };
    format!(
        "{:<10} {:<24} {:<20} {:>8}  {}/5 ({})  {}",
        product.id,
        product.name,
        product.category,
        product.price,
        product.rating,
        product.num_reviews,
        stock
    )
}

pub fn print(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartItem;
    use business::domain::cart::pricing::PricingPolicy;
    use business::domain::shared::value_objects::ProductId;

    #[test]
    fn should_say_empty_for_absent_cart() {
        assert_eq!(cart_lines(None), vec!["Cart is empty".to_string()]);
    }

    #[test]
    fn should_print_one_line_per_item_and_summary() {
        let mut cart = Cart::empty();
        cart.add_unit(CartItem {
            product_id: ProductId::new("sku1"),
            slug: "mug".to_string(),
            name: "Mug".to_string(),
            image: String::new(),
            price: "8.50".parse().unwrap(),
            quantity: 1,
        });
        cart.reprice(&PricingPolicy::default());

        let lines = cart_lines(Some(&cart));
        let summary = summary_lines(&OrderSummary::from_cart(Some(&cart)));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Mug"));
        assert_eq!(summary[0], "Items (1): 8.50");
        assert_eq!(summary[3], "Total: 19.78");
    }

    #[test]
    fn should_show_rating_and_stock_of_product() {
        let product = Product::new(business::domain::product::model::NewProductProps {
            id: ProductId::new("sku6"),
            slug: "canvas-mug".to_string(),
            name: "Canvas Mug".to_string(),
            category: "Kitchen".to_string(),
            image: String::new(),
            price: "8.50".parse().unwrap(),
            rating: "3.8".parse().unwrap(),
            num_reviews: 21,
            count_in_stock: 0,
            created_at: Default::default(),
        })
        .unwrap();

        let line = product_line(&product);

        assert!(line.contains("Kitchen"));
        assert!(line.contains("3.8/5 (21)"));
        assert!(line.ends_with("out of stock"));
    }
}
