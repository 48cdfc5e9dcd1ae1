use market_core::{OrderBookSnapshot, PriceLevel};

/// Text ladder of a book: asks on top, bids below, highest price first
pub fn render_ansi(book: &OrderBookSnapshot) -> String {
    let mut lines = Vec::with_capacity(book.depth() + 3);

    lines.push(format!(
        "{} (update {}, {} bids / {} asks)",
        book.symbol,
        book.last_update_id,
        book.bids.len(),
        book.asks.len()
    ));
    lines.push(format!("{:>4} {:>18} {:>18}", "side", "price", "quantity"));

    lines.extend(book.asks.iter().rev().map(|l| level_line("ask", l)));

    let separator = match (book.spread(), book.mid_price()) {
        (Some(spread), Some(mid)) => format!(" spread {} mid {} ", spread, mid),
        _ => " no spread ".to_string(),
    };
    lines.push(format!("{:-^42}", separator));

    lines.extend(book.bids.iter().map(|l| level_line("bid", l)));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn level_line(side: &str, level: &PriceLevel) -> String {
    format!(
        "{:>4} {:>18} {:>18}",
        side,
        level.price.to_string(),
        level.quantity.to_string()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ladder_order() {
        let book = OrderBookSnapshot::new(
            "BTC/USDT",
            vec![
                PriceLevel::new(dec!(99), dec!(1)),
                PriceLevel::new(dec!(98), dec!(2)),
            ],
            vec![
                PriceLevel::new(dec!(101), dec!(3)),
                PriceLevel::new(dec!(102), dec!(4)),
            ],
        )
        .with_update_id(42);

        let text = render_ansi(&book);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("BTC/USDT (update 42"));
        assert!(lines[2].trim_start().starts_with("ask") && lines[2].contains("102"));
        assert!(lines[3].contains("101"));
        assert!(lines[4].contains("spread 2 mid 100"));
        assert!(lines[5].contains("99"));
        assert!(lines[6].trim_start().starts_with("bid") && lines[6].contains("98"));
    }

    #[test]
    fn test_empty_book() {
        let text = render_ansi(&OrderBookSnapshot::new("ETH/BTC", vec![], vec![]));
        assert!(text.contains("no spread"));
        assert_eq!(text.lines().count(), 3);
    }
}
