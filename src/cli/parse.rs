use ecorec_core::format::OutputFormat;
use ecorec_core::product::Flag;
use ecorec_core::query::SortOrder;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a yes/no attribute from string
pub fn parse_flag(s: &str) -> std::result::Result<Flag, String> {
    s.parse::<Flag>().map_err(|e| e.to_string())
}

/// Parse sort order from string
pub fn parse_sort_order(s: &str) -> std::result::Result<SortOrder, String> {
    s.parse::<SortOrder>().map_err(|e| e.to_string())
}

/// Parse a finite, non-negative price
pub fn parse_price(s: &str) -> std::result::Result<f64, String> {
    let price: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid price: {}", s))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be a non-negative number, got {}", s));
    }
    Ok(price)
}

/// Parse a similarity threshold in 0.0..=1.0
pub fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid threshold: {}", s))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("threshold must be between 0.0 and 1.0, got {}", s));
    }
    Ok(value)
}
