use std::time::Duration;
use tokio::sync::Notify;

/// Waits for either shutdown signal or delay. Returns true if shutdown was triggered.
pub async fn check_shutdown_or_delay(shutdown: &Notify, duration: Duration) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = shutdown.notified() => true,
    }
}

/// Shorten a token address to `head...tail` for display
///
/// Addresses of 8 characters or fewer come back unchanged.
pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format a USD amount compactly for summary columns
pub fn format_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Format a token price with decimals scaled to its magnitude
///
/// Meme pairs trade many orders of magnitude below a cent, so small prices
/// get more precision instead of rendering as $0.00.
pub fn format_price(price: f64) -> String {
    if price >= 1.0 {
        format!("${:.2}", price)
    } else if price >= 0.01 {
        format!("${:.4}", price)
    } else if price >= 0.0001 {
        format!("${:.6}", price)
    } else if price > 0.0 {
        format!("${:.8}", price)
    } else {
        "$0.00".to_string()
    }
}
